// Infrastructure layer - technical implementations.
// Depends on the domain layer, implements its interfaces.

pub mod logging;
pub mod notification;
pub mod persistence;
