// Domain layer - provider/account configuration and notification contracts.
// No I/O lives here; the infrastructure and app layers depend on these types.

pub mod account;
pub mod balance;
pub mod notification;
pub mod provider;
pub mod shared;
