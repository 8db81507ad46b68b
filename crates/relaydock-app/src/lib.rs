// Application layer - configuration loading and notification dispatch.
// Depends on the domain and infrastructure layers.

pub mod application;

pub use application::config::AppConfig;
pub use application::services::NotificationKit;
