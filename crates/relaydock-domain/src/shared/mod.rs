#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Provider not found: {0}")]
    ProviderNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
