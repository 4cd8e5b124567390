use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Can't parse trusted proxy {spec:?}: {reason}")]
    InvalidTrustedProxy { spec: String, reason: String },

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
