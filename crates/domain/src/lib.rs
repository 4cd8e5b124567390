//! Realip Domain Layer
pub mod config;
pub mod errors;
pub mod remote_addr;
pub mod trusted_proxies;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use trusted_proxies::TrustedProxies;
