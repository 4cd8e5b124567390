mod errors;
mod logging;
mod proxy;
mod root;
mod server;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use proxy::ProxyConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
