pub mod errors;
pub mod logging;
pub mod resolver;
pub mod root;
pub mod server;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resolver::{ResolverConfig, UpstreamKind, MAX_ATTEMPTS, MAX_TIMEOUT_SECS};
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
