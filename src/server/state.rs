//! Shared server state and the error-reporting policy.

use crate::error::{ErrorSink, SubnetError};
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use tracing::error;

/// Configuration assembled once at startup and handed to the server.
///
/// The core computation never sees this; handlers read it for logging
/// and the sink policy only.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to.
    pub bind: IpAddr,
    /// Port to listen on.
    pub port: u16,
    /// Log each request as it is served.
    pub verbose: bool,
    /// Shut the process down when a handler reports an error.
    pub exit_on_error: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            verbose: false,
            exit_on_error: false,
        }
    }
}

/// The running server's error sink: log the error, and with
/// `exit_on_error` bring the process down instead of carrying on.
#[derive(Debug, Clone)]
pub struct ServerSink {
    exit_on_error: bool,
}

impl ServerSink {
    pub fn new(exit_on_error: bool) -> Self {
        Self { exit_on_error }
    }
}

impl ErrorSink for ServerSink {
    fn report(&self, err: &SubnetError) {
        error!("{err}");
        if self.exit_on_error {
            std::process::exit(1);
        }
    }
}

/// State shared by every handler.
pub struct AppState {
    pub config: ServerConfig,
    pub errors: Arc<dyn ErrorSink>,
}

impl AppState {
    /// State for a real server: sink policy derived from the config.
    pub fn new(config: ServerConfig) -> Self {
        let errors = Arc::new(ServerSink::new(config.exit_on_error));
        Self { config, errors }
    }

    /// State with a caller-supplied sink. Tests use this to observe
    /// reported errors.
    pub fn with_sink(config: ServerConfig, errors: Arc<dyn ErrorSink>) -> Self {
        Self { config, errors }
    }
}
