//! Command-line interface definition.
//!
//! Flags are parsed once at startup and converted into a
//! [`ServerConfig`]; nothing else in the crate reads them.

use crate::server::ServerConfig;
use clap::Parser;
use std::net::IpAddr;

/// Serves a tool for learning IP subnetting.
#[derive(Parser, Debug)]
#[command(name = "subnetter")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Serves a tool for learning IP subnetting", long_about = None)]
pub struct Cli {
    /// Address to bind to
    #[arg(short, long, default_value = "0.0.0.0")]
    pub bind: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    /// Shut down the webserver on error, instead of just printing the error
    #[arg(long)]
    pub exit_on_error: bool,

    /// Log requests to stdout
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Convert the parsed flags into the server configuration.
    pub fn into_config(self) -> ServerConfig {
        ServerConfig {
            bind: self.bind,
            port: self.port,
            verbose: self.verbose,
            exit_on_error: self.exit_on_error,
        }
    }
}
