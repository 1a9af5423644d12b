//! HTTP serving layer.
//!
//! Owns the transport and the error-reporting policy; the core stays a
//! pure function of the request string.

mod routes;
mod state;


pub use state::{AppState, ServerConfig, ServerSink};

use crate::error::ServeError;
use actix_web::{web, App, HttpServer};
use std::net::SocketAddr;
use tracing::info;

/// Bind and serve until shutdown.
pub async fn run(config: ServerConfig) -> Result<(), ServeError> {
    let addr = SocketAddr::new(config.bind, config.port);
    let state = web::Data::new(AppState::new(config));

    info!(
        "subnetter v{} listening on http://{addr}",
        env!("CARGO_PKG_VERSION")
    );

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(routes::configure_routes)
    })
    .bind(addr)
    .map_err(|source| ServeError::Bind { addr, source })?
    .run()
    .await
    .map_err(ServeError::from)
}
