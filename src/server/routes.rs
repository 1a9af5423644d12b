//! Route registration and request handlers.
//!
//! Handlers stay thin: strip the path prefix, hand the remainder to the
//! core, and write whatever string comes back. Diagnostics are served
//! with status 200 just like reports; the error itself travels through
//! the sink.

use crate::server::state::AppState;
use crate::subnet::report::{calculate_v4_subnet, calculate_v6_subnet};
use actix_web::{web, HttpRequest, HttpResponse};
use tracing::info;

const TEXT_PLAIN: &str = "text/plain;charset=UTF-8";

/// Register every route served by subnetter.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(serve_usage))
        .route("/v4/{cidr:.*}", web::get().to(serve_v4_subnet))
        .route("/v6/{cidr:.*}", web::get().to(serve_v6_subnet));
}

/// `GET /` - version banner.
async fn serve_usage(state: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    log_request(&state, &req);

    HttpResponse::Ok()
        .insert_header(("Content-Security-Policy", "default-src 'self';"))
        .content_type(TEXT_PLAIN)
        .body(format!("subnetter v{}\n", env!("CARGO_PKG_VERSION")))
}

/// `GET /v4/<cidr>` - IPv4 subnet report.
async fn serve_v4_subnet(state: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    log_request(&state, &req);

    let cidr = tail(&req);
    text_response(calculate_v4_subnet(cidr, state.errors.as_ref()))
}

/// `GET /v6/<cidr>` - IPv6 subnet report.
async fn serve_v6_subnet(state: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    log_request(&state, &req);

    let cidr = tail(&req);
    text_response(calculate_v6_subnet(cidr, state.errors.as_ref()))
}

/// The matched path remainder with any leading separator stripped.
fn tail(req: &HttpRequest) -> &str {
    req.match_info().query("cidr").trim_start_matches('/')
}

/// Serve a computed report or diagnostic, with the trailing newline
/// every body carries.
fn text_response(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(TEXT_PLAIN)
        .body(body + "\n")
}

fn log_request(state: &AppState, req: &HttpRequest) {
    if !state.config.verbose {
        return;
    }
    let conn = req.connection_info();
    info!(
        "{} => {}",
        conn.realip_remote_addr().unwrap_or("-"),
        req.uri()
    );
}
