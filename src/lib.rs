//! # Subnetter - A web-based tool for learning IP subnetting
//!
//! Subnetter answers subnet-arithmetic questions for IPv4 and IPv6 CIDR
//! blocks over plain-text HTTP: given `<address>/<prefix-length>` it
//! derives the network address, the broadcast/last address, the mask in
//! several representations, and the size of the range.
//!
//! ## Endpoints
//!
//! - `GET /` - version banner
//! - `GET /v4/<cidr>` - IPv4 subnet report
//! - `GET /v6/<cidr>` - IPv6 subnet report
//!
//! ## Example
//!
//! The report computation is a pure function of the CIDR string and can
//! be used without the server:
//!
//! ```rust
//! use subnetter::{calculate_v4_subnet, NullSink};
//!
//! let report = calculate_v4_subnet("192.168.1.10/24", &NullSink);
//! assert!(report.contains("First:   11000000 10101000 00000001 00000000 | 192.168.1.0"));
//! assert!(report.ends_with("Total:   256\nUsable:  254"));
//! ```
//!
//! ## Architecture
//!
//! - [`subnet`] - the arithmetic core: CIDR parsing, byte-array bitwise
//!   operations, text rendering, report assembly
//! - [`server`] - actix-web routes and the error-reporting policy
//! - [`cli`] - flag parsing into the server configuration
//! - [`error`] - error types and the [`ErrorSink`] reporting seam

pub mod cli;
pub mod error;
pub mod server;
pub mod subnet;

// Re-export commonly used types
pub use error::{ErrorSink, NullSink, ServeError, SubnetError, SubnetResult};
pub use subnet::{calculate_v4_subnet, calculate_v6_subnet, Cidr, Family};
