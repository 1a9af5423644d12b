//! Error types for subnetter.
//!
//! Uses `thiserror` for ergonomic error definitions.

use crate::subnet::Family;
use std::net::SocketAddr;
use thiserror::Error;

/// Errors produced by the subnet arithmetic core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubnetError {
    /// The input is not `<address>/<prefix-length>` with a valid address
    /// literal and an in-range prefix.
    #[error("invalid CIDR address: {0}")]
    InvalidCidr(String),

    /// The parsed address belongs to the other address family than the
    /// endpoint requires.
    #[error("not an {expected} address: {input}")]
    FamilyMismatch { expected: Family, input: String },

    /// Two operands of a bitwise or counting operation differ in width.
    #[error("operand length mismatch: {left} bytes vs {right} bytes")]
    LengthMismatch { left: usize, right: usize },
}

/// Result type alias for core subnet operations.
pub type SubnetResult<T> = Result<T, SubnetError>;

/// Errors arising from the serving layer rather than the core.
#[derive(Debug, Error)]
pub enum ServeError {
    /// The listen socket could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The server loop ended with an I/O failure.
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Destination for errors encountered while computing a report.
///
/// The calculators convert user-facing failures into diagnostic response
/// text and hand the underlying error to the sink for centralized
/// handling. Implementations must not block the calling request.
pub trait ErrorSink: Send + Sync {
    /// Record one error.
    fn report(&self, err: &SubnetError);
}

/// Sink that discards everything it receives.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl ErrorSink for NullSink {
    fn report(&self, _err: &SubnetError) {}
}
