//! The subnet arithmetic core.
//!
//! A stateless pipeline from a raw CIDR string to a rendered report:
//! [`cidr`] parses, [`bits`] derives the first and last addresses,
//! [`format`] renders text and counts, and [`report`] assembles the
//! response bodies.

pub mod bits;
pub mod cidr;
pub mod format;
pub mod report;

pub use cidr::{Cidr, Family};
pub use report::{calculate_v4_subnet, calculate_v6_subnet};
