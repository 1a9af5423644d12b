//! CIDR parsing.
//!
//! Turns an `<address>/<prefix-length>` string into address and mask byte
//! sequences of equal length plus a family tag. Address literals are
//! parsed by the standard library; the mask is built from the prefix
//! length and is otherwise not validated, so any in-range prefix is
//! accepted as-is.

use crate::error::{SubnetError, SubnetResult};
use crate::subnet::format;
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

/// Address family of a parsed CIDR block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    V4,
    V6,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4 => write!(f, "IPv4"),
            Self::V6 => write!(f, "IPv6"),
        }
    }
}

/// A parsed CIDR block: address bytes and mask bytes of equal length.
///
/// Bytes keep the width of the literal they were parsed from, so an
/// IPv4-mapped IPv6 literal stays 16 bytes wide even though it is
/// tagged `Family::V4`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cidr {
    addr: Vec<u8>,
    mask: Vec<u8>,
    prefix: u8,
    family: Family,
}

impl Cidr {
    /// The address bytes.
    pub fn addr(&self) -> &[u8] {
        &self.addr
    }

    /// The mask bytes, same length as the address.
    pub fn mask(&self) -> &[u8] {
        &self.mask
    }

    /// The prefix length the mask was built from.
    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// The family tag: `V4` when the address reduces to 4 bytes
    /// (a dotted-decimal or IPv4-mapped literal), `V6` otherwise.
    pub fn family(&self) -> Family {
        self.family
    }

    /// Fail with `FamilyMismatch` unless this block is of the given
    /// family.
    pub fn require_family(&self, expected: Family) -> SubnetResult<()> {
        if self.family == expected {
            Ok(())
        } else {
            Err(SubnetError::FamilyMismatch {
                expected,
                input: self.to_string(),
            })
        }
    }
}

impl FromStr for Cidr {
    type Err = SubnetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || SubnetError::InvalidCidr(s.to_string());

        let (addr_part, prefix_part) = s.split_once('/').ok_or_else(invalid)?;
        let addr: IpAddr = addr_part.parse().map_err(|_| invalid())?;
        let prefix: u8 = prefix_part.parse().map_err(|_| invalid())?;

        let (bytes, family) = match addr {
            IpAddr::V4(v4) => (v4.octets().to_vec(), Family::V4),
            IpAddr::V6(v6) => {
                // An IPv4-mapped address reduces to 4 bytes and answers
                // to the v4 endpoint even in colon-hex form.
                let family = if v6.to_ipv4_mapped().is_some() {
                    Family::V4
                } else {
                    Family::V6
                };
                (v6.octets().to_vec(), family)
            }
        };

        let width = bytes.len() * 8;
        if usize::from(prefix) > width {
            return Err(invalid());
        }

        let mask = prefix_mask(prefix, bytes.len());
        Ok(Self {
            addr: bytes,
            mask,
            prefix,
            family,
        })
    }
}

impl fmt::Display for Cidr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let addr = if self.addr.len() == 4 {
            format::to_dotted_decimal(&self.addr)
        } else {
            format::to_ipv6_text(&self.addr)
        };
        write!(f, "{}/{}", addr, self.prefix)
    }
}

/// Build a mask of `len` bytes with the topmost `prefix` bits set.
fn prefix_mask(prefix: u8, len: usize) -> Vec<u8> {
    let mut mask = vec![0u8; len];
    let mut remaining = usize::from(prefix);
    for byte in mask.iter_mut() {
        if remaining >= 8 {
            *byte = 0xff;
            remaining -= 8;
        } else {
            *byte = !(0xff >> remaining);
            break;
        }
    }
    mask
}
