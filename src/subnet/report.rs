//! Subnet report assembly.
//!
//! Orchestrates the parser, the bitwise engine, and the formatter into
//! the plain-text reports served under `/v4/` and `/v6/`. The public
//! calculators never fail toward the caller: user-facing failures become
//! their diagnostic body, and the underlying error goes to the sink.

use crate::error::{ErrorSink, SubnetError, SubnetResult};
use crate::subnet::cidr::{Cidr, Family};
use crate::subnet::{bits, format};

/// Body served when the v4 endpoint cannot parse its input.
pub const INVALID_CIDR_V4: &str = "Invalid CIDR address\n";
/// Body served when the v6 endpoint cannot parse its input.
pub const INVALID_CIDR_V6: &str = "Not valid CIDR notation.\n";
/// Body served for a non-IPv4 address on the v4 endpoint.
pub const NOT_IPV4: &str = "Not a valid IPv4 address.\n";
/// Body served for a non-IPv6 address on the v6 endpoint.
pub const NOT_IPV6: &str = "Not a valid IPv6 address.\n";

/// Compute the IPv4 report for a CIDR string.
///
/// Always returns a body to serve. Parse and family errors yield their
/// diagnostic text, internal errors an empty body; each is reported to
/// `errors` as well.
pub fn calculate_v4_subnet(cidr: &str, errors: &dyn ErrorSink) -> String {
    match v4_report(cidr) {
        Ok(report) => report,
        Err(err) => {
            let body = match &err {
                SubnetError::InvalidCidr(_) => INVALID_CIDR_V4,
                SubnetError::FamilyMismatch { .. } => NOT_IPV4,
                SubnetError::LengthMismatch { .. } => "",
            };
            errors.report(&err);
            body.to_string()
        }
    }
}

/// Compute the IPv6 report for a CIDR string.
///
/// Same contract as [`calculate_v4_subnet`], with the v6 diagnostics.
pub fn calculate_v6_subnet(cidr: &str, errors: &dyn ErrorSink) -> String {
    match v6_report(cidr) {
        Ok(report) => report,
        Err(err) => {
            let body = match &err {
                SubnetError::InvalidCidr(_) => INVALID_CIDR_V6,
                SubnetError::FamilyMismatch { .. } => NOT_IPV6,
                SubnetError::LengthMismatch { .. } => "",
            };
            errors.report(&err);
            body.to_string()
        }
    }
}

fn v4_report(cidr: &str) -> SubnetResult<String> {
    let cidr: Cidr = cidr.parse()?;
    cidr.require_family(Family::V4)?;

    let first = bits::and(cidr.addr(), cidr.mask())?;
    let last = bits::or(cidr.addr(), &bits::invert(cidr.mask()))?;
    let size = format::v4_range_size(&first, &last)?;

    Ok(format!(
        "Address: {}\nMask:    {}\nFirst:   {}\nLast:    {}\n\nTotal:   {}\nUsable:  {}",
        v4_line(cidr.addr()),
        v4_line(cidr.mask()),
        v4_line(&first),
        v4_line(&last),
        size.total,
        size.usable,
    ))
}

fn v6_report(cidr: &str) -> SubnetResult<String> {
    let cidr: Cidr = cidr.parse()?;
    cidr.require_family(Family::V6)?;

    let first = bits::and(cidr.addr(), cidr.mask())?;
    let last = bits::or(cidr.addr(), &bits::invert(cidr.mask()))?;
    let total = format::v6_range_size(&first, &last)?;

    Ok(format!(
        "Address: {}\nMask:    {}\nFirst:   {}\nLast:    {}\n\nTotal:   {}",
        v6_line(cidr.addr()),
        v6_line(cidr.mask()),
        v6_line(&first),
        v6_line(&last),
        total,
    ))
}

/// One `binary | dotted-decimal` report column pair.
fn v4_line(bytes: &[u8]) -> String {
    format!(
        "{} | {}",
        format::to_binary(bytes),
        format::to_dotted_decimal(bytes)
    )
}

/// One `binary | full colon-hex | compressed` report column triple.
fn v6_line(bytes: &[u8]) -> String {
    format!(
        "{} | {} | {}",
        format::to_binary(bytes),
        format::to_coloned_hex(bytes),
        format::to_ipv6_text(bytes)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NullSink;
    use ipnetwork::Ipv4Network;
    use std::sync::Mutex;

    /// Sink that records every reported error.
    #[derive(Default)]
    struct CollectSink(Mutex<Vec<SubnetError>>);

    impl CollectSink {
        fn take(&self) -> Vec<SubnetError> {
            std::mem::take(&mut *self.0.lock().unwrap())
        }
    }

    impl ErrorSink for CollectSink {
        fn report(&self, err: &SubnetError) {
            self.0.lock().unwrap().push(err.clone());
        }
    }

    #[test]
    fn test_v4_report_exact() {
        let report = calculate_v4_subnet("192.168.1.10/24", &NullSink);
        assert_eq!(
            report,
            "Address: 11000000 10101000 00000001 00001010 | 192.168.1.10\n\
             Mask:    11111111 11111111 11111111 00000000 | 255.255.255.0\n\
             First:   11000000 10101000 00000001 00000000 | 192.168.1.0\n\
             Last:    11000000 10101000 00000001 11111111 | 192.168.1.255\n\
             \n\
             Total:   256\n\
             Usable:  254"
        );
    }

    #[test]
    fn test_v4_slash31() {
        let report = calculate_v4_subnet("10.0.0.0/31", &NullSink);
        assert!(report.contains("First:   00001010 00000000 00000000 00000000 | 10.0.0.0"));
        assert!(report.contains("Last:    00001010 00000000 00000000 00000001 | 10.0.0.1"));
        assert!(report.contains("Total:   2"));
        assert!(report.contains("Usable:  0"));
    }

    #[test]
    fn test_v4_slash32_usable_goes_negative() {
        let report = calculate_v4_subnet("203.0.113.9/32", &NullSink);
        assert!(report.contains("Total:   1"));
        assert!(report.contains("Usable:  -1"));
    }

    #[test]
    fn test_v4_totals_follow_prefix() {
        for prefix in 0u8..=30 {
            let report = calculate_v4_subnet(&format!("10.0.0.0/{prefix}"), &NullSink);
            let total = 1u64 << (32 - prefix);
            assert!(
                report.contains(&format!("Total:   {total}\n")),
                "wrong total for /{prefix}"
            );
            assert!(report.ends_with(&format!("Usable:  {}", total as i64 - 2)));
        }
    }

    #[test]
    fn test_v4_first_last_match_ipnetwork() {
        for input in ["172.16.5.77/20", "192.0.2.200/29", "10.99.1.2/13"] {
            let report = calculate_v4_subnet(input, &NullSink);
            let oracle: Ipv4Network = input.parse().unwrap();
            assert!(report.contains(&format!("| {}\nLast:", oracle.network())));
            assert!(report.contains(&format!("| {}\n\nTotal:", oracle.broadcast())));
        }
    }

    #[test]
    fn test_v6_report_exact() {
        let report = calculate_v6_subnet("2001:db8::/64", &NullSink);
        assert_eq!(
            report,
            "Address: 00100000 00000001 00001101 10111000 00000000 00000000 00000000 00000000 \
                      00000000 00000000 00000000 00000000 00000000 00000000 00000000 00000000 \
                      | 2001:0db8:0000:0000:0000:0000:0000:0000 | 2001:db8::\n\
             Mask:    11111111 11111111 11111111 11111111 11111111 11111111 11111111 11111111 \
                      00000000 00000000 00000000 00000000 00000000 00000000 00000000 00000000 \
                      | ffff:ffff:ffff:ffff:0000:0000:0000:0000 | ffff:ffff:ffff:ffff::\n\
             First:   00100000 00000001 00001101 10111000 00000000 00000000 00000000 00000000 \
                      00000000 00000000 00000000 00000000 00000000 00000000 00000000 00000000 \
                      | 2001:0db8:0000:0000:0000:0000:0000:0000 | 2001:db8::\n\
             Last:    00100000 00000001 00001101 10111000 00000000 00000000 00000000 00000000 \
                      11111111 11111111 11111111 11111111 11111111 11111111 11111111 11111111 \
                      | 2001:0db8:0000:0000:ffff:ffff:ffff:ffff | 2001:db8::ffff:ffff:ffff:ffff\n\
             \n\
             Total:   18446744073709551616"
        );
    }

    #[test]
    fn test_v6_full_range_total() {
        let report = calculate_v6_subnet("::/0", &NullSink);
        assert!(report.ends_with("Total:   340282366920938463463374607431768211456"));
    }

    #[test]
    fn test_v4_parse_error_is_reported() {
        let sink = CollectSink::default();
        let body = calculate_v4_subnet("not-a-cidr", &sink);
        assert_eq!(body, INVALID_CIDR_V4);
        assert_eq!(
            sink.take(),
            vec![SubnetError::InvalidCidr("not-a-cidr".to_string())]
        );
    }

    #[test]
    fn test_v4_family_mismatch_is_reported() {
        let sink = CollectSink::default();
        let body = calculate_v4_subnet("2001:db8::/32", &sink);
        assert_eq!(body, NOT_IPV4);
        assert!(matches!(
            sink.take().as_slice(),
            [SubnetError::FamilyMismatch { expected: Family::V4, .. }]
        ));
    }

    #[test]
    fn test_v6_parse_error_is_reported() {
        let sink = CollectSink::default();
        let body = calculate_v6_subnet("2001:db8::", &sink);
        assert_eq!(body, INVALID_CIDR_V6);
        assert_eq!(sink.take().len(), 1);
    }

    #[test]
    fn test_v6_family_mismatch_is_reported() {
        let sink = CollectSink::default();
        let body = calculate_v6_subnet("192.0.2.0/24", &sink);
        assert_eq!(body, NOT_IPV6);
        assert!(matches!(
            sink.take().as_slice(),
            [SubnetError::FamilyMismatch { expected: Family::V6, .. }]
        ));
    }

    #[test]
    fn test_mapped_literal_on_v4_serves_empty_body() {
        // A mapped literal is V4-family but 16 bytes wide, so the 4-byte
        // range computation trips the defensive length check.
        let sink = CollectSink::default();
        let body = calculate_v4_subnet("::ffff:192.0.2.1/96", &sink);
        assert_eq!(body, "");
        assert!(matches!(
            sink.take().as_slice(),
            [SubnetError::LengthMismatch { left: 16, right: 4 }]
        ));
    }
}
