//! Core constants for host:port address handling.
//!
//! These bounds are shared by the parser and everything that renders
//! diagnostics about an address, so they live in one place.
//!
//! # Address Structure
//!
//! A combined address has the form:
//!
//! ```text
//! HOST:PORT
//! ```
//!
//! Where:
//! - `HOST` - DNS name or IPv4 literal, characters `[a-zA-Z0-9.-]`
//! - `:` - single delimiter, the first one ends the host
//! - `PORT` - ASCII digits only
//!
//! # Bounds
//!
//! | Constant | Value | Source |
//! |----------|-------|--------|
//! | `MAX_HOST_LEN` | 253 | RFC 952 hostname length bound |
//! | `MAX_PORT_DIGITS` | 5 | a 16-bit port prints in at most 5 digits |
//!
//! Note that `MAX_PORT_DIGITS` is a digit-count bound, not a numeric range
//! check: `"99999"` passes the parser and is rejected later, at resolution.

/// Maximum length of a hostname in characters, per RFC 952.
pub const MAX_HOST_LEN: usize = 253;

/// Maximum number of ASCII digits in a port string.
///
/// A TCP port is a 16-bit integer; its decimal form never exceeds 5 digits.
pub const MAX_PORT_DIGITS: usize = 5;
