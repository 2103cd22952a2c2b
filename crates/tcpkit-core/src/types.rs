use crate::{
    Result,
    constants::{MAX_HOST_LEN, MAX_PORT_DIGITS},
    error::Error,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated `host:port` address pair.
///
/// Both parts are validated on construction and re-join losslessly through
/// [`Display`](fmt::Display): `"localhost:8080".parse::<HostPort>()` followed
/// by `to_string()` yields `"localhost:8080"` again.
///
/// # Validation rules
///
/// - Host: characters `[a-zA-Z0-9.-]` per RFC 952, non-empty, at most 253
///   characters. The host ends at the first colon; an address with no colon
///   has no valid host.
/// - Port: ASCII digits only, non-empty, at most 5 digits. The numeric range
///   is deliberately not checked here - `"99999"` parses and is rejected by
///   the resolver at dial time. Use [`port_number`](HostPort::port_number)
///   for a range-checked view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HostPort {
    host: String,
    port: String,
}

impl HostPort {
    /// Split a combined `host:port` string into a validated pair.
    ///
    /// The host is everything before the first colon, the port everything
    /// after it. An overlong host is rejected, never truncated.
    ///
    /// # Errors
    /// Returns [`Error::InvalidHost`] if the host is empty, contains a
    /// character outside `[a-zA-Z0-9.-]`, exceeds 253 characters, or no
    /// colon delimiter is present at all. Returns [`Error::InvalidPort`] if
    /// the part after the colon is empty, contains a non-digit (a second
    /// colon included), or exceeds 5 digits.
    pub fn split(addr: &str) -> Result<Self> {
        let bytes = addr.as_bytes();

        // Scan the host up to the first ':'. Every byte must be ASCII
        // alphanumeric, '-' or '.'; anything else (multi-byte UTF-8
        // included) fails the charset rule.
        let mut host_len = 0;
        loop {
            match bytes.get(host_len) {
                Some(&b':') => break,
                Some(&c) if c.is_ascii_alphanumeric() || c == b'-' || c == b'.' => {
                    host_len += 1;
                    if host_len > MAX_HOST_LEN {
                        return Err(Error::InvalidHost(addr.to_string()));
                    }
                }
                // Illegal character, or end of string without a delimiter.
                Some(_) | None => return Err(Error::InvalidHost(addr.to_string())),
            }
        }
        if host_len == 0 {
            return Err(Error::InvalidHost(addr.to_string()));
        }

        // Everything strictly after the colon is the port: digits only,
        // non-empty, at most MAX_PORT_DIGITS of them.
        let port = &addr[host_len + 1..];
        if port.is_empty()
            || port.len() > MAX_PORT_DIGITS
            || !port.bytes().all(|c| c.is_ascii_digit())
        {
            return Err(Error::InvalidPort(addr.to_string()));
        }

        Ok(HostPort {
            host: addr[..host_len].to_string(),
            port: port.to_string(),
        })
    }

    /// Get the host part as a string slice.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Get the port part as a string slice, exactly as written.
    #[must_use]
    pub fn port(&self) -> &str {
        &self.port
    }

    /// Get the port as a 16-bit number, or `None` if the digits exceed the
    /// valid port range (e.g. `"99999"`).
    #[must_use]
    pub fn port_number(&self) -> Option<u16> {
        self.port.parse().ok()
    }
}

impl fmt::Display for HostPort {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

impl std::str::FromStr for HostPort {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        HostPort::split(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("localhost:8080", "localhost", "8080")]
    #[case("some.example.com:80", "some.example.com", "80")]
    #[case("127.0.0.1:1", "127.0.0.1", "1")]
    #[case("my-host:65535", "my-host", "65535")]
    #[case("a:0", "a", "0")]
    fn test_split_valid(#[case] input: &str, #[case] host: &str, #[case] port: &str) {
        let pair = HostPort::split(input).unwrap();
        assert_eq!(pair.host(), host);
        assert_eq!(pair.port(), port);
    }

    #[rstest]
    #[case("localhost8080")] // no delimiter
    #[case(":8080")] // empty host
    #[case("*invalidch^r:8080")] // illegal characters
    #[case("host_name:8080")] // underscore not in RFC 952 charset
    #[case("héllo:8080")] // non-ASCII
    #[case("")] // empty input
    #[case(":")] // empty both sides
    fn test_split_invalid_host(#[case] input: &str) {
        assert_eq!(
            HostPort::split(input),
            Err(Error::InvalidHost(input.to_string()))
        );
    }

    #[rstest]
    #[case("host:")] // empty port
    #[case("host:abc")] // non-digit
    #[case("host:80a")] // trailing non-digit
    #[case("host:123456")] // six digits
    #[case("host:8080:extra")] // embedded second colon
    #[case("host:-80")] // sign is not a digit
    fn test_split_invalid_port(#[case] input: &str) {
        assert_eq!(
            HostPort::split(input),
            Err(Error::InvalidPort(input.to_string()))
        );
    }

    #[test]
    fn test_host_at_length_bound() {
        // 253 characters is accepted, 254 is rejected (not truncated).
        let host = "a".repeat(253);
        let pair = HostPort::split(&format!("{host}:80")).unwrap();
        assert_eq!(pair.host(), host);

        let long = format!("{}:80", "a".repeat(254));
        assert_eq!(HostPort::split(&long), Err(Error::InvalidHost(long)));
    }

    #[test]
    fn test_overlong_host_rejected_even_with_valid_port() {
        let addr = format!("{}:8080", "b".repeat(300));
        assert_eq!(HostPort::split(&addr), Err(Error::InvalidHost(addr)));
    }

    #[test]
    fn test_display_round_trip() {
        let pair: HostPort = "some.example.com:80".parse().unwrap();
        assert_eq!(pair.to_string(), "some.example.com:80");

        let reparsed: HostPort = pair.to_string().parse().unwrap();
        assert_eq!(reparsed, pair);
    }

    #[test]
    fn test_port_number() {
        let pair = HostPort::split("host:8080").unwrap();
        assert_eq!(pair.port_number(), Some(8080));

        // Five digits but out of u16 range: parser accepts, numeric view
        // does not.
        let pair = HostPort::split("host:99999").unwrap();
        assert_eq!(pair.port(), "99999");
        assert_eq!(pair.port_number(), None);
    }

    #[test]
    fn test_error_display_names_the_address() {
        let err = HostPort::split(":8080").unwrap_err();
        assert!(err.to_string().contains(":8080"));
    }
}
