//! Blocking TCP dialer.
//!
//! Takes a combined `host:port` string, validates it with
//! [`HostPort`](tcpkit_core::HostPort), resolves it through the platform
//! name service, and connects a stream socket to the first candidate that
//! accepts. The connection sequence mirrors the classic POSIX client
//! bootstrap: protocol lookup, socket creation, split, getaddrinfo,
//! sequential connect.
//!
//! # Example Usage
//!
//! ```no_run
//! use tcpkit_net::{Dialer, DialerConfig};
//! use std::time::Duration;
//!
//! # fn example() -> Result<(), tcpkit_net::DialError> {
//! let dialer = Dialer::new(DialerConfig {
//!     connect_timeout: Some(Duration::from_millis(3000)),
//! });
//!
//! let stream = dialer.dial("localhost:8080")?;
//! // `stream` is a std::net::TcpStream owned by the caller.
//! # Ok(())
//! # }
//! ```
//!
//! # Design Principles
//!
//! The dialer is a transport bootstrap, nothing more:
//! - **No automatic retry**: the resolved candidate list is walked once
//! - **No connection pooling**: one socket per call, handed to the caller
//! - **No async**: every step blocks; a caller wanting a deadline sets
//!   [`DialerConfig::connect_timeout`]
//!
//! Per-candidate connect failures are logged at debug level and discarded;
//! trying the next candidate is the policy, not an oversight.

use std::io;
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use socket2::{Domain, Protocol, Socket, Type};
use tcpkit_core::HostPort;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while dialing an address.
#[derive(Debug, Error)]
pub enum DialError {
    /// The address string failed host or port validation.
    ///
    /// The inner error says which side was at fault.
    #[error("invalid address: {0}")]
    InvalidAddress(#[from] tcpkit_core::Error),

    /// The "tcp" entry is missing from the host protocol database.
    #[error("tcp protocol not found in the host protocol database")]
    ProtocolUnavailable,

    /// The stream socket could not be created.
    #[error("failed to create socket: {0}")]
    SocketCreate(#[source] io::Error),

    /// Name or service resolution failed.
    ///
    /// The wrapped [`io::Error`] carries the platform diagnostic; inspect
    /// its `kind()` or `raw_os_error()` to tell a system-level failure from
    /// a resolver-reported one (unknown host, invalid service). A port
    /// numerically above 65535 surfaces here too, refused by the resolver.
    #[error("failed to resolve {addr}: {source}")]
    Resolution { addr: String, source: io::Error },

    /// Every resolved candidate refused or failed the connection attempt.
    #[error("couldn't connect to {0}")]
    ConnectFailed(String),
}

/// Configuration for a [`Dialer`].
#[derive(Debug, Clone, Default)]
pub struct DialerConfig {
    /// Deadline for each individual connect attempt.
    ///
    /// `None` leaves the attempt to the OS default blocking behavior. The
    /// value is passed through unchanged to the socket connect call.
    pub connect_timeout: Option<Duration>,
}

/// Blocking TCP dialer.
///
/// Each [`dial`](Dialer::dial) call owns its own socket and resolution
/// results; the dialer itself holds nothing but configuration and can be
/// reused freely.
#[derive(Debug, Clone)]
pub struct Dialer {
    connect_timeout: Option<Duration>,
}

impl Dialer {
    /// Create a new dialer with the given configuration.
    #[must_use]
    pub fn new(config: DialerConfig) -> Self {
        Self {
            connect_timeout: config.connect_timeout,
        }
    }

    /// Connect to `addr` (a combined `host:port` string) over TCP.
    ///
    /// Resolution candidates are attempted in resolver order; the first
    /// successful connect wins and the open [`TcpStream`] transfers to the
    /// caller. Candidates from other address families than the IPv4 socket
    /// are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The address fails validation ([`DialError::InvalidAddress`])
    /// - The tcp protocol entry is absent ([`DialError::ProtocolUnavailable`])
    /// - The socket cannot be created ([`DialError::SocketCreate`])
    /// - Resolution fails ([`DialError::Resolution`])
    /// - No candidate accepts the connection ([`DialError::ConnectFailed`])
    pub fn dial(&self, addr: &str) -> Result<TcpStream, DialError> {
        let protocol = tcp_protocol()?;

        let socket =
            Socket::new(Domain::IPV4, Type::STREAM, Some(protocol)).map_err(DialError::SocketCreate)?;

        let pair: HostPort = addr.parse()?;
        let target = pair.to_string();
        debug!(host = pair.host(), port = pair.port(), "resolving address");

        let candidates = target
            .as_str()
            .to_socket_addrs()
            .map_err(|source| DialError::Resolution {
                addr: target.clone(),
                source,
            })?;

        for candidate in candidates {
            // The socket was created for AF_INET.
            if !candidate.is_ipv4() {
                debug!(%candidate, "skipping non-IPv4 candidate");
                continue;
            }

            let attempt = match self.connect_timeout {
                Some(timeout) => socket.connect_timeout(&candidate.into(), timeout),
                None => socket.connect(&candidate.into()),
            };

            match attempt {
                Ok(()) => {
                    info!(%candidate, "connected to {target}");
                    return Ok(socket.into());
                }
                Err(err) => {
                    debug!(%candidate, error = %err, "connect failed, trying next candidate");
                }
            }
        }

        Err(DialError::ConnectFailed(target))
    }
}

impl Default for Dialer {
    fn default() -> Self {
        Self::new(DialerConfig::default())
    }
}

/// Connect to `addr` with the default configuration (no connect timeout).
///
/// # Errors
/// See [`Dialer::dial`].
pub fn dial(addr: &str) -> Result<TcpStream, DialError> {
    Dialer::default().dial(addr)
}

/// Look up the "tcp" protocol number from the host protocol database.
#[cfg(unix)]
fn tcp_protocol() -> Result<Protocol, DialError> {
    // getprotobyname(3) returns a pointer into static storage owned by
    // libc; it is read once here and never freed.
    let entry = unsafe { libc::getprotobyname(c"tcp".as_ptr()) };
    if entry.is_null() {
        return Err(DialError::ProtocolUnavailable);
    }
    Ok(Protocol::from(unsafe { (*entry).p_proto }))
}

/// The protocol database is unavailable off unix; fall back to the IANA
/// constant.
#[cfg(not(unix))]
fn tcp_protocol() -> Result<Protocol, DialError> {
    Ok(Protocol::TCP)
}
