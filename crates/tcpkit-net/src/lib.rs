//! Blocking TCP dialing for tcpkit
//!
//! This crate turns a validated `host:port` address into an open
//! [`std::net::TcpStream`]. It handles protocol lookup, socket creation,
//! name resolution, and the sequential connect walk over the resolved
//! candidates. Address validation itself lives in `tcpkit-core`.
//!
//! # Components
//!
//! - **Dialer**: reusable dialer carrying an optional connect timeout
//! - **dial**: one-shot convenience with the default configuration
//!
//! # Example
//!
//! ```no_run
//! use std::io::{Read, Write};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut stream = tcpkit_net::dial("localhost:8080")?;
//! stream.write_all(b"hello")?;
//!
//! let mut reply = [0u8; 5];
//! stream.read_exact(&mut reply)?;
//! # Ok(())
//! # }
//! ```

mod dial;

pub use dial::{DialError, Dialer, DialerConfig, dial};
