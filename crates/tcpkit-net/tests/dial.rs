//! Integration tests for the dialer
//!
//! These tests verify the complete split-resolve-connect cycle against real
//! listeners on 127.0.0.1, including the echo round-trip that proves the
//! returned stream is usable.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;
use std::time::Duration;

use tcpkit_net::{DialError, Dialer, DialerConfig, dial};

/// Spawn a one-shot echo server on an ephemeral port, return the port.
fn spawn_echo_listener() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut reader = stream.try_clone().unwrap();
        let _ = std::io::copy(&mut reader, &mut stream);
    });

    port
}

/// Test dial + write + read-back against a live echo listener
#[test]
fn test_dial_echo_round_trip() {
    let port = spawn_echo_listener();

    let mut stream = dial(&format!("127.0.0.1:{port}")).unwrap();
    stream.write_all(b"hello").unwrap();

    let mut reply = [0u8; 5];
    stream.read_exact(&mut reply).unwrap();
    assert_eq!(&reply, b"hello");
}

/// Test that a hostname resolves and non-IPv4 candidates are skipped
#[test]
fn test_dial_by_hostname() {
    let port = spawn_echo_listener();

    // localhost may resolve to ::1 first; the dialer must walk past it to
    // the IPv4 candidate.
    let mut stream = dial(&format!("localhost:{port}")).unwrap();
    stream.write_all(b"ping").unwrap();

    let mut reply = [0u8; 4];
    stream.read_exact(&mut reply).unwrap();
    assert_eq!(&reply, b"ping");
}

/// Test that a port with nothing listening yields ConnectFailed
#[test]
fn test_dial_closed_port() {
    // Bind and immediately drop to find a port that is almost certainly
    // closed.
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let addr = format!("127.0.0.1:{port}");
    let result = dial(&addr);
    match result {
        Err(DialError::ConnectFailed(failed)) => assert_eq!(failed, addr),
        other => panic!("expected ConnectFailed, got {other:?}"),
    }
}

/// Test the configured connect timeout against a non-routable address
#[test]
fn test_dial_connect_timeout() {
    // RFC 5737 TEST-NET-1: never routable, the connect attempt can only
    // time out.
    let dialer = Dialer::new(DialerConfig {
        connect_timeout: Some(Duration::from_millis(100)),
    });

    let result = dialer.dial("192.0.2.1:9999");
    assert!(matches!(result, Err(DialError::ConnectFailed(_))));
}

/// Test that an unknown host surfaces as a resolution error
#[test]
fn test_dial_unknown_host() {
    // RFC 2606 reserves .invalid; it never resolves.
    let result = dial("no-such-host.invalid:80");
    assert!(matches!(result, Err(DialError::Resolution { .. })));
}

/// Test that address validation runs before any network activity
#[test]
fn test_dial_invalid_address_is_typed() {
    let result = dial("host:8080:extra");
    assert!(matches!(
        result,
        Err(DialError::InvalidAddress(tcpkit_core::Error::InvalidPort(_)))
    ));
}
