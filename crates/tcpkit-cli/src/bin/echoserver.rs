//! echoserver - a simple threaded TCP echo server.
//!
//! ```text
//! % echoserver 8080
//! ```
//!
//! Accepts connections in a loop and echoes bytes back until the peer
//! closes, one thread per connection.

use std::net::{TcpListener, TcpStream};
use std::process::ExitCode;
use std::thread;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Run a TCP echo server on the given port.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Port to listen on
    port: u16,
}

fn echo(mut stream: TcpStream) {
    let peer = stream
        .peer_addr()
        .map(|a| a.to_string())
        .unwrap_or_else(|_| "<unknown>".to_string());

    let mut reader = match stream.try_clone() {
        Ok(reader) => reader,
        Err(err) => {
            error!("failed to clone stream for {peer}: {err}");
            return;
        }
    };

    match std::io::copy(&mut reader, &mut stream) {
        Ok(n) => info!("echoed {n} bytes to {peer}"),
        Err(err) => error!("echo to {peer} failed: {err}"),
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let listener = TcpListener::bind(("0.0.0.0", cli.port))
        .with_context(|| format!("cannot listen on port {}", cli.port))?;

    info!("echoserver: listening on port :{}", cli.port);
    for stream in listener.incoming() {
        match stream {
            Ok(stream) => {
                thread::spawn(move || echo(stream));
            }
            Err(err) => error!("accept failed: {err}"),
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
