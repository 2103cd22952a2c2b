//! echoclient - connect, write and read reply data from an echo server.
//!
//! ```text
//! % echoclient localhost 8080 hello
//! message: hello
//! ```

use std::io::{Read, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Send a message to a TCP echo server and print the reply.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Server hostname or IPv4 literal
    host: String,
    /// Server port
    port: String,
    /// Message to send
    message: String,
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let addr = format!("{}:{}", cli.host, cli.port);
    let mut stream = tcpkit_net::dial(&addr)?;

    stream
        .write_all(cli.message.as_bytes())
        .context("failed to send message")?;

    let mut buf = [0u8; 100];
    let n = stream.read(&mut buf).context("failed to read reply")?;
    println!("message: {}", String::from_utf8_lossy(&buf[..n]));

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
