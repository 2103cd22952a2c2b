//! hostinfo - print the resolved addresses for a hostname or IP literal.
//!
//! ```text
//! % hostinfo localhost
//! ip: 127.0.0.1
//! ```

use std::net::ToSocketAddrs;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Resolve a hostname and print one line per candidate address.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Hostname or IP address to resolve
    host: String,
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    // Resolution needs a service value; port 0 asks for addresses only.
    let candidates = (cli.host.as_str(), 0u16)
        .to_socket_addrs()
        .with_context(|| format!("cannot resolve {}", cli.host))?;

    for candidate in candidates {
        println!("ip: {}", candidate.ip());
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
