//! ip2hex - convert a dotted-quad IPv4 address to its hexadecimal form.
//!
//! ```text
//! % ip2hex 127.0.0.1
//! 0x7f000001
//! ```

use std::net::Ipv4Addr;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

/// Print the 32-bit hexadecimal form of an IPv4 address.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// IPv4 address in dotted-quad notation
    address: String,
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let addr: Ipv4Addr = cli
        .address
        .parse()
        .with_context(|| format!("invalid IP address {:?}", cli.address))?;

    println!("{:#x}", u32::from(addr));
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
