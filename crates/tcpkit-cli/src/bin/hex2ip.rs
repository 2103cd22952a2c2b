//! hex2ip - convert a hexadecimal IPv4 value to dotted-quad notation.
//!
//! ```text
//! % hex2ip 0x7f000001
//! 127.0.0.1
//! ```

use std::net::Ipv4Addr;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

/// Print the dotted-quad form of a 32-bit hexadecimal IPv4 value.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Hexadecimal value, with or without a 0x prefix
    value: String,
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let digits = cli
        .value
        .strip_prefix("0x")
        .or_else(|| cli.value.strip_prefix("0X"))
        .unwrap_or(&cli.value);

    let value = u32::from_str_radix(digits, 16)
        .with_context(|| format!("invalid hexadecimal value {:?}", cli.value))?;

    println!("{}", Ipv4Addr::from(value));
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
