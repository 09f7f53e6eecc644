//! Demo harness for the sequence container.
//!
//! Runs the documented operations end to end and prints PASS/FAIL lines.
//!
//! Usage:
//!   seq-demo [--filter <substring>] [--list]

mod checks;

use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "seq-demo",
    about = "Exercise the sequence container and print PASS/FAIL lines",
    version
)]
struct Args {
    /// Only run checks whose name contains this substring
    #[arg(short, long)]
    filter: Option<String>,

    /// List available check names without running anything
    #[arg(long, default_value = "false")]
    list: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let checks = checks::all();

    if args.list {
        for (name, _) in checks {
            println!("{name}");
        }
        return Ok(());
    }

    println!("SEQUENCE DEMO CHECKS");

    let mut ran = 0usize;
    let mut failed = 0usize;
    for (name, run) in checks {
        if let Some(filter) = &args.filter {
            if !name.contains(filter.as_str()) {
                continue;
            }
        }
        println!();
        println!("[CHECK] {name}");
        ran += 1;
        if !run() {
            failed += 1;
        }
    }

    if ran == 0 {
        anyhow::bail!("no check matches the filter");
    }

    println!();
    println!("{ran} check(s) run, {failed} failed");
    if failed > 0 {
        anyhow::bail!("{failed} of {ran} checks failed");
    }
    Ok(())
}
