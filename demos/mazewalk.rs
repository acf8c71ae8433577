//! Command-line maze solver.
//!
//! Run: cargo run --bin mazewalk -- --preset basic
//!      RUST_LOG=debug cargo run --bin mazewalk -- "*0110000#" --codes ↑,↓,←,→

use std::process::ExitCode;

use clap::Parser;
use mazewalk_demos::{Cli, run};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(&cli, &mut std::io::stdout()) {
        Ok(status) => status.into(),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}
