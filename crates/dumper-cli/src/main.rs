//! Dumper Trip Calculator - excavation volume to truck trips and cost
//!
//! A CLI tool that turns excavation dimensions into the number of dumper
//! trips and the haulage cost.

mod cli;
mod commands;
mod interactive;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
