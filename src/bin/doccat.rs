//! doccat CLI binary.

use clap::Parser;
use doccat::cli::{args::*, commands::*};
use std::process;

fn main() {
    // Parse command line arguments using clap
    let args = DoccatArgs::parse();

    // Execute the command
    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
