use std::process;

use clap::Parser;
use mock_inbox::cli::{self, Cli};

fn main() {
    let cli = Cli::parse();
    cli::init_logging(cli.log_level);

    if let Err(e) = cli::run(cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
