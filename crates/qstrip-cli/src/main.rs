mod cli;

use crate::cli::CliCommand;

fn main() {
    // Parse CLI and dispatch; logging is initialized once the config is loaded.
    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("qstrip error: {:#}", err);
        std::process::exit(1);
    }
}
