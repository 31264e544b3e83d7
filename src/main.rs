use std::process::ExitCode;

use clap::Parser;
use vsepr_elements::cli::{self, Cli};
use vsepr_elements::utils::logger;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logger::init(logger::level_for_verbosity(cli.verbose)) {
        eprintln!("Logger setup failed: {e}");
    }

    match cli::run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
