//! calcpad: keystroke-driven four-function calculator
//!
//! ## Usage
//!
//! ```bash
//! calcpad "12+3="              # prints "12 + 3" and "15"
//! calcpad --format json "4/2=" # prints the display state as JSON
//! echo "9-3=" | calcpad        # reads scripts from stdin
//! ```

use std::io::{self, Write};
use std::process::ExitCode;

use calcpad_cli::{logging, Cli, CliResult, Session};
use clap::Parser;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = cli.config();
    logging::init_logging(config.verbosity);

    let mut session = Session::new(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.keys.is_empty() {
        session.run_lines(io::stdin().lock(), &mut out)?;
    } else {
        session.run_script(&cli.keys.concat(), &mut out)?;
    }

    out.flush()?;
    Ok(())
}
