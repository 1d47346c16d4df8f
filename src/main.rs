//! Run a lambda calculus program and print the result of each statement to
//! standard output, or start an interactive session.
//!
//! Example usage:
//!
//! ```text
//! cargo run -- --src-filepath test_programs/arithmetic.lc
//! cargo run -- --verbose
//! ```

use std::process::ExitCode;

use clap::Parser;
use little_lambda::end_to_end::{run_interpreter, InterpreterConfig};
use tracing::Level;

fn main() -> ExitCode {
    let interpreter_config = InterpreterConfig::parse();

    let max_level = if interpreter_config.verbose {
        Level::TRACE
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_writer(std::io::stderr)
        .init();

    match run_interpreter(&interpreter_config) {
        Ok(true) => return ExitCode::SUCCESS,
        Ok(false) => return ExitCode::FAILURE,
        Err(run_error) => {
            eprintln!("{}", run_error);
            return ExitCode::FAILURE;
        }
    }
}
