//! Code to configure and run the interpreter, either over a source file of
//! delimited statements or interactively.

use std::fs;

use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::Editor;
use thiserror::Error;
use tracing::{debug, warn};

use crate::recursive_descent_parsing::{eval_result_to_string, evaluate, ParseError};
use crate::term_representation::Term;

/// Config for the interpreter. Instantiate via `InterpreterConfig::parse()`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct InterpreterConfig {
    /// The input filepath to run on. Starts an interactive session if absent.
    #[arg(short, long)]
    pub src_filepath: Option<String>,

    /// Character separating the statements of a source file.
    #[arg(short, long, default_value_t = ';')]
    pub delimiter: char,

    /// Log every reduction step to standard error.
    #[arg(short, long)]
    pub verbose: bool,

    /// Where the interactive session keeps its line history.
    #[arg(long)]
    pub history_filepath: Option<String>,
}

/// Errors that may be thrown when running the interpreter.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("Input file error: {0}")]
    InputFileError(#[from] std::io::Error),
    #[error("Line editor error: {0}")]
    LineEditorError(#[from] ReadlineError),
}

/// The statement that stopped a batch run, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementFailure {
    /// 1-based position of the statement in the source.
    pub statement_num: usize,
    pub error: ParseError,
}

/// Represents the result of running a batch of statements.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExecutionResult {
    /// Results of the statements that succeeded, in order.
    pub evaluated: Vec<Term>,
    pub failure: Option<StatementFailure>,
}

impl ExecutionResult {
    pub fn succeeded(&self) -> bool {
        return self.failure.is_none();
    }
}

/// Converts an ExecutionResult to a String: one term per line, then the
/// error that stopped the run, if any.
pub fn execution_result_to_string(execution_result: &ExecutionResult) -> String {
    let mut out = vec![];

    for term in &execution_result.evaluated {
        out.push(term.to_string());
    }

    if let Some(failure) = &execution_result.failure {
        out.push(format!(
            "[Error] statement {}: {}",
            failure.statement_num, failure.error
        ));
    }

    return out.join("\n");
}

/// Evaluates every `delimiter`-separated statement of `program_str` in order,
/// stopping at the first one that fails. Blank text after the last delimiter
/// is not a statement.
pub fn execute_statements(program_str: &str, delimiter: char) -> ExecutionResult {
    let mut statements: Vec<&str> = program_str.split(delimiter).collect();

    if statements.len() > 1 && statements.last().is_some_and(|last| last.trim().is_empty()) {
        statements.pop();
    }

    let mut execution_result = ExecutionResult::default();

    for (idx, statement) in statements.into_iter().enumerate() {
        debug!("Evaluating statement {}: {:?}", idx + 1, statement);

        match evaluate(statement) {
            Ok(term) => execution_result.evaluated.push(term),
            Err(error) => {
                execution_result.failure = Some(StatementFailure {
                    statement_num: idx + 1,
                    error,
                });
                break;
            }
        }
    }

    return execution_result;
}

/// Run the statements of the source file at `src_filepath`.
pub fn run_batch_interpreter(
    src_filepath: &str,
    delimiter: char,
) -> Result<ExecutionResult, RunError> {
    // Read the input file into a string.
    let program_string = fs::read_to_string(src_filepath)?;

    return Ok(execute_statements(program_string.as_str(), delimiter));
}

/// Loads the line history at `history_filepath` into `editor`, warning if
/// there is none to load. Returns whether any history was loaded.
fn load_history(editor: &mut Editor<()>, history_filepath: &str) -> bool {
    if let Err(readline_error) = editor.load_history(history_filepath) {
        warn!("No history loaded from {}: {}", history_filepath, readline_error);
        return false;
    }

    return true;
}

/// Run an interactive session: every line is evaluated on its own and errors
/// don't end the session.
pub fn run_interactive_interpreter(config: &InterpreterConfig) -> Result<(), RunError> {
    let mut editor = Editor::<()>::new();

    if let Some(history_filepath) = &config.history_filepath {
        load_history(&mut editor, history_filepath);
    }

    println!("Lambda REPL. Ctrl-D to quit.");

    loop {
        match editor.readline("> ") {
            Ok(line) => {
                if !line.trim().is_empty() {
                    editor.add_history_entry(line.as_str());
                }

                println!("{}", eval_result_to_string(&evaluate(line.as_str())));
            }

            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                println!("Bye!");
                break;
            }

            Err(readline_error) => return Err(readline_error.into()),
        }
    }

    if let Some(history_filepath) = &config.history_filepath {
        editor.save_history(history_filepath)?;
    }

    return Ok(());
}

/// Run the interpreter as the config asks: over the source file if one is
/// given, printing the report, otherwise interactively. Returns whether every
/// statement succeeded.
pub fn run_interpreter(config: &InterpreterConfig) -> Result<bool, RunError> {
    match &config.src_filepath {
        Some(src_filepath) => {
            let execution_result = run_batch_interpreter(src_filepath, config.delimiter)?;
            println!("{}", execution_result_to_string(&execution_result));
            return Ok(execution_result.succeeded());
        }
        None => {
            run_interactive_interpreter(config)?;
            return Ok(true);
        }
    }
}
