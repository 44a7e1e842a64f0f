//! The two public entry points: run a program, or translate it.

use thiserror::Error;
use tracing::debug;

use crate::codegen::generate;
use crate::interpreter::{self, ExecuteCallbackData, ExecuteCallbackResult};
use crate::settings::Settings;
use crate::tape::RingTape;
use crate::{parse_source, ExecutionError, ParseError, Program, TapeAddr, TapeError};

/// Anything that can go wrong in [`execute`] or [`compile`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Bracket mismatch in the source.
    #[error("Syntax error: {0}")]
    Syntax(#[from] ParseError),
    /// The run was stopped before the program halted.
    #[error("Runtime error: {0}")]
    Runtime(#[from] ExecutionError),
    /// Unusable tape configuration.
    #[error("Configuration error: {0}")]
    Tape(#[from] TapeError),
}

/// Filter, validate and interpret `source`, feeding it `input`.
///
/// Returns everything the program wrote. Nothing is returned on error, not
/// even partial output.
pub fn execute(source: &str, input: &str, settings: &Settings) -> Result<String, Error> {
    settings.validate()?;
    let program = parse_source(source)?;
    run_program(&program, input, settings, |_, _| ())
}

/// Interpret an already parsed program on a fresh tape.
///
/// `observer` sees every callback from the interpreter along with the
/// current cursor, after the step limit has been accounted for.
pub fn run_program<F>(
    program: &Program,
    input: &str,
    settings: &Settings,
    mut observer: F,
) -> Result<String, Error>
where
    F: FnMut(ExecuteCallbackData, &TapeAddr),
{
    let mut tape = RingTape::new(settings.tape_size)?;
    let mut tape_ptr = TapeAddr::default();
    let mut output = String::new();

    let mut steps: u64 = 0;
    let result = interpreter::execute(
        program,
        &mut tape,
        &mut tape_ptr,
        &mut input.chars(),
        &mut output,
        &mut |data, _, tp| {
            if let (ExecuteCallbackData::Step { .. }, Some(limit)) = (data, settings.step_limit) {
                steps += 1;
                if steps > limit {
                    return ExecuteCallbackResult::Abort;
                }
            }
            observer(data, tp);
            ExecuteCallbackResult::Continue
        },
    );
    match (result, settings.step_limit) {
        (Ok(()), _) => {
            debug!(output_len = output.len(), "program halted");
            Ok(output)
        }
        (Err(ExecutionError::Aborted), Some(limit)) => {
            Err(ExecutionError::StepLimitExceeded { limit }.into())
        }
        (Err(err), _) => Err(err.into()),
    }
}

/// Filter, validate and translate `source` into the configured target language.
pub fn compile(source: &str, settings: &Settings) -> Result<String, Error> {
    settings.validate()?;
    let program = parse_source(source)?;
    let code = generate(&program, settings.tape_size, settings.target);
    debug!(target_lang = ?settings.target, code_len = code.len(), "generated code");
    Ok(code)
}
