use thiserror::Error;

use crate::ast::{Instr, Program};
use crate::tape::Tape;
use crate::TapeAddr;

/// Error type for execution
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionError {
    /// Aborted by callback
    #[error("Callback aborted execution")]
    Aborted,
    /// The configured step budget ran out.
    #[error("Step limit of {limit} instructions exceeded")]
    StepLimitExceeded { limit: u64 },
}

/// Data sent to execution callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecuteCallbackData {
    /// We are about to execute the instruction at this program counter
    Step { pc: usize, instr: Instr },
    /// A `]` is jumping back to the start of its loop
    LoopBack { pc: usize },
}

/// Reply type for callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecuteCallbackResult {
    /// Continue execution
    Continue,
    /// Abort execution
    Abort,
}

/// Program counter interpreter.
///
/// Runs `program` against `tape` starting at `tape_ptr`, reading input
/// characters from `input` (exhausted input reads as 0) and appending one
/// character per `.` to `output`. The callback is consulted before every
/// instruction and can abort the run; this is the only way a run ends early.
pub fn execute<TapeT: Tape, F>(
    program: &Program,
    tape: &mut TapeT,
    tape_ptr: &mut TapeAddr,
    input: &mut impl Iterator<Item = char>,
    output: &mut String,
    callback: &mut F,
) -> Result<(), ExecutionError>
where
    F: FnMut(ExecuteCallbackData, &TapeT, &TapeAddr) -> ExecuteCallbackResult,
{
    let code = program.instructions();
    let mut pc = 0;
    while pc < code.len() {
        let instr = code[pc];
        match callback(ExecuteCallbackData::Step { pc, instr }, tape, tape_ptr) {
            ExecuteCallbackResult::Continue => (),
            ExecuteCallbackResult::Abort => return Err(ExecutionError::Aborted),
        }
        match instr {
            Instr::Right => *tape_ptr = tape.right(*tape_ptr),
            Instr::Left => *tape_ptr = tape.left(*tape_ptr),
            Instr::Add => tape.modify(*tape_ptr, 1.into()),
            Instr::Subtract => tape.modify(*tape_ptr, 255.into()),
            Instr::Output => output.push(tape.get(*tape_ptr).as_char()),
            Instr::Input => match input.next() {
                Some(c) => tape.set(*tape_ptr, c.into()),
                None => tape.set(*tape_ptr, 0.into()),
            },
            Instr::BeginLoop => {
                if tape.get(*tape_ptr).is_zero() {
                    pc = program.brackets.target(pc);
                }
            }
            Instr::EndLoop => {
                if !tape.get(*tape_ptr).is_zero() {
                    match callback(ExecuteCallbackData::LoopBack { pc }, tape, tape_ptr) {
                        ExecuteCallbackResult::Continue => (),
                        ExecuteCallbackResult::Abort => return Err(ExecutionError::Aborted),
                    }
                    pc = program.brackets.target(pc);
                }
            }
        }
        // After a jump this steps past the bracket we landed on.
        pc += 1;
    }
    Ok(())
}
