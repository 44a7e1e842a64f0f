use crate::{
    ast::{Instr, Program},
    interpreter::execute,
    tape::RingTape,
    ExecuteCallbackResult, ExecutionError, TapeAddr,
};

#[derive(Debug, PartialEq)]
pub struct ExecutionState {
    pub result: Option<Result<(), ExecutionError>>,
    pub tape: Vec<u8>,
    pub tape_ptr: TapeAddr,
    pub output: String,
}

/// Run `program` on the real interpreter, aborting after `max_steps`.
pub fn test_execute(
    program: &Program,
    tape_size: usize,
    input: &str,
    max_steps: u64,
) -> ExecutionState {
    let mut instr_count = 0;
    let mut tape = match RingTape::new(tape_size) {
        Ok(tape) => tape,
        Err(err) => panic!("bad tape size {tape_size}: {err}"),
    };
    let mut tape_ptr = TapeAddr::default();
    let mut output = String::new();
    let result = execute(
        program,
        &mut tape,
        &mut tape_ptr,
        &mut input.chars(),
        &mut output,
        &mut |data, _, _| {
            if let crate::ExecuteCallbackData::Step { .. } = data {
                instr_count += 1;
            }
            if instr_count > max_steps {
                ExecuteCallbackResult::Abort
            } else {
                ExecuteCallbackResult::Continue
            }
        },
    );

    ExecutionState {
        result: Some(result),
        tape: tape.cells().iter().map(|c| u8::from(*c)).collect(),
        tape_ptr,
        output,
    }
}

/// Straightforward reference machine that shares nothing with the real
/// interpreter but the instruction type. Loops are matched by scanning for
/// the partner bracket every time. Returns `None` if it did not halt within
/// `max_steps`.
pub fn reference_execute(
    instrs: &[Instr],
    tape_size: usize,
    input: &str,
    max_steps: u64,
) -> Option<(Vec<u8>, usize, String)> {
    let mut tape = vec![0u8; tape_size];
    let mut ptr = 0usize;
    let mut pc = 0usize;
    let mut input = input.chars();
    let mut output = String::new();
    let mut steps = 0;

    while pc < instrs.len() {
        steps += 1;
        if steps > max_steps {
            return None;
        }
        match instrs[pc] {
            Instr::Right => ptr = if ptr + 1 == tape_size { 0 } else { ptr + 1 },
            Instr::Left => ptr = if ptr == 0 { tape_size - 1 } else { ptr - 1 },
            Instr::Add => tape[ptr] = tape[ptr].wrapping_add(1),
            Instr::Subtract => tape[ptr] = tape[ptr].wrapping_sub(1),
            Instr::Output => output.push(char::from(tape[ptr])),
            Instr::Input => tape[ptr] = input.next().map_or(0, |c| (c as u32 % 256) as u8),
            Instr::BeginLoop if tape[ptr] == 0 => {
                let mut depth = 0;
                loop {
                    match instrs[pc] {
                        Instr::BeginLoop => depth += 1,
                        Instr::EndLoop => depth -= 1,
                        _ => (),
                    }
                    if depth == 0 {
                        break;
                    }
                    pc += 1;
                }
            }
            Instr::EndLoop if tape[ptr] != 0 => {
                let mut depth = 0;
                loop {
                    match instrs[pc] {
                        Instr::EndLoop => depth += 1,
                        Instr::BeginLoop => depth -= 1,
                        _ => (),
                    }
                    if depth == 0 {
                        break;
                    }
                    pc -= 1;
                }
            }
            Instr::BeginLoop | Instr::EndLoop => (),
        }
        pc += 1;
    }
    Some((tape, ptr, output))
}

/// Compare a real run against the reference machine.
pub fn compare_with_reference(program: &Program, tape_size: usize, input: &str, max_steps: u64) {
    let exec = test_execute(program, tape_size, input, max_steps);
    let reference = reference_execute(program.instructions(), tape_size, input, max_steps);
    match (exec.result.as_ref(), reference) {
        (Some(Ok(())), Some((tape, ptr, output))) => {
            assert_eq!(exec.output, output);
            assert_eq!(exec.tape_ptr, TapeAddr(ptr));
            assert_eq!(exec.tape, tape);
        }
        // Both gave up.
        (Some(Err(ExecutionError::Aborted)), None) => (),
        (result, reference) => {
            panic!("Runs disagree: {result:?} vs reference {reference:?}");
        }
    }
}
