#![no_main]

use brainsnake::test_utils::compare_with_reference;
use brainsnake::Program;
use brainsnake_fuzz::FuzzInputInstrs;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: FuzzInputInstrs| {
    let Ok(program) = Program::from_instructions(data.instrs) else {
        return;
    };
    let tape_size = usize::from(data.tape_size).max(1);
    compare_with_reference(&program, tape_size, &data.input, 500);
});
