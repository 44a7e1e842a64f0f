#![no_main]

use libfuzzer_sys::fuzz_target;

use brainsnake::{parse_source, ParseError};

/// Depth counting balance check, reporting the same positions as the parser.
fn check_loop_balance(data: &str) -> Option<ParseError> {
    let loops = data.chars().filter(|c| "<>+-.,[]".contains(*c)).enumerate();
    let mut depth = 0usize;
    let mut outermost_open = None;
    for (pos, c) in loops {
        match c {
            '[' => {
                if depth == 0 {
                    outermost_open = Some(pos);
                }
                depth += 1;
            }
            ']' if depth == 0 => return Some(ParseError::UnmatchedClose { pos }),
            ']' => depth -= 1,
            _ => (),
        }
    }
    if depth != 0 {
        return outermost_open.map(|pos| ParseError::UnmatchedOpen { pos });
    }
    None
}

fuzz_target!(|data: &str| {
    match parse_source(data) {
        Ok(program) => {
            assert_eq!(check_loop_balance(data), None);
            for (open, close) in program.brackets().pairs() {
                assert!(open < close);
                assert_eq!(program.brackets().get(close), Some(open));
            }
        }
        Err(e) => {
            assert_eq!(check_loop_balance(data), Some(e));
        }
    }
});
