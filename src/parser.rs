use tracing::debug;

use crate::ast::{Instr, Program};
use crate::brackets::{validate, BracketMap, ParseError};

/// Filters source code, producing a stream of instructions.
///
/// Anything outside the eight operators is commentary and dropped.
pub(crate) fn lexer(source_code: &'_ str) -> impl Iterator<Item = Instr> + '_ {
    source_code.chars().filter_map(Instr::from_char)
}

/// Parse source code into a validated program
pub fn parse_source(source_code: &str) -> Result<Program, ParseError> {
    // Tokenise and discard unknown tokens
    let instrs: Vec<Instr> = lexer(source_code).collect();
    // Fail fast, before anything is built
    validate(&instrs)?;
    let brackets = BracketMap::resolve(&instrs)?;
    debug!(
        instructions = instrs.len(),
        loops = brackets.pair_count(),
        "parsed program"
    );
    Ok(Program { instrs, brackets })
}
