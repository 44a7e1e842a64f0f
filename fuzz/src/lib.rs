//! Fuzzing helper function

use std::fmt::Debug;

use brainsnake::Instr;

#[derive(Debug, arbitrary::Arbitrary)]
pub struct FuzzInputInstrs {
    pub instrs: Vec<Instr>,
    pub input: String,
    pub tape_size: u8,
}

#[derive(arbitrary::Arbitrary)]
pub struct FuzzInputSrc {
    pub code: String,
    pub input: String,
}

impl Debug for FuzzInputSrc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FuzzInputSrc")
            .field("code", &self.code.escape_debug().to_string())
            .field("input", &self.input)
            .finish()
    }
}
