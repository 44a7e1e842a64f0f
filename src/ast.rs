//! Types and functions for the instruction stream.

use std::fmt::Display;

use crate::brackets::BracketMap;

/// One of the eight operators.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Instr {
    /// `>`
    Right,
    /// `<`
    Left,
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `.`
    Output,
    /// `,`
    Input,
    /// `[`
    BeginLoop,
    /// `]`
    EndLoop,
}

impl Instr {
    /// Map a source character to an operator. Everything else is commentary.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '>' => Some(Self::Right),
            '<' => Some(Self::Left),
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '.' => Some(Self::Output),
            ',' => Some(Self::Input),
            '[' => Some(Self::BeginLoop),
            ']' => Some(Self::EndLoop),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Self::Right => '>',
            Self::Left => '<',
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Output => '.',
            Self::Input => ',',
            Self::BeginLoop => '[',
            Self::EndLoop => ']',
        }
    }
}

impl Display for Instr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A validated program: the instruction stream together with its bracket map.
///
/// The only way to get one is through [`crate::parse_source`] or
/// [`Program::from_instructions`], both of which check bracket balance, so
/// every loop operator in `instrs` has a partner in `brackets`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Program {
    pub(crate) instrs: Vec<Instr>,
    pub(crate) brackets: BracketMap,
}

impl Program {
    /// Validate an already filtered instruction stream.
    pub fn from_instructions(instrs: Vec<Instr>) -> Result<Self, crate::ParseError> {
        crate::brackets::validate(&instrs)?;
        let brackets = BracketMap::resolve(&instrs)?;
        Ok(Self { instrs, brackets })
    }

    pub fn instructions(&self) -> &[Instr] {
        &self.instrs
    }

    pub fn brackets(&self) -> &BracketMap {
        &self.brackets
    }

    pub fn len(&self) -> usize {
        self.instrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instrs.is_empty()
    }
}

/// Prints the filtered source back.
impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for instr in &self.instrs {
            write!(f, "{instr}")?;
        }
        Ok(())
    }
}
