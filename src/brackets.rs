//! Bracket balance checking and jump target resolution.

use thiserror::Error;

use crate::ast::Instr;

/// Errors during parsing
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// A `]` with no open loop to close.
    #[error("Unmatched ']' at position {pos}")]
    UnmatchedClose { pos: usize },
    /// A `[` that is never closed. Reports the earliest such position.
    #[error("Unmatched '[' at position {pos}")]
    UnmatchedOpen { pos: usize },
}

impl ParseError {
    /// Offset into the instruction stream of the offending bracket.
    pub fn position(&self) -> usize {
        match self {
            Self::UnmatchedClose { pos } | Self::UnmatchedOpen { pos } => *pos,
        }
    }
}

/// Check that every `[` has a matching `]` and vice versa.
///
/// A stray `]` is reported at its own position as soon as it is seen. If
/// opens are left over at the end, the *oldest* one (bottom of the stack) is
/// reported, not the innermost.
pub fn validate(instrs: &[Instr]) -> Result<(), ParseError> {
    let mut stack: Vec<usize> = Vec::new();
    for (pos, instr) in instrs.iter().enumerate() {
        match instr {
            Instr::BeginLoop => stack.push(pos),
            Instr::EndLoop => {
                if stack.pop().is_none() {
                    return Err(ParseError::UnmatchedClose { pos });
                }
            }
            _ => (),
        }
    }
    match stack.first() {
        Some(&pos) => Err(ParseError::UnmatchedOpen { pos }),
        None => Ok(()),
    }
}

/// Bidirectional mapping between matching `[` and `]` positions.
///
/// Stored as a jump table with one slot per instruction. Slots for
/// non-bracket instructions point at themselves.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct BracketMap {
    targets: Vec<usize>,
    pairs: usize,
}

impl BracketMap {
    /// Build the map by replaying the validation stack discipline.
    ///
    /// Fails with the same errors as [`validate`], so it is safe (if
    /// pointless) to call it on unvalidated input.
    pub fn resolve(instrs: &[Instr]) -> Result<Self, ParseError> {
        let mut targets: Vec<usize> = (0..instrs.len()).collect();
        let mut stack: Vec<usize> = Vec::new();
        let mut pairs = 0;
        for (pos, instr) in instrs.iter().enumerate() {
            match instr {
                Instr::BeginLoop => stack.push(pos),
                Instr::EndLoop => {
                    let Some(open) = stack.pop() else {
                        return Err(ParseError::UnmatchedClose { pos });
                    };
                    targets[open] = pos;
                    targets[pos] = open;
                    pairs += 1;
                }
                _ => (),
            }
        }
        if let Some(&pos) = stack.first() {
            return Err(ParseError::UnmatchedOpen { pos });
        }
        Ok(Self { targets, pairs })
    }

    /// Matching bracket for the bracket at `pos`, `None` for anything else.
    pub fn get(&self, pos: usize) -> Option<usize> {
        match self.targets.get(pos) {
            Some(&target) if target != pos => Some(target),
            _ => None,
        }
    }

    /// Jump target for the bracket at `pos`. Only valid for brackets of the
    /// program this map was resolved from.
    pub(crate) fn target(&self, pos: usize) -> usize {
        self.targets[pos]
    }

    /// Number of matched pairs.
    pub fn pair_count(&self) -> usize {
        self.pairs
    }

    /// Iterate over `(open, close)` pairs in order of the open position.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.targets
            .iter()
            .enumerate()
            .filter(|&(open, &close)| close > open)
            .map(|(open, &close)| (open, close))
    }
}
