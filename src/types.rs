//! Fundamental data types used throughout brainsnake

use std::{
    fmt::Display,
    num::Wrapping,
    ops::AddAssign,
};
use thiserror::Error;

/// Error type for tape construction
#[derive(Debug, Clone, Copy, Error, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum TapeError {
    /// A circular tape needs at least one cell.
    #[error("Tape size must be at least one cell")]
    ZeroLength,
}

/// Newtype for the tape cursor.
///
/// The cursor is always kept in `[0, len)` for the tape it indexes, all
/// movement wraps around in both directions.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Default)]
#[repr(transparent)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct TapeAddr(pub usize);

impl TapeAddr {
    /// Step one cell right on a tape of `len` cells.
    pub fn wrapping_next(self, len: usize) -> Self {
        Self((self.0 + 1) % len)
    }

    /// Step one cell left on a tape of `len` cells.
    pub fn wrapping_prev(self, len: usize) -> Self {
        Self((self.0 + len - 1) % len)
    }
}

impl From<usize> for TapeAddr {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl From<TapeAddr> for usize {
    fn from(value: TapeAddr) -> Self {
        value.0
    }
}

impl Display for TapeAddr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A BF number (u8 with wrapping semantics).
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Default)]
#[repr(transparent)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct BfNum(Wrapping<u8>);

impl BfNum {
    pub fn is_zero(&self) -> bool {
        self.0 .0 == 0
    }

    /// The character with the same code point as this cell.
    pub fn as_char(&self) -> char {
        char::from(self.0 .0)
    }
}

impl AddAssign for BfNum {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl From<i32> for BfNum {
    fn from(value: i32) -> Self {
        Self(Wrapping::<u8>(value.rem_euclid(256) as u8))
    }
}

impl From<u8> for BfNum {
    fn from(value: u8) -> Self {
        Self(Wrapping::<u8>(value))
    }
}

/// Input characters are reduced modulo 256.
impl From<char> for BfNum {
    fn from(value: char) -> Self {
        Self(Wrapping::<u8>((u32::from(value) % 256) as u8))
    }
}

impl From<BfNum> for u8 {
    fn from(value: BfNum) -> Self {
        value.0 .0
    }
}
