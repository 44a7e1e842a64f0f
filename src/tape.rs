//! Implementations of the BF tape

use crate::{BfNum, TapeAddr, TapeError};

/// A trait implementing a tape for the BF program memory.
///
/// Tapes are fixed size and circular: every address handed to these methods
/// is expected to be in `[0, len)`, which [`TapeAddr::wrapping_next`] and
/// [`TapeAddr::wrapping_prev`] maintain.
pub trait Tape {
    /// Number of cells. Never zero.
    fn len(&self) -> usize;
    fn get(&self, offset: TapeAddr) -> BfNum;
    fn set(&mut self, offset: TapeAddr, value: BfNum);
    /// Add `diff` to a cell, wrapping at 256.
    fn modify(&mut self, offset: TapeAddr, diff: BfNum);

    fn right(&self, offset: TapeAddr) -> TapeAddr {
        offset.wrapping_next(self.len())
    }

    fn left(&self, offset: TapeAddr) -> TapeAddr {
        offset.wrapping_prev(self.len())
    }
}

/// A fixed size circular tape backed by a Vec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingTape {
    data: Vec<BfNum>,
}

impl RingTape {
    /// Allocate `len` zeroed cells.
    pub fn new(len: usize) -> Result<Self, TapeError> {
        if len == 0 {
            return Err(TapeError::ZeroLength);
        }
        Ok(Self {
            data: vec![0.into(); len],
        })
    }

    /// View of all cells.
    pub fn cells(&self) -> &[BfNum] {
        &self.data
    }
}

impl Default for RingTape {
    fn default() -> Self {
        Self {
            data: vec![0.into(); crate::settings::DEFAULT_TAPE_SIZE],
        }
    }
}

impl Tape for RingTape {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn get(&self, offset: TapeAddr) -> BfNum {
        self.data[offset.0]
    }

    fn set(&mut self, offset: TapeAddr, value: BfNum) {
        self.data[offset.0] = value;
    }

    fn modify(&mut self, offset: TapeAddr, diff: BfNum) {
        self.data[offset.0] += diff;
    }
}

#[cfg(test)]
mod tests {
    use super::{RingTape, Tape};
    use crate::{TapeAddr, TapeError};

    #[test]
    fn test_ring_tape() {
        let mut tape = RingTape::new(10).unwrap();
        assert_eq!(tape.len(), 10);
        tape.set(2.into(), 5.into());
        assert_eq!(tape.get(2.into()), 5.into());
        tape.modify(2.into(), 255.into());
        assert_eq!(tape.get(2.into()), 4.into());
        tape.modify(8.into(), 200.into());
        assert_eq!(tape.get(8.into()), 200.into());
        assert!(tape.cells().iter().filter(|c| !c.is_zero()).count() == 2);

        assert_eq!(RingTape::new(0), Err(TapeError::ZeroLength));
        assert_eq!(RingTape::default().len(), 30000);
    }

    #[test]
    fn test_cursor_wraps() {
        let tape = RingTape::new(3).unwrap();
        let mut ptr = TapeAddr(0);
        ptr = tape.left(ptr);
        assert_eq!(ptr, TapeAddr(2));
        ptr = tape.right(ptr);
        assert_eq!(ptr, TapeAddr(0));

        // A full lap brings the cursor back.
        for _ in 0..tape.len() {
            ptr = tape.right(ptr);
        }
        assert_eq!(ptr, TapeAddr(0));
    }

    #[test]
    fn test_cell_full_cycle() {
        let mut tape = RingTape::new(1).unwrap();
        tape.set(0.into(), 17.into());
        for _ in 0..256 {
            tape.modify(0.into(), 1.into());
        }
        assert_eq!(tape.get(0.into()), 17.into());
    }
}
