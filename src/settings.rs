//! Settings defining what to do

use crate::codegen::Target;
use crate::TapeError;

/// Tape length used unless told otherwise.
pub const DEFAULT_TAPE_SIZE: usize = 30000;

/// Configuration passed to [`crate::execute`] and [`crate::compile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Number of cells on the circular tape.
    pub tape_size: usize,
    /// Maximum number of instructions to execute. `None` runs until the
    /// program halts, which may be never.
    pub step_limit: Option<u64>,
    /// Language to generate code for.
    pub target: Target,
}

impl Settings {
    pub fn with_tape_size(mut self, tape_size: usize) -> Self {
        self.tape_size = tape_size;
        self
    }

    pub fn with_step_limit(mut self, step_limit: u64) -> Self {
        self.step_limit = Some(step_limit);
        self
    }

    pub fn with_target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    /// Reject configurations that cannot describe a tape.
    pub fn validate(&self) -> Result<(), TapeError> {
        if self.tape_size == 0 {
            return Err(TapeError::ZeroLength);
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tape_size: DEFAULT_TAPE_SIZE,
            step_limit: None,
            target: Target::Python,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Settings, DEFAULT_TAPE_SIZE};
    use crate::codegen::Target;
    use crate::TapeError;

    #[test]
    fn test_builder() {
        let settings = Settings::default()
            .with_tape_size(10)
            .with_step_limit(500)
            .with_target(Target::C);
        assert_eq!(settings.tape_size, 10);
        assert_eq!(settings.step_limit, Some(500));
        assert_eq!(settings.target, Target::C);
        assert_eq!(Settings::default().tape_size, DEFAULT_TAPE_SIZE);
        assert_eq!(Settings::default().step_limit, None);
    }

    #[test]
    fn test_validate() {
        assert_eq!(Settings::default().validate(), Ok(()));
        assert_eq!(
            Settings::default().with_tape_size(0).validate(),
            Err(TapeError::ZeroLength)
        );
    }
}
