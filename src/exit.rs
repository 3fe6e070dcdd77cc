// src/exit.rs
//! Standardized process exit codes for `pagerank`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

use crate::error::RankError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum RankExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (IO, config, internal inconsistency).
    Error = 1,
    /// The graph was rejected (empty, malformed edge, duplicate vertex, unparsable).
    InvalidInput = 2,
    /// `check` found blocking issues.
    CheckFailed = 3,
}

impl RankExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Maps a failed command to an exit code, distinguishing rejected input
    /// from everything else.
    #[must_use]
    pub fn from_error(err: &anyhow::Error) -> Self {
        if let Some(rank_err) = err.downcast_ref::<RankError>() {
            return if rank_err.is_input_error() {
                Self::InvalidInput
            } else {
                Self::Error
            };
        }
        if err.downcast_ref::<serde_json::Error>().is_some() {
            return Self::InvalidInput;
        }
        Self::Error
    }
}

impl Termination for RankExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn empty_graph_is_invalid_input() {
        let err = anyhow::Error::new(RankError::InvalidGraph);
        assert_eq!(RankExit::from_error(&err), RankExit::InvalidInput);
    }

    #[test]
    fn context_does_not_hide_rank_errors() {
        let res: std::result::Result<(), RankError> = Err(RankError::DuplicateVertex("A".into()));
        let err = res.context("ranking graph.json").unwrap_err();
        assert_eq!(RankExit::from_error(&err), RankExit::InvalidInput);
    }

    #[test]
    fn shape_mismatch_is_generic_error() {
        let err = anyhow::Error::new(RankError::ShapeMismatch { vertices: 2, ranks: 1 });
        assert_eq!(RankExit::from_error(&err), RankExit::Error);
    }

    #[test]
    fn codes_are_distinct() {
        let codes = [
            RankExit::Success.code(),
            RankExit::Error.code(),
            RankExit::InvalidInput.code(),
            RankExit::CheckFailed.code(),
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
