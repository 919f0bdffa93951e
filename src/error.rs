//! Error type shared by every engine operation.
//!
//! All failures are contract violations on sizes, ranges or session state.
//! Nothing here is transient, so nothing is worth retrying.

use crate::color::Color;

/// Raised when an operation's preconditions on its configuration are violated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidConfiguration {
    #[error("pool size {requested} is outside 1..={available}")]
    PoolSize { requested: usize, available: usize },

    #[error("pool of {pool} colors cannot fill {slots} distinct slots")]
    PoolTooSmall { pool: usize, slots: usize },

    #[error("slot {slot} is out of range for a {slots}-slot code")]
    SlotOutOfRange { slot: usize, slots: usize },

    #[error("color {0} appears more than once in the pool")]
    DuplicateColor(Color),

    #[error("color {0} appears more than once in the target")]
    RepeatedTargetColor(Color),

    #[error("color {0} is not part of the session pool")]
    ColorNotInPool(Color),

    #[error("expected {expected} colors, found {found}")]
    CodeLength { expected: usize, found: usize },

    #[error("unknown color letter '{0}'")]
    UnknownColor(char),

    #[error("difficulty {requested} is outside {min}..={max}")]
    DifficultyOutOfRange {
        requested: usize,
        min: usize,
        max: usize,
    },

    #[error("session already won; reset to play again")]
    SessionFinished,
}

pub type Result<T> = std::result::Result<T, InvalidConfiguration>;
