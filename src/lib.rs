//! # Masterand
//!
//! A Mastermind-style color guessing engine.
//!
//! A session draws a pool of colors from a fixed palette, picks a hidden
//! four-color target from that pool, and scores every submitted guess with
//! Hit / Present / Miss feedback. An entropy-based [`CodeBreaker`] can suggest
//! guesses or play a whole game on its own.

pub mod code;
pub mod color;
pub mod config;
pub mod error;
pub mod feedback;
pub mod ledger;
pub mod pool;
pub mod rotate;
pub mod session;
pub mod solver;

pub use code::{Code, Guess, Target};
pub use color::{Color, PALETTE};
pub use config::{GameConfig, ScoringRule};
pub use error::{InvalidConfiguration, Result};
pub use feedback::{score, score_slices, Feedback, FeedbackPattern};
pub use ledger::{HistoryEntry, HistoryLedger};
pub use pool::{initial_guess, select_pool, select_target, ColorPool};
pub use rotate::rotate;
pub use session::{MemorySink, ScoreRecord, ScoreSink, Session, Submission};
pub use solver::CodeBreaker;

/// Number of slots in a target or guess.
pub const CODE_LENGTH: usize = 4;
