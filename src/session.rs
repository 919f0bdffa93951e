//! Explicit per-session game state.
//!
//! A [`Session`] owns the pool, the hidden target, the guess being edited and
//! the history ledger. The caller keeps the random source and passes it in
//! whenever something has to be drawn.

use itertools::Itertools;
use rand::Rng;

use crate::code::{Guess, Target};
use crate::color::PALETTE;
use crate::config::{GameConfig, ScoringRule};
use crate::error::{InvalidConfiguration, Result};
use crate::feedback::{score, FeedbackPattern};
use crate::ledger::HistoryLedger;
use crate::pool::{initial_guess, select_pool, select_target, ColorPool};
use crate::rotate::rotate;

/// A finished session's result, handed to the persistence layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreRecord {
    pub player_id: Option<i64>,
    pub score: usize,
    pub difficulty_level: usize,
}

/// Receives one [`ScoreRecord`] per won session.
pub trait ScoreSink {
    fn record(&mut self, record: ScoreRecord);
}

/// Keeps records in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub records: Vec<ScoreRecord>,
}

impl MemorySink {
    /// High-score table: every record, lowest score first.
    pub fn scores(&self) -> Vec<ScoreRecord> {
        self.sorted(|_| true)
    }

    /// One player's records, lowest score first.
    pub fn scores_for(&self, player_id: i64) -> Vec<ScoreRecord> {
        self.sorted(|record| record.player_id == Some(player_id))
    }

    fn sorted(&self, keep: impl Fn(&ScoreRecord) -> bool) -> Vec<ScoreRecord> {
        self.records
            .iter()
            .copied()
            .filter(|record| keep(record))
            .sorted_by_key(|record| record.score)
            .collect()
    }
}

impl ScoreSink for MemorySink {
    fn record(&mut self, record: ScoreRecord) {
        self.records.push(record);
    }
}

/// Outcome of submitting the current guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    /// Ledger key of the new entry.
    pub key: usize,
    pub feedback: FeedbackPattern,
    pub won: bool,
    /// Score under the session's rule after this submission.
    pub score: usize,
}

#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    pool: ColorPool,
    target: Target,
    guess: Guess,
    history: HistoryLedger,
    won: bool,
}

impl Session {
    /// Validate `config` and draw a fresh pool and target.
    pub fn start<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let (pool, target, guess) = draw(&config, rng)?;
        tracing::info!(
            pool_size = config.pool_size,
            difficulty = config.difficulty_level(),
            "Session started"
        );
        Ok(Self {
            config,
            pool,
            target,
            guess,
            history: HistoryLedger::new(),
            won: false,
        })
    }

    /// Build a session around a known pool and target.
    ///
    /// The pool size in `config` is replaced by the pool's actual length.
    /// Target colors must be pairwise distinct, as drawn targets are.
    pub fn with_target(mut config: GameConfig, pool: ColorPool, target: Target) -> Result<Self> {
        pool.ensure_fills_code()?;
        if let Some(missing) = target.iter().find(|&c| !pool.contains(c)) {
            return Err(InvalidConfiguration::ColorNotInPool(missing));
        }
        if let Some(repeated) = target.first_repeat() {
            return Err(InvalidConfiguration::RepeatedTargetColor(repeated));
        }
        config.pool_size = pool.len();
        let guess = initial_guess(&pool)?;
        Ok(Self {
            config,
            pool,
            target,
            guess,
            history: HistoryLedger::new(),
            won: false,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn pool(&self) -> &ColorPool {
        &self.pool
    }

    pub fn guess(&self) -> &Guess {
        &self.guess
    }

    /// The hidden target, for revealing once the game is over.
    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn history(&self) -> &HistoryLedger {
        &self.history
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Current score under the configured [`ScoringRule`].
    pub fn score(&self) -> usize {
        match self.config.scoring {
            ScoringRule::GuessCount => self.history.size(),
            ScoringRule::MatchedColors => self
                .history
                .last()
                .map(|entry| entry.feedback.matched())
                .unwrap_or(0),
        }
    }

    pub fn rotate_slot(&mut self, slot: usize) -> Result<Guess> {
        self.ensure_active()?;
        self.guess = rotate(&self.pool, &self.guess, slot)?;
        Ok(self.guess)
    }

    /// Score the current guess and append it to the history.
    pub fn submit(&mut self) -> Result<Submission> {
        self.ensure_active()?;
        let feedback = score(&self.guess, &self.target);
        let key = self.history.append(self.guess, feedback);
        self.won = feedback.is_win();
        let submission = Submission {
            key,
            feedback,
            won: self.won,
            score: self.score(),
        };
        if self.won {
            tracing::info!(guesses = self.history.size(), score = submission.score, "Session won");
        }
        Ok(submission)
    }

    /// Like [`Session::submit`], and hands the final score to `sink` on a win.
    pub fn submit_to<S: ScoreSink + ?Sized>(&mut self, sink: &mut S) -> Result<Submission> {
        let submission = self.submit()?;
        if submission.won {
            sink.record(self.config.score_record(submission.score));
        }
        Ok(submission)
    }

    /// Discard history and draw a new pool and target.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        let (pool, target, guess) = draw(&self.config, rng)?;
        self.pool = pool;
        self.target = target;
        self.guess = guess;
        self.history.clear();
        self.won = false;
        tracing::info!(pool_size = self.config.pool_size, "Session reset");
        Ok(())
    }

    fn ensure_active(&self) -> Result<()> {
        if self.won {
            return Err(InvalidConfiguration::SessionFinished);
        }
        Ok(())
    }
}

fn draw<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<(ColorPool, Target, Guess)> {
    let pool = select_pool(&PALETTE, config.pool_size, rng)?;
    let target = select_target(&pool, rng)?;
    let guess = initial_guess(&pool)?;
    Ok((pool, target, guess))
}
