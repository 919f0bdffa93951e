//! Code breaker using an entropy-based strategy.
//!
//! Every ordered choice of four distinct pool colors is a candidate target.
//! Each guess is rated by the Shannon entropy of the feedback patterns it
//! would produce over the candidates still consistent with the history, so
//! the best guess is the one expected to eliminate the most candidates.

use crate::code::{Code, Guess, Target};
use crate::error::Result;
use crate::feedback::FeedbackPattern;
use crate::ledger::HistoryLedger;
use crate::pool::ColorPool;
use crate::CODE_LENGTH;
use itertools::Itertools;
use rayon::prelude::*;

/// Automatic play gives up after this many guesses.
pub const MAX_SOLVER_GUESSES: usize = 10;

/// Result of analyzing a potential guess
#[derive(Debug, Clone)]
pub struct GuessAnalysis {
    pub code: Guess,
    pub entropy: f64,
    pub expected_remaining: f64,
    pub is_possible_answer: bool,
}

#[derive(Debug, Clone)]
pub struct CodeBreaker {
    all_codes: Vec<Code>,
    possible_targets: Vec<Target>,
}

impl CodeBreaker {
    pub fn new(pool: &ColorPool) -> Result<Self> {
        pool.ensure_fills_code()?;
        let all_codes = permutations(pool)?;
        Ok(Self {
            possible_targets: all_codes.clone(),
            all_codes,
        })
    }

    pub fn remaining_count(&self) -> usize {
        self.possible_targets.len()
    }

    pub fn possible_targets(&self) -> &[Target] {
        &self.possible_targets
    }

    pub fn all_codes(&self) -> &[Code] {
        &self.all_codes
    }

    pub fn reset(&mut self) {
        self.possible_targets = self.all_codes.clone();
    }

    pub fn apply_feedback(&mut self, guess: &Guess, pattern: FeedbackPattern) {
        self.possible_targets
            .retain(|target| FeedbackPattern::calculate(guess, target) == pattern);
    }

    /// Narrow the candidates with every entry of a session's history.
    pub fn apply_history(&mut self, history: &HistoryLedger) {
        for (_, entry) in history.iter() {
            self.apply_feedback(&entry.guess, entry.feedback);
        }
    }

    pub fn calculate_entropy_for_code(&self, guess: &Guess) -> f64 {
        let n = self.possible_targets.len() as f64;
        if n <= 1.0 {
            return 0.0;
        }

        let mut pattern_counts = [0u32; FeedbackPattern::NUM_PATTERNS];
        for target in &self.possible_targets {
            let pattern = FeedbackPattern::calculate(guess, target);
            pattern_counts[pattern.0 as usize] += 1;
        }

        pattern_counts
            .iter()
            .filter(|&&count| count > 0)
            .map(|&count| {
                let p = count as f64 / n;
                -p * p.log2()
            })
            .sum()
    }

    pub fn find_best_guess(&self) -> Option<GuessAnalysis> {
        self.find_best_guesses(1).into_iter().next()
    }

    pub fn find_best_guesses(&self, n: usize) -> Vec<GuessAnalysis> {
        match self.possible_targets.as_slice() {
            [] => return vec![],
            [only] => {
                return vec![GuessAnalysis {
                    code: *only,
                    entropy: 0.0,
                    expected_remaining: 1.0,
                    is_possible_answer: true,
                }]
            }
            _ => {}
        }

        let remaining = self.possible_targets.len() as f64;
        let mut analyses: Vec<GuessAnalysis> = self
            .all_codes
            .par_iter()
            .map(|code| {
                let entropy = self.calculate_entropy_for_code(code);
                GuessAnalysis {
                    code: *code,
                    entropy,
                    expected_remaining: remaining / 2_f64.powf(entropy),
                    is_possible_answer: self.possible_targets.contains(code),
                }
            })
            .collect();

        analyses.sort_by(|a, b| match b.entropy.partial_cmp(&a.entropy) {
            Some(std::cmp::Ordering::Equal) => b.is_possible_answer.cmp(&a.is_possible_answer),
            Some(ord) => ord,
            None => std::cmp::Ordering::Equal,
        });

        analyses.truncate(n);
        analyses
    }

    /// Play automatically, asking `get_feedback` to score each guess.
    /// Returns the sequence of guesses made.
    pub fn solve_with_feedback<F>(&mut self, mut get_feedback: F) -> Vec<(Guess, FeedbackPattern)>
    where
        F: FnMut(&Guess) -> FeedbackPattern,
    {
        let mut guesses = Vec::new();

        for _ in 0..MAX_SOLVER_GUESSES {
            let Some(best) = self.find_best_guess() else {
                break;
            };

            let pattern = get_feedback(&best.code);
            guesses.push((best.code, pattern));

            if pattern.is_win() {
                break;
            }

            self.apply_feedback(&best.code, pattern);
        }

        guesses
    }

    /// Solve for a known target (for testing/benchmarking)
    pub fn solve_for_target(&mut self, target: &Target) -> Vec<(Guess, FeedbackPattern)> {
        self.solve_with_feedback(|guess| FeedbackPattern::calculate(guess, target))
    }

    fn guess_counts(&self) -> Vec<usize> {
        self.all_codes
            .par_iter()
            .map(|target| {
                let mut breaker = self.clone();
                breaker.reset();
                breaker.solve_for_target(target).len()
            })
            .collect()
    }

    /// Average number of guesses needed over every possible target
    pub fn benchmark_average_guesses(&self) -> f64 {
        let counts = self.guess_counts();
        counts.iter().sum::<usize>() as f64 / counts.len() as f64
    }

    /// Distribution of guess counts over every possible target, as
    /// `(guesses, targets)` pairs in ascending order of guesses.
    pub fn benchmark_guess_distribution(&self) -> Vec<(usize, usize)> {
        let guess_counts = self.guess_counts();
        let max_guesses = guess_counts.iter().copied().max().unwrap_or(0);
        let mut distribution = vec![0usize; max_guesses + 1];

        for count in guess_counts {
            distribution[count] += 1;
        }

        distribution
            .into_iter()
            .enumerate()
            .filter(|(_, count)| *count > 0)
            .collect()
    }
}

/// All ordered selections of [`CODE_LENGTH`] distinct pool colors.
fn permutations(pool: &ColorPool) -> Result<Vec<Code>> {
    pool.colors()
        .iter()
        .copied()
        .permutations(CODE_LENGTH)
        .map(|colors| Code::from_slice(&colors))
        .collect()
}
