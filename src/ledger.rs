//! Append-only record of submitted guesses.

use crate::code::Guess;
use crate::feedback::FeedbackPattern;

/// One submitted guess and the feedback it earned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    pub guess: Guess,
    pub feedback: FeedbackPattern,
}

/// Ordered history keyed by an auto-incremented counter starting at 0.
#[derive(Debug, Clone, Default)]
pub struct HistoryLedger {
    entries: Vec<(usize, HistoryEntry)>,
    next_key: usize,
}

impl HistoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry and return the key it was stored under.
    pub fn append(&mut self, guess: Guess, feedback: FeedbackPattern) -> usize {
        let key = self.next_key;
        self.entries.push((key, HistoryEntry { guess, feedback }));
        self.next_key += 1;
        key
    }

    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Empty the ledger and restart keys at 0.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.next_key = 0;
    }

    pub fn get(&self, key: usize) -> Option<&HistoryEntry> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, entry)| entry)
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last().map(|(_, entry)| entry)
    }

    /// Entries in submission order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &HistoryEntry)> + '_ {
        self.entries.iter().map(|(key, entry)| (*key, entry))
    }
}
