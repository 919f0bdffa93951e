//! Cycling a single guess slot through the pool.

use crate::code::Guess;
use crate::color::Color;
use crate::error::{InvalidConfiguration, Result};
use crate::pool::ColorPool;
use crate::CODE_LENGTH;

/// Advance `slot` to the next pool color not used by any other slot.
///
/// The search walks the pool circularly from the slot's current color. Only
/// `slot` changes. If every other pool color is taken the slot keeps its color.
pub fn rotate(pool: &ColorPool, guess: &Guess, slot: usize) -> Result<Guess> {
    if slot >= CODE_LENGTH {
        return Err(InvalidConfiguration::SlotOutOfRange {
            slot,
            slots: CODE_LENGTH,
        });
    }
    pool.ensure_fills_code()?;
    if let Some(missing) = guess.iter().find(|&c| !pool.contains(c)) {
        return Err(InvalidConfiguration::ColorNotInPool(missing));
    }

    let current = guess[slot];
    let start = pool.index_of(current).ok_or(InvalidConfiguration::ColorNotInPool(current))?;
    let taken = |color: Color| (0..CODE_LENGTH).any(|i| i != slot && guess[i] == color);

    let colors = pool.colors();
    let next = (1..=colors.len())
        .map(|step| colors[(start + step) % colors.len()])
        .find(|&candidate| !taken(candidate))
        .unwrap_or(current);

    tracing::debug!(slot, from = %current, to = %next, "Slot rotated");
    guess.with_slot(slot, next)
}
