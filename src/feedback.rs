//! Feedback calculation for guesses.
//!
//! This module scores a guess against the target, producing one
//! Hit / Present / Miss mark per slot.

use crate::code::{Code, Guess, Target};
use crate::color::Color;
use crate::error::Result;
use crate::CODE_LENGTH;

/// Represents the feedback for a single slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Correct color in correct slot
    Hit,
    /// Color appears at another, not yet matched target slot
    Present,
    /// No unmatched target slot carries this color
    Miss,
}

impl Feedback {
    /// Convert to a character for display
    pub fn to_char(self) -> char {
        match self {
            Feedback::Hit => '●',
            Feedback::Present => '◐',
            Feedback::Miss => '○',
        }
    }

    /// Parse from a character (h=hit, p=present, m=miss)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'h' | '2' => Some(Feedback::Hit),
            'p' | '1' => Some(Feedback::Present),
            'm' | '0' => Some(Feedback::Miss),
            _ => None,
        }
    }
}

/// A complete feedback pattern for a four-slot guess.
/// Encoded as a single u8 value (0-80).
/// Each slot can be 0 (miss), 1 (present), or 2 (hit).
/// Pattern = p0 + 3*p1 + 9*p2 + 27*p3
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackPattern(pub u8);

impl FeedbackPattern {
    /// The pattern indicating all hits (winning)
    pub const ALL_HIT: Self = Self(2 + 2 * 3 + 2 * 9 + 2 * 27); // 80

    /// Total number of possible patterns (3^4)
    pub const NUM_PATTERNS: usize = 81;

    /// Create a new pattern from individual feedback values
    pub fn new(feedbacks: [Feedback; CODE_LENGTH]) -> Self {
        let mut pattern: u8 = 0;
        let mut multiplier: u8 = 1;
        for fb in feedbacks {
            let value = match fb {
                Feedback::Miss => 0,
                Feedback::Present => 1,
                Feedback::Hit => 2,
            };
            pattern += value * multiplier;
            multiplier *= 3;
        }
        Self(pattern)
    }

    /// Calculate the feedback pattern for a guess against the target.
    ///
    /// Two passes:
    /// - Hit: same color in the same slot; that target slot is consumed.
    /// - Present: for each remaining guess slot in order, the leftmost
    ///   unconsumed target slot with the same color is consumed.
    ///
    /// Consumption is tracked per target slot, so a repeated guess color
    /// never earns more marks than the target has copies of it.
    pub fn calculate(guess: &Guess, target: &Target) -> Self {
        Self::new(mark(guess.colors(), target.colors()))
    }

    /// Convert pattern to array of feedbacks
    pub fn to_feedbacks(self) -> [Feedback; CODE_LENGTH] {
        let mut pattern = self.0;
        let mut feedbacks = [Feedback::Miss; CODE_LENGTH];
        for feedback in feedbacks.iter_mut() {
            *feedback = match pattern % 3 {
                0 => Feedback::Miss,
                1 => Feedback::Present,
                2 => Feedback::Hit,
                _ => unreachable!(),
            };
            pattern /= 3;
        }
        feedbacks
    }

    /// Check if this pattern represents a win (all hits)
    pub fn is_win(self) -> bool {
        self == Self::ALL_HIT
    }

    pub fn hits(self) -> usize {
        self.count(Feedback::Hit)
    }

    pub fn presents(self) -> usize {
        self.count(Feedback::Present)
    }

    /// Slots that matched a target color, in place or elsewhere.
    pub fn matched(self) -> usize {
        self.hits() + self.presents()
    }

    fn count(self, kind: Feedback) -> usize {
        self.to_feedbacks().iter().filter(|&&f| f == kind).count()
    }

    /// Parse a pattern from a string like "hpmm" or "2100"
    pub fn parse(s: &str) -> Option<Self> {
        if s.chars().count() != CODE_LENGTH {
            return None;
        }
        let feedbacks: Option<Vec<_>> = s.chars().map(Feedback::from_char).collect();
        let arr: [Feedback; CODE_LENGTH] = feedbacks?.try_into().ok()?;
        Some(Self::new(arr))
    }

    /// Display as a string of peg glyphs
    pub fn to_glyph_string(self) -> String {
        self.to_feedbacks().iter().map(|f| f.to_char()).collect()
    }
}

impl std::fmt::Display for FeedbackPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_glyph_string())
    }
}

/// Score a guess against the target.
pub fn score(guess: &Guess, target: &Target) -> FeedbackPattern {
    let pattern = FeedbackPattern::calculate(guess, target);
    tracing::debug!(%guess, hits = pattern.hits(), presents = pattern.presents(), "Guess scored");
    pattern
}

/// Score raw color slices, rejecting anything that is not [`CODE_LENGTH`] long.
pub fn score_slices(guess: &[Color], target: &[Color]) -> Result<FeedbackPattern> {
    let guess = Code::from_slice(guess)?;
    let target = Code::from_slice(target)?;
    Ok(FeedbackPattern::calculate(&guess, &target))
}

fn mark(guess: &[Color; CODE_LENGTH], target: &[Color; CODE_LENGTH]) -> [Feedback; CODE_LENGTH] {
    let mut feedback = [Feedback::Miss; CODE_LENGTH];
    let mut consumed = [false; CODE_LENGTH];

    for i in 0..CODE_LENGTH {
        if guess[i] == target[i] {
            feedback[i] = Feedback::Hit;
            consumed[i] = true;
        }
    }

    for i in 0..CODE_LENGTH {
        if feedback[i] == Feedback::Hit {
            continue;
        }
        for j in 0..CODE_LENGTH {
            if !consumed[j] && guess[i] == target[j] {
                feedback[i] = Feedback::Present;
                consumed[j] = true;
                break;
            }
        }
    }

    feedback
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color::*;
    use crate::error::InvalidConfiguration;

    #[test]
    fn all_hit_constant() {
        assert_eq!(FeedbackPattern::new([Feedback::Hit; 4]), FeedbackPattern::ALL_HIT);
        assert_eq!(FeedbackPattern::ALL_HIT.0 as usize, FeedbackPattern::NUM_PATTERNS - 1);
    }

    #[test]
    fn feedback_chars() {
        assert_eq!(Feedback::from_char('h'), Some(Feedback::Hit));
        assert_eq!(Feedback::from_char('1'), Some(Feedback::Present));
        assert_eq!(Feedback::from_char('M'), Some(Feedback::Miss));
        assert_eq!(Feedback::from_char('0'), Some(Feedback::Miss));
        assert_eq!(Feedback::from_char('x'), None);
    }

    #[test]
    fn slices_must_be_four_long() {
        assert_eq!(
            score_slices(&[Red, Blue, Green], &[Red, Blue, Green, Yellow]),
            Err(InvalidConfiguration::CodeLength {
                expected: 4,
                found: 3
            })
        );
        let pattern = score_slices(&[Red, Blue, Green, Yellow], &[Red, Blue, Green, Yellow]).unwrap();
        assert!(pattern.is_win());
    }

    #[test]
    fn leftmost_unconsumed_target_wins() {
        // Both Reds in the guess compete for the single Red at target slot 2.
        let feedbacks = mark(&[Red, Red, Blue, Green], &[Blue, Green, Red, Yellow]);
        assert_eq!(
            feedbacks,
            [Feedback::Present, Feedback::Miss, Feedback::Present, Feedback::Present]
        );
    }
}
