//! Four-slot color sequences used for both the hidden target and guesses.

use crate::color::Color;
use crate::error::{InvalidConfiguration, Result};
use crate::CODE_LENGTH;

/// An ordered sequence of exactly [`CODE_LENGTH`] colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code([Color; CODE_LENGTH]);

/// The hidden sequence drawn at session start.
pub type Target = Code;

/// The player's current candidate sequence.
pub type Guess = Code;

impl Code {
    pub const fn new(colors: [Color; CODE_LENGTH]) -> Self {
        Self(colors)
    }

    pub fn from_slice(colors: &[Color]) -> Result<Self> {
        let arr: [Color; CODE_LENGTH] =
            colors
                .try_into()
                .map_err(|_| InvalidConfiguration::CodeLength {
                    expected: CODE_LENGTH,
                    found: colors.len(),
                })?;
        Ok(Self(arr))
    }

    /// Parse from letter notation like "RBGY".
    pub fn parse(s: &str) -> Result<Self> {
        let colors = s
            .trim()
            .chars()
            .map(Color::parse)
            .collect::<Result<Vec<_>>>()?;
        Self::from_slice(&colors)
    }

    pub fn colors(&self) -> &[Color; CODE_LENGTH] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.0.iter().copied()
    }

    pub fn contains(&self, color: Color) -> bool {
        self.0.contains(&color)
    }

    /// Copy of this code with one slot replaced.
    pub fn with_slot(mut self, slot: usize, color: Color) -> Result<Self> {
        let cell = self
            .0
            .get_mut(slot)
            .ok_or(InvalidConfiguration::SlotOutOfRange {
                slot,
                slots: CODE_LENGTH,
            })?;
        *cell = color;
        Ok(self)
    }

    pub fn is_distinct(&self) -> bool {
        self.first_repeat().is_none()
    }

    /// The first color that also appears in a later slot.
    pub fn first_repeat(&self) -> Option<Color> {
        (0..CODE_LENGTH)
            .map(|i| self.0[i])
            .find(|color| self.0.iter().filter(|&c| c == color).count() > 1)
    }

    pub fn to_letters(&self) -> String {
        self.0.iter().map(|c| c.to_letter()).collect()
    }
}

impl std::ops::Index<usize> for Code {
    type Output = Color;

    fn index(&self, index: usize) -> &Color {
        &self.0[index]
    }
}

impl From<[Color; CODE_LENGTH]> for Code {
    fn from(colors: [Color; CODE_LENGTH]) -> Self {
        Self(colors)
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.to_letters())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color::*;

    #[test]
    fn parse_letters() {
        let code = Code::parse("rbgk").unwrap();
        assert_eq!(code, Code::new([Red, Blue, Green, Black]));
        assert_eq!(code.to_string(), "RBGK");
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert_eq!(
            Code::parse("RBG"),
            Err(InvalidConfiguration::CodeLength {
                expected: 4,
                found: 3
            })
        );
        assert_eq!(
            Code::from_slice(&[Red, Blue, Green, Yellow, Cyan]),
            Err(InvalidConfiguration::CodeLength {
                expected: 4,
                found: 5
            })
        );
    }

    #[test]
    fn with_slot_checks_range() {
        let code = Code::new([Red, Blue, Green, Yellow]);
        assert_eq!(code.with_slot(2, Cyan).unwrap()[2], Cyan);
        assert!(matches!(
            code.with_slot(4, Cyan),
            Err(InvalidConfiguration::SlotOutOfRange { slot: 4, .. })
        ));
    }

    #[test]
    fn distinctness() {
        assert!(Code::new([Red, Blue, Green, Yellow]).is_distinct());
        assert!(!Code::new([Red, Blue, Red, Yellow]).is_distinct());
        assert_eq!(Code::new([Red, Blue, Blue, Red]).first_repeat(), Some(Red));
        assert_eq!(Code::new([Green, Blue, Yellow, Blue]).first_repeat(), Some(Blue));
    }
}
