//! Per-session color pool and target selection.
//!
//! Randomness is supplied by the caller.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::code::{Code, Guess, Target};
use crate::color::Color;
use crate::error::{InvalidConfiguration, Result};
use crate::CODE_LENGTH;

/// The restricted, ordered set of colors available in one session.
///
/// Colors are pairwise distinct. The order is the draw order and drives
/// rotation cycling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPool(Vec<Color>);

impl ColorPool {
    pub fn new(colors: Vec<Color>) -> Result<Self> {
        for (i, color) in colors.iter().enumerate() {
            if colors[..i].contains(color) {
                return Err(InvalidConfiguration::DuplicateColor(*color));
            }
        }
        Ok(Self(colors))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn colors(&self) -> &[Color] {
        &self.0
    }

    pub fn index_of(&self, color: Color) -> Option<usize> {
        self.0.iter().position(|&c| c == color)
    }

    pub fn contains(&self, color: Color) -> bool {
        self.0.contains(&color)
    }

    /// Fails unless the pool can fill every code slot with a distinct color.
    pub fn ensure_fills_code(&self) -> Result<()> {
        if self.len() < CODE_LENGTH {
            return Err(InvalidConfiguration::PoolTooSmall {
                pool: self.len(),
                slots: CODE_LENGTH,
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for ColorPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, color) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}({})", color.to_letter(), color)?;
        }
        Ok(())
    }
}

/// Draw `size` distinct colors from `palette` in shuffled order.
pub fn select_pool<R: Rng + ?Sized>(palette: &[Color], size: usize, rng: &mut R) -> Result<ColorPool> {
    if size == 0 || size > palette.len() {
        return Err(InvalidConfiguration::PoolSize {
            requested: size,
            available: palette.len(),
        });
    }
    let mut colors = ColorPool::new(palette.to_vec())?.0;
    colors.shuffle(rng);
    colors.truncate(size);
    Ok(ColorPool(colors))
}

/// Pick the hidden target: the first four colors of a fresh shuffle of the pool.
pub fn select_target<R: Rng + ?Sized>(pool: &ColorPool, rng: &mut R) -> Result<Target> {
    pool.ensure_fills_code()?;
    let mut colors = pool.0.clone();
    colors.shuffle(rng);
    Code::from_slice(&colors[..CODE_LENGTH])
}

/// The guess a session opens with: the first four pool colors.
pub fn initial_guess(pool: &ColorPool) -> Result<Guess> {
    pool.ensure_fills_code()?;
    Code::from_slice(&pool.0[..CODE_LENGTH])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::PALETTE;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn seeded_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn pool_is_distinct_subset() {
        let mut rng = seeded_rng();
        for size in 1..=PALETTE.len() {
            let pool = select_pool(&PALETTE, size, &mut rng).unwrap();
            assert_eq!(pool.len(), size);
            assert!(pool.colors().iter().all(|c| PALETTE.contains(c)));
            assert!(ColorPool::new(pool.colors().to_vec()).is_ok());
        }
    }

    #[test]
    fn pool_size_bounds() {
        let mut rng = seeded_rng();
        assert_eq!(
            select_pool(&PALETTE, 0, &mut rng),
            Err(InvalidConfiguration::PoolSize {
                requested: 0,
                available: 10
            })
        );
        assert_eq!(
            select_pool(&PALETTE, 11, &mut rng),
            Err(InvalidConfiguration::PoolSize {
                requested: 11,
                available: 10
            })
        );
    }

    #[test]
    fn palette_with_duplicates_is_rejected() {
        let mut rng = seeded_rng();
        let palette = [Color::Red, Color::Blue, Color::Red];
        assert_eq!(
            select_pool(&palette, 2, &mut rng),
            Err(InvalidConfiguration::DuplicateColor(Color::Red))
        );
    }

    #[test]
    fn target_is_drawn_from_pool() {
        let mut rng = seeded_rng();
        let pool = select_pool(&PALETTE, 6, &mut rng).unwrap();
        for _ in 0..50 {
            let target = select_target(&pool, &mut rng).unwrap();
            assert!(target.is_distinct());
            assert!(target.iter().all(|c| pool.contains(c)));
        }
    }

    #[test]
    fn target_needs_four_colors() {
        let mut rng = seeded_rng();
        let pool = ColorPool::new(vec![Color::Red, Color::Blue, Color::Green]).unwrap();
        assert_eq!(
            select_target(&pool, &mut rng),
            Err(InvalidConfiguration::PoolTooSmall { pool: 3, slots: 4 })
        );
        assert!(initial_guess(&pool).is_err());
    }

    #[test]
    fn same_seed_same_draw() {
        let a = select_pool(&PALETTE, 7, &mut seeded_rng()).unwrap();
        let b = select_pool(&PALETTE, 7, &mut seeded_rng()).unwrap();
        assert_eq!(a, b);
    }
}
