//! Survival and birth rules.
//!
//! A [`Rule`] decides the fate of a single cell from the aggregate of its
//! live neighbours. [`Classic`] is the boolean Game of Life (B3/S23 by
//! default); [`Smooth`] works on summed intensities.

use crate::cells::{CellStore, IntensityMap, LiveSet};

/// Tolerance applied to both ends of an intensity window.
pub const EPSILON: f64 = 1e-9;

pub trait Rule {
    type Store: CellStore;

    /// Next value of a live cell, or `None` if it dies.
    fn survive(
        &self,
        value: <Self::Store as CellStore>::Value,
        aggregate: <Self::Store as CellStore>::Aggregate,
    ) -> Option<<Self::Store as CellStore>::Value>;

    /// Value of a dead cell that comes to life, or `None` if it stays dead.
    fn birth(&self, aggregate: <Self::Store as CellStore>::Aggregate) -> Option<<Self::Store as CellStore>::Value>;

    fn name(&self) -> &'static str;
}

/// Boolean rule driven by neighbour counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classic {
    birth: [bool; 9],
    survive: [bool; 9],
}

impl Classic {
    /// Rule with the given birth and survival counts. Counts above 8 are ignored.
    pub fn new(birth: &[u8], survive: &[u8]) -> Self {
        let mut rule = Self { birth: [false; 9], survive: [false; 9] };
        for &n in birth.iter().filter(|&&n| n <= 8) {
            rule.birth[n as usize] = true;
        }
        for &n in survive.iter().filter(|&&n| n <= 8) {
            rule.survive[n as usize] = true;
        }
        rule
    }

    /// Conway's Game of Life: born on 3, survives on 2 or 3.
    pub fn life() -> Self {
        Self::new(&[3], &[2, 3])
    }

    pub fn survives_with(&self, count: u8) -> bool {
        self.survive.get(count as usize).copied().unwrap_or(false)
    }

    pub fn born_with(&self, count: u8) -> bool {
        self.birth.get(count as usize).copied().unwrap_or(false)
    }
}

impl Default for Classic {
    fn default() -> Self {
        Self::life()
    }
}

impl Rule for Classic {
    type Store = LiveSet;

    fn survive(&self, _value: (), count: u8) -> Option<()> {
        self.survives_with(count).then_some(())
    }

    fn birth(&self, count: u8) -> Option<()> {
        self.born_with(count).then_some(())
    }

    fn name(&self) -> &'static str {
        "classic"
    }
}

/// Closed interval of summed intensities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    pub lo: f64,
    pub hi: f64,
}

impl Window {
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    pub fn contains(&self, sum: f64) -> bool {
        self.lo - EPSILON <= sum && sum <= self.hi + EPSILON
    }
}

/// Intensity assigned to a newly born smooth cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NewbornIntensity {
    /// Every newborn gets the same intensity.
    Fixed(f64),
    /// Newborns take the neighbour sum that woke them, clamped to [0, 1].
    Inherit,
}

impl Default for NewbornIntensity {
    fn default() -> Self {
        Self::Fixed(1.0)
    }
}

/// Continuous rule over summed neighbour intensities.
#[derive(Debug, Clone, PartialEq)]
pub struct Smooth {
    pub survive: Window,
    pub birth: Window,
    pub newborn: NewbornIntensity,
}

impl Smooth {
    pub fn with_newborn(newborn: NewbornIntensity) -> Self {
        Self { newborn, ..Self::default() }
    }
}

impl Default for Smooth {
    fn default() -> Self {
        Self {
            survive: Window::new(0.2, 0.3),
            birth: Window::new(0.3, 0.35),
            newborn: NewbornIntensity::default(),
        }
    }
}

impl Rule for Smooth {
    type Store = IntensityMap;

    // Survivors keep their intensity
    fn survive(&self, value: f64, sum: f64) -> Option<f64> {
        self.survive.contains(sum).then_some(value)
    }

    fn birth(&self, sum: f64) -> Option<f64> {
        if !self.birth.contains(sum) {
            return None;
        }
        Some(match self.newborn {
            NewbornIntensity::Fixed(value) => value.clamp(0.0, 1.0),
            NewbornIntensity::Inherit => sum.clamp(0.0, 1.0),
        })
    }

    fn name(&self) -> &'static str {
        "smooth"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_survival_boundaries() {
        let rule = Classic::life();
        assert_eq!(rule.survive((), 1), None);
        assert_eq!(rule.survive((), 2), Some(()));
        assert_eq!(rule.survive((), 3), Some(()));
        assert_eq!(rule.survive((), 4), None);
        assert_eq!(rule.survive((), 0), None);
    }

    #[test]
    fn test_classic_birth_boundaries() {
        let rule = Classic::life();
        assert_eq!(rule.birth(2), None);
        assert_eq!(rule.birth(3), Some(()));
        assert_eq!(rule.birth(4), None);
    }

    #[test]
    fn test_custom_counts() {
        // HighLife, B36/S23
        let rule = Classic::new(&[3, 6], &[2, 3, 42]);
        assert!(rule.born_with(6));
        assert!(!rule.born_with(9));
        assert!(rule.survives_with(2));
    }

    #[test]
    fn test_smooth_survival_window() {
        let rule = Smooth::default();
        assert_eq!(rule.survive(0.7, 0.2), Some(0.7));
        assert_eq!(rule.survive(0.7, 0.3), Some(0.7));
        assert_eq!(rule.survive(0.7, 0.1 + 0.2), Some(0.7));
        assert_eq!(rule.survive(0.7, 0.19), None);
        assert_eq!(rule.survive(0.7, 0.31), None);
    }

    #[test]
    fn test_smooth_birth_window() {
        let rule = Smooth::default();
        assert_eq!(rule.birth(0.3), Some(1.0));
        assert_eq!(rule.birth(0.35), Some(1.0));
        assert_eq!(rule.birth(0.29), None);
        assert_eq!(rule.birth(0.36), None);
    }

    #[test]
    fn test_newborn_policies() {
        let inherit = Smooth::with_newborn(NewbornIntensity::Inherit);
        assert_eq!(inherit.birth(0.32), Some(0.32));
        let fixed = Smooth::with_newborn(NewbornIntensity::Fixed(0.5));
        assert_eq!(fixed.birth(0.32), Some(0.5));
        let clamped = Smooth::with_newborn(NewbornIntensity::Fixed(3.0));
        assert_eq!(clamped.birth(0.32), Some(1.0));
    }
}
