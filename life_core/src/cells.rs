//! Sparse cell state stores.
//!
//! Only live cells are stored; absence means dead. [`LiveSet`] backs the
//! classic rule, [`IntensityMap`] backs the smooth rule and keys every
//! intensity by coordinate so a cell can never appear twice.

use std::collections::{HashMap, HashSet};
use std::ops::Add;

use rand::Rng;

use crate::error::{LifeError, LifeResult};
use crate::grid::Cell;

/// Storage for the live cells of one generation.
pub trait CellStore: Default + Clone {
    /// Per-cell payload: `()` for boolean cells, an intensity for smooth cells.
    type Value: Copy + PartialEq + std::fmt::Debug;
    /// What neighbours add up to: a count or a summed intensity.
    type Aggregate: Copy + Default + PartialOrd + Add<Output = Self::Aggregate> + std::fmt::Debug;

    fn get(&self, cell: Cell) -> Option<Self::Value>;
    fn set(&mut self, cell: Cell, value: Self::Value);
    fn remove(&mut self, cell: Cell) -> Option<Self::Value>;
    fn len(&self) -> usize;
    fn clear(&mut self);
    fn iter(&self) -> Box<dyn Iterator<Item = (Cell, Self::Value)> + '_>;

    /// Contribution of one live neighbour to an aggregate.
    fn weight(value: Self::Value) -> Self::Aggregate;

    /// Value given to a cell switched on by hand.
    fn placed() -> Self::Value;

    /// Value given to a randomly generated cell.
    fn random_value<G: Rng>(rng: &mut G) -> Self::Value;

    /// Rejects values a store of this kind must never hold.
    fn validate(value: Self::Value) -> LifeResult<Self::Value> {
        Ok(value)
    }

    /// Brightness in [0, 1] used when painting the cell.
    fn shade(value: Self::Value) -> f32;

    /// Bits fed to a generation fingerprint.
    fn value_bits(value: Self::Value) -> u64;

    fn is_alive(&self, cell: Cell) -> bool {
        self.get(cell).is_some()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Live cells of the classic rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiveSet {
    cells: HashSet<Cell>,
}

impl LiveSet {
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }
}

impl FromIterator<Cell> for LiveSet {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self { cells: iter.into_iter().collect() }
    }
}

impl CellStore for LiveSet {
    type Value = ();
    type Aggregate = u8;

    fn get(&self, cell: Cell) -> Option<()> {
        self.cells.contains(&cell).then_some(())
    }

    fn set(&mut self, cell: Cell, _value: ()) {
        self.cells.insert(cell);
    }

    fn remove(&mut self, cell: Cell) -> Option<()> {
        self.cells.remove(&cell).then_some(())
    }

    fn len(&self) -> usize {
        self.cells.len()
    }

    fn clear(&mut self) {
        self.cells.clear();
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (Cell, ())> + '_> {
        Box::new(self.cells.iter().map(|&cell| (cell, ())))
    }

    fn weight(_value: ()) -> u8 {
        1
    }

    fn placed() {}

    fn random_value<G: Rng>(_rng: &mut G) {}

    fn shade(_value: ()) -> f32 {
        1.0
    }

    fn value_bits(_value: ()) -> u64 {
        0
    }
}

/// Live cells of the smooth rule, each with an intensity in [0, 1].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntensityMap {
    cells: HashMap<Cell, f64>,
}

impl IntensityMap {
    pub fn intensity(&self, cell: Cell) -> Option<f64> {
        self.cells.get(&cell).copied()
    }
}

impl FromIterator<(Cell, f64)> for IntensityMap {
    fn from_iter<I: IntoIterator<Item = (Cell, f64)>>(iter: I) -> Self {
        Self { cells: iter.into_iter().collect() }
    }
}

impl CellStore for IntensityMap {
    type Value = f64;
    type Aggregate = f64;

    fn get(&self, cell: Cell) -> Option<f64> {
        self.cells.get(&cell).copied()
    }

    fn set(&mut self, cell: Cell, value: f64) {
        self.cells.insert(cell, value);
    }

    fn remove(&mut self, cell: Cell) -> Option<f64> {
        self.cells.remove(&cell)
    }

    fn len(&self) -> usize {
        self.cells.len()
    }

    fn clear(&mut self) {
        self.cells.clear();
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (Cell, f64)> + '_> {
        Box::new(self.cells.iter().map(|(&cell, &value)| (cell, value)))
    }

    fn weight(value: f64) -> f64 {
        value
    }

    fn placed() -> f64 {
        1.0
    }

    // One decimal place, uniform over [0, 1)
    fn random_value<G: Rng>(rng: &mut G) -> f64 {
        round_tenth(rng.gen_range(0.0..1.0))
    }

    fn validate(value: f64) -> LifeResult<f64> {
        if (0.0..=1.0).contains(&value) {
            Ok(value)
        } else {
            Err(LifeError::InvalidIntensity(value))
        }
    }

    fn shade(value: f64) -> f32 {
        value as f32
    }

    fn value_bits(value: f64) -> u64 {
        value.to_bits()
    }
}

pub(crate) fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Collects a store's cells in a stable order, for comparisons and fingerprints.
pub fn sorted<S: CellStore>(store: &S) -> Vec<(Cell, S::Value)> {
    let mut cells: Vec<_> = store.iter().collect();
    cells.sort_by_key(|&(cell, _)| cell);
    cells
}

/// Coordinates of a store, regardless of payload.
pub fn coordinates<S: CellStore>(store: &S) -> HashSet<Cell> {
    store.iter().map(|(cell, _)| cell).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_live_set_membership() {
        let mut set = LiveSet::default();
        assert!(set.is_empty());
        set.set(Cell::new(1, 2), ());
        set.set(Cell::new(1, 2), ());
        assert_eq!(set.len(), 1);
        assert!(set.is_alive(Cell::new(1, 2)));
        assert_eq!(set.remove(Cell::new(1, 2)), Some(()));
        assert_eq!(set.remove(Cell::new(1, 2)), None);
    }

    #[test]
    fn test_intensity_map_keys_by_coordinate() {
        let mut map = IntensityMap::default();
        map.set(Cell::new(3, 3), 0.4);
        map.set(Cell::new(3, 3), 0.9);
        assert_eq!(map.len(), 1);
        assert_eq!(map.intensity(Cell::new(3, 3)), Some(0.9));
    }

    #[test]
    fn test_intensity_validation() {
        assert_eq!(IntensityMap::validate(0.0), Ok(0.0));
        assert_eq!(IntensityMap::validate(1.0), Ok(1.0));
        assert_eq!(IntensityMap::validate(1.5), Err(LifeError::InvalidIntensity(1.5)));
        assert!(IntensityMap::validate(-0.1).is_err());
        assert!(IntensityMap::validate(f64::NAN).is_err());
    }

    #[test]
    fn test_random_intensity_is_one_decimal() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let value = IntensityMap::random_value(&mut rng);
            assert!((0.0..=1.0).contains(&value));
            assert_eq!(value, round_tenth(value));
        }
    }

    #[test]
    fn test_sorted_is_ordered() {
        let set: LiveSet = [Cell::new(2, 1), Cell::new(0, 0), Cell::new(1, 1)].into_iter().collect();
        let cells: Vec<Cell> = sorted(&set).into_iter().map(|(cell, _)| cell).collect();
        assert_eq!(cells, vec![Cell::new(0, 0), Cell::new(1, 1), Cell::new(2, 1)]);
    }
}
