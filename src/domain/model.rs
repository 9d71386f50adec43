use crate::domain::decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a discarded digit tail of exactly one half is resolved.
/// Tails above or below one half always round up or down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoundingMode {
    /// `2.5 -> 3`, `-2.5 -> -3`
    #[default]
    HalfAwayFromZero,
    /// `2.5 -> 2`, `3.5 -> 4`
    HalfEven,
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundingMode::HalfAwayFromZero => f.write_str("half-away-from-zero"),
            RoundingMode::HalfEven => f.write_str("half-even"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Decimal-place count -> volume, in insertion order, one entry per key.
#[derive(Debug, Clone, Default)]
pub struct VolumeTable {
    entries: Vec<(usize, Decimal)>,
}

impl VolumeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the volume for `decimals`. A replaced entry keeps
    /// its original position and the old volume is returned.
    pub fn insert(&mut self, decimals: usize, volume: Decimal) -> Option<Decimal> {
        match self.entries.iter_mut().find(|(n, _)| *n == decimals) {
            Some((_, slot)) => Some(std::mem::replace(slot, volume)),
            None => {
                self.entries.push((decimals, volume));
                None
            }
        }
    }

    pub fn get(&self, decimals: usize) -> Option<&Decimal> {
        self.entries
            .iter()
            .find(|(n, _)| *n == decimals)
            .map(|(_, volume)| volume)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &Decimal)> {
        self.entries.iter().map(|(n, volume)| (*n, volume))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub decimals: usize,
    pub truncated_volume: Decimal,
    pub rounded_volume: Decimal,
    /// `|rounded_volume - truncated_volume|`, exact.
    pub difference: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub radius: Decimal,
    pub height: Decimal,
    pub working_digits: usize,
    pub rounding: RoundingMode,
    pub rows: Vec<ComparisonRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_table_keeps_insertion_order() {
        let mut table = VolumeTable::new();
        table.insert(60, Decimal::from_integer(3));
        table.insert(20, Decimal::from_integer(1));
        table.insert(40, Decimal::from_integer(2));

        let keys: Vec<usize> = table.iter().map(|(n, _)| n).collect();
        assert_eq!(keys, vec![60, 20, 40]);
        assert_eq!(table.get(20), Some(&Decimal::from_integer(1)));
        assert_eq!(table.get(100), None);
    }

    #[test]
    fn test_volume_table_replace_keeps_position() {
        let mut table = VolumeTable::new();
        table.insert(20, Decimal::from_integer(1));
        table.insert(40, Decimal::from_integer(2));
        let old = table.insert(20, Decimal::from_integer(9));

        assert_eq!(old, Some(Decimal::from_integer(1)));
        assert_eq!(table.len(), 2);
        let first = table.iter().next().unwrap();
        assert_eq!(first, (20, &Decimal::from_integer(9)));
    }

    #[test]
    fn test_rounding_mode_serde_names() {
        let json = serde_json::to_string(&RoundingMode::HalfEven).unwrap();
        assert_eq!(json, "\"half-even\"");
        let mode: RoundingMode = serde_json::from_str("\"half-away-from-zero\"").unwrap();
        assert_eq!(mode, RoundingMode::HalfAwayFromZero);
    }
}
