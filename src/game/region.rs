//! Region (town) types.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Land area stored as an integer number of tenths of a square mile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Area(pub u64);

impl Area {
    /// Create an area from a count of tenths of a square mile.
    #[must_use]
    pub const fn from_tenths(tenths: u64) -> Self {
        Self(tenths)
    }

    /// Raw value in tenths of a square mile.
    #[must_use]
    pub const fn tenths(self) -> u64 {
        self.0
    }
}

impl Add for Area {
    type Output = Area;

    fn add(self, rhs: Area) -> Area {
        Area(self.0 + rhs.0)
    }
}

impl AddAssign for Area {
    fn add_assign(&mut self, rhs: Area) {
        self.0 += rhs.0;
    }
}

impl Sum for Area {
    fn sum<I: Iterator<Item = Area>>(iter: I) -> Area {
        iter.fold(Area::default(), Add::add)
    }
}

/// Formats as square miles: a decimal point goes before the last digit.
///
/// A single-digit value is printed unchanged, so `5` stays `"5"` while
/// `149` becomes `"14.9"`.
impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        if digits.len() <= 1 {
            return f.write_str(&digits);
        }
        let (whole, tenth) = digits.split_at(digits.len() - 1);
        write!(f, "{whole}.{tenth}")
    }
}

/// Location of a region on the board (east/north, arbitrary units).
///
/// Only used for layout; the claim engine and scoreboard ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Easting (longitude-like).
    pub x: f64,
    /// Northing (latitude-like).
    pub y: f64,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A seed record describing one region, as supplied before the game starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionRecord {
    /// Unique region name.
    #[serde(alias = "name")]
    pub id: String,
    /// Resident population.
    pub population: u64,
    /// Area in tenths of a square mile (0 when unknown).
    #[serde(default)]
    pub area: Area,
    /// Optional board position.
    #[serde(default)]
    pub position: Option<Position>,
}

impl RegionRecord {
    /// Create a record without a position.
    #[must_use]
    pub fn new(id: impl Into<String>, population: u64, area: u64) -> Self {
        Self {
            id: id.into(),
            population,
            area: Area(area),
            position: None,
        }
    }

    /// Attach a board position.
    #[must_use]
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Some(Position::new(x, y));
        self
    }
}

/// A claimable region. Immutable once it is in the registry.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    id: String,
    population: u64,
    area: Area,
    position: Option<Position>,
}

impl Region {
    /// Region identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Resident population.
    #[must_use]
    pub const fn population(&self) -> u64 {
        self.population
    }

    /// Land area.
    #[must_use]
    pub const fn area(&self) -> Area {
        self.area
    }

    /// Board position, if known.
    #[must_use]
    pub const fn position(&self) -> Option<Position> {
        self.position
    }
}

impl From<RegionRecord> for Region {
    fn from(record: RegionRecord) -> Self {
        Self {
            id: record.id,
            population: record.population,
            area: record.area,
            position: record.position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_inserts_decimal_before_last_digit() {
        assert_eq!(Area(149).to_string(), "14.9");
        assert_eq!(Area(391).to_string(), "39.1");
        assert_eq!(Area(10).to_string(), "1.0");
        assert_eq!(Area(1234).to_string(), "123.4");
    }

    #[test]
    fn test_area_single_digit_unchanged() {
        assert_eq!(Area(5).to_string(), "5");
        assert_eq!(Area(0).to_string(), "0");
    }

    #[test]
    fn test_area_sum() {
        let total: Area = [Area(48), Area(17), Area(35)].into_iter().sum();
        assert_eq!(total, Area(100));
    }

    #[test]
    fn test_region_from_record() {
        let region = Region::from(RegionRecord::new("Lisle", 23464, 78).at(2.0, 2.0));
        assert_eq!(region.id(), "Lisle");
        assert_eq!(region.population(), 23464);
        assert_eq!(region.area(), Area(78));
        assert_eq!(region.position(), Some(Position::new(2.0, 2.0)));
    }

    #[test]
    fn test_record_accepts_name_alias() {
        let record: RegionRecord =
            serde_json::from_str(r#"{"name": "Darien", "population": 21916}"#).unwrap();
        assert_eq!(record.id, "Darien");
        assert_eq!(record.area, Area(0));
        assert!(record.position.is_none());
    }
}
