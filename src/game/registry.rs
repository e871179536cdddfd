//! Region registry: the fixed set of claimable regions for a session.

use std::collections::HashMap;

use crate::error::{GameError, GameResult};
use crate::game::{Region, RegionRecord};

/// Immutable id → region mapping, built once before any claims are made.
///
/// Iteration follows insertion order.
#[derive(Debug, Clone, Default)]
pub struct RegionRegistry {
    regions: Vec<Region>,
    index: HashMap<String, usize>,
}

impl RegionRegistry {
    /// Build a registry from seed records.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::DuplicateRegion`] if an id repeats and
    /// [`GameError::EmptyRegionId`] if an id is blank. Returns
    /// [`GameError::TotalOverflow`] if the population or area of the whole
    /// board does not fit in a `u64`; any team total is bounded by these.
    pub fn load(records: impl IntoIterator<Item = RegionRecord>) -> GameResult<Self> {
        let mut registry = Self::default();
        let mut population = 0u64;
        let mut area = 0u64;

        for record in records {
            if record.id.trim().is_empty() {
                return Err(GameError::EmptyRegionId);
            }
            if registry.index.contains_key(&record.id) {
                return Err(GameError::DuplicateRegion { id: record.id });
            }
            match (
                population.checked_add(record.population),
                area.checked_add(record.area.tenths()),
            ) {
                (Some(p), Some(a)) => (population, area) = (p, a),
                _ => return Err(GameError::TotalOverflow { id: record.id }),
            }
            registry.index.insert(record.id.clone(), registry.regions.len());
            registry.regions.push(Region::from(record));
        }

        tracing::debug!(regions = registry.regions.len(), "Region registry loaded");
        Ok(registry)
    }

    /// Look up a region by id.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::UnknownRegion`] if the id is not registered.
    pub fn get(&self, id: &str) -> GameResult<&Region> {
        self.index
            .get(id)
            .map(|&i| &self.regions[i])
            .ok_or_else(|| GameError::UnknownRegion { id: id.to_string() })
    }

    /// Check whether a region id is registered.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All regions in insertion order.
    #[must_use]
    pub fn all(&self) -> &[Region] {
        &self.regions
    }

    /// Number of registered regions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<RegionRecord> {
        vec![
            RegionRecord::new("X", 100, 50),
            RegionRecord::new("Y", 200, 30),
            RegionRecord::new("Z", 300, 10),
        ]
    }

    #[test]
    fn test_load_and_get() {
        let registry = RegionRegistry::load(sample()).unwrap();
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.get("Y").unwrap().population(), 200);
        assert!(registry.contains("Z"));
        assert!(!registry.contains("W"));
    }

    #[test]
    fn test_all_keeps_insertion_order() {
        let registry = RegionRegistry::load(sample()).unwrap();
        let ids: Vec<&str> = registry.all().iter().map(Region::id).collect();
        assert_eq!(ids, ["X", "Y", "Z"]);
    }

    #[test]
    fn test_get_unknown_region() {
        let registry = RegionRegistry::load(sample()).unwrap();
        assert_eq!(
            registry.get("Nowhere"),
            Err(GameError::UnknownRegion {
                id: "Nowhere".to_string()
            })
        );
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut records = sample();
        records.push(RegionRecord::new("X", 1, 1));
        let err = RegionRegistry::load(records).unwrap_err();
        assert_eq!(err, GameError::DuplicateRegion { id: "X".to_string() });
    }

    #[test]
    fn test_blank_id_rejected() {
        let err = RegionRegistry::load(vec![RegionRecord::new("  ", 1, 1)]).unwrap_err();
        assert_eq!(err, GameError::EmptyRegionId);
    }

    #[test]
    fn test_population_total_overflow_rejected() {
        let err = RegionRegistry::load(vec![
            RegionRecord::new("X", 1 << 63, 1),
            RegionRecord::new("Y", 1 << 63, 1),
            RegionRecord::new("Z", 5, 1),
        ])
        .unwrap_err();
        assert_eq!(err, GameError::TotalOverflow { id: "Y".to_string() });
    }

    #[test]
    fn test_area_total_overflow_rejected() {
        let err = RegionRegistry::load(vec![
            RegionRecord::new("X", 1, u64::MAX),
            RegionRecord::new("Y", 1, 1),
        ])
        .unwrap_err();
        assert_eq!(err, GameError::TotalOverflow { id: "Y".to_string() });
    }

    #[test]
    fn test_totals_at_limit_accepted() {
        let registry = RegionRegistry::load(vec![
            RegionRecord::new("X", u64::MAX - 5, u64::MAX),
            RegionRecord::new("Y", 5, 0),
        ])
        .unwrap();
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_empty_registry() {
        let registry = RegionRegistry::load(Vec::new()).unwrap();
        assert!(registry.is_empty());
        assert!(registry.all().is_empty());
    }
}
