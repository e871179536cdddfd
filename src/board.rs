//! Board layout: arranges regions into rows for display.
//!
//! Regions are sorted north to south, cut into rows, and each row is sorted
//! west to east. If any region has no position the insertion order is kept.

use crate::game::{Region, RegionRegistry};

/// Number of columns for `count` regions.
///
/// Starts from the integer square root and widens by one when the leftover
/// beyond a full square is more than half a row.
#[must_use]
pub fn column_count(count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let mut cols = count.isqrt();
    let remainder = count % (cols * cols);
    if remainder > cols / 2 {
        cols += 1;
    }
    cols
}

/// Arrange the registry's regions into rows of region references.
#[must_use]
pub fn layout_rows(registry: &RegionRegistry) -> Vec<Vec<&Region>> {
    let mut regions: Vec<&Region> = registry.all().iter().collect();
    let cols = column_count(regions.len());
    if cols == 0 {
        return Vec::new();
    }

    let positioned = regions.iter().all(|r| r.position().is_some());
    if positioned {
        regions.sort_by(|a, b| northing(b).total_cmp(&northing(a)));
    }

    regions
        .chunks(cols)
        .map(|row| {
            let mut row = row.to_vec();
            if positioned {
                row.sort_by(|a, b| easting(a).total_cmp(&easting(b)));
            }
            row
        })
        .collect()
}

fn northing(region: &Region) -> f64 {
    region.position().map_or(0.0, |p| p.y)
}

fn easting(region: &Region) -> f64 {
    region.position().map_or(0.0, |p| p.x)
}
