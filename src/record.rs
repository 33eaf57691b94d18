//! The championship-standings record the benchmarks sort.

use std::cmp::Ordering;
use std::fmt;

use rand::prelude::*;
use serde::{Deserialize, Serialize};

/// One driver's career line. Immutable once constructed; the sorts only move
/// records around, they never change them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverRecord {
    pub driver: String,
    pub nationality: String,
    pub seasons: Vec<String>,
    pub championships: u32,
    pub race_wins: u32,
    pub podiums: u32,
    pub points: f64,
}

impl DriverRecord {
    /// Standings order: more points sorts first. `total_cmp` keeps the order
    /// total even if a loader ever lets a NaN through.
    ///
    /// Deliberately a comparator rather than an `Ord` impl: two drivers on
    /// equal points are tied, not identical, and the stability tests need to
    /// tell them apart.
    pub fn by_points(a: &DriverRecord, b: &DriverRecord) -> Ordering {
        b.points.total_cmp(&a.points)
    }
}

impl fmt::Display for DriverRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},\"[{}]\",{},{},{},{}",
            self.driver,
            self.nationality,
            self.seasons.join(", "),
            self.championships,
            self.race_wins,
            self.podiums,
            self.points
        )
    }
}

const NATIONALITIES: &[&str] = &[
    "British", "German", "Brazilian", "French", "Italian", "Finnish", "Dutch", "Spanish",
    "Australian", "Austrian", "Argentine", "Canadian", "Mexican", "Japanese", "Monegasque",
];

/// Deterministic synthetic standings for tests and benches. Same `seed`, same
/// records. Points collide on purpose, duplicate keys being the interesting
/// case for the unstable sorts.
pub fn synthetic(len: usize, seed: u64) -> Vec<DriverRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|i| {
            let debut = rng.gen_range(1950..2024_u32);
            let career = rng.gen_range(1..20_u32);
            let race_wins = rng.gen_range(0..110);
            DriverRecord {
                driver: format!("driver-{i:05}"),
                nationality: NATIONALITIES[rng.gen_range(0..NATIONALITIES.len())].to_string(),
                seasons: (debut..debut + career).map(|y| y.to_string()).collect(),
                championships: rng.gen_range(0..8),
                race_wins,
                podiums: race_wins + rng.gen_range(0..90),
                points: f64::from(rng.gen_range(0..8000)) / 2.0,
            }
        })
        .collect()
}
