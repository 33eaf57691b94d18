//! Benchmark driver.
//!
//! Derives the three input orderings from one canonical sorted base, runs the
//! requested algorithm over a fresh copy of each, and emits one [`Metric`]
//! per ordering to a caller-supplied sink. Timing brackets exactly the sort
//! call; comparison counts come straight from the counting sorts' return
//! value. Everything is single-threaded and deterministic for a fixed
//! shuffle seed.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use rand::prelude::*;
use serde::{Deserialize, Serialize, Serializer};
use tracing::debug;

use crate::{stable, unstable, Error};

/// The supported algorithms. Wire names follow the external selection
/// interface: `bubblesort`, `transpositionsort`, `mergesort`, `quicksort`,
/// `heapsort`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    #[serde(rename = "bubblesort")]
    Bubble,
    #[serde(rename = "transpositionsort")]
    OddEven,
    #[serde(rename = "mergesort")]
    Merge,
    #[serde(rename = "quicksort")]
    Quick,
    #[serde(rename = "heapsort")]
    Heap,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bubble,
        Algorithm::OddEven,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubblesort",
            Algorithm::OddEven => "transpositionsort",
            Algorithm::Merge => "mergesort",
            Algorithm::Quick => "quicksort",
            Algorithm::Heap => "heapsort",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_ascii_lowercase().as_str() {
            "bubblesort" => Ok(Algorithm::Bubble),
            "transpositionsort" => Ok(Algorithm::OddEven),
            "mergesort" => Ok(Algorithm::Merge),
            "quicksort" => Ok(Algorithm::Quick),
            "heapsort" => Ok(Algorithm::Heap),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// The three orderings each algorithm is probed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Sorted,
    Shuffled,
    Reversed,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Sorted, Variant::Shuffled, Variant::Reversed];

    pub fn name(self) -> &'static str {
        match self {
            Variant::Sorted => "sorted",
            Variant::Shuffled => "shuffled",
            Variant::Reversed => "reversed",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The three orderings, all derived from the same canonical ascending base.
/// Built once per run; every algorithm invocation gets its own copy.
pub struct VariantSet<T> {
    sorted: Vec<T>,
    shuffled: Vec<T>,
    reversed: Vec<T>,
}

impl<T: Clone> VariantSet<T> {
    /// Sorts a copy of `base` into the canonical order, then derives the
    /// shuffled (seeded, reproducible) and reversed orderings from it.
    pub fn build<F>(base: &[T], compare: F, seed: u64) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut sorted = base.to_vec();
        sorted.sort_by(compare);
        let mut shuffled = sorted.clone();
        shuffled.shuffle(&mut StdRng::seed_from_u64(seed));
        let reversed: Vec<T> = sorted.iter().rev().cloned().collect();
        debug!(len = sorted.len(), seed, "built benchmark variants");
        Self {
            sorted,
            shuffled,
            reversed,
        }
    }

    pub fn get(&self, variant: Variant) -> &[T] {
        match variant {
            Variant::Sorted => &self.sorted,
            Variant::Shuffled => &self.shuffled,
            Variant::Reversed => &self.reversed,
        }
    }
}

/// One measurement: a single algorithm run over a single input ordering.
#[derive(Debug, Clone, Serialize)]
pub struct Metric {
    pub algorithm: Algorithm,
    pub variant: Variant,
    pub len: usize,
    /// Only the exchange sorts report comparisons.
    pub comparisons: Option<u64>,
    /// Wall clock around the sort call alone. `None` for transposition sort,
    /// where the comparison count is the cost model.
    #[serde(serialize_with = "secs_opt")]
    pub elapsed: Option<Duration>,
}

impl Metric {
    pub fn elapsed_seconds(&self) -> Option<f64> {
        self.elapsed.map(|d| d.as_secs_f64())
    }
}

fn secs_opt<S: Serializer>(elapsed: &Option<Duration>, ser: S) -> Result<S::Ok, S::Error> {
    match elapsed {
        Some(d) => ser.serialize_some(&d.as_secs_f64()),
        None => ser.serialize_none(),
    }
}

/// Receives measurements as they are produced. Formatting and persistence are
/// the sink's business; the driver never opens a file.
pub trait MetricSink {
    fn emit(&mut self, metric: Metric);
}

impl MetricSink for Vec<Metric> {
    fn emit(&mut self, metric: Metric) {
        self.push(metric);
    }
}

/// Parses the algorithm name, then runs it. Unknown names fail before any
/// data is touched.
pub fn run_named<T, F, S>(
    name: &str,
    base: &[T],
    compare: F,
    seed: u64,
    sink: &mut S,
) -> Result<Vec<T>, Error>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
    S: MetricSink,
{
    run(name.parse()?, base, compare, seed, sink)
}

/// Runs `algorithm` over fresh copies of all three orderings of `base`,
/// emitting one [`Metric`] per ordering, and returns the sorted dataset.
///
/// The output of every run is checked against `compare` before its metric is
/// emitted; a partial sort is never reported as success. The driver sorts
/// exactly the records it is given; truncating to "first N" is the loader's
/// contract.
pub fn run<T, F, S>(
    algorithm: Algorithm,
    base: &[T],
    compare: F,
    seed: u64,
    sink: &mut S,
) -> Result<Vec<T>, Error>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
    S: MetricSink,
{
    let variants = VariantSet::build(base, |a, b| compare(a, b), seed);
    let mut output = Vec::new();
    for variant in Variant::ALL {
        let mut copy = variants.get(variant).to_vec();
        let metric = measure(algorithm, variant, &mut copy, &compare);
        verify_sorted(algorithm, &copy, &compare)?;
        debug!(
            algorithm = %algorithm,
            variant = %variant,
            len = metric.len,
            comparisons = ?metric.comparisons,
            elapsed_s = ?metric.elapsed_seconds(),
            "measured"
        );
        sink.emit(metric);
        output = copy;
    }
    Ok(output)
}

/// Checks that `data` is non-decreasing under `compare`. Public so sinks can
/// re-check a sequence before persisting it.
pub fn verify_sorted<T, F>(algorithm: Algorithm, data: &[T], compare: F) -> Result<(), Error>
where
    F: Fn(&T, &T) -> Ordering,
{
    match data
        .windows(2)
        .position(|w| compare(&w[0], &w[1]) == Ordering::Greater)
    {
        Some(index) => Err(Error::OrderingViolation {
            algorithm: algorithm.name(),
            index,
        }),
        None => Ok(()),
    }
}

fn measure<T, F>(algorithm: Algorithm, variant: Variant, data: &mut [T], compare: &F) -> Metric
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let len = data.len();
    let (comparisons, elapsed) = match algorithm {
        Algorithm::Bubble => {
            let start = Instant::now();
            let count = unstable::bubble::sort_by(data, |a, b| compare(a, b));
            (Some(count), Some(start.elapsed()))
        }
        Algorithm::OddEven => {
            let count = unstable::odd_even::sort_by(data, |a, b| compare(a, b));
            (Some(count), None)
        }
        Algorithm::Merge => {
            let start = Instant::now();
            stable::merge::sort_by(data, |a, b| compare(a, b));
            (None, Some(start.elapsed()))
        }
        Algorithm::Quick => {
            let start = Instant::now();
            unstable::quick::sort_by(data, |a, b| compare(a, b));
            (None, Some(start.elapsed()))
        }
        Algorithm::Heap => {
            let start = Instant::now();
            unstable::heap::sort_by(data, |a, b| compare(a, b));
            (None, Some(start.elapsed()))
        }
    };
    Metric {
        algorithm,
        variant,
        len,
        comparisons,
        elapsed,
    }
}
