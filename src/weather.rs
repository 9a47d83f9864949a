//! Temperature distribution and weather sampling.
//!
//! Daily weather is a single temperature drawn from a precomputed population
//! weighted toward the midpoint of the range, so mild days are common and
//! extremes are rare.

use anyhow::{ensure, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

pub const TEMP_MIN: i32 = 20;
pub const TEMP_MAX: i32 = 90;

/// Half-open range of possible temperatures: `min` inclusive, `max` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemperatureRange {
    pub min: i32,
    pub max: i32,
}

impl TemperatureRange {
    pub fn new(min: i32, max: i32) -> Result<Self> {
        ensure!(
            min < max,
            "temperature range must satisfy min < max (got {min}..{max})"
        );
        Ok(Self { min, max })
    }
}

impl Default for TemperatureRange {
    fn default() -> Self {
        Self {
            min: TEMP_MIN,
            max: TEMP_MAX,
        }
    }
}

/// Weighted multiset of sampleable temperatures.
///
/// Each temperature in the range appears a number of times proportional to
/// its closeness to the range midpoint, so a uniform draw over the population
/// is a biased draw over temperatures. Built once per shop; only obtainable
/// through [`TemperaturePopulation::build`], which never yields an empty
/// population for a valid range.
#[derive(Debug, Clone)]
pub struct TemperaturePopulation {
    values: Vec<i32>,
}

impl TemperaturePopulation {
    pub fn build(range: TemperatureRange) -> Self {
        let avg = f64::from(range.min + range.max) / 2.0;
        let max_dist_from_avg = f64::from(range.max) - avg;
        let mut values = Vec::new();
        for t in range.min..range.max {
            let dist_from_avg = (avg - f64::from(t)).abs();
            let mut weight = max_dist_from_avg - dist_from_avg;
            if weight == 0.0 {
                weight = 1.0;
            }
            // Truncation toward zero, matching the original integer cast.
            for _ in 0..weight as usize {
                values.push(t);
            }
        }
        Self { values }
    }

    pub fn values(&self) -> &[i32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of times `temperature` appears in the population.
    pub fn count_of(&self, temperature: i32) -> usize {
        self.values.iter().filter(|&&t| t == temperature).count()
    }
}

/// One-method seam for drawing weather, so tests can substitute a
/// deterministic stub for the seeded generator.
pub trait WeatherSampler {
    /// Draws one element uniformly from the population. Higher-weight
    /// temperatures win by frequency, not by a skewed index distribution.
    fn next_from(&mut self, population: &TemperaturePopulation) -> i32;
}

/// Weather sampler backed by a seeded ChaCha8 stream.
pub struct SeededSampler {
    rng: ChaCha8Rng,
}

impl SeededSampler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }
}

impl WeatherSampler for SeededSampler {
    fn next_from(&mut self, population: &TemperaturePopulation) -> i32 {
        let index = self.rng.gen_range(0..population.len());
        population.values()[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn population_is_nonempty_and_in_range() {
        let range = TemperatureRange::default();
        let population = TemperaturePopulation::build(range);
        assert!(!population.is_empty());
        assert!(population
            .values()
            .iter()
            .all(|&t| t >= range.min && t < range.max));
    }

    #[test]
    fn midpoint_has_maximum_weight() {
        let range = TemperatureRange::default();
        let population = TemperaturePopulation::build(range);
        let midpoint_count = population.count_of(55);
        assert_eq!(midpoint_count, 35);
        for t in range.min..range.max {
            assert!(population.count_of(t) <= midpoint_count);
        }
    }

    #[test]
    fn every_temperature_appears_at_least_once() {
        // The coldest value has weight exactly zero before the floor-to-one
        // rule kicks in; odd-width ranges exercise the half-integer midpoint.
        for range in [
            TemperatureRange::default(),
            TemperatureRange::new(20, 91).unwrap(),
            TemperatureRange::new(0, 5).unwrap(),
        ] {
            let population = TemperaturePopulation::build(range);
            for t in range.min..range.max {
                assert!(
                    population.count_of(t) >= 1,
                    "temperature {t} missing from population for {range:?}"
                );
            }
        }
    }

    #[test]
    fn repeats_are_contiguous_and_ascending() {
        let population = TemperaturePopulation::build(TemperatureRange::default());
        let values = population.values();
        assert!(values.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn invalid_range_is_rejected() {
        assert!(TemperatureRange::new(90, 20).is_err());
        assert!(TemperatureRange::new(50, 50).is_err());
    }

    #[test]
    fn sampler_draws_from_population() {
        let population = TemperaturePopulation::build(TemperatureRange::default());
        let mut sampler = SeededSampler::new(7);
        for _ in 0..200 {
            let t = sampler.next_from(&population);
            assert!(population.count_of(t) > 0);
        }
    }

    #[test]
    fn same_seed_same_weather() {
        let population = TemperaturePopulation::build(TemperatureRange::default());
        let mut a = SeededSampler::new(42);
        let mut b = SeededSampler::new(42);
        let first: Vec<i32> = (0..32).map(|_| a.next_from(&population)).collect();
        let second: Vec<i32> = (0..32).map(|_| b.next_from(&population)).collect();
        assert_eq!(first, second);
    }
}
