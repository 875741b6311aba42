use rand::Rng;
use rand::rngs::StdRng;

/// Categorical distribution backed by a cumulative-weight table.
///
/// Sampling draws one uniform `f64` in `[0, total)` and returns the first
/// entry whose cumulative threshold exceeds the roll. Weights need not sum to
/// 1; they are relative.
#[derive(Debug, Clone)]
pub struct WeightedTable<T> {
    thresholds: Vec<(T, f64)>,
    total: f64,
}

impl<T: Copy> WeightedTable<T> {
    /// Build from `(value, weight)` pairs.
    ///
    /// # Panics
    ///
    /// Panics if `entries` is empty, a weight is negative or not finite, or
    /// all weights are zero. Tables are built from constants, so any of these
    /// is a programming error.
    pub fn new(entries: &[(T, f64)]) -> Self {
        assert!(!entries.is_empty(), "weighted table needs at least one entry");
        let mut thresholds = Vec::with_capacity(entries.len());
        let mut cumulative = 0.0;
        for &(value, weight) in entries {
            assert!(
                weight.is_finite() && weight >= 0.0,
                "invalid weight {weight}"
            );
            cumulative += weight;
            thresholds.push((value, cumulative));
        }
        assert!(cumulative > 0.0, "weighted table has zero total weight");
        Self {
            thresholds,
            total: cumulative,
        }
    }

    /// Draw one value.
    pub fn sample(&self, rng: &mut StdRng) -> T {
        let roll: f64 = rng.random::<f64>() * self.total;
        self.pick(roll)
    }

    /// Map a roll in `[0, total)` onto an entry. Zero-weight entries are
    /// never returned; rolls at or past `total` land on the last live entry.
    fn pick(&self, roll: f64) -> T {
        let mut prev = 0.0;
        let mut last_live = self.thresholds[0].0;
        for &(value, threshold) in &self.thresholds {
            if threshold > prev {
                if roll < threshold {
                    return value;
                }
                last_live = value;
            }
            prev = threshold;
        }
        last_live
    }

    /// Relative probability of each entry, in declaration order.
    #[cfg(test)]
    fn probabilities(&self) -> Vec<(T, f64)> {
        let mut prev = 0.0;
        self.thresholds
            .iter()
            .map(|&(value, threshold)| {
                let p = (threshold - prev) / self.total;
                prev = threshold;
                (value, p)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn pick_follows_cumulative_thresholds() {
        let table = WeightedTable::new(&[('a', 0.1), ('b', 0.2), ('c', 0.7)]);
        assert_eq!(table.pick(0.0), 'a');
        assert_eq!(table.pick(0.099), 'a');
        assert_eq!(table.pick(0.1), 'b');
        assert_eq!(table.pick(0.29), 'b');
        assert_eq!(table.pick(0.31), 'c');
        assert_eq!(table.pick(0.999), 'c');
    }

    #[test]
    fn exact_boundaries_with_dyadic_weights() {
        // 0.1 + 0.2 drifts past 0.3, so exact boundary rolls need weights
        // whose running sums are representable.
        let table = WeightedTable::new(&[('a', 0.25), ('b', 0.25), ('c', 0.5)]);
        assert_eq!(table.pick(0.25), 'b');
        assert_eq!(table.pick(0.5), 'c');
        assert_eq!(table.pick(0.499_999), 'b');
    }

    #[test]
    fn overflow_roll_skips_trailing_zero_weights() {
        let table = WeightedTable::new(&[('a', 1.0), ('b', 1.0), ('z', 0.0)]);
        assert_eq!(table.pick(2.0), 'b');
        assert_eq!(table.pick(5.0), 'b');
    }

    #[test]
    fn zero_weight_entry_is_never_drawn() {
        let table = WeightedTable::new(&[(1u8, 0.0), (2u8, 3.0), (3u8, 1.0)]);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..2_000 {
            assert_ne!(table.sample(&mut rng), 1);
        }
    }

    #[test]
    fn relative_weights_are_normalized() {
        let table = WeightedTable::new(&[("x", 1.0), ("y", 3.0)]);
        let probs = table.probabilities();
        assert_eq!(probs, vec![("x", 0.25), ("y", 0.75)]);
    }

    #[test]
    fn sample_frequencies_match_weights() {
        let table = WeightedTable::new(&[(0usize, 0.1), (1, 0.2), (2, 0.5), (3, 0.2)]);
        let mut rng = StdRng::seed_from_u64(42);
        let n = 20_000;
        let mut counts = [0usize; 4];
        for _ in 0..n {
            counts[table.sample(&mut rng)] += 1;
        }
        for (i, expected) in [0.1, 0.2, 0.5, 0.2].into_iter().enumerate() {
            let observed = counts[i] as f64 / n as f64;
            assert!(
                (observed - expected).abs() < 0.02,
                "entry {i}: observed {observed:.3}, expected {expected}"
            );
        }
    }

    #[test]
    #[should_panic(expected = "zero total weight")]
    fn all_zero_weights_panic() {
        WeightedTable::new(&[(1, 0.0), (2, 0.0)]);
    }
}
