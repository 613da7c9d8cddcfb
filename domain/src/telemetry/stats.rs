//! Sample statistics shared by window aggregation and event baselines.

/// Decimal places kept for every floating statistic.
pub const STAT_PRECISION: i32 = 4;

/// Round `value` to `places` decimal places.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Mean, extrema and sample variance of a set of values.
///
/// Values are sorted before summation so the result does not depend on the
/// order the samples arrived in. Variance uses the `n - 1` denominator and is
/// `0.0` for a single sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleStats {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub variance: f64,
    pub count: usize,
}

impl SampleStats {
    /// Compute rounded statistics, or `None` for an empty slice.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let count = sorted.len();
        let n = count as f64;
        let mean = sorted.iter().sum::<f64>() / n;
        let variance = if count < 2 {
            0.0
        } else {
            sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0)
        };

        Some(Self {
            mean: round_to(mean, STAT_PRECISION),
            min: round_to(sorted[0], STAT_PRECISION),
            max: round_to(sorted[count - 1], STAT_PRECISION),
            variance: round_to(variance, STAT_PRECISION),
            count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_has_no_stats() {
        assert!(SampleStats::from_values(&[]).is_none());
    }

    #[test]
    fn single_value_has_zero_variance() {
        let stats = SampleStats::from_values(&[7.5]).unwrap();
        assert_eq!(stats.mean, 7.5);
        assert_eq!(stats.min, 7.5);
        assert_eq!(stats.max, 7.5);
        assert_eq!(stats.variance, 0.0);
        assert_eq!(stats.count, 1);
    }

    #[test]
    fn uses_sample_variance() {
        // mean 5, squared deviations 9+1+1+9 = 20, / (4-1)
        let stats = SampleStats::from_values(&[2.0, 4.0, 6.0, 8.0]).unwrap();
        assert_eq!(stats.mean, 5.0);
        assert_eq!(stats.variance, 6.6667);
    }

    #[test]
    fn rounds_to_four_places() {
        let stats = SampleStats::from_values(&[1.0, 1.0, 2.0]).unwrap();
        assert_eq!(stats.mean, 1.3333);
        assert_eq!(round_to(2.71828, 1), 2.7);
    }
}
