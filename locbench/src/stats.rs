//! Descriptive statistics over a scenario's recorded durations.

use std::fmt;

/// Summary statistics for one scenario, in milliseconds.
///
/// Derived once from a non-empty set of durations and immutable afterwards.
/// Values keep full precision; rounding for display happens in the reporter.
#[derive(Clone, Debug, PartialEq)]
pub struct Statistics {
    pub avg: f64,
    pub min: f64,
    pub max: f64,
    pub median: f64,
    pub std_dev: f64,
    pub count: usize,
}

impl Statistics {
    /// Aggregates `durations` into summary statistics.
    ///
    /// Returns `None` for an empty slice; callers skip storing and reporting
    /// scenarios that recorded no samples. The standard deviation is the
    /// sample standard deviation (n-1 denominator), defined as `0.0` for a
    /// single sample rather than NaN.
    pub fn from_durations(durations: &[f64]) -> Option<Self> {
        if durations.is_empty() {
            return None;
        }

        let avg = statistical::mean(durations);
        let std_dev = if durations.len() > 1 {
            statistical::standard_deviation(durations, Some(avg))
        } else {
            0.0
        };

        Some(Self {
            avg,
            min: durations.iter().copied().fold(f64::INFINITY, f64::min),
            max: durations.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            median: statistical::median(durations),
            std_dev,
            count: durations.len(),
        })
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "avg={:.2}ms median={:.2}ms min={:.2}ms max={:.2}ms stddev={:.2}ms n={}",
            self.avg, self.median, self.min, self.max, self.std_dev, self.count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_none() {
        assert_eq!(Statistics::from_durations(&[]), None);
    }

    #[test]
    fn single_sample_has_zero_stddev() {
        let stats = Statistics::from_durations(&[12.5]).unwrap();
        assert_eq!(stats.avg, 12.5);
        assert_eq!(stats.min, 12.5);
        assert_eq!(stats.max, 12.5);
        assert_eq!(stats.median, 12.5);
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.count, 1);
    }

    #[test]
    fn median_odd_length_is_middle_element() {
        // Unsorted on purpose; the definition is over the sorted sequence.
        let stats = Statistics::from_durations(&[30.0, 10.0, 20.0]).unwrap();
        assert_eq!(stats.median, 20.0);
    }

    #[test]
    fn median_even_length_averages_middles() {
        let stats = Statistics::from_durations(&[40.0, 10.0, 20.0, 30.0]).unwrap();
        assert_eq!(stats.median, 25.0);
    }

    #[test]
    fn sample_standard_deviation_uses_n_minus_one() {
        // Variance of [2, 4, 4, 4, 5, 5, 7, 9] around mean 5 is 32/7.
        let durations = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let stats = Statistics::from_durations(&durations).unwrap();
        assert_eq!(stats.avg, 5.0);
        assert!((stats.std_dev - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn extremes() {
        let stats = Statistics::from_durations(&[5.0, 1.0, 9.0, 3.0]).unwrap();
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 9.0);
        assert_eq!(stats.count, 4);
    }
}
