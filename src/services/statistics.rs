use crate::models::Episode;

const MS_PER_DAY: f64 = 86_400_000.0;

/// Interval list and summary statistics for one sorted season.
///
/// Variance is the population variance (divisor = interval count), with no
/// smoothing or outlier removal.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalStats {
    /// Whole-day gaps between consecutive episodes, length = episodes - 1
    pub intervals: Vec<i64>,
    pub avg_interval: f64,
    pub std_dev: f64,
    pub max_interval: i64,
    pub min_interval: i64,
}

/// Computes day-gaps between consecutive episodes and their statistics.
///
/// Requires a chronologically sorted slice of at least two episodes; gaps are
/// rounded to the nearest whole day, not truncated.
pub fn interval_stats(sorted: &[Episode]) -> IntervalStats {
    debug_assert!(sorted.len() >= 2, "interval stats need at least two episodes");

    let intervals: Vec<i64> = sorted
        .windows(2)
        .map(|pair| {
            let delta_ms = (pair[1].air_date - pair[0].air_date).num_milliseconds();
            (delta_ms as f64 / MS_PER_DAY).round() as i64
        })
        .collect();

    let count = intervals.len() as f64;
    let avg_interval = intervals.iter().sum::<i64>() as f64 / count;
    let variance = intervals
        .iter()
        .map(|&d| {
            let dev = d as f64 - avg_interval;
            dev * dev
        })
        .sum::<f64>()
        / count;

    IntervalStats {
        max_interval: intervals.iter().copied().max().unwrap_or(0),
        min_interval: intervals.iter().copied().min().unwrap_or(0),
        intervals,
        avg_interval,
        std_dev: variance.sqrt(),
    }
}
