//! Independent sub-pattern detectors over one sorted season.
//!
//! Each detector is a pure function of the sorted episode list or interval
//! list; they never short-circuit each other. Calendar-day comparisons use
//! the UTC calendar day of the air instant.

use crate::models::Episode;

/// Remaining-interval average window for a premiere burst, in days
const PREMIERE_FOLLOWUP_MIN: f64 = 5.0;
const PREMIERE_FOLLOWUP_MAX: f64 = 9.0;

/// Weekly interval window in days
const WEEKLY_INTERVAL_MIN: i64 = 6;
const WEEKLY_INTERVAL_MAX: i64 = 8;

/// Share of intervals that must be weekly-sized for a multi-weekly match
const MULTI_WEEKLY_RATIO: f64 = 0.7;

/// Detects a multi-episode premiere followed by a weekly cadence.
///
/// True iff the season has at least three episodes, the first two episodes
/// share a UTC calendar day, and the average of the remaining intervals
/// (excluding the premiere gap) falls in [5, 9] days.
pub fn has_premiere_burst(sorted: &[Episode], intervals: &[i64]) -> bool {
    if sorted.len() < 3 {
        return false;
    }

    let same_premiere_day =
        sorted[0].air_date.date_naive() == sorted[1].air_date.date_naive();
    if !same_premiere_day {
        return false;
    }

    // Skip the burst gap; at least one follow-up interval exists for n >= 3
    let followups = &intervals[1..];
    let avg = followups.iter().sum::<i64>() as f64 / followups.len() as f64;

    (PREMIERE_FOLLOWUP_MIN..=PREMIERE_FOLLOWUP_MAX).contains(&avg)
}

/// Detects a broadly weekly cadence tolerating a few anomalous gaps.
///
/// True iff at least 70% of all intervals fall in [6, 8] days, which absorbs
/// a skipped week or a double drop without losing the weekly signal.
pub fn has_multi_weekly_cadence(intervals: &[i64]) -> bool {
    if intervals.is_empty() {
        return false;
    }

    let weekly = intervals
        .iter()
        .filter(|&&d| (WEEKLY_INTERVAL_MIN..=WEEKLY_INTERVAL_MAX).contains(&d))
        .count();

    weekly as f64 / intervals.len() as f64 >= MULTI_WEEKLY_RATIO
}

/// Counts leading episodes sharing the first episode's UTC calendar day.
///
/// A burst size rather than a boolean: 1 for a single-episode premiere, 2+
/// when the season opens with a same-day drop.
pub fn premiere_episode_count(sorted: &[Episode]) -> usize {
    let first_day = match sorted.first() {
        Some(episode) => episode.air_date.date_naive(),
        None => return 0,
    };

    sorted
        .iter()
        .take_while(|episode| episode.air_date.date_naive() == first_day)
        .count()
}
