use crate::{
    models::{Diagnostics, Episode, PatternAnalysis, ReleasePattern},
    services::{
        detectors::{has_multi_weekly_cadence, has_premiere_burst, premiere_episode_count},
        statistics::{interval_stats, IntervalStats},
    },
};

// Fixed per-branch confidences; tied to which decision rule fired, never
// fitted or adjusted online.
const BINGE_CONFIDENCE: f64 = 0.95;
const PREMIERE_WEEKLY_CONFIDENCE: f64 = 0.90;
const WEEKLY_CONFIDENCE: f64 = 0.85;
const MULTI_WEEKLY_CONFIDENCE: f64 = 0.80;
const MIXED_CONFIDENCE: f64 = 0.70;
const UNKNOWN_CONFIDENCE: f64 = 0.50;

/// Largest gap, in days, still counted as a same-drop release
const BINGE_MAX_INTERVAL: i64 = 1;

/// Average-interval window and stddev cap for a strict weekly match
const WEEKLY_AVG_MIN: f64 = 6.0;
const WEEKLY_AVG_MAX: f64 = 8.0;
const WEEKLY_MAX_STDDEV: f64 = 2.0;

/// Looser bounds for an irregular-but-patterned (mixed) match
const MIXED_AVG_MIN: f64 = 3.0;
const MIXED_AVG_MAX: f64 = 14.0;
const MIXED_MAX_STDDEV: f64 = 5.0;
const MIXED_MIN_EPISODES: usize = 4;

/// Classifies how a season's episodes are released over time.
///
/// Pure function of the input list: accepts episodes in any order, sorts them
/// by air date, derives day-gap statistics, runs the sub-pattern detectors,
/// and applies an ordered decision policy where the first matching rule wins:
///
/// 1. Every gap within a day: binge
/// 2. Premiere burst then weekly follow-ups: premiere_weekly
/// 3. Weekly average with low spread: weekly
/// 4. Mostly weekly gaps with a few anomalies: multi_weekly
/// 5. Bounded but irregular cadence over enough episodes: mixed
/// 6. Otherwise: unknown
///
/// Never fails: zero or one episode degrades to `unknown` with confidence
/// 0.0 / 0.5 rather than raising.
pub fn classify(episodes: &[Episode]) -> PatternAnalysis {
    // 1. Normalize: sort ascending by air instant (stable, ties keep input order)
    let mut sorted = episodes.to_vec();
    sorted.sort_by_key(|episode| episode.air_date);

    // 2. Degenerate sizes short-circuit before any statistics exist
    if sorted.is_empty() {
        return empty_analysis();
    }
    if sorted.len() == 1 {
        return singleton_analysis(&sorted[0]);
    }

    // 3. Interval list and summary statistics
    let stats = interval_stats(&sorted);

    // 4. Sub-pattern detectors; all three run unconditionally
    let premiere_burst = has_premiere_burst(&sorted, &stats.intervals);
    let multi_weekly = has_multi_weekly_cadence(&stats.intervals);
    let premiere_count = premiere_episode_count(&sorted);

    // 5. Ordered decision policy
    let (pattern, confidence, reasoning) =
        decide(&stats, premiere_burst, multi_weekly, premiere_count, sorted.len());

    tracing::debug!(
        pattern = %pattern,
        confidence,
        episodes = sorted.len(),
        avg_interval = stats.avg_interval,
        std_dev = stats.std_dev,
        "Classified release pattern"
    );

    let episode_interval = match pattern {
        ReleasePattern::Binge => None,
        _ => Some(stats.avg_interval.round() as i64),
    };

    PatternAnalysis {
        pattern,
        confidence,
        episode_interval,
        season_start: Some(sorted[0].air_date),
        season_end: Some(sorted[sorted.len() - 1].air_date),
        total_episodes: sorted.len(),
        diagnostics: Diagnostics {
            intervals: stats.intervals.clone(),
            avg_interval: stats.avg_interval,
            std_dev: stats.std_dev,
            max_interval: stats.max_interval,
            min_interval: stats.min_interval,
            reasoning,
            premiere_episode_count: premiere_count,
            has_premiere_pattern: premiere_burst,
            has_multi_weekly_pattern: multi_weekly,
        },
    }
}

/// Applies the decision rules in order; first match determines the outcome
fn decide(
    stats: &IntervalStats,
    premiere_burst: bool,
    multi_weekly: bool,
    premiere_count: usize,
    total_episodes: usize,
) -> (ReleasePattern, f64, String) {
    if stats.intervals.iter().all(|&d| d <= BINGE_MAX_INTERVAL) {
        return (
            ReleasePattern::Binge,
            BINGE_CONFIDENCE,
            format!(
                "Binge release: all {} episodes dropped within a day of each other",
                total_episodes
            ),
        );
    }

    if premiere_burst {
        let followups = &stats.intervals[1..];
        let followup_avg = followups.iter().sum::<i64>() as f64 / followups.len() as f64;
        return (
            ReleasePattern::PremiereWeekly,
            PREMIERE_WEEKLY_CONFIDENCE,
            format!(
                "Premiere burst of {} episodes, then weekly releases ({:.1} day average)",
                premiere_count, followup_avg
            ),
        );
    }

    if (WEEKLY_AVG_MIN..=WEEKLY_AVG_MAX).contains(&stats.avg_interval)
        && stats.std_dev < WEEKLY_MAX_STDDEV
    {
        return (
            ReleasePattern::Weekly,
            WEEKLY_CONFIDENCE,
            format!(
                "Consistent weekly pattern: {:.1} day average with {:.1} day standard deviation",
                stats.avg_interval, stats.std_dev
            ),
        );
    }

    if multi_weekly {
        return (
            ReleasePattern::MultiWeekly,
            MULTI_WEEKLY_CONFIDENCE,
            format!(
                "Broadly weekly cadence with occasional irregular gaps: {:.1} day average",
                stats.avg_interval
            ),
        );
    }

    if (MIXED_AVG_MIN..=MIXED_AVG_MAX).contains(&stats.avg_interval)
        && stats.std_dev < MIXED_MAX_STDDEV
        && total_episodes >= MIXED_MIN_EPISODES
    {
        return (
            ReleasePattern::Mixed,
            MIXED_CONFIDENCE,
            format!(
                "Irregular but patterned: {:.1} day average with {:.1} day standard deviation",
                stats.avg_interval, stats.std_dev
            ),
        );
    }

    (
        ReleasePattern::Unknown,
        UNKNOWN_CONFIDENCE,
        format!(
            "No recognizable pattern: {:.1} day average with {:.1} day standard deviation",
            stats.avg_interval, stats.std_dev
        ),
    )
}

fn empty_analysis() -> PatternAnalysis {
    PatternAnalysis {
        pattern: ReleasePattern::Unknown,
        confidence: 0.0,
        episode_interval: None,
        season_start: None,
        season_end: None,
        total_episodes: 0,
        diagnostics: Diagnostics::empty("No episodes provided"),
    }
}

fn singleton_analysis(only: &Episode) -> PatternAnalysis {
    PatternAnalysis {
        pattern: ReleasePattern::Unknown,
        confidence: UNKNOWN_CONFIDENCE,
        episode_interval: None,
        season_start: Some(only.air_date),
        season_end: Some(only.air_date),
        total_episodes: 1,
        diagnostics: Diagnostics::empty("Single episode: insufficient data to classify"),
    }
}
