use crate::{
    models::{Episode, NextSeasonPrediction, ReleasePattern},
    services::classifier::classify,
};
use chrono::{DateTime, Datelike, NaiveDate, Utc};

// Seasons typically return on a roughly annual rhythm; outside this window
// since the last finale there is nothing credible to predict.
const MIN_GAP_MONTHS: f64 = 9.0;
const MAX_GAP_MONTHS: f64 = 15.0;

/// Mean Gregorian month length, in days
const DAYS_PER_MONTH: f64 = 30.44;

/// Predicts the next season's premiere date from the latest season's cadence.
///
/// Convenience wrapper over [`predict_next_season_at`] using the current
/// wall-clock time.
pub fn predict_next_season(episodes: &[Episode]) -> Option<NextSeasonPrediction> {
    predict_next_season_at(episodes, Utc::now())
}

/// Predicts the next season's premiere date, evaluated at an explicit `now`.
///
/// Classifies the given season first; returns `None` when no cadence was
/// recognized or when the time since the season finale falls outside the
/// 9 to 15 month window where an annual return is plausible. Otherwise the
/// prediction reuses the season premiere's month and day, advanced to the
/// first occurrence on or after `now`.
pub fn predict_next_season_at(
    episodes: &[Episode],
    now: DateTime<Utc>,
) -> Option<NextSeasonPrediction> {
    let analysis = classify(episodes);

    if analysis.pattern == ReleasePattern::Unknown {
        tracing::debug!("No recognizable cadence, skipping next-season prediction");
        return None;
    }

    let season_start = analysis.season_start?;
    let season_end = analysis.season_end?;

    let elapsed_months = (now - season_end).num_days() as f64 / DAYS_PER_MONTH;
    if !(MIN_GAP_MONTHS..=MAX_GAP_MONTHS).contains(&elapsed_months) {
        tracing::debug!(
            elapsed_months,
            "Season finale outside the annual-return window, skipping prediction"
        );
        return None;
    }

    let premiere = season_start.date_naive();
    let today = now.date_naive();

    let mut predicted = anniversary(today.year(), premiere.month(), premiere.day())?;
    if predicted < today {
        predicted = anniversary(today.year() + 1, premiere.month(), premiere.day())?;
    }

    tracing::debug!(
        predicted_date = %predicted,
        pattern = %analysis.pattern,
        "Predicted next-season premiere"
    );

    Some(NextSeasonPrediction {
        predicted_date: predicted,
        based_on_pattern: analysis.pattern,
        confidence: analysis.confidence,
    })
}

/// Same month/day in another year; Feb 29 clamps to day 28 off leap years
fn anniversary(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).or_else(|| NaiveDate::from_ymd_opt(year, month, 28))
}
