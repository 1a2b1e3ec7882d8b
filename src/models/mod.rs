use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A single aired episode, as supplied by the catalog provider.
///
/// Episodes are immutable inputs; the classifier never mutates or persists
/// them. Episodes without a known air date must be filtered out by the caller
/// before classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    /// Catalog-assigned numeric episode ID
    pub id: i64,
    pub season_number: u32,
    pub episode_number: u32,
    /// Air instant in UTC
    pub air_date: DateTime<Utc>,
    pub title: String,
}

/// How a season's episodes are released over time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReleasePattern {
    /// All episodes dropped within a day of each other
    Binge,
    /// Strict weekly cadence
    Weekly,
    /// Multi-episode premiere followed by weekly cadence
    PremiereWeekly,
    /// Broadly weekly cadence with occasional skipped or doubled weeks
    MultiWeekly,
    /// Irregular but bounded cadence
    Mixed,
    /// No recognizable pattern, or not enough data
    Unknown,
}

impl ReleasePattern {
    /// Whether a concrete cadence was identified (anything but `Unknown`)
    pub fn is_determinate(&self) -> bool {
        !matches!(self, ReleasePattern::Unknown)
    }
}

impl Display for ReleasePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let token = match self {
            ReleasePattern::Binge => "binge",
            ReleasePattern::Weekly => "weekly",
            ReleasePattern::PremiereWeekly => "premiere_weekly",
            ReleasePattern::MultiWeekly => "multi_weekly",
            ReleasePattern::Mixed => "mixed",
            ReleasePattern::Unknown => "unknown",
        };
        write!(f, "{}", token)
    }
}

/// Descriptive evidence for a classification.
///
/// Purely diagnostic: downstream consumers may display these fields but must
/// not branch on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostics {
    /// Whole-day gaps between chronologically consecutive episodes
    pub intervals: Vec<i64>,
    pub avg_interval: f64,
    pub std_dev: f64,
    pub max_interval: i64,
    pub min_interval: i64,
    /// Human-readable justification naming the numeric evidence
    pub reasoning: String,
    /// Leading episodes sharing the first episode's UTC calendar day
    pub premiere_episode_count: usize,
    pub has_premiere_pattern: bool,
    pub has_multi_weekly_pattern: bool,
}

impl Diagnostics {
    /// Diagnostics for the degenerate branches (no intervals to report)
    pub fn empty(reasoning: impl Into<String>) -> Self {
        Diagnostics {
            intervals: Vec::new(),
            avg_interval: 0.0,
            std_dev: 0.0,
            max_interval: 0,
            min_interval: 0,
            reasoning: reasoning.into(),
            premiere_episode_count: 0,
            has_premiere_pattern: false,
            has_multi_weekly_pattern: false,
        }
    }
}

/// Result of classifying one season's release cadence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternAnalysis {
    pub pattern: ReleasePattern,
    /// Fixed constant tied to the decision branch that matched, in [0, 1]
    pub confidence: f64,
    /// Rounded average gap in days; absent for binge releases
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode_interval: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season_start: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season_end: Option<DateTime<Utc>>,
    pub total_episodes: usize,
    pub diagnostics: Diagnostics,
}

/// Predicted premiere date for the next season
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextSeasonPrediction {
    /// Predicted premiere calendar day (UTC)
    pub predicted_date: NaiveDate,
    /// Cadence of the season the prediction is based on
    pub based_on_pattern: ReleasePattern,
    pub confidence: f64,
}
