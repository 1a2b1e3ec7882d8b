//! Release pattern classification for TV season air dates.
//!
//! Given one season's episode air dates, infers how that season is released
//! (binge drop, weekly, multi-episode premiere then weekly, broadly weekly,
//! irregular-but-bounded, or unknown) together with a fixed per-branch
//! confidence and descriptive diagnostics. A small auxiliary predictor
//! estimates the next season's premiere date from the same cadence.
//!
//! The crate is a pure, stateless, synchronous library: classification is a
//! function of its input list only, with no I/O, no persistence, and no
//! shared state, so it is safe to call concurrently without coordination.
//! Fetching episode metadata, caching results, and any subscription
//! recommendations built on top are caller concerns.

pub mod models;
pub mod services;

pub use models::{Diagnostics, Episode, NextSeasonPrediction, PatternAnalysis, ReleasePattern};
pub use services::classifier::classify;
pub use services::prediction::{predict_next_season, predict_next_season_at};
