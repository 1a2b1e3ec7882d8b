use chrono::{DateTime, Duration, TimeZone, Utc};

use release_cadence::{classify, Episode, ReleasePattern};

/// Builds a season starting at `start` with the given day-gaps between
/// consecutive episodes.
fn season(start: DateTime<Utc>, gaps_days: &[i64]) -> Vec<Episode> {
    let mut episodes = vec![make_episode(1, start)];
    let mut air_date = start;
    for (i, gap) in gaps_days.iter().enumerate() {
        air_date += Duration::days(*gap);
        episodes.push(make_episode(i as u32 + 2, air_date));
    }
    episodes
}

fn make_episode(number: u32, air_date: DateTime<Utc>) -> Episode {
    Episode {
        id: 1000 + number as i64,
        season_number: 1,
        episode_number: number,
        air_date,
        title: format!("Episode {}", number),
    }
}

fn jan5_2024() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 5, 8, 0, 0).unwrap()
}

#[test]
fn empty_input_yields_unknown_with_zero_confidence() {
    let analysis = classify(&[]);

    assert_eq!(analysis.pattern, ReleasePattern::Unknown);
    assert_eq!(analysis.confidence, 0.0);
    assert_eq!(analysis.total_episodes, 0);
    assert!(analysis.diagnostics.intervals.is_empty());
}

#[test]
fn single_episode_yields_unknown_with_half_confidence() {
    let analysis = classify(&[make_episode(1, jan5_2024())]);

    assert_eq!(analysis.pattern, ReleasePattern::Unknown);
    assert_eq!(analysis.confidence, 0.5);
    assert_eq!(analysis.total_episodes, 1);
    assert_eq!(analysis.season_start, analysis.season_end);
}

#[test]
fn full_season_binge_drop() {
    let analysis = classify(&season(jan5_2024(), &[0; 7]));

    assert_eq!(analysis.pattern, ReleasePattern::Binge);
    assert_eq!(analysis.confidence, 0.95);
    assert_eq!(analysis.episode_interval, None);
}

#[test]
fn strict_weekly_release() {
    let analysis = classify(&season(jan5_2024(), &[7; 9]));

    assert_eq!(analysis.pattern, ReleasePattern::Weekly);
    assert_eq!(analysis.confidence, 0.85);
    assert_eq!(analysis.episode_interval, Some(7));
    assert_eq!(analysis.total_episodes, 10);
}

#[test]
fn two_episode_premiere_then_weekly() {
    let analysis = classify(&season(jan5_2024(), &[0, 7, 7, 7, 7, 7, 7, 7, 7]));

    assert_eq!(analysis.pattern, ReleasePattern::PremiereWeekly);
    assert_eq!(analysis.confidence, 0.90);
    assert!(analysis.diagnostics.has_premiere_pattern);
    assert_eq!(analysis.diagnostics.premiere_episode_count, 2);
}

#[test]
fn weekly_with_skipped_weeks_is_multi_weekly() {
    let analysis = classify(&season(jan5_2024(), &[7, 7, 14, 7, 7, 7, 7, 14, 7, 7]));

    assert_eq!(analysis.pattern, ReleasePattern::MultiWeekly);
    assert_eq!(analysis.confidence, 0.80);
    assert!(analysis.diagnostics.has_multi_weekly_pattern);
}

#[test]
fn bounded_irregular_release_is_mixed() {
    let analysis = classify(&season(jan5_2024(), &[3, 4, 10, 4, 11]));

    assert_eq!(analysis.pattern, ReleasePattern::Mixed);
    assert_eq!(analysis.confidence, 0.70);
}

#[test]
fn high_variance_release_is_unknown() {
    let analysis = classify(&season(jan5_2024(), &[1, 20, 3, 45]));

    assert_eq!(analysis.pattern, ReleasePattern::Unknown);
    assert_eq!(analysis.confidence, 0.5);
}

#[test]
fn classification_is_idempotent() {
    let episodes = season(jan5_2024(), &[0, 7, 7, 14, 7, 7]);

    assert_eq!(classify(&episodes), classify(&episodes));
}

#[test]
fn classification_is_order_invariant() {
    let episodes = season(jan5_2024(), &[7, 7, 14, 7, 7, 7, 7]);
    let baseline = classify(&episodes);

    let mut reversed = episodes.clone();
    reversed.reverse();
    assert_eq!(classify(&reversed), baseline);

    // Interleave from both ends for a non-trivial permutation
    let mut shuffled = Vec::with_capacity(episodes.len());
    let mut front = 0;
    let mut back = episodes.len();
    while front < back {
        back -= 1;
        shuffled.push(episodes[back].clone());
        if front < back {
            shuffled.push(episodes[front].clone());
            front += 1;
        }
    }
    assert_eq!(classify(&shuffled), baseline);
}

#[test]
fn interval_count_tracks_episode_count() {
    for count in 2..12usize {
        let analysis = classify(&season(jan5_2024(), &vec![7; count - 1]));
        assert_eq!(analysis.diagnostics.intervals.len(), count - 1);
        assert_eq!(analysis.total_episodes, count);
    }
}

#[test]
fn premiere_pattern_never_classified_weekly_or_binge() {
    let analysis = classify(&season(jan5_2024(), &[0, 7, 7, 7, 7, 7]));

    assert!(analysis.diagnostics.has_premiere_pattern);
    assert_ne!(analysis.pattern, ReleasePattern::Weekly);
    assert_ne!(analysis.pattern, ReleasePattern::Binge);
}

#[test]
fn analysis_serializes_to_camel_case_payload() {
    let analysis = classify(&season(jan5_2024(), &[7; 9]));
    let json = serde_json::to_value(&analysis).unwrap();

    assert_eq!(json["pattern"], "weekly");
    assert_eq!(json["episodeInterval"], 7);
    assert_eq!(json["totalEpisodes"], 10);
    assert_eq!(json["diagnostics"]["avgInterval"], 7.0);
    assert_eq!(json["diagnostics"]["hasPremierePattern"], false);
    assert!(json["seasonStart"].is_string());

    let roundtrip: release_cadence::PatternAnalysis = serde_json::from_value(json).unwrap();
    assert_eq!(roundtrip, analysis);
}
