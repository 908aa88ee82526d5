//! Confidence Scorer — bounded data-quality score for a profile batch.
//!
//! Four additive terms: sample size (up to 3.0), field completeness (up to
//! 3.0), skill presence (flat 2.0), education presence (flat 2.0). The sum
//! is clamped to 10.0; the theoretical maximum is exactly 10.0, so the
//! clamp only matters if a term ever changes scale.

use crate::models::profile::ProfileRecord;

const MAX_SCORE: f64 = 10.0;

const LARGE_SAMPLE: usize = 10;
const MEDIUM_SAMPLE: usize = 5;

/// Scores a batch of records in [0.0, 10.0]. An empty batch scores 0.0.
pub fn score(records: &[ProfileRecord]) -> f64 {
    let total = sample_size_term(records.len())
        + completeness_term(records)
        + skill_presence_term(records)
        + education_presence_term(records);
    total.min(MAX_SCORE)
}

/// 3.0 / 2.0 / 1.0 at the 10- / 5- / 1-record thresholds, 0.0 when empty.
fn sample_size_term(count: usize) -> f64 {
    if count >= LARGE_SAMPLE {
        3.0
    } else if count >= MEDIUM_SAMPLE {
        2.0
    } else if count >= 1 {
        1.0
    } else {
        0.0
    }
}

/// Up to 3.0, scaled by the fraction of records carrying both a headline
/// and at least one experience entry. Short-circuits to 0.0 when empty.
fn completeness_term(records: &[ProfileRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let complete = records
        .iter()
        .filter(|r| !r.headline.is_empty() && !r.experience.is_empty())
        .count();
    3.0 * complete as f64 / records.len() as f64
}

/// Flat 2.0 once any record lists at least one skill.
fn skill_presence_term(records: &[ProfileRecord]) -> f64 {
    if records.iter().any(|r| !r.skills.is_empty()) {
        2.0
    } else {
        0.0
    }
}

/// Flat 2.0 once any record lists at least one education entry.
fn education_presence_term(records: &[ProfileRecord]) -> f64 {
    if records.iter().any(|r| !r.education.is_empty()) {
        2.0
    } else {
        0.0
    }
}
