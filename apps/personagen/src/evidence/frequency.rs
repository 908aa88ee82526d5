//! Frequency Analyzer — ranked label distributions over a batch of profiles.
//!
//! Each dimension counts a *derived key*, not the raw field, ranks by
//! descending count with first-seen order breaking ties, and truncates to a
//! fixed top-K. Percentages are kept unrounded; rounding happens only at
//! display time.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::models::profile::ProfileRecord;

/// Entries kept per ranked dimension.
const TOP_LABELS: usize = 5;
/// Skills get a deeper cut — they are the densest signal per profile.
const TOP_SKILLS: usize = 10;

/// One row of a distribution: a label, how many times it was counted, and
/// its unrounded share of the dimension's denominator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
    /// Exact share in 0.0–100.0. Use `display_percentage` for rendering.
    pub percentage: f64,
}

impl LabelCount {
    /// Integer percentage for display rows.
    pub fn display_percentage(&self) -> u32 {
        self.percentage.round() as u32
    }
}

/// All analyzed dimensions for one batch of records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Distributions {
    pub titles: Vec<LabelCount>,
    pub industries: Vec<LabelCount>,
    pub locations: Vec<LabelCount>,
    pub skills: Vec<LabelCount>,
    pub credentials: Vec<LabelCount>,
    /// Institution counts ride along unranked, in first-seen order.
    pub institutions: Vec<LabelCount>,
}

/// Builds every distribution from one pass over the records.
///
/// Denominators are dimension-specific: title/industry/location use the pool
/// of records with a non-empty value for that field, skills use the total
/// record count ("what fraction of people listed this skill"), and
/// credentials/institutions use the total education entry count. A dimension
/// with a zero denominator comes back empty — never a division by zero.
pub fn analyze(records: &[ProfileRecord]) -> Distributions {
    let mut titles = OrderedCounter::default();
    let mut industries = OrderedCounter::default();
    let mut locations = OrderedCounter::default();
    let mut skills = OrderedCounter::default();
    let mut credentials = OrderedCounter::default();
    let mut institutions = OrderedCounter::default();

    let mut titled = 0usize;
    let mut with_industry = 0usize;
    let mut located = 0usize;
    let mut education_entries = 0usize;

    for record in records {
        if !record.headline.trim().is_empty() {
            titled += 1;
            let key = title_key(&record.headline);
            if !key.is_empty() {
                titles.add(key);
            }
        }

        if !record.industry.is_empty() {
            with_industry += 1;
            industries.add(&record.industry);
        }

        if !record.location.is_empty() {
            located += 1;
            locations.add(&record.location);
        }

        // One count per record per skill, so a skill's share reads as the
        // fraction of people listing it even when a source emits duplicates.
        let mut seen = HashSet::new();
        for skill in &record.skills {
            if seen.insert(skill.as_str()) {
                skills.add(skill);
            }
        }

        for entry in &record.education {
            education_entries += 1;
            if !entry.credential.is_empty() {
                credentials.add(&entry.credential);
            }
            if !entry.institution.is_empty() {
                institutions.add(&entry.institution);
            }
        }
    }

    Distributions {
        titles: titles.ranked(titled, TOP_LABELS),
        industries: industries.ranked(with_industry, TOP_LABELS),
        locations: locations.ranked(located, TOP_LABELS),
        skills: skills.ranked(records.len(), TOP_SKILLS),
        credentials: credentials.ranked(education_entries, TOP_LABELS),
        institutions: institutions.in_order(education_entries),
    }
}

/// Derives the free-text title from a headline: everything before the first
/// `|`, then before the first literal `"at"`, trimmed.
///
/// Known limitation kept for compatibility: the split is a substring match,
/// so "Director at Risk at BigCo" truncates to "Director" at the first "at".
fn title_key(headline: &str) -> &str {
    headline
        .split('|')
        .next()
        .unwrap_or("")
        .split("at")
        .next()
        .unwrap_or("")
        .trim()
}

/// Order-preserving counter: the first insertion fixes a label's position,
/// so equal counts rank by first appearance in the input sequence.
#[derive(Default)]
struct OrderedCounter {
    index: HashMap<String, usize>,
    entries: Vec<(String, usize)>,
}

impl OrderedCounter {
    fn add(&mut self, label: &str) {
        match self.index.get(label) {
            Some(&position) => self.entries[position].1 += 1,
            None => {
                self.index.insert(label.to_string(), self.entries.len());
                self.entries.push((label.to_string(), 1));
            }
        }
    }

    /// Ranked view: stable sort by descending count, cut to `top` entries.
    fn ranked(self, denominator: usize, top: usize) -> Vec<LabelCount> {
        let mut entries = self.entries;
        // sort_by is stable: ties keep insertion order
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(top);
        with_percentages(entries, denominator)
    }

    /// Unranked view: insertion order, no cut.
    fn in_order(self, denominator: usize) -> Vec<LabelCount> {
        with_percentages(self.entries, denominator)
    }
}

fn with_percentages(entries: Vec<(String, usize)>, denominator: usize) -> Vec<LabelCount> {
    if denominator == 0 {
        return Vec::new();
    }
    entries
        .into_iter()
        .map(|(label, count)| LabelCount {
            label,
            count,
            percentage: 100.0 * count as f64 / denominator as f64,
        })
        .collect()
}
