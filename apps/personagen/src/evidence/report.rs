//! Evidence Report Builder — merges the analyzer and scorer outputs into
//! the bundle embedded in the synthesis prompt.
//!
//! The bundle is recomputed from scratch on every call and never persisted;
//! the caller keeps the raw `ProfileRecord`s as the audit trail instead.

use serde::{Deserialize, Serialize};

use crate::evidence::confidence;
use crate::evidence::frequency::{self, Distributions, LabelCount};
use crate::models::profile::ProfileRecord;

/// Everything the synthesis prompt needs from the aggregation pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvidenceBundle {
    pub profile_count: usize,
    pub distributions: Distributions,
    /// Data-quality confidence in [0.0, 10.0].
    pub confidence: f64,
}

/// Aggregates a batch of records into a single evidence bundle.
///
/// The analyzer and scorer read the same borrowed slice independently.
/// An empty batch is a state, not an error: all distributions come back
/// empty and the confidence score is 0.0 — callers distinguish "no data"
/// from "low-quality data" via `profile_count`.
pub fn build(records: &[ProfileRecord]) -> EvidenceBundle {
    EvidenceBundle {
        profile_count: records.len(),
        distributions: frequency::analyze(records),
        confidence: confidence::score(records),
    }
}

impl EvidenceBundle {
    /// Renders the bundle as the plain-text evidence section of the
    /// synthesis prompt: one `label: count (pct%)` row per entry, then the
    /// confidence line. Institution counts stay out of the default view.
    pub fn render(&self) -> String {
        let mut out = format!("AGGREGATE EVIDENCE ({} profiles analyzed)\n", self.profile_count);
        render_dimension(&mut out, "Common titles", &self.distributions.titles);
        render_dimension(&mut out, "Industries", &self.distributions.industries);
        render_dimension(&mut out, "Locations", &self.distributions.locations);
        render_dimension(
            &mut out,
            "Skills (share of profiles listing each)",
            &self.distributions.skills,
        );
        render_dimension(
            &mut out,
            "Education credentials",
            &self.distributions.credentials,
        );
        out.push_str(&format!(
            "\nData quality confidence: {:.1}/10\n",
            self.confidence
        ));
        out
    }
}

fn render_dimension(out: &mut String, heading: &str, entries: &[LabelCount]) {
    if entries.is_empty() {
        return;
    }
    out.push_str(&format!("\n{heading}:\n"));
    for entry in entries {
        out.push_str(&format!(
            "- {}: {} ({}%)\n",
            entry.label,
            entry.count,
            entry.display_percentage()
        ));
    }
}
