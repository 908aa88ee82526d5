use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One position held, as extracted from a profile's experience section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub duration: String,
}

/// One education entry: where, and what credential.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub credential: String,
}

/// A single extracted profile, immutable once produced by a source.
///
/// `url` is the only required field. Everything else defaults to an empty
/// string or sequence — downstream aggregation does emptiness checks, never
/// null checks, and a partially-populated audit JSON round-trips cleanly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub url: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub about: String,
    /// Present in the model but never populated by the page source.
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    /// Insertion order from the source; duplicates possible.
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub posts: Vec<String>,
    #[serde(default = "Utc::now")]
    pub captured_at: DateTime<Utc>,
}

impl ProfileRecord {
    /// Creates an empty record for `url`, stamped with the capture time.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            name: String::new(),
            headline: String::new(),
            location: String::new(),
            about: String::new(),
            industry: String::new(),
            experience: Vec::new(),
            education: Vec::new(),
            skills: Vec::new(),
            posts: Vec::new(),
            captured_at: Utc::now(),
        }
    }
}
