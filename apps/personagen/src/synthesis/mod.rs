//! Persona synthesis — folds the per-profile summaries and the evidence
//! bundle into the persona prompt and runs the generation call.

pub mod prompts;

use tracing::info;

use crate::errors::AppError;
use crate::evidence::report::EvidenceBundle;
use crate::llm_client::TextGenerator;
use crate::models::profile::ProfileRecord;
use crate::synthesis::prompts::{SYNTHESIS_PROMPT_TEMPLATE, SYNTHESIS_SYSTEM};

const ABOUT_CHARS: usize = 500;
const POST_CHARS: usize = 200;
const SUMMARY_EXPERIENCE: usize = 3;
const SUMMARY_EDUCATION: usize = 2;
const SUMMARY_SKILLS: usize = 10;
const SUMMARY_POSTS: usize = 2;

/// Builds the synthesis prompt and returns the generated persona document.
pub async fn synthesize_persona(
    generator: &dyn TextGenerator,
    records: &[ProfileRecord],
    bundle: &EvidenceBundle,
    persona_name: &str,
) -> Result<String, AppError> {
    let prompt = build_synthesis_prompt(records, bundle, persona_name);
    info!(
        "Synthesizing persona '{persona_name}' from {} profiles",
        records.len()
    );
    Ok(generator.generate(&prompt, SYNTHESIS_SYSTEM).await?)
}

fn build_synthesis_prompt(
    records: &[ProfileRecord],
    bundle: &EvidenceBundle,
    persona_name: &str,
) -> String {
    SYNTHESIS_PROMPT_TEMPLATE
        .replace("{profile_count}", &records.len().to_string())
        .replace("{persona_name}", persona_name)
        .replace("{profiles_summary}", &summarize_profiles(records))
        .replace("{evidence}", &bundle.render())
}

/// Structured markdown summary of every profile, joined by `---` rules.
fn summarize_profiles(records: &[ProfileRecord]) -> String {
    records
        .iter()
        .enumerate()
        .map(|(position, record)| summarize_profile(position + 1, record))
        .collect::<Vec<_>>()
        .join("\n---\n")
}

fn summarize_profile(position: usize, record: &ProfileRecord) -> String {
    let name = if record.name.is_empty() {
        format!("Profile {position}")
    } else {
        record.name.clone()
    };
    let headline = non_empty_or(&record.headline, "No headline");
    let location = non_empty_or(&record.location, "Unknown location");
    let about = if record.about.is_empty() {
        "No about section".to_string()
    } else {
        truncate_chars(&record.about, ABOUT_CHARS)
    };

    let mut summary = format!(
        "\n## Profile {position}: {name}\n\n\
        **Headline**: {headline}\n\
        **Location**: {location}\n\n\
        **About**: {about}\n"
    );

    if !record.experience.is_empty() {
        summary.push_str("\n**Recent Experience**:\n");
        for entry in record.experience.iter().take(SUMMARY_EXPERIENCE) {
            summary.push_str(&format!(
                "- {} at {} ({})\n",
                entry.title, entry.organization, entry.duration
            ));
        }
    }

    if !record.education.is_empty() {
        summary.push_str("\n**Education**:\n");
        for entry in record.education.iter().take(SUMMARY_EDUCATION) {
            summary.push_str(&format!(
                "- {} from {}\n",
                entry.credential, entry.institution
            ));
        }
    }

    if !record.skills.is_empty() {
        let skills: Vec<&str> = record
            .skills
            .iter()
            .take(SUMMARY_SKILLS)
            .map(String::as_str)
            .collect();
        summary.push_str(&format!("\n**Skills**: {}\n", skills.join(", ")));
    }

    if !record.posts.is_empty() {
        summary.push_str("\n**Recent Activity/Interests**:\n");
        for post in record.posts.iter().take(SUMMARY_POSTS) {
            summary.push_str(&format!("- {}...\n", truncate_chars(post, POST_CHARS)));
        }
    }

    summary
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evidence::report;
    use crate::models::profile::{ExperienceEntry, ProfileRecord};

    fn sample_record(name: &str, headline: &str) -> ProfileRecord {
        let mut record = ProfileRecord::new("https://www.linkedin.com/in/sample/");
        record.name = name.to_string();
        record.headline = headline.to_string();
        record.skills = vec!["Leadership".to_string(), "Python".to_string()];
        record.experience = vec![ExperienceEntry {
            title: "VP Engineering".to_string(),
            organization: "TechCorp".to_string(),
            duration: "2020 - Present".to_string(),
        }];
        record
    }

    #[test]
    fn test_prompt_carries_name_count_and_evidence() {
        let records = vec![
            sample_record("Sarah Chen", "VP Engineering | TechCorp"),
            sample_record("Raj Patel", "VP Engineering | DataCo"),
        ];
        let bundle = report::build(&records);

        let prompt = build_synthesis_prompt(&records, &bundle, "Tech Executive");

        assert!(prompt.contains("\"Tech Executive\""));
        assert!(prompt.contains("profiles of 2 individuals"));
        assert!(prompt.contains("## Profile 1: Sarah Chen"));
        assert!(prompt.contains("## Profile 2: Raj Patel"));
        assert!(prompt.contains("AGGREGATE EVIDENCE (2 profiles analyzed)"));
        assert!(prompt.contains("- VP Engineering: 2 (100%)"));
        assert!(!prompt.contains("{profiles_summary}"));
        assert!(!prompt.contains("{evidence}"));
    }

    #[test]
    fn test_summary_uses_fallbacks_for_empty_fields() {
        let record = ProfileRecord::new("https://www.linkedin.com/in/empty/");
        let summary = summarize_profile(1, &record);

        assert!(summary.contains("## Profile 1: Profile 1"));
        assert!(summary.contains("**Headline**: No headline"));
        assert!(summary.contains("**Location**: Unknown location"));
        assert!(summary.contains("**About**: No about section"));
        assert!(!summary.contains("**Recent Experience**"));
        assert!(!summary.contains("**Skills**"));
    }

    #[test]
    fn test_summary_caps_experience_entries() {
        let mut record = sample_record("Sarah Chen", "VP Engineering");
        record.experience = (0..6)
            .map(|i| ExperienceEntry {
                title: format!("Role {i}"),
                organization: format!("Org {i}"),
                duration: "2020".to_string(),
            })
            .collect();

        let summary = summarize_profile(1, &record);
        assert!(summary.contains("Role 0"));
        assert!(summary.contains("Role 2"));
        assert!(!summary.contains("Role 3"));
    }

    #[test]
    fn test_summary_truncates_long_about() {
        let mut record = sample_record("Sarah Chen", "VP Engineering");
        record.about = "a".repeat(900);
        let summary = summarize_profile(1, &record);
        assert!(!summary.contains(&"a".repeat(ABOUT_CHARS + 1)));
        assert!(summary.contains(&"a".repeat(ABOUT_CHARS)));
    }

    #[test]
    fn test_profiles_joined_by_rule() {
        let records = vec![
            sample_record("A", "X | Y"),
            sample_record("B", "X | Z"),
        ];
        let joined = summarize_profiles(&records);
        assert_eq!(joined.matches("\n---\n").count(), 1);
    }
}
