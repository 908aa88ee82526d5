//! HTML page source — fetches a public profile page and extracts fields
//! with prioritized CSS selector chains.
//!
//! Profile pages change markup frequently and render differently per
//! variant, so every field is resolved against an ordered list of
//! selectors: first non-empty match wins, and a chain that strikes out
//! yields the field's empty default rather than an error.

use std::time::Duration;

use async_trait::async_trait;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::models::profile::{EducationEntry, ExperienceEntry, ProfileRecord};
use crate::source::{ProfileSource, SourceError};

const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

const EXPERIENCE_CAP: usize = 5;
const EDUCATION_CAP: usize = 3;
const SKILLS_CAP: usize = 10;
const POSTS_CAP: usize = 3;
const POST_EXCERPT_CHARS: usize = 500;

// Selector chains, highest-priority first. The page ships several markup
// variants; each chain covers the ones seen in the wild.
const NAME_SELECTORS: &[&str] = &[
    "h1.text-heading-xlarge",
    "h1.top-card-layout__title",
    "h1[class*='pv-top-card']",
];
const HEADLINE_SELECTORS: &[&str] = &[
    "div.text-body-medium",
    "div.top-card-layout__headline",
    "div[class*='pv-top-card--experience-list-item']",
];
const LOCATION_SELECTORS: &[&str] = &[
    "span.text-body-small.inline",
    "span[class*='top-card__subline-item']",
];
const ABOUT_SELECTORS: &[&str] = &[
    "section[data-section='summary'] div.pv-shared-text-with-see-more",
    "section.artdeco-card div.display-flex.ph5.pv3",
    "div[class*='about'] div[class*='text']",
];
const LIST_ITEM_SELECTOR: &str = "li.artdeco-list__item";
const EXPERIENCE_TITLE_SELECTOR: &str = "div[class*='experience-item__title']";
const EXPERIENCE_ORG_SELECTOR: &str = "span[class*='experience-item__subtitle']";
const EXPERIENCE_DURATION_SELECTOR: &str = "span[class*='date-range']";
const EDUCATION_SCHOOL_SELECTOR: &str = "span[class*='education__school-name']";
const EDUCATION_DEGREE_SELECTOR: &str = "span[class*='education__degree']";
const SKILL_ITEM_SELECTOR: &str = "div[class*='skill-item']";
const SKILL_NAME_SELECTOR: &str = "span[class*='skill-name']";
const POST_ITEM_SELECTOR: &str = "div[class*='feed-shared-update-v2']";
const POST_TEXT_SELECTOR: &str = "span[class*='break-words']";

/// Profile source backed by a plain HTTP fetch and DOM queries.
pub struct PageProfileSource {
    client: reqwest::Client,
}

impl PageProfileSource {
    pub fn new() -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(FETCH_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ProfileSource for PageProfileSource {
    async fn fetch(&self, url: &str) -> Result<ProfileRecord, SourceError> {
        debug!("Fetching profile page: {url}");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }
        let body = response.text().await?;
        let document = Html::parse_document(&body);
        Ok(extract_record(url, &document))
    }
}

/// Extracts every field from a parsed document. Total over any markup:
/// missing sections produce empty defaults, never errors.
fn extract_record(url: &str, document: &Html) -> ProfileRecord {
    let mut record = ProfileRecord::new(url);
    record.name =
        resolve_text(document, NAME_SELECTORS).unwrap_or_else(|| "Unknown".to_string());
    record.headline = resolve_text(document, HEADLINE_SELECTORS).unwrap_or_default();
    record.location = resolve_location(document);
    record.about = resolve_text(document, ABOUT_SELECTORS).unwrap_or_default();
    record.experience = extract_experience(document);
    record.education = extract_education(document);
    record.skills = extract_skills(document);
    record.posts = extract_posts(document);
    record
}

/// Resolves a selector chain: selectors are tried in priority order and the
/// first non-empty text wins. A chain that matches nothing resolves to None.
fn resolve_text(document: &Html, selectors: &[&str]) -> Option<String> {
    selectors
        .iter()
        .filter_map(|s| Selector::parse(s).ok())
        .find_map(|selector| {
            document
                .select(&selector)
                .next()
                .map(element_text)
                .filter(|text| !text.is_empty())
        })
}

/// Location needs element-level filtering: the subline area mixes location
/// text with "Contact info" links.
fn resolve_location(document: &Html) -> String {
    for selector in LOCATION_SELECTORS.iter().filter_map(|s| Selector::parse(s).ok()) {
        for element in document.select(&selector) {
            let text = element_text(element);
            if !text.is_empty() && !text.starts_with("Contact") {
                return text;
            }
        }
    }
    String::new()
}

fn extract_experience(document: &Html) -> Vec<ExperienceEntry> {
    if !section_present(document, "#experience") {
        return Vec::new();
    }
    let Some(items) = select_all(document, LIST_ITEM_SELECTOR) else {
        return Vec::new();
    };
    items
        .into_iter()
        .take(EXPERIENCE_CAP)
        .filter_map(|item| {
            Some(ExperienceEntry {
                title: child_text(item, EXPERIENCE_TITLE_SELECTOR)?,
                organization: child_text(item, EXPERIENCE_ORG_SELECTOR)?,
                duration: child_text(item, EXPERIENCE_DURATION_SELECTOR)?,
            })
        })
        .collect()
}

fn extract_education(document: &Html) -> Vec<EducationEntry> {
    if !section_present(document, "#education") {
        return Vec::new();
    }
    let Some(items) = select_all(document, LIST_ITEM_SELECTOR) else {
        return Vec::new();
    };
    items
        .into_iter()
        .take(EDUCATION_CAP)
        .filter_map(|item| {
            Some(EducationEntry {
                institution: child_text(item, EDUCATION_SCHOOL_SELECTOR)?,
                credential: child_text(item, EDUCATION_DEGREE_SELECTOR)?,
            })
        })
        .collect()
}

fn extract_skills(document: &Html) -> Vec<String> {
    if !section_present(document, "#skills") {
        return Vec::new();
    }
    let Some(items) = select_all(document, SKILL_ITEM_SELECTOR) else {
        return Vec::new();
    };
    items
        .into_iter()
        .take(SKILLS_CAP)
        .filter_map(|item| child_text(item, SKILL_NAME_SELECTOR))
        .collect()
}

fn extract_posts(document: &Html) -> Vec<String> {
    if !section_present(document, "#activity") {
        return Vec::new();
    }
    let Some(items) = select_all(document, POST_ITEM_SELECTOR) else {
        return Vec::new();
    };
    items
        .into_iter()
        .take(POSTS_CAP)
        .filter_map(|item| child_text(item, POST_TEXT_SELECTOR))
        .map(|text| excerpt(&text, POST_EXCERPT_CHARS))
        .collect()
}

fn section_present(document: &Html, css: &str) -> bool {
    Selector::parse(css)
        .map(|selector| document.select(&selector).next().is_some())
        .unwrap_or(false)
}

fn select_all<'a>(document: &'a Html, css: &str) -> Option<Vec<ElementRef<'a>>> {
    let selector = Selector::parse(css).ok()?;
    Some(document.select(&selector).collect())
}

fn child_text(item: ElementRef<'_>, css: &str) -> Option<String> {
    let selector = Selector::parse(css).ok()?;
    item.select(&selector)
        .next()
        .map(element_text)
        .filter(|text| !text.is_empty())
}

/// Joins an element's text nodes and collapses internal whitespace.
fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Char-boundary-safe truncation for post excerpts.
fn excerpt(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://www.linkedin.com/in/fixture/";

    #[test]
    fn test_resolve_text_prefers_first_matching_selector() {
        let document = Html::parse_document(
            r#"<html><body>
                <h1 class="text-heading-xlarge">Sarah Chen</h1>
                <h1 class="top-card-layout__title">Wrong Variant</h1>
            </body></html>"#,
        );
        assert_eq!(resolve_text(&document, NAME_SELECTORS).unwrap(), "Sarah Chen");
    }

    #[test]
    fn test_resolve_text_falls_back_down_the_chain() {
        let document = Html::parse_document(
            r#"<html><body>
                <h1 class="top-card-layout__title">Fallback Name</h1>
            </body></html>"#,
        );
        assert_eq!(
            resolve_text(&document, NAME_SELECTORS).unwrap(),
            "Fallback Name"
        );
    }

    #[test]
    fn test_resolve_text_empty_chain_yields_none() {
        let document = Html::parse_document("<html><body><p>nothing here</p></body></html>");
        assert!(resolve_text(&document, NAME_SELECTORS).is_none());
    }

    #[test]
    fn test_missing_name_defaults_to_unknown() {
        let document = Html::parse_document("<html><body></body></html>");
        let record = extract_record(URL, &document);
        assert_eq!(record.name, "Unknown");
        assert!(record.headline.is_empty());
    }

    #[test]
    fn test_location_skips_contact_entries() {
        let document = Html::parse_document(
            r#"<html><body>
                <span class="text-body-small inline">Contact info</span>
                <span class="text-body-small inline">Berlin, Germany</span>
            </body></html>"#,
        );
        assert_eq!(resolve_location(&document), "Berlin, Germany");
    }

    #[test]
    fn test_experience_extraction_with_cap() {
        let items: String = (0..7)
            .map(|i| {
                format!(
                    r#"<li class="artdeco-list__item">
                        <div class="experience-item__title">Role {i}</div>
                        <span class="experience-item__subtitle">Org {i}</span>
                        <span class="date-range">2020 - 2021</span>
                    </li>"#
                )
            })
            .collect();
        let html = format!(
            r#"<html><body><section id="experience"></section><ul>{items}</ul></body></html>"#
        );
        let document = Html::parse_document(&html);

        let experience = extract_experience(&document);
        assert_eq!(experience.len(), EXPERIENCE_CAP);
        assert_eq!(experience[0].title, "Role 0");
        assert_eq!(experience[0].organization, "Org 0");
    }

    #[test]
    fn test_incomplete_experience_items_are_skipped() {
        // Second item lacks a duration: dropped, not half-filled
        let html = r#"<html><body>
            <section id="experience"></section>
            <li class="artdeco-list__item">
                <div class="experience-item__title">VP Engineering</div>
                <span class="experience-item__subtitle">TechCorp</span>
                <span class="date-range">2020 - Present</span>
            </li>
            <li class="artdeco-list__item">
                <div class="experience-item__title">Advisor</div>
                <span class="experience-item__subtitle">StartupXYZ</span>
            </li>
        </body></html>"#;
        let document = Html::parse_document(html);

        let experience = extract_experience(&document);
        assert_eq!(experience.len(), 1);
        assert_eq!(experience[0].title, "VP Engineering");
    }

    #[test]
    fn test_experience_empty_without_section_marker() {
        // List items present, but no #experience anchor: treated as absent
        let html = r#"<html><body>
            <li class="artdeco-list__item">
                <div class="experience-item__title">Ghost Role</div>
                <span class="experience-item__subtitle">Nowhere</span>
                <span class="date-range">2019</span>
            </li>
        </body></html>"#;
        let document = Html::parse_document(html);
        assert!(extract_experience(&document).is_empty());
    }

    #[test]
    fn test_skills_capped_at_ten() {
        let items: String = (0..14)
            .map(|i| {
                format!(
                    r#"<div class="skill-item"><span class="skill-name">Skill {i}</span></div>"#
                )
            })
            .collect();
        let html =
            format!(r#"<html><body><section id="skills"></section>{items}</body></html>"#);
        let document = Html::parse_document(&html);

        let skills = extract_skills(&document);
        assert_eq!(skills.len(), SKILLS_CAP);
        assert_eq!(skills[0], "Skill 0");
    }

    #[test]
    fn test_posts_truncated_to_excerpt_length() {
        let long_post = "x".repeat(900);
        let html = format!(
            r#"<html><body>
                <section id="activity"></section>
                <div class="feed-shared-update-v2">
                    <span class="break-words">{long_post}</span>
                </div>
            </body></html>"#
        );
        let document = Html::parse_document(&html);

        let posts = extract_posts(&document);
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].chars().count(), POST_EXCERPT_CHARS);
    }

    #[test]
    fn test_full_document_extraction() {
        let html = r#"<html><body>
            <h1 class="text-heading-xlarge">Sarah Chen</h1>
            <div class="text-body-medium">VP of Engineering at TechCorp | Building AI</div>
            <span class="text-body-small inline">San Francisco Bay Area</span>
            <section id="experience"></section>
            <li class="artdeco-list__item">
                <div class="experience-item__title">VP Engineering</div>
                <span class="experience-item__subtitle">TechCorp</span>
                <span class="date-range">2020 - Present</span>
            </li>
            <section id="skills"></section>
            <div class="skill-item"><span class="skill-name">Leadership</span></div>
            <div class="skill-item"><span class="skill-name">Cloud Architecture</span></div>
        </body></html>"#;
        let document = Html::parse_document(html);

        let record = extract_record(URL, &document);
        assert_eq!(record.url, URL);
        assert_eq!(record.name, "Sarah Chen");
        assert_eq!(
            record.headline,
            "VP of Engineering at TechCorp | Building AI"
        );
        assert_eq!(record.location, "San Francisco Bay Area");
        assert_eq!(record.experience.len(), 1);
        assert_eq!(record.skills, vec!["Leadership", "Cloud Architecture"]);
        assert!(record.industry.is_empty());
        assert!(record.education.is_empty());
        assert!(record.posts.is_empty());
    }

    #[test]
    fn test_excerpt_respects_char_boundaries() {
        // Multi-byte characters must not be split mid-codepoint
        let text = "Führungskräfte".repeat(100);
        let truncated = excerpt(&text, 500);
        assert_eq!(truncated.chars().count(), 500);
    }
}
