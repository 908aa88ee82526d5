//! Command-line surface.

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::warn;
use url::Url;

/// Generates a composite persona document from public profile URLs.
#[derive(Debug, Parser)]
#[command(name = "personagen", version, about)]
pub struct Args {
    /// Path to a file with profile URLs (one per line) or a comma-separated list.
    #[arg(long)]
    pub urls: String,

    /// Output directory for generated artifacts.
    #[arg(long, default_value = "./output")]
    pub output: PathBuf,

    /// Name for the generated persona.
    #[arg(long, default_value = "composite_persona")]
    pub name: String,

    /// Model identifier override (falls back to PERSONA_MODEL, then the default).
    #[arg(long)]
    pub model: Option<String>,
}

/// Expands the `--urls` argument into a validated URL list.
///
/// A value naming an existing file is read line by line (blank lines and
/// `#` comments skipped); anything else is treated as a comma-separated
/// list. Entries that are not absolute profile URLs are warned about and
/// dropped.
pub fn parse_urls(input: &str) -> std::io::Result<Vec<String>> {
    let candidates: Vec<String> = if Path::new(input).is_file() {
        std::fs::read_to_string(input)?
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect()
    } else {
        input
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect()
    };

    Ok(candidates
        .into_iter()
        .filter(|candidate| {
            if is_profile_url(candidate) {
                true
            } else {
                warn!("Skipping invalid profile URL: {candidate}");
                false
            }
        })
        .collect())
}

/// Accepts absolute URLs pointing at a public profile path.
fn is_profile_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => {
            url.host_str()
                .map(|host| host == "linkedin.com" || host.ends_with(".linkedin.com"))
                .unwrap_or(false)
                && url.path().starts_with("/in/")
        }
        Err(_) => false,
    }
}
