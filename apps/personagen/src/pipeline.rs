//! Pipeline orchestration — scrape, aggregate, synthesize, persist.
//!
//! Flow: fetch each URL through the profile source (failures logged and
//! skipped) → persist the raw records as the audit artifact → build the
//! evidence bundle → synthesize the persona → write the markdown document.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::errors::AppError;
use crate::evidence::report;
use crate::llm_client::TextGenerator;
use crate::models::profile::ProfileRecord;
use crate::source::ProfileSource;
use crate::synthesis::synthesize_persona;

/// Paths and counts from one pipeline run.
#[derive(Debug)]
pub struct PipelineOutput {
    pub persona_path: PathBuf,
    pub profiles_path: PathBuf,
    pub profile_count: usize,
}

/// Runs the full persona generation pipeline.
///
/// Per-URL fetch failures are logged and skipped; the run fails only when
/// no profile at all could be extracted. The raw records are written before
/// the generation call so the audit trail survives a failed synthesis.
pub async fn generate_from_urls(
    source: &dyn ProfileSource,
    generator: &dyn TextGenerator,
    urls: &[String],
    output_dir: &Path,
    persona_name: &str,
) -> Result<PipelineOutput, AppError> {
    std::fs::create_dir_all(output_dir)?;

    info!("Processing {} profile URLs", urls.len());
    let mut records: Vec<ProfileRecord> = Vec::new();
    for (position, url) in urls.iter().enumerate() {
        info!("[{}/{}] Fetching {url}", position + 1, urls.len());
        match source.fetch(url).await {
            Ok(record) => {
                info!("Extracted profile: {}", record.name);
                records.push(record);
            }
            Err(e) => warn!("Skipping {url}: {e}"),
        }
    }

    if records.is_empty() {
        return Err(AppError::Validation(
            "No profiles could be extracted from the supplied URLs".to_string(),
        ));
    }
    info!("Extracted {} of {} profiles", records.len(), urls.len());

    let profiles_path = output_dir.join(format!("{persona_name}_profiles.json"));
    let raw = serde_json::to_string_pretty(&records)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize records: {e}")))?;
    std::fs::write(&profiles_path, raw)?;
    info!("Saved raw profile data: {}", profiles_path.display());

    let bundle = report::build(&records);
    info!(
        "Evidence bundle built: {} profiles, confidence {:.1}/10",
        bundle.profile_count, bundle.confidence
    );

    let persona = synthesize_persona(generator, &records, &bundle, persona_name).await?;

    let persona_path = output_dir.join(format!("{persona_name}.md"));
    std::fs::write(&persona_path, persona)?;
    info!("Persona document written: {}", persona_path.display());

    Ok(PipelineOutput {
        persona_path,
        profiles_path,
        profile_count: records.len(),
    })
}
