use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::{
    catalog::PromptRecord,
    config::Config,
    error::Result,
    gemini::ImageGenerator,
    models::ImagePayload,
    writer,
};

#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub output_dir: PathBuf,
    pub delay: Duration,
}

impl From<&Config> for BatchOptions {
    fn from(config: &Config) -> Self {
        BatchOptions {
            output_dir: config.output_dir.clone(),
            delay: config.delay,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub successful: usize,
    pub failed: usize,
}

/// Drives the catalog through the generator and the writer, one record at a
/// time and in order. A failing record is logged and skipped; only a missing
/// output directory aborts the batch. A fixed delay separates consecutive
/// records (success or failure alike) and is not adaptive to throttling
/// responses (a 429 is skipped like any other failure).
pub async fn run(
    generator: &dyn ImageGenerator,
    records: &[PromptRecord],
    options: &BatchOptions,
) -> Result<BatchSummary> {
    fs::create_dir_all(&options.output_dir)?;

    log::info!(
        "🎨 Generating {} images into {}",
        records.len(),
        options.output_dir.display()
    );

    let mut summary = BatchSummary::default();
    let mut previous: Option<ImagePayload> = None;

    for (idx, record) in records.iter().enumerate() {
        log::info!("Generating: {}...", record.name);

        let reference = if record.chain_previous {
            previous.as_ref()
        } else {
            None
        };

        match generate_and_save(generator, record, reference, &options.output_dir).await {
            Ok(payload) => {
                previous = Some(payload);
                summary.successful += 1;
            }
            Err(e) => {
                log::warn!("Failed: {}: {}", record.name, e);
                // A broken chain restarts from scratch on the next frame.
                previous = None;
                summary.failed += 1;
            }
        }

        // Rate limiting; nothing follows the last record, so no sleep there.
        if idx + 1 < records.len() {
            tokio::time::sleep(options.delay).await;
        }
    }

    Ok(summary)
}

async fn generate_and_save(
    generator: &dyn ImageGenerator,
    record: &PromptRecord,
    reference: Option<&ImagePayload>,
    output_dir: &std::path::Path,
) -> Result<ImagePayload> {
    let payload = generator
        .generate(&record.prompt(), record.aspect_ratio, reference)
        .await?;
    writer::save_image(output_dir, record.name, &payload)?;
    Ok(payload)
}
