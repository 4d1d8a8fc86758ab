//! Sequential render run over the fixed shot list.
//!
//! Two shots of the same outfit are rendered one after the other; a failed
//! shot is reported and recorded but never blocks the remaining one.

use crate::error::{LookGenError, Result};
use crate::image::{ImageProvider, ImageRequest, OutputSpec};
use std::fs;
use std::path::{Path, PathBuf};

/// Prompt shared by both shots.
pub const PROMPT: &str = "Create a realistic illustration (photoreal-leaning illustration) of an adult Asian woman in an everyday outfit. \
    She wears tight skinny blue jeans and a simple white top. \
    Setting: natural daylight street scene. \
    Pose/composition: 3/4 side walking, framed from knees to head, relaxed expression. \
    Non-sexualized and fully clothed. Avoid nudity, erotic or explicit content, minors, or fetish framing.";

/// Directory the rendered files land in, relative to the working directory.
pub const OUTPUT_DIR: &str = "outputs";

/// Returns the fixed shot list: a square reference and a 3:4 portrait crop,
/// both under `out_dir`.
pub fn output_specs(out_dir: &Path) -> Vec<OutputSpec> {
    vec![
        OutputSpec::new("1024x1024", out_dir.join("woman_jeans_1024.png")),
        OutputSpec::new("1024x1365", out_dir.join("woman_jeans_3x4.png")),
    ]
}

/// Outcome of one full pass over the shot list.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Files written, in shot order.
    pub saved: Vec<PathBuf>,
    /// Sizes that failed, with the reason.
    pub failed: Vec<(String, LookGenError)>,
}

impl RunReport {
    /// True only when every shot was rendered and written.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Renders every output in `outputs`, in order, continuing past failures.
///
/// Creates `out_dir` first; failure there is fatal since nothing could be
/// written. Progress goes to stdout and per-shot failures to stderr, ending
/// with a one-line summary. The returned report decides the exit status.
pub async fn run(
    provider: &dyn ImageProvider,
    prompt: &str,
    out_dir: &Path,
    outputs: &[OutputSpec],
) -> Result<RunReport> {
    fs::create_dir_all(out_dir)?;

    tracing::debug!(
        provider = provider.name(),
        out_dir = %out_dir.display(),
        shots = outputs.len(),
        "starting render run"
    );

    let mut report = RunReport::default();
    for spec in outputs {
        println!("Generating image size {} ...", spec.size);
        match render_one(provider, prompt, spec).await {
            Ok(()) => {
                println!("Saved: {}", spec.file_path.display());
                report.saved.push(spec.file_path.clone());
            }
            Err(err) => {
                eprintln!("Failed to generate {}: {}", spec.size, err);
                report.failed.push((spec.size.clone(), err));
            }
        }
    }

    if report.is_success() {
        println!("All images generated successfully.");
    } else {
        println!("Completed with some errors. See logs above.");
    }

    Ok(report)
}

async fn render_one(
    provider: &dyn ImageProvider,
    prompt: &str,
    spec: &OutputSpec,
) -> Result<()> {
    let request = ImageRequest::new(prompt, &spec.size);
    let image = provider.generate(&request).await?;
    image.save(&spec.file_path)?;
    tracing::debug!(
        size = %spec.size,
        bytes = image.size(),
        duration_ms = image.duration_ms,
        "shot rendered"
    );
    Ok(())
}
