//! Classify command - offline classification, nothing is stored

use cosmic_truth::api::{self, ClassifyRequest};
use cosmic_truth::output::{ClassifyResult, OutputMode};

use super::context::api_failure;

/// Classify `text` and print the verdict
pub fn classify(text: &str, mode: OutputMode) -> anyhow::Result<()> {
    let req = ClassifyRequest {
        text: text.to_string(),
    };
    let data = api::classify_text(&req, &mut fastrand::Rng::new()).map_err(api_failure)?;

    ClassifyResult {
        text: text.to_string(),
        verdict: data.verdict,
        explanation: data.explanation,
        fallback: data.fallback,
    }
    .render(mode);
    Ok(())
}
