//! Review boundary for the electrical drawing review assistant.
//!
//! The real backend (text extraction + AI compliance review) is not built
//! yet. This crate owns the types of that boundary and a stubbed
//! [`submit_review`] that returns fixed placeholder strings, so the UI can
//! be exercised end to end before the backend lands.

use std::path::Path;

use thiserror::Error;

/// Shown in the extracted-text panel until real extraction is wired up.
pub const EXTRACTED_TEXT_PLACEHOLDER: &str = "[extraction pending] Text \
extraction is not connected yet. Once the review backend is available, the \
text recognized in the submitted drawing will appear here.";

/// Shown in the review panel until the AI review is wired up.
pub const REVIEW_VERDICT_PLACEHOLDER: &str = "[review pending] Compliance \
review is not connected yet. Once the review backend is available, findings \
and a verdict for the submitted drawing will appear here.";

/// Drawing formats the file picker offers for selection.
///
/// Advisory only: the list filters what the picker highlights as
/// selectable, and is never enforced once a path has been chosen (a path
/// supplied on the command line bypasses it entirely).
pub const SUPPORTED_EXTENSIONS: &[&str] = &["pdf", "png", "jpg", "jpeg", "webp", "dwg", "dxf"];

/// What a completed review produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewOutcome {
    /// Text recognized in the drawing.
    pub extracted_text: String,
    /// Compliance findings and verdict.
    pub verdict: String,
}

/// Failure modes of the review boundary.
///
/// The eventual backend call can fail in ways the UI must distinguish;
/// the stub never constructs any of these, so today the submit path is
/// infallible.
#[derive(Error, Debug)]
pub enum ReviewError {
    #[error("review backend unreachable: {0}")]
    Backend(String),
    #[error("text extraction failed: {0}")]
    Extraction(String),
    #[error("compliance review failed: {0}")]
    Review(String),
}

/// Submit a drawing for review.
///
/// Stub: ignores the file entirely — no existence check, no content
/// inspection, no extension validation — and returns the placeholder
/// outcome. Always `Ok`.
pub fn submit_review(drawing: &Path) -> Result<ReviewOutcome, ReviewError> {
    tracing::info!(drawing = %drawing.display(), "submitting drawing for stub review");
    Ok(ReviewOutcome {
        extracted_text: EXTRACTED_TEXT_PLACEHOLDER.to_string(),
        verdict: REVIEW_VERDICT_PLACEHOLDER.to_string(),
    })
}

/// Whether a path carries one of the advertised drawing extensions.
///
/// Case-insensitive; `false` for paths with no extension.
pub fn is_supported_drawing(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.iter().any(|s| ext.eq_ignore_ascii_case(s)))
        .unwrap_or(false)
}
