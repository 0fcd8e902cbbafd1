//! Artifact formatting: builds render metadata from the originating request
//! and delegates byte production to the document renderer.
//!
//! This module is the only constructor of `RenderMetadata`.

use bytes::Bytes;

use crate::errors::AppError;
use crate::generation::pipeline::DocumentOutput;
use crate::generation::request::{DocumentRequest, OperationKind, RequestField};
use crate::render::{DocumentRenderer, RenderMetadata};

/// Per-kind artifact labels. Notice analysis has no entry: binary rendering
/// is offered for contracts and filings only.
#[derive(Debug, Clone, Copy)]
pub struct ArtifactSpec {
    /// Suggested download filename.
    pub filename: &'static str,
    /// Title prefix, completed with the document or filing type when supplied.
    pub title_label: &'static str,
    pub subject: &'static str,
    /// Fixed keyword tag identifying the kind.
    pub kind_tag: &'static str,
}

/// Returns the artifact labels for `kind`, or `None` when the operation has
/// no binary path.
pub fn spec_for(kind: OperationKind) -> Option<ArtifactSpec> {
    match kind {
        OperationKind::Contract => Some(ArtifactSpec {
            filename: "contract.pdf",
            title_label: "Legal Contract",
            subject: "Legal Contract Document",
            kind_tag: "contract",
        }),
        OperationKind::Filing => Some(ArtifactSpec {
            filename: "filing.pdf",
            title_label: "Filing Document",
            subject: "Filing Document",
            kind_tag: "filing",
        }),
        OperationKind::NoticeAnalysis => None,
    }
}

/// The request field that completes the artifact title for `kind`.
fn title_detail(kind: OperationKind, request: &DocumentRequest) -> Option<&str> {
    match kind {
        OperationKind::Contract => request.document_type(),
        OperationKind::Filing => request.field(RequestField::FilingType),
        OperationKind::NoticeAnalysis => None,
    }
}

/// Derives the render metadata for one artifact. Deterministic: the same
/// request always yields the same metadata.
pub fn build_metadata(
    spec: &ArtifactSpec,
    kind: OperationKind,
    request: &DocumentRequest,
) -> RenderMetadata {
    let title = match title_detail(kind, request) {
        Some(detail) => format!("{} - {}", spec.title_label, detail),
        None => spec.title_label.to_string(),
    };

    let mut keywords = vec![spec.kind_tag, "legal"];
    if let Some(jurisdiction) = request.jurisdiction() {
        keywords.push(jurisdiction);
    }

    RenderMetadata {
        title,
        language: request.language().to_string(),
        subject: spec.subject.to_string(),
        keywords: keywords.join(", "),
    }
}

/// Renders `text` to a binary artifact when `kind` offers one.
/// Returns `Ok(None)` for kinds without a binary path.
pub fn render_artifact(
    kind: OperationKind,
    request: &DocumentRequest,
    text: &str,
    renderer: &dyn DocumentRenderer,
) -> Result<Option<DocumentOutput>, AppError> {
    let Some(spec) = spec_for(kind) else {
        return Ok(None);
    };

    let metadata = build_metadata(&spec, kind, request);
    let bytes = renderer
        .render(text, &metadata)
        .map_err(|e| AppError::Render(format!("failed to render {}: {e}", spec.filename)))?;

    Ok(Some(DocumentOutput::Artifact {
        bytes: Bytes::from(bytes),
        filename: spec.filename,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
