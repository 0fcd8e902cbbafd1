//! The generation pipeline shared by all three operations.
//!
//! Flow: validate → select preamble → assemble prompt → invoke provider →
//! plain text, or a PDF artifact when the request asks for one and the
//! operation offers it. Each request runs end-to-end on its own; the only
//! shared input is the read-only preamble table.

use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;
use crate::generation::artifact;
use crate::generation::prompts::build_prompt;
use crate::generation::request::{DocumentRequest, OperationKind};
use crate::generation::templates::LocaleTemplates;
use crate::llm_client::CompletionProvider;
use crate::render::DocumentRenderer;

/// Successful pipeline result: generated text, or a binary artifact with a
/// suggested download filename.
#[derive(Debug)]
pub enum DocumentOutput {
    Text(String),
    Artifact {
        bytes: Bytes,
        filename: &'static str,
    },
}

/// Runs one generation request end-to-end.
///
/// No recovery happens here: validation failures reject before any provider
/// traffic, and provider or renderer failures propagate to the boundary as-is.
/// Either the full text/artifact is produced or nothing is.
pub async fn generate_document(
    kind: OperationKind,
    request: DocumentRequest,
    llm: &dyn CompletionProvider,
    templates: &LocaleTemplates,
    renderer: &dyn DocumentRenderer,
) -> Result<DocumentOutput, AppError> {
    request.validate(kind)?;

    let language = request.language();
    let preamble = templates.preamble(language);
    let prompt = build_prompt(preamble, kind, &request);

    info!("Generating {kind:?} document (language: {language})");

    let text = llm
        .complete(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("completion request failed: {e}")))?;

    if request.generate_pdf {
        if let Some(output) = artifact::render_artifact(kind, &request, &text, renderer)? {
            return Ok(output);
        }
    }

    Ok(DocumentOutput::Text(text))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
