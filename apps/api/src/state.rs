use std::sync::Arc;

use crate::generation::templates::LocaleTemplates;
use crate::llm_client::CompletionProvider;
use crate::render::DocumentRenderer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Completion provider. Production: `LlmClient` against the OpenAI chat API.
    pub llm: Arc<dyn CompletionProvider>,
    /// Localized instruction preambles, built once at startup and never mutated.
    pub templates: Arc<LocaleTemplates>,
    /// Binary document renderer. Production: `PdfRenderer`.
    pub renderer: Arc<dyn DocumentRenderer>,
}
