//! Axum route handlers for the document generation API.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::errors::AppError;
use crate::generation::pipeline::{generate_document, DocumentOutput};
use crate::generation::request::{DocumentRequest, OperationKind};
use crate::state::AppState;

impl IntoResponse for DocumentOutput {
    fn into_response(self) -> Response {
        match self {
            DocumentOutput::Text(text) => (StatusCode::OK, text).into_response(),
            DocumentOutput::Artifact { bytes, filename } => (
                [
                    (header::CONTENT_TYPE, "application/pdf".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{filename}\""),
                    ),
                ],
                bytes,
            )
                .into_response(),
        }
    }
}

/// POST /api/v1/documents/contract
///
/// Drafts a contract from a template and business details. Returns the
/// generated text, or PDF bytes when `generatePdf` is set.
pub async fn handle_generate_contract(
    State(state): State<AppState>,
    Json(request): Json<DocumentRequest>,
) -> Result<DocumentOutput, AppError> {
    generate_document(
        OperationKind::Contract,
        request,
        state.llm.as_ref(),
        &state.templates,
        state.renderer.as_ref(),
    )
    .await
}

/// POST /api/v1/documents/notice-analysis
///
/// Summarizes a legal notice: type, obligations, deadlines, next steps.
/// Always returns text; this operation has no binary artifact.
pub async fn handle_analyze_notice(
    State(state): State<AppState>,
    Json(request): Json<DocumentRequest>,
) -> Result<DocumentOutput, AppError> {
    generate_document(
        OperationKind::NoticeAnalysis,
        request,
        state.llm.as_ref(),
        &state.templates,
        state.renderer.as_ref(),
    )
    .await
}

/// POST /api/v1/documents/filing
///
/// Prepares a filing document of the requested type. Returns the generated
/// text, or PDF bytes when `generatePdf` is set.
pub async fn handle_prepare_filing(
    State(state): State<AppState>,
    Json(request): Json<DocumentRequest>,
) -> Result<DocumentOutput, AppError> {
    generate_document(
        OperationKind::Filing,
        request,
        state.llm.as_ref(),
        &state.templates,
        state.renderer.as_ref(),
    )
    .await
}
