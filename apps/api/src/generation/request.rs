//! Request model and validation for the document generation API.
//!
//! One wire shape serves all three operations. Each `OperationKind` carries
//! its required-field set as data, so validation and prompt assembly stay
//! single-sourced instead of forking per endpoint.

use serde::Deserialize;

use crate::errors::AppError;
use crate::generation::templates;

// ────────────────────────────────────────────────────────────────────────────
// Operation kinds
// ────────────────────────────────────────────────────────────────────────────

/// The three document generation operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Contract,
    NoticeAnalysis,
    Filing,
}

impl OperationKind {
    /// Fields that must be present and non-empty for this operation.
    pub fn required_fields(self) -> &'static [RequestField] {
        match self {
            OperationKind::Contract => &[RequestField::Template, RequestField::BusinessDetails],
            OperationKind::NoticeAnalysis => &[RequestField::Notice],
            OperationKind::Filing => &[RequestField::FilingType, RequestField::BusinessDetails],
        }
    }
}

/// Request fields that participate in validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestField {
    Template,
    BusinessDetails,
    FilingType,
    Notice,
}

impl RequestField {
    /// Human-readable name used in validation error messages.
    pub fn label(self) -> &'static str {
        match self {
            RequestField::Template => "template",
            RequestField::BusinessDetails => "business details",
            RequestField::FilingType => "filing type",
            RequestField::Notice => "notice text",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Request body
// ────────────────────────────────────────────────────────────────────────────

/// Request body shared by all generation endpoints.
///
/// Which fields are required depends on the operation; everything else is
/// optional context and must never cause a failure when absent. Blank or
/// whitespace-only strings count as absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DocumentRequest {
    pub template: Option<String>,
    pub business_details: Option<String>,
    pub filing_type: Option<String>,
    pub notice: Option<String>,
    pub generate_pdf: bool,
    pub language: Option<String>,
    pub document_type: Option<String>,
    pub jurisdiction: Option<String>,
}

impl DocumentRequest {
    /// Returns the trimmed value of `field`, or `None` when absent or blank.
    pub fn field(&self, field: RequestField) -> Option<&str> {
        let value = match field {
            RequestField::Template => &self.template,
            RequestField::BusinessDetails => &self.business_details,
            RequestField::FilingType => &self.filing_type,
            RequestField::Notice => &self.notice,
        };
        non_blank(value)
    }

    /// The request language, falling back to the default when absent.
    pub fn language(&self) -> &str {
        templates::resolve_language(self.language.as_deref())
    }

    pub fn document_type(&self) -> Option<&str> {
        non_blank(&self.document_type)
    }

    pub fn jurisdiction(&self) -> Option<&str> {
        non_blank(&self.jurisdiction)
    }

    /// Confirms every required field for `kind` is present and non-empty.
    /// Pure check: no side effects, no I/O.
    pub fn validate(&self, kind: OperationKind) -> Result<(), AppError> {
        let missing: Vec<&str> = kind
            .required_fields()
            .iter()
            .filter(|&&field| self.field(field).is_none())
            .map(|field| field.label())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(format!(
                "missing required fields: {}",
                missing.join(", ")
            )))
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
