//! Prompt assembly for the generation pipeline.
//!
//! The prompt layout is a format contract: preamble, operation body, fixed
//! formatting guidance, then an "Additional Information" block, in that
//! order. Fields absent from the request produce no line in the block at
//! all, never a placeholder. `build_prompt` is deterministic and
//! side-effect-free for identical inputs.

use crate::generation::request::{DocumentRequest, OperationKind, RequestField};

/// Formatting guidance appended to contract prompts.
pub const CONTRACT_GUIDANCE: &str =
    "Format the contract in legal language and ensure all necessary clauses are included.";

/// Four-point checklist appended to notice analysis prompts.
pub const NOTICE_GUIDANCE: &str = "Include:\n\
    1. Type of notice\n\
    2. Key obligations\n\
    3. Deadlines\n\
    4. Recommended next steps";

/// Formatting guidance appended to filing prompts.
pub const FILING_GUIDANCE: &str = "Include all required information in the correct format.";

/// Assembles the full prompt for one operation.
pub fn build_prompt(preamble: &str, kind: OperationKind, request: &DocumentRequest) -> String {
    format!(
        "{preamble}\n{body}\n\n{guidance}\n\n{info}",
        body = operation_body(kind, request),
        guidance = guidance(kind),
        info = additional_info(kind, request),
    )
}

fn guidance(kind: OperationKind) -> &'static str {
    match kind {
        OperationKind::Contract => CONTRACT_GUIDANCE,
        OperationKind::NoticeAnalysis => NOTICE_GUIDANCE,
        OperationKind::Filing => FILING_GUIDANCE,
    }
}

/// The operation-specific body: labeled request fields, verbatim.
fn operation_body(kind: OperationKind, request: &DocumentRequest) -> String {
    match kind {
        OperationKind::Contract => format!(
            "Template: {}\nBusiness Details: {}",
            request.field(RequestField::Template).unwrap_or_default(),
            request
                .field(RequestField::BusinessDetails)
                .unwrap_or_default(),
        ),
        OperationKind::NoticeAnalysis => format!(
            "Analyze this legal notice and provide a summary of key points and recommended actions:\nNotice: {}",
            request.field(RequestField::Notice).unwrap_or_default(),
        ),
        OperationKind::Filing => format!(
            "Prepare a {} filing document based on these business details:\nDetails: {}",
            request.field(RequestField::FilingType).unwrap_or_default(),
            request
                .field(RequestField::BusinessDetails)
                .unwrap_or_default(),
        ),
    }
}

/// The trailing context block. Only supplied fields are listed; the language
/// line is always present because the language always resolves to a code.
fn additional_info(kind: OperationKind, request: &DocumentRequest) -> String {
    let mut lines = vec!["Additional Information:".to_string()];

    if kind == OperationKind::Contract {
        if let Some(document_type) = request.document_type() {
            lines.push(format!("- Document Type: {document_type}"));
        }
    }
    if let Some(jurisdiction) = request.jurisdiction() {
        lines.push(format!("- Jurisdiction: {jurisdiction}"));
    }
    lines.push(format!("- Language: {}", request.language()));

    lines.join("\n")
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::templates::LocaleTemplates;

    fn nda_request() -> DocumentRequest {
        DocumentRequest {
            template: Some("NDA".to_string()),
            business_details: Some("Acme Corp, mutual NDA".to_string()),
            language: Some("es".to_string()),
            document_type: Some("NDA".to_string()),
            jurisdiction: Some("Spain".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_spanish_contract_prompt_layout() {
        let templates = LocaleTemplates::bundled();
        let request = nda_request();
        let prompt = build_prompt(
            templates.preamble(request.language()),
            OperationKind::Contract,
            &request,
        );

        assert!(prompt.starts_with("Generar un contrato profesional"));
        assert!(prompt.contains("Template: NDA"));
        assert!(prompt.contains("Business Details: Acme Corp, mutual NDA"));
        assert!(prompt.contains("- Document Type: NDA"));
        assert!(prompt.contains("- Jurisdiction: Spain"));
        assert!(prompt.contains("- Language: es"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let templates = LocaleTemplates::bundled();
        let request = nda_request();
        let first = build_prompt(templates.preamble("es"), OperationKind::Contract, &request);
        let second = build_prompt(templates.preamble("es"), OperationKind::Contract, &request);
        assert_eq!(first, second);
    }

    #[test]
    fn test_sections_appear_in_fixed_order() {
        let templates = LocaleTemplates::bundled();
        let request = nda_request();
        let prompt = build_prompt(templates.preamble("es"), OperationKind::Contract, &request);

        let body_at = prompt.find("Template: NDA").unwrap();
        let guidance_at = prompt.find(CONTRACT_GUIDANCE).unwrap();
        let info_at = prompt.find("Additional Information:").unwrap();

        assert!(body_at < guidance_at);
        assert!(guidance_at < info_at);
    }

    #[test]
    fn test_omitted_optionals_leave_no_trace() {
        let request = DocumentRequest {
            template: Some("NDA".to_string()),
            business_details: Some("Acme Corp".to_string()),
            ..Default::default()
        };
        let templates = LocaleTemplates::bundled();
        let prompt = build_prompt(
            templates.preamble(request.language()),
            OperationKind::Contract,
            &request,
        );

        assert!(!prompt.contains("Document Type"));
        assert!(!prompt.contains("Jurisdiction"));
        assert!(!prompt.contains("null"));
        assert!(prompt.contains("- Language: en"));
    }

    #[test]
    fn test_notice_prompt_carries_checklist() {
        let request = DocumentRequest {
            notice: Some("You are hereby notified of lease termination.".to_string()),
            jurisdiction: Some("California".to_string()),
            ..Default::default()
        };
        let templates = LocaleTemplates::bundled();
        let prompt = build_prompt(
            templates.preamble(request.language()),
            OperationKind::NoticeAnalysis,
            &request,
        );

        assert!(prompt.contains("Notice: You are hereby notified of lease termination."));
        assert!(prompt.contains("1. Type of notice"));
        assert!(prompt.contains("4. Recommended next steps"));
        assert!(prompt.contains("- Jurisdiction: California"));
    }

    #[test]
    fn test_filing_prompt_embeds_filing_type_in_body() {
        let request = DocumentRequest {
            filing_type: Some("Annual Report".to_string()),
            business_details: Some("Acme Corp, Delaware C-corp".to_string()),
            ..Default::default()
        };
        let templates = LocaleTemplates::bundled();
        let prompt = build_prompt(
            templates.preamble(request.language()),
            OperationKind::Filing,
            &request,
        );

        assert!(prompt.contains("Prepare a Annual Report filing document"));
        assert!(prompt.contains("Details: Acme Corp, Delaware C-corp"));
        assert!(prompt.contains(FILING_GUIDANCE));
    }

    #[test]
    fn test_document_type_line_is_contract_only() {
        // documentType is not part of the filing contract; even if a caller
        // sends it, the filing block must not list it
        let request = DocumentRequest {
            filing_type: Some("Annual Report".to_string()),
            business_details: Some("Acme Corp".to_string()),
            document_type: Some("NDA".to_string()),
            ..Default::default()
        };
        let templates = LocaleTemplates::bundled();
        let prompt = build_prompt(
            templates.preamble(request.language()),
            OperationKind::Filing,
            &request,
        );
        assert!(!prompt.contains("Document Type"));
    }
}
