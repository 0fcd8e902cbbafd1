//! Document rendering: turns generated text plus metadata into a
//! downloadable binary document. The generation pipeline never inspects the
//! byte format; it hands the renderer text and metadata and forwards the
//! bytes unmodified.

use printpdf::{BuiltinFont, Mm, PdfDocument};
use thiserror::Error;

/// Conservative character budget per body line at 11pt Helvetica on a
/// US-letter page with 1" margins.
const MAX_LINE_CHARS: usize = 90;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PDF generation failed: {0}")]
    Pdf(String),
}

/// Metadata attached to a rendered document, derived from the originating
/// request by the artifact formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderMetadata {
    pub title: String,
    pub language: String,
    pub subject: String,
    pub keywords: String,
}

/// The renderer seam.
///
/// Carried in `AppState` as `Arc<dyn DocumentRenderer>` so the pipeline can be
/// exercised in tests without producing real PDF bytes.
pub trait DocumentRenderer: Send + Sync {
    fn render(&self, text: &str, metadata: &RenderMetadata) -> Result<Vec<u8>, RenderError>;
}

/// Production renderer backed by printpdf, using the builtin Helvetica faces.
/// US letter, 1" margins, title line in bold, body word-wrapped and paginated.
pub struct PdfRenderer;

impl DocumentRenderer for PdfRenderer {
    fn render(&self, text: &str, metadata: &RenderMetadata) -> Result<Vec<u8>, RenderError> {
        let (doc, first_page, first_layer) =
            PdfDocument::new(metadata.title.as_str(), Mm(215.9), Mm(279.4), "Layer 1");

        let title_font = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| RenderError::Pdf(e.to_string()))?;
        let body_font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| RenderError::Pdf(e.to_string()))?;

        let mut layer = doc.get_page(first_page).get_layer(first_layer);
        // Cursor in mm from the bottom edge; 25.4mm margins all around
        let mut cursor_y = 279.4 - 25.4;

        layer.use_text(
            metadata.title.as_str(),
            16.0,
            Mm(25.4),
            Mm(cursor_y),
            &title_font,
        );
        cursor_y -= 11.0;

        for paragraph in text.lines() {
            for line in wrap_line(paragraph, MAX_LINE_CHARS) {
                if cursor_y < 25.4 {
                    let (page, layer_index) = doc.add_page(Mm(215.9), Mm(279.4), "Layer 1");
                    layer = doc.get_page(page).get_layer(layer_index);
                    cursor_y = 279.4 - 25.4;
                }
                layer.use_text(line, 11.0, Mm(25.4), Mm(cursor_y), &body_font);
                cursor_y -= 5.5;
            }
        }

        doc.save_to_bytes()
            .map_err(|e| RenderError::Pdf(e.to_string()))
    }
}

/// Greedy word wrap. A blank input line yields one empty output line so
/// paragraph spacing survives; words longer than `max_chars` get their own
/// line rather than being split.
fn wrap_line(line: &str, max_chars: usize) -> Vec<String> {
    if line.trim().is_empty() {
        return vec![String::new()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in line.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + 1 + word.len() <= max_chars {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}
