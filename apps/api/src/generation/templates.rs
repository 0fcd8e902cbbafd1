//! Localized instruction preambles.
//!
//! The table is built once at startup and shared read-only through `AppState`,
//! so concurrent requests read it without synchronization. Lookup never fails:
//! a language we do not carry is an expected case and falls back to the
//! default entry.

use std::collections::HashMap;

/// Language used when a request omits its language code.
pub const DEFAULT_LANGUAGE: &str = "en";

const DEFAULT_PREAMBLE: &str =
    "Generate a professional contract based on this template and business details:";

const PREAMBLES: &[(&str, &str)] = &[
    (DEFAULT_LANGUAGE, DEFAULT_PREAMBLE),
    (
        "es",
        "Generar un contrato profesional basado en esta plantilla y detalles de negocio:",
    ),
    (
        "fr",
        "Générer un contrat professionnel basé sur cette modèle et détails de l'entreprise:",
    ),
];

/// Immutable language → instruction preamble table.
pub struct LocaleTemplates {
    table: HashMap<&'static str, &'static str>,
    fallback: &'static str,
}

impl LocaleTemplates {
    /// Builds the table from the bundled preambles. The default-language entry
    /// doubles as the fallback, so lookups are infallible by construction.
    pub fn bundled() -> Self {
        let table = PREAMBLES.iter().copied().collect();
        Self {
            table,
            fallback: DEFAULT_PREAMBLE,
        }
    }

    /// Exact-match lookup; unknown languages get the default preamble.
    pub fn preamble(&self, language: &str) -> &str {
        self.table.get(language).copied().unwrap_or(self.fallback)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

/// Resolves an optional request language to a concrete code.
/// Blank codes count as absent.
pub fn resolve_language(language: Option<&str>) -> &str {
    language
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .unwrap_or(DEFAULT_LANGUAGE)
}
