//! Error types for template assembly and translation

use page_model::PageModelError;
use thiserror::Error;

/// Errors that can occur while assembling or translating a template
#[derive(Debug, Error)]
pub enum TemplateEngineError {
    /// A block spec or page violated the model's schema or invariants
    #[error(transparent)]
    Schema(#[from] PageModelError),

    /// A translatable leaf had no entry in the map and the caller asked
    /// missing keys to be fatal
    #[error("no translation for \"{missing_key}\" at {field_path}")]
    TranslationGap {
        field_path: String,
        missing_key: String,
    },
}

/// Result type for template engine operations
pub type Result<T> = std::result::Result<T, TemplateEngineError>;
