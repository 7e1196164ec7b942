//! Error types for the widget core.

use thiserror::Error;

/// Errors raised while decoding page-provided data.
///
/// None of these ever reach the visitor: callers log them and fall back to
/// defaults.
#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("unknown locale code '{0}'")]
    UnknownLocale(String),

    #[error("invalid site configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WidgetError>;
