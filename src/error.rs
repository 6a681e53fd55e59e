//! Crate error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayerlogError {
    #[error("a global logger is already installed: {0}")]
    AlreadyInitialized(#[from] log::SetLoggerError),

    #[error("invalid logger configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("marker glyph {0:?} is a control character")]
    InvalidGlyph(char),
}

pub type Result<T> = std::result::Result<T, LayerlogError>;
