use miette::Diagnostic;
use thiserror::Error;

/// Main error type for bx operations
#[derive(Error, Diagnostic, Debug)]
pub enum BxError {
    #[error("IO error: {0}")]
    #[diagnostic(code(bx::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(bx::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(bx::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(bx::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Unsupported export format: {format}")]
    #[diagnostic(code(bx::format))]
    UnsupportedFormat {
        format: String,
        #[help]
        help: Option<String>,
    },

    #[error("Export failed for {format}: {message}")]
    #[diagnostic(code(bx::export))]
    Export { format: String, message: String },
}

impl BxError {
    /// Unknown format identifier, with the known identifiers as help text.
    pub fn unsupported_format(format: impl Into<String>) -> Self {
        BxError::UnsupportedFormat {
            format: format.into(),
            help: Some(format!(
                "Known formats: {}",
                crate::export::ExportFormat::ALL_IDS.join(", ")
            )),
        }
    }
}

pub type Result<T> = std::result::Result<T, BxError>;
