//! Error types for sln-codec

/// Result type for sln-codec operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while parsing or serializing a solution document.
///
/// The codec is fail-fast: every variant is raised at its point of
/// detection with the offending line and the violated expectation, and no
/// partial document is ever returned.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A line did not match the grammar token expected at this position.
    #[error("line {line}: expected {expected}, found {found:?}")]
    Structural {
        line: usize,
        expected: String,
        found: String,
    },

    /// The input ended before the expected closer or header line.
    #[error("line {line}: unexpected end of input, expected {expected}")]
    UnexpectedEof { line: usize, expected: String },

    /// A token matched its shape but failed semantic conversion.
    #[error("line {line}: {source}")]
    Value {
        line: usize,
        #[source]
        source: sln_model::Error,
    },

    /// A required global section is absent at serialize time.
    #[error("Required global section missing: {name}")]
    MissingSection { name: &'static str },

    /// Residual non-blank input after the terminating `EndGlobal`.
    #[error("line {line}: trailing content after EndGlobal: {found:?}")]
    TrailingContent { line: usize, found: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn structural(line: usize, expected: impl Into<String>, found: &str) -> Self {
        Self::Structural {
            line,
            expected: expected.into(),
            found: found.to_string(),
        }
    }

    pub(crate) fn eof(line: usize, expected: impl Into<String>) -> Self {
        Self::UnexpectedEof {
            line,
            expected: expected.into(),
        }
    }

    pub(crate) fn value(line: usize, source: sln_model::Error) -> Self {
        Self::Value { line, source }
    }
}
