//! Error types for body decoding.

/// Why a request body could not be turned into a JSON value.
///
/// Neither variant is fatal: the verdict layer absorbs both and fails open.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// Body is empty or contains only JSON whitespace.
    #[error("request body is empty")]
    Empty,

    /// Body is not a single well-formed JSON document.
    #[error("malformed JSON at line {line}, column {column}: {message}")]
    Malformed {
        line: usize,
        column: usize,
        message: String,
    },
}

impl DecodeError {
    /// Reason code reported when this error causes a fail-open accept.
    pub fn reason_code(&self) -> &'static str {
        match self {
            Self::Empty => crate::verdict::reason_codes::A_EMPTY_BODY,
            Self::Malformed { .. } => crate::verdict::reason_codes::A_UNDECODABLE,
        }
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

/// Result type for body decoding.
pub type DecodeResult<T> = Result<T, DecodeError>;
