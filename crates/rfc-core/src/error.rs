use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    /// Input does not follow the header/section/paragraph grammar.
    #[error("line {line}: {message}")]
    Structural { line: usize, message: String },

    /// A layout heuristic produced output it should never produce.
    #[error("line {line}: invariant violated: {message}")]
    Invariant { line: usize, message: String },

    #[error("Non-ASCII byte at offset {offset}")]
    NonAscii { offset: usize },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    pub(crate) fn structural(line: usize, message: impl Into<String>) -> Self {
        Self::Structural {
            line,
            message: message.into(),
        }
    }

    pub(crate) fn invariant(line: usize, message: impl Into<String>) -> Self {
        Self::Invariant {
            line,
            message: message.into(),
        }
    }

    /// Source line the failure points at, when there is one
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Structural { line, .. } | Self::Invariant { line, .. } => Some(*line),
            _ => None,
        }
    }
}
