use pattern::{ScanError, ScanErrorKind};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The template itself is malformed or names an unknown partial.
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// A placeholder reached the builder without a partial. Scanning
    /// rejects these first, so this only fires on a hand-built template.
    #[error("no partial registered for placeholder `{0}`")]
    UnknownPlaceholder(String),

    /// The regex engine rejected the compiled expression, usually because a
    /// partial or raw literal is not a valid expression.
    #[error("invalid compiled expression: {0}")]
    InvalidExpression(#[from] regex::Error),

    #[error("input does not match the pattern")]
    NoMatch,

    /// The match produced fewer capture groups than the template owns.
    #[error("capture group mismatch: template needs {expected} groups, match produced {found}")]
    GroupCountMismatch { expected: usize, found: usize },
}

impl Error {
    pub fn is_no_match(&self) -> bool {
        matches!(self, Error::NoMatch)
    }

    pub fn scan_kind(&self) -> Option<&ScanErrorKind> {
        match self {
            Error::Scan(err) => Some(&err.kind),
            _ => None,
        }
    }
}
