use std::ops::Range;

use codespan_reporting::diagnostic::{Diagnostic, Label};

/// What went wrong while scanning a template.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScanErrorKind {
    #[error("unclosed placeholder: `{{` has no matching `}}`")]
    UnclosedPlaceholder,
    #[error("unclosed optional span: `<` has no matching `>`")]
    UnclosedOptional,
    #[error("unknown placeholder `{0}`")]
    UnknownPlaceholder(String),
}

/// Scan error with the byte range it refers to in the template.
///
/// Spans are always relative to the full template, including errors raised
/// while scanning the inside of an optional span.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} (at byte {})", .span.start)]
pub struct ScanError {
    pub kind: ScanErrorKind,
    pub span: Range<usize>,
}

impl ScanError {
    pub fn new(kind: ScanErrorKind, span: Range<usize>) -> Self {
        ScanError { kind, span }
    }

    pub fn unclosed_placeholder(open: usize) -> Self {
        ScanError::new(ScanErrorKind::UnclosedPlaceholder, open..open + 1)
    }

    pub fn unclosed_optional(open: usize) -> Self {
        ScanError::new(ScanErrorKind::UnclosedOptional, open..open + 1)
    }

    pub fn unknown_placeholder(name: impl Into<String>, span: Range<usize>) -> Self {
        ScanError::new(ScanErrorKind::UnknownPlaceholder(name.into()), span)
    }

    /// Convert to a codespan-reporting Diagnostic for display against the
    /// template registered under `file_id`.
    pub fn to_diagnostic(&self, file_id: usize) -> Diagnostic<usize> {
        let (label, note) = match &self.kind {
            ScanErrorKind::UnclosedPlaceholder => (
                "placeholder opened here",
                "close the placeholder with `}` before any `{`, `<` or `>`".to_string(),
            ),
            ScanErrorKind::UnclosedOptional => (
                "optional span opened here",
                "every `<` needs a matching `>` at the same nesting level".to_string(),
            ),
            ScanErrorKind::UnknownPlaceholder(name) => (
                "not found in partials",
                format!("register a fragment for `{}` in the partials dictionary", name),
            ),
        };
        Diagnostic::error()
            .with_message(self.kind.to_string())
            .with_labels(vec![
                Label::primary(file_id, self.span.clone()).with_message(label),
            ])
            .with_notes(vec![note])
    }
}
