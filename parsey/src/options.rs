use regex::{Regex, RegexBuilder};
use serde::Deserialize;

/// Options for compiling a template into an expression.
///
/// Every option defaults to off, which gives the plain behaviour: an
/// unanchored, case-sensitive search with literal text used as raw
/// expression syntax.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    /// Require the template to match the whole input.
    pub anchored: bool,

    /// Match letters without regard to case.
    pub case_insensitive: bool,

    /// Escape literal template text so `.` or `+` match themselves.
    pub escape_literals: bool,

    /// Upper bound on the compiled expression size, in bytes.
    pub size_limit: Option<usize>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_anchored(mut self, anchored: bool) -> Self {
        self.anchored = anchored;
        self
    }

    pub fn with_case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    pub fn with_escape_literals(mut self, escape_literals: bool) -> Self {
        self.escape_literals = escape_literals;
        self
    }

    pub fn with_size_limit(mut self, bytes: usize) -> Self {
        self.size_limit = Some(bytes);
        self
    }

    pub(crate) fn compile(&self, expression: &str) -> Result<Regex, regex::Error> {
        let mut builder = RegexBuilder::new(expression);
        builder.case_insensitive(self.case_insensitive);
        if let Some(limit) = self.size_limit {
            builder.size_limit(limit);
        }
        builder.build()
    }
}
