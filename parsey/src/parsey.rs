use std::collections::HashMap;

use pattern::{Partials, Template};
use regex::Regex;
use tracing::{debug, warn};

use crate::error::Error;
use crate::expression;
use crate::extractor::{self, Fields};
use crate::options::Options;

/// A template compiled against a set of partials.
///
/// Scanning, building and compiling happen once in the constructor, so one
/// instance can parse many inputs (and be shared between threads).
///
/// ```text
/// partials:  folder    => ([a-zA-Z0-9-]+)
///            file-name => ([a-zA-Z0-9_ -]+)
///            ext       => (txt|jpg|png)
///
/// "{folder}/{file-name}.{ext}"   on "my-folder/my file.txt"
///     => folder: "my-folder", file-name: "my file", ext: "txt"
/// "<{folder}/>{file-name}.{ext}" on "my file.txt"
///     => file-name: "my file", ext: "txt"
/// ```
#[derive(Debug, Clone)]
pub struct Parsey {
    template: Template,
    expression: String,
    regex: Regex,
    options: Options,
}

impl Parsey {
    pub fn new<P: Partials + ?Sized>(pattern: &str, partials: &P) -> Result<Self, Error> {
        Self::with_options(pattern, partials, Options::default())
    }

    #[tracing::instrument(level = "debug", skip_all, fields(pattern = %pattern))]
    pub fn with_options<P: Partials + ?Sized>(
        pattern: &str,
        partials: &P,
        options: Options,
    ) -> Result<Self, Error> {
        let template = pattern::scan(pattern, partials)?;
        let expression = expression::build(&template, partials, &options)?;
        let regex = options.compile(&expression)?;
        debug!(expression = %expression, groups = template.group_count(), "compiled template");

        // Each partial should own exactly one group; anything else shifts
        // the pairing between placeholders and capture slots.
        let found = regex.captures_len() - 1;
        if found != template.group_count() {
            warn!(
                expected = template.group_count(),
                found, "partials do not contribute exactly one capture group each"
            );
        }

        Ok(Parsey {
            template,
            expression,
            regex,
            options,
        })
    }

    /// The scanned token tree.
    pub fn template(&self) -> &Template {
        &self.template
    }

    /// The expression string the template compiled to.
    pub fn compiled_expression(&self) -> &str {
        &self.expression
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Placeholder names in capture order.
    pub fn field_names(&self) -> Vec<&str> {
        self.template.field_names()
    }

    /// Match `input` and return its fields. Placeholders inside optional
    /// spans that did not match have no entry.
    #[tracing::instrument(level = "debug", skip_all, fields(input_len = input.len()))]
    pub fn parse(&self, input: &str) -> Result<Fields, Error> {
        let captures = self.regex.captures(input).ok_or(Error::NoMatch)?;
        let fields = extractor::extract(
            &self.template,
            captures.iter().skip(1).map(|group| group.map(|m| m.as_str())),
        )?;
        debug!(fields = fields.len(), "extracted fields");
        Ok(fields)
    }

    /// Match `input` and return an entry for every placeholder, with `None`
    /// for those inside optional spans that did not match.
    ///
    /// This is the older representation of absent fields; [`Parsey::parse`]
    /// omits them instead. Prefer `parse` unless a caller depends on every
    /// key being present.
    pub fn parse_all(&self, input: &str) -> Result<HashMap<String, Option<String>>, Error> {
        let captures = self.regex.captures(input).ok_or(Error::NoMatch)?;
        extractor::extract_all(
            &self.template,
            captures.iter().skip(1).map(|group| group.map(|m| m.as_str())),
        )
    }
}
