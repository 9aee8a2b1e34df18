//! Single-pass scanner for the template language.
//!
//! ```text
//! pattern     := segment*
//! segment     := literal | placeholder | optional
//! placeholder := '{' name '}'
//! name        := [a-z-]+
//! optional    := '<' segment* '>'
//! literal     := any run of characters not starting a placeholder or optional
//! ```
//!
//! Braces around anything other than a name (a repetition count such as
//! `\d{2}`) are left in the literal text.
//!
//! Optional spans are scanned recursively, so nesting depth equals recursion
//! depth. Placeholder names are checked against the partials while scanning;
//! fragments themselves are only read when the expression is built.

pub mod error;

pub use error::{ScanError, ScanErrorKind};

use tracing::trace;

use crate::partials::Partials;
use crate::token::{Template, Token};

/// Scan `pattern` into a token tree, validating every placeholder name
/// against `partials`.
#[tracing::instrument(level = "debug", skip_all, fields(pattern = %pattern))]
pub fn scan<P: Partials + ?Sized>(pattern: &str, partials: &P) -> Result<Template, ScanError> {
    let scanner = Scanner {
        source: pattern,
        partials,
    };
    let tokens = scanner.scan_segments(0, pattern.len())?;
    Ok(Template::new(tokens))
}

struct Scanner<'a, P: ?Sized> {
    source: &'a str,
    partials: &'a P,
}

impl<P: Partials + ?Sized> Scanner<'_, P> {
    /// Scan `source[start..end]`. Offsets stay absolute so errors point into
    /// the full template.
    fn scan_segments(&self, start: usize, end: usize) -> Result<Vec<Token>, ScanError> {
        let bytes = self.source.as_bytes();
        let mut tokens = Vec::new();
        let mut pos = start;

        while pos < end {
            let (token, next) = match bytes[pos] {
                b'{' => match self.scan_placeholder(pos, end)? {
                    Some(placeholder) => placeholder,
                    None => self.scan_literal(pos, end),
                },
                b'<' => self.scan_optional(pos, end)?,
                _ => self.scan_literal(pos, end),
            };
            match (tokens.last_mut(), token) {
                (Some(Token::Literal(text)), Token::Literal(more)) => text.push_str(&more),
                (_, token) => tokens.push(token),
            }
            pos = next;
        }

        Ok(tokens)
    }

    /// `open` points at `{`. Returns the token and the offset past `}`, or
    /// `None` when the braces hold something other than a name (`\d{2}`,
    /// `{2,3}`), in which case the `{` is literal text.
    fn scan_placeholder(
        &self,
        open: usize,
        end: usize,
    ) -> Result<Option<(Token, usize)>, ScanError> {
        let bytes = self.source.as_bytes();
        let mut pos = open + 1;

        while pos < end {
            match bytes[pos] {
                b'}' => {
                    let name = &self.source[open + 1..pos];
                    if !is_name(name) {
                        return Ok(None);
                    }
                    if !self.partials.contains(name) {
                        return Err(ScanError::unknown_placeholder(name, open..pos + 1));
                    }
                    trace!(name, "placeholder");
                    return Ok(Some((Token::Placeholder(name.to_string()), pos + 1)));
                }
                b'{' | b'<' | b'>' => break,
                _ => pos += 1,
            }
        }

        Err(ScanError::unclosed_placeholder(open))
    }

    /// `open` points at `<`. The closing `>` is found by raw delimiter
    /// balance, then the inside is scanned as its own segment list.
    fn scan_optional(&self, open: usize, end: usize) -> Result<(Token, usize), ScanError> {
        let bytes = self.source.as_bytes();
        let mut depth = 0usize;

        for pos in open..end {
            match bytes[pos] {
                b'<' => depth += 1,
                b'>' => {
                    depth -= 1;
                    if depth == 0 {
                        trace!(start = open, end = pos, "optional span");
                        let children = self.scan_segments(open + 1, pos)?;
                        return Ok((Token::Optional(children), pos + 1));
                    }
                }
                _ => {}
            }
        }

        Err(ScanError::unclosed_optional(open))
    }

    /// Maximal run up to the next `{` or `<`. Stray `}` and `>` are text.
    fn scan_literal(&self, start: usize, end: usize) -> (Token, usize) {
        let stop = self.source.as_bytes()[start + 1..end]
            .iter()
            .position(|b| matches!(b, b'{' | b'<'))
            .map_or(end, |offset| start + 1 + offset);
        (Token::Literal(self.source[start..stop].to_string()), stop)
    }
}

/// `name := [a-z-]+`
fn is_name(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_lowercase() || b == b'-')
}
