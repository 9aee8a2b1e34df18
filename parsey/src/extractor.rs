use std::collections::HashMap;

use pattern::{Template, Token};
use tracing::trace;

use crate::error::Error;

/// Extracted fields, keyed by placeholder name.
pub type Fields = HashMap<String, String>;

/// Pair capture slots with the placeholders of `template`.
///
/// `captures` are the values of groups 1..n in order. Placeholders inside an
/// optional span that did not match are left out of the result entirely.
pub fn extract<'h, I>(template: &Template, captures: I) -> Result<Fields, Error>
where
    I: IntoIterator<Item = Option<&'h str>>,
{
    let mut slots = Slots::new(captures.into_iter(), template.group_count());
    let mut fields = Fields::new();
    walk(template.tokens(), &mut slots, true, &mut |name: &str, value: Option<&'h str>| {
        if let Some(value) = value {
            fields.insert(name.to_string(), value.to_string());
        }
    })?;
    Ok(fields)
}

/// Like [`extract`], but every placeholder gets an entry and unmatched ones
/// map to `None`.
///
/// A name that appears more than once keeps the first value that matched.
pub fn extract_all<'h, I>(
    template: &Template,
    captures: I,
) -> Result<HashMap<String, Option<String>>, Error>
where
    I: IntoIterator<Item = Option<&'h str>>,
{
    let mut slots = Slots::new(captures.into_iter(), template.group_count());
    let mut fields: HashMap<String, Option<String>> = HashMap::new();
    walk(template.tokens(), &mut slots, true, &mut |name: &str, value: Option<&'h str>| {
        let entry = fields.entry(name.to_string()).or_insert(None);
        if entry.is_none() {
            *entry = value.map(str::to_string);
        }
    })?;
    Ok(fields)
}

/// Cursor over capture slots, shared by the whole recursive walk.
struct Slots<I> {
    inner: I,
    consumed: usize,
    expected: usize,
}

impl<'h, I: Iterator<Item = Option<&'h str>>> Slots<I> {
    fn new(inner: I, expected: usize) -> Self {
        Slots {
            inner,
            consumed: 0,
            expected,
        }
    }

    fn advance(&mut self) -> Result<Option<&'h str>, Error> {
        match self.inner.next() {
            Some(value) => {
                self.consumed += 1;
                Ok(value)
            }
            None => Err(Error::GroupCountMismatch {
                expected: self.expected,
                found: self.consumed,
            }),
        }
    }
}

/// Visit every placeholder in `tokens`, consuming one slot per placeholder
/// and one per optional span.
///
/// When `matched` is false the enclosing span did not participate: slots are
/// still consumed so later siblings stay aligned, but every value is `None`.
fn walk<'h, I, F>(
    tokens: &[Token],
    slots: &mut Slots<I>,
    matched: bool,
    visit: &mut F,
) -> Result<(), Error>
where
    I: Iterator<Item = Option<&'h str>>,
    F: FnMut(&str, Option<&'h str>),
{
    for token in tokens {
        match token {
            Token::Literal(_) => {}
            Token::Placeholder(name) => {
                let value = slots.advance()?;
                visit(name, value.filter(|_| matched));
            }
            Token::Optional(children) => {
                let slot = slots.advance()?;
                let present = matched && slot.is_some();
                if !present {
                    trace!(groups = token.group_count(), "skipping unmatched optional span");
                }
                walk(children, slots, present, visit)?;
            }
        }
    }
    Ok(())
}
