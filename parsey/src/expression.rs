use pattern::{Partials, Template, Token};

use crate::error::Error;
use crate::options::Options;

/// Serialize a token tree into a single matching expression.
///
/// Placeholders become their partial, optional spans become `(...)?` so each
/// span is exactly one group wrapping the groups of its children. Literal
/// text is copied verbatim unless `options.escape_literals` is set.
pub fn build<P: Partials + ?Sized>(
    template: &Template,
    partials: &P,
    options: &Options,
) -> Result<String, Error> {
    let mut expression = String::new();
    if options.anchored {
        expression.push_str("^(?:");
    }
    append_tokens(template.tokens(), partials, options, &mut expression)?;
    if options.anchored {
        expression.push_str(")$");
    }
    Ok(expression)
}

fn append_tokens<P: Partials + ?Sized>(
    tokens: &[Token],
    partials: &P,
    options: &Options,
    out: &mut String,
) -> Result<(), Error> {
    for token in tokens {
        match token {
            Token::Literal(text) if options.escape_literals => {
                out.push_str(&regex::escape(text));
            }
            Token::Literal(text) => out.push_str(text),
            Token::Placeholder(name) => {
                let fragment = partials
                    .fragment(name)
                    .ok_or_else(|| Error::UnknownPlaceholder(name.clone()))?;
                out.push_str(fragment);
            }
            Token::Optional(children) => {
                out.push('(');
                append_tokens(children, partials, options, out)?;
                out.push_str(")?");
            }
        }
    }
    Ok(())
}
