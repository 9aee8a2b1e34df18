pub mod error;
pub mod expression;
pub mod extractor;
pub mod options;
pub mod parsey;

pub use error::Error;
pub use extractor::{Fields, extract, extract_all};
pub use options::Options;
pub use parsey::Parsey;

pub use pattern::{Partials, ScanError, ScanErrorKind, Template, Token, scan};

/// Parse `input` against `pattern` in one call: scan, build, match, extract.
pub fn parse<P: Partials + ?Sized>(
    input: &str,
    pattern: &str,
    partials: &P,
) -> Result<Fields, Error> {
    Parsey::new(pattern, partials)?.parse(input)
}
