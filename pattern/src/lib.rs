pub mod partials;
pub mod scanner;
pub mod token;

pub use partials::Partials;
pub use scanner::{ScanError, ScanErrorKind, scan};
pub use token::{Template, Token};
