use std::fmt;

/// One node of a scanned template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Text copied into the expression as-is.
    Literal(String),
    /// `{name}`: replaced by the partial registered under `name`; the name is
    /// also the key of the extracted field.
    Placeholder(String),
    /// `<...>`: a span that either matches entirely or not at all.
    Optional(Vec<Token>),
}

impl Token {
    /// Number of capture groups this node owns in the compiled expression.
    ///
    /// A placeholder owns the single group of its partial. An optional span
    /// owns its own group plus every group of its children.
    pub fn group_count(&self) -> usize {
        match self {
            Token::Literal(_) => 0,
            Token::Placeholder(_) => 1,
            Token::Optional(children) => 1 + group_count(children),
        }
    }
}

/// The token tree produced by scanning a template string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    tokens: Vec<Token>,
}

impl Template {
    pub fn new(tokens: Vec<Token>) -> Self {
        Template { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Total capture groups the compiled expression is expected to have.
    pub fn group_count(&self) -> usize {
        group_count(&self.tokens)
    }

    /// Placeholder names in the order their groups appear (depth-first,
    /// left to right). Optional spans contribute the names inside them.
    pub fn field_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        collect_names(&self.tokens, &mut names);
        names
    }
}

impl From<Vec<Token>> for Template {
    fn from(tokens: Vec<Token>) -> Self {
        Template::new(tokens)
    }
}

fn group_count(tokens: &[Token]) -> usize {
    tokens.iter().map(Token::group_count).sum()
}

fn collect_names<'a>(tokens: &'a [Token], names: &mut Vec<&'a str>) {
    for token in tokens {
        match token {
            Token::Literal(_) => {}
            Token::Placeholder(name) => names.push(name),
            Token::Optional(children) => collect_names(children, names),
        }
    }
}

// ---------------------------------------------------------------------------
// Display: renders the template source back
// ---------------------------------------------------------------------------

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Literal(text) => f.write_str(text),
            Token::Placeholder(name) => write!(f, "{{{}}}", name),
            Token::Optional(children) => {
                f.write_str("<")?;
                for child in children {
                    child.fmt(f)?;
                }
                f.write_str(">")
            }
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            token.fmt(f)?;
        }
        Ok(())
    }
}
