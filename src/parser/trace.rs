use crate::lexer::Token;
use std::fmt;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TraceEntry {
    /// grammar rule applied, e.g. `<Factor> ::= <Primary>`
    Production(&'static str),
    /// terminal consumed by the parser
    Matched(Token),
}

/// Productions and matched tokens in parse order.
#[derive(Clone, Debug, Default)]
pub struct DerivationTrace {
    entries: Vec<TraceEntry>,
}

impl DerivationTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_production(&mut self, rule: &'static str) {
        self.entries.push(TraceEntry::Production(rule));
    }

    pub fn push_token(&mut self, token: Token) {
        self.entries.push(TraceEntry::Matched(token));
    }

    pub fn iter(&self) -> impl Iterator<Item = &TraceEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn lines(&self) -> Vec<String> {
        self.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Production(rule) => write!(f, "    {rule}"),
            Self::Matched(token) => {
                write!(f, "Token: {:<15} Lexeme: {}", token.token_type(), token.lexeme())
            }
        }
    }
}
