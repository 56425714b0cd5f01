use super::lexer_error::InnerLexError;
use std::fmt;

/// Coarse token classification, as printed in derivation traces.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TokenType {
    Identifier,
    Keyword,
    Integer,
    Real,
    Operator,
    Separator,
    Eof,
}

/// Basic token type
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Token {
    /// any non-keyword word, already lowercased
    Identifier(String),
    /// reserved word
    Keyword(Keyword),
    /// decimal integer constant
    Integer(i64),
    /// real constant, kept as written
    Real(String),
    Operator(Operator),
    Separator(Separator),
    /// end of input marker
    Eof,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Keyword {
    Integer,
    Boolean,
    Function,
    Real,
    If,
    Else,
    Fi,
    Return,
    Put,
    Get,
    While,
    True,
    False,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Operator {
    /// ==
    IsEqual,
    /// !=
    IsNotEqual,
    /// >=
    IsGreaterThanOrEqual,
    /// =>
    EqualOrGreater,
    /// <=
    IsLessThanOrEqual,
    /// ||
    LogicalOr,
    /// &&
    LogicalAnd,
    /// +
    Plus,
    /// -
    Hyphen,
    /// *
    Asterisk,
    /// /
    FSlash,
    /// %
    Percent,
    /// =
    Assign,
    /// <
    IsLessThan,
    /// >
    IsGreaterThan,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Separator {
    OpenParanth,
    CloseParanth,
    OpenCurly,
    CloseCurly,
    OpenBracket,
    CloseBracket,
    Comma,
    Semicolon,
    Colon,
    Dot,
    Hash,
}

impl Token {
    pub fn token_type(&self) -> TokenType {
        match self {
            Self::Identifier(_) => TokenType::Identifier,
            Self::Keyword(_) => TokenType::Keyword,
            Self::Integer(_) => TokenType::Integer,
            Self::Real(_) => TokenType::Real,
            Self::Operator(_) => TokenType::Operator,
            Self::Separator(_) => TokenType::Separator,
            Self::Eof => TokenType::Eof,
        }
    }

    /// Source text of the token. Empty for [`Token::Eof`].
    pub fn lexeme(&self) -> String {
        match self {
            Self::Identifier(s) | Self::Real(s) => s.clone(),
            Self::Integer(i) => i.to_string(),
            Self::Keyword(k) => k.as_str().to_owned(),
            Self::Operator(o) => o.as_str().to_owned(),
            Self::Separator(s) => s.as_str().to_owned(),
            Self::Eof => String::new(),
        }
    }

    #[inline]
    pub fn is_keyword(&self, kw: Keyword) -> bool {
        matches!(self, Self::Keyword(k) if *k == kw)
    }

    #[inline]
    pub fn is_separator(&self, sep: Separator) -> bool {
        matches!(self, Self::Separator(s) if *s == sep)
    }

    #[inline]
    pub fn is_qualifier(&self) -> bool {
        matches!(self, Self::Keyword(Keyword::Integer | Keyword::Boolean))
    }

    /// Lookahead set of `<Statement>`.
    #[inline]
    pub fn starts_statement(&self) -> bool {
        matches!(
            self,
            Self::Identifier(_)
                | Self::Separator(Separator::OpenCurly)
                | Self::Keyword(
                    Keyword::If | Keyword::Return | Keyword::Put | Keyword::Get | Keyword::While
                )
        )
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        Keyword::from_word(s).map_or_else(|| Self::Identifier(s.to_owned()), Self::Keyword)
    }
}

impl Keyword {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Function => "function",
            Self::Real => "real",
            Self::If => "if",
            Self::Else => "else",
            Self::Fi => "fi",
            Self::Return => "return",
            Self::Put => "put",
            Self::Get => "get",
            Self::While => "while",
            Self::True => "true",
            Self::False => "false",
        }
    }

    pub fn from_word(s: &str) -> Option<Self> {
        let kw = match s {
            "integer" => Self::Integer,
            "boolean" => Self::Boolean,
            "function" => Self::Function,
            "real" => Self::Real,
            "if" => Self::If,
            "else" => Self::Else,
            "fi" => Self::Fi,
            "return" => Self::Return,
            "put" => Self::Put,
            "get" => Self::Get,
            "while" => Self::While,
            "true" => Self::True,
            "false" => Self::False,
            _ => return None,
        };
        Some(kw)
    }
}

impl Operator {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::IsEqual => "==",
            Self::IsNotEqual => "!=",
            Self::IsGreaterThanOrEqual => ">=",
            Self::EqualOrGreater => "=>",
            Self::IsLessThanOrEqual => "<=",
            Self::LogicalOr => "||",
            Self::LogicalAnd => "&&",
            Self::Plus => "+",
            Self::Hyphen => "-",
            Self::Asterisk => "*",
            Self::FSlash => "/",
            Self::Percent => "%",
            Self::Assign => "=",
            Self::IsLessThan => "<",
            Self::IsGreaterThan => ">",
        }
    }

    pub fn from_pair(first: char, second: char) -> Option<Self> {
        match (first, second) {
            ('=', '=') => Some(Self::IsEqual),
            ('!', '=') => Some(Self::IsNotEqual),
            ('>', '=') => Some(Self::IsGreaterThanOrEqual),
            ('=', '>') => Some(Self::EqualOrGreater),
            ('<', '=') => Some(Self::IsLessThanOrEqual),
            ('|', '|') => Some(Self::LogicalOr),
            ('&', '&') => Some(Self::LogicalAnd),
            _ => None,
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = InnerLexError;
    fn try_from(c: char) -> Result<Self, InnerLexError> {
        match c {
            '+' => Ok(Self::Plus),
            '-' => Ok(Self::Hyphen),
            '*' => Ok(Self::Asterisk),
            '/' => Ok(Self::FSlash),
            '%' => Ok(Self::Percent),
            '=' => Ok(Self::Assign),
            '<' => Ok(Self::IsLessThan),
            '>' => Ok(Self::IsGreaterThan),
            _ => Err(InnerLexError::UnexpectedChar(c)),
        }
    }
}

impl Separator {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OpenParanth => "(",
            Self::CloseParanth => ")",
            Self::OpenCurly => "{",
            Self::CloseCurly => "}",
            Self::OpenBracket => "[",
            Self::CloseBracket => "]",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::Dot => ".",
            Self::Hash => "#",
        }
    }
}

impl TryFrom<char> for Separator {
    type Error = InnerLexError;
    fn try_from(c: char) -> Result<Self, InnerLexError> {
        match c {
            '(' => Ok(Self::OpenParanth),
            ')' => Ok(Self::CloseParanth),
            '{' => Ok(Self::OpenCurly),
            '}' => Ok(Self::CloseCurly),
            '[' => Ok(Self::OpenBracket),
            ']' => Ok(Self::CloseBracket),
            ',' => Ok(Self::Comma),
            ';' => Ok(Self::Semicolon),
            ':' => Ok(Self::Colon),
            '.' => Ok(Self::Dot),
            '#' => Ok(Self::Hash),
            _ => Err(InnerLexError::UnexpectedChar(c)),
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::Identifier => "Identifier",
            Self::Keyword => "Keyword",
            Self::Integer => "Integer",
            Self::Real => "Real",
            Self::Operator => "Operator",
            Self::Separator => "Separator",
            Self::Eof => "EOF",
        };
        // pad() so width specifiers in trace lines apply
        f.pad(name)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: '{}'", self.token_type(), self.lexeme())
    }
}
