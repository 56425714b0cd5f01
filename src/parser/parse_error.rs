use crate::lexer::Token;
use crate::symbol_table::{Identifier, SymbolError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CompileError>;

/// First error met while compiling. Compilation stops right there.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum CompileError {
    #[error("Expected {expected}, but found {found} at token position {position}")]
    UnexpectedToken {
        expected: &'static str,
        found: Token,
        position: usize,
    },
    #[error("Error: Identifier '{0}' already declared")]
    DuplicateDeclaration(Identifier),
    #[error("Error: Identifier '{0}' not declared")]
    UndeclaredIdentifier(Identifier),
    #[error("Unexpected token after program end: {found} at token position {position}")]
    TrailingInput { found: Token, position: usize },
}

impl From<SymbolError> for CompileError {
    fn from(e: SymbolError) -> Self {
        match e {
            SymbolError::DuplicateDeclaration(name) => Self::DuplicateDeclaration(name),
            SymbolError::UndeclaredIdentifier(name) => Self::UndeclaredIdentifier(name),
        }
    }
}
