use thiserror::Error;

#[derive(Debug, Error, Eq, PartialEq)]
pub enum InnerLexError {
    #[error("unexpected character: {0}")]
    UnexpectedChar(char),
    #[error("bad constant: {0}")]
    BadConstant(String),
}

/// Lexer failure with the 1-based source line it occurred on.
#[derive(Debug, Error, Eq, PartialEq)]
#[error("line {ln}: {inner}")]
pub struct LexError {
    inner: InnerLexError,
    ln: u64,
}

impl LexError {
    pub fn get_ln(&self) -> u64 {
        self.ln
    }

    pub fn get_inner(&self) -> &InnerLexError {
        &self.inner
    }
}

impl InnerLexError {
    pub(super) fn set_line(self, ln: u64) -> LexError {
        LexError { inner: self, ln }
    }
}
