#![deny(unused_must_use)]
#![warn(clippy::pedantic)]
#![allow(clippy::wildcard_imports)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod codegen;
#[cfg(feature = "emission")]
pub mod emission;
#[cfg(feature = "lexer")]
pub mod lexer;
#[cfg(feature = "parser")]
pub mod parser;
pub mod symbol_table;

#[cfg(feature = "parser")]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("lex error: {0}")]
    Lex(#[from] lexer::LexError),
    #[error(transparent)]
    Compile(#[from] parser::CompileError),
}

/// Lexes and compiles `source` in one go.
#[cfg(feature = "parser")]
pub fn compile(source: &str) -> Result<parser::Compilation, Error> {
    let tokens = lexer::lex(source)?;
    let compilation = parser::parse(&tokens)?;
    Ok(compilation)
}
