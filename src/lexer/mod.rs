mod cursor;
mod lexer_error;
#[cfg(test)]
mod lexer_tests;
mod token;

use cursor::Cursor;
pub use lexer_error::{InnerLexError, LexError};
pub use token::{Keyword, Operator, Separator, Token, TokenType};

pub type Tokens = Vec<Token>;
type Result<T> = std::result::Result<T, InnerLexError>;

#[inline]
fn is_comment_delimiter(c: char) -> bool {
    matches!(c, '"' | '\u{201c}' | '\u{201d}')
}

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '$'
}

fn skip_trivia(cursor: &mut Cursor) {
    loop {
        cursor.skip_whitespaces();
        if !cursor.skip_if(is_comment_delimiter) {
            break;
        }
        // unterminated comment swallows the rest of the input
        while let Some(c) = cursor.take() {
            if is_comment_delimiter(c) {
                break;
            }
        }
    }
}

fn lex_word(cursor: &mut Cursor) -> Token {
    let word = cursor.take_while(is_word_char).to_lowercase();
    Token::from(word.as_str())
}

fn bad_constant(cursor: &mut Cursor, mut lexeme: String) -> InnerLexError {
    let rest = cursor.take_while(|c| is_word_char(c) || c == '.');
    lexeme.push_str(&rest);
    InnerLexError::BadConstant(lexeme)
}

fn lex_real(cursor: &mut Cursor, int_part: String) -> Result<Token> {
    cursor.take();
    let frac = cursor.take_while(|c| c.is_ascii_digit());
    let lexeme = format!("{int_part}.{frac}");
    if frac.is_empty() || cursor.peek().is_some_and(char::is_alphabetic) {
        return Err(bad_constant(cursor, lexeme));
    }
    Ok(Token::Real(lexeme))
}

fn lex_number(cursor: &mut Cursor) -> Result<Token> {
    let digits = cursor.take_while(|c| c.is_ascii_digit());

    match cursor.peek() {
        Some('.') => lex_real(cursor, digits),
        Some(c) if c.is_alphabetic() => Err(bad_constant(cursor, digits)),
        _ => digits
            .parse()
            .map(Token::Integer)
            .map_err(|_| InnerLexError::BadConstant(digits)),
    }
}

fn lex_operator(cursor: &mut Cursor, first: char) -> Result<Token> {
    let pair = cursor
        .peek_2nd()
        .and_then(|second| Operator::from_pair(first, second));
    if let Some(op) = pair {
        cursor.take();
        cursor.take();
        return Ok(Token::Operator(op));
    }

    let op = Operator::try_from(first)?;
    cursor.take();
    Ok(Token::Operator(op))
}

fn lex_separator(cursor: &mut Cursor, c: char) -> Result<Token> {
    let sep = Separator::try_from(c)?;
    cursor.take();
    Ok(Token::Separator(sep))
}

fn lex_token(cursor: &mut Cursor, c: char) -> Result<Token> {
    match c {
        c if c.is_alphabetic() => Ok(lex_word(cursor)),
        '0'..='9' => lex_number(cursor),
        '=' | '!' | '<' | '>' | '|' | '&' | '+' | '-' | '*' | '/' | '%' => {
            lex_operator(cursor, c)
        }
        _ => lex_separator(cursor, c),
    }
}

/// Splits `input` into tokens. The result always ends with [`Token::Eof`].
pub fn lex(input: &str) -> std::result::Result<Tokens, LexError> {
    let mut tokens = Tokens::new();
    let mut cursor = Cursor::new(input);

    loop {
        skip_trivia(&mut cursor);
        let Some(c) = cursor.peek() else {
            break;
        };
        let line = cursor.get_line();
        let token = lex_token(&mut cursor, c).map_err(|e| e.set_line(line))?;
        tokens.push(token);
    }

    tokens.push(Token::Eof);
    Ok(tokens)
}
