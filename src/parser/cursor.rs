use crate::lexer::Token;

static EOF: Token = Token::Eof;

/// Read position in the token stream. Reading past the end keeps
/// yielding [`Token::Eof`].
#[derive(Debug)]
pub struct Cursor<'a> {
    tokens: &'a [Token],
    position: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    pub fn peek(&self) -> &'a Token {
        self.tokens.get(self.position).unwrap_or(&EOF)
    }

    pub fn bump(&mut self) {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn at_end(&self) -> bool {
        *self.peek() == Token::Eof
    }
}
