//! Recursive-descent parser with embedded code generation.
//!
//! Each grammar rule has one handler. Handlers decide on the current
//! lookahead token only, update the symbol table, append instructions and
//! record what they did in the derivation trace. Forward jumps produced by
//! conditions are completed through the [`JumpStack`].

mod cursor;
mod parse_error;
mod trace;

use crate::codegen::{InstructionTable, JumpStack, Opcode, Operand};
use crate::lexer::{Keyword, Operator, Separator, Token};
use crate::symbol_table::{Identifier, SymbolTable, VarType};
use cursor::Cursor;
pub use parse_error::{CompileError, Result};
pub use trace::{DerivationTrace, TraceEntry};

/// Everything produced by a successful compilation.
#[derive(Debug)]
pub struct Compilation {
    pub trace: DerivationTrace,
    pub symbols: SymbolTable,
    pub instructions: InstructionTable,
}

/// What `<IDs>` does with each identifier it matches.
#[derive(Copy, Clone, Debug)]
enum IdsMode {
    Declare(VarType),
    Read,
}

fn relop_opcode(op: Operator) -> Option<Opcode> {
    match op {
        Operator::IsEqual => Some(Opcode::Equ),
        Operator::IsNotEqual => Some(Opcode::Neq),
        Operator::IsGreaterThan => Some(Opcode::Grt),
        Operator::IsLessThan => Some(Opcode::Les),
        Operator::IsLessThanOrEqual => Some(Opcode::Leq),
        Operator::IsGreaterThanOrEqual | Operator::EqualOrGreater => Some(Opcode::Geq),
        Operator::LogicalOr
        | Operator::LogicalAnd
        | Operator::Plus
        | Operator::Hyphen
        | Operator::Asterisk
        | Operator::FSlash
        | Operator::Percent
        | Operator::Assign => None,
    }
}

struct Parser<'a> {
    cursor: Cursor<'a>,
    symbols: SymbolTable,
    code: InstructionTable,
    jumps: JumpStack,
    trace: DerivationTrace,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self {
            cursor: Cursor::new(tokens),
            symbols: SymbolTable::new(),
            code: InstructionTable::new(),
            jumps: JumpStack::new(),
            trace: DerivationTrace::new(),
        }
    }

    fn production(&mut self, rule: &'static str) {
        self.trace.push_production(rule);
    }

    fn unexpected(&self, expected: &'static str) -> CompileError {
        CompileError::UnexpectedToken {
            expected,
            found: self.cursor.peek().clone(),
            position: self.cursor.position(),
        }
    }

    /// Consumes the lookahead and records it in the trace.
    fn advance(&mut self) {
        self.trace.push_token(self.cursor.peek().clone());
        self.cursor.bump();
    }

    fn expect(&mut self, expected: &'static str, p: impl FnOnce(&Token) -> bool) -> Result<()> {
        if !p(self.cursor.peek()) {
            return Err(self.unexpected(expected));
        }
        self.advance();
        Ok(())
    }

    fn expect_separator(&mut self, sep: Separator) -> Result<()> {
        self.expect(sep.as_str(), |t| t.is_separator(sep))
    }

    fn expect_keyword(&mut self, kw: Keyword) -> Result<()> {
        self.expect(kw.as_str(), |t| t.is_keyword(kw))
    }

    fn expect_operator(&mut self, op: Operator) -> Result<()> {
        self.expect(op.as_str(), |t| *t == Token::Operator(op))
    }

    fn expect_identifier(&mut self) -> Result<Identifier> {
        let Token::Identifier(name) = self.cursor.peek() else {
            return Err(self.unexpected("Identifier"));
        };
        self.advance();
        Ok(name.clone())
    }

    /// Completes the innermost pending `JUMPZ` with the next free address.
    fn resolve_pending_jump(&mut self) {
        let target = self.code.next_address();
        let resolved = self.jumps.resolve(&mut self.code, target);
        assert!(resolved.is_some(), "every condition leaves one pending jump");
    }

    // <Rat25F> ::= # <Opt Declaration List> <Statement List> #
    fn program(&mut self) -> Result<()> {
        self.production("<Rat25F> ::= # <Opt Declaration List> <Statement List> #");
        self.expect_separator(Separator::Hash)?;
        self.opt_declaration_list()?;
        self.statement_list()?;
        self.expect_separator(Separator::Hash)
    }

    fn opt_declaration_list(&mut self) -> Result<()> {
        if self.cursor.peek().is_qualifier() {
            self.production("<Opt Declaration List> ::= <Declaration List>");
            self.declaration_list()
        } else {
            self.production("<Opt Declaration List> ::= <Empty>");
            self.empty();
            Ok(())
        }
    }

    fn declaration_list(&mut self) -> Result<()> {
        loop {
            self.production("<Declaration List> ::= <Declaration> ;");
            self.declaration()?;
            self.expect_separator(Separator::Semicolon)?;

            if !self.cursor.peek().is_qualifier() {
                return Ok(());
            }
            self.production("<Declaration List> ::= <Declaration> ; <Declaration List>");
        }
    }

    fn declaration(&mut self) -> Result<()> {
        self.production("<Declaration> ::= <Qualifier> <IDs>");
        let var_type = self.qualifier()?;
        self.ids(IdsMode::Declare(var_type))
    }

    fn qualifier(&mut self) -> Result<VarType> {
        self.production("<Qualifier> ::= integer | boolean");
        let var_type = match self.cursor.peek() {
            Token::Keyword(Keyword::Integer) => VarType::Integer,
            Token::Keyword(Keyword::Boolean) => VarType::Boolean,
            _ => return Err(self.unexpected("integer or boolean")),
        };
        self.advance();
        Ok(var_type)
    }

    fn ids(&mut self, mode: IdsMode) -> Result<()> {
        loop {
            self.production("<IDs> ::= <Identifier>");
            let name = self.expect_identifier()?;
            match mode {
                IdsMode::Declare(var_type) => {
                    self.symbols.insert(&name, var_type)?;
                }
                IdsMode::Read => {
                    let address = self.symbols.get_address(&name)?;
                    self.code.emit(Opcode::StdIn, None);
                    self.code.emit(Opcode::PopM, Some(Operand::Memory(address)));
                }
            }

            if !self.cursor.peek().is_separator(Separator::Comma) {
                return Ok(());
            }
            self.production("<IDs> ::= <Identifier> , <IDs>");
            self.advance();
        }
    }

    fn statement_list(&mut self) -> Result<()> {
        loop {
            self.production("<Statement List> ::= <Statement>");
            self.statement()?;

            if !self.cursor.peek().starts_statement() {
                return Ok(());
            }
            self.production("<Statement List> ::= <Statement> <Statement List>");
        }
    }

    fn statement(&mut self) -> Result<()> {
        match self.cursor.peek() {
            Token::Separator(Separator::OpenCurly) => {
                self.production("<Statement> ::= <Compound>");
                self.compound()
            }
            Token::Keyword(Keyword::If) => {
                self.production("<Statement> ::= <If>");
                self.if_statement()
            }
            Token::Keyword(Keyword::Return) => {
                self.production("<Statement> ::= <Return>");
                self.return_statement()
            }
            Token::Keyword(Keyword::Put) => {
                self.production("<Statement> ::= <Print>");
                self.print_statement()
            }
            Token::Keyword(Keyword::Get) => {
                self.production("<Statement> ::= <Scan>");
                self.scan()
            }
            Token::Keyword(Keyword::While) => {
                self.production("<Statement> ::= <While>");
                self.while_statement()
            }
            Token::Identifier(_) => {
                self.production("<Statement> ::= <Assign>");
                self.assign()
            }
            _ => Err(self.unexpected("Statement")),
        }
    }

    fn compound(&mut self) -> Result<()> {
        self.production("<Compound> ::= { <Statement List> }");
        self.expect_separator(Separator::OpenCurly)?;
        self.statement_list()?;
        self.expect_separator(Separator::CloseCurly)
    }

    fn assign(&mut self) -> Result<()> {
        self.production("<Assign> ::= <Identifier> = <Expression> ;");
        let name = self.expect_identifier()?;
        let address = self.symbols.get_address(&name)?;
        self.expect_operator(Operator::Assign)?;
        self.expression()?;
        self.code.emit(Opcode::PopM, Some(Operand::Memory(address)));
        self.expect_separator(Separator::Semicolon)
    }

    fn if_statement(&mut self) -> Result<()> {
        self.production("<If> ::= if ( <Condition> ) <Statement> fi");
        self.expect_keyword(Keyword::If)?;
        self.expect_separator(Separator::OpenParanth)?;
        self.condition()?;
        self.expect_separator(Separator::CloseParanth)?;
        self.statement()?;

        if self.cursor.peek().is_keyword(Keyword::Else) {
            self.production("<If> ::= if ( <Condition> ) <Statement> else <Statement> fi");
            let skip_else = self.code.emit(Opcode::Jump, None);
            self.resolve_pending_jump();
            self.advance();
            self.statement()?;
            let after_else = self.code.next_address();
            self.code.patch(skip_else, Operand::Target(after_else));
        } else {
            self.resolve_pending_jump();
        }

        self.expect_keyword(Keyword::Fi)
    }

    fn return_statement(&mut self) -> Result<()> {
        self.production("<Return> ::= return ;");
        self.expect_keyword(Keyword::Return)?;

        if !self.cursor.peek().is_separator(Separator::Semicolon) {
            self.production("<Return> ::= return <Expression> ;");
            self.expression()?;
        }

        self.expect_separator(Separator::Semicolon)
    }

    fn print_statement(&mut self) -> Result<()> {
        self.production("<Print> ::= put ( <Expression> );");
        self.expect_keyword(Keyword::Put)?;
        self.expect_separator(Separator::OpenParanth)?;
        self.expression()?;
        self.code.emit(Opcode::StdOut, None);
        self.expect_separator(Separator::CloseParanth)?;
        self.expect_separator(Separator::Semicolon)
    }

    fn scan(&mut self) -> Result<()> {
        self.production("<Scan> ::= get ( <IDs> );");
        self.expect_keyword(Keyword::Get)?;
        self.expect_separator(Separator::OpenParanth)?;
        self.ids(IdsMode::Read)?;
        self.expect_separator(Separator::CloseParanth)?;
        self.expect_separator(Separator::Semicolon)
    }

    fn while_statement(&mut self) -> Result<()> {
        self.production("<While> ::= while ( <Condition> ) <Statement>");
        self.expect_keyword(Keyword::While)?;
        let loop_start = self.code.emit(Opcode::Label, None);
        self.expect_separator(Separator::OpenParanth)?;
        self.condition()?;
        self.expect_separator(Separator::CloseParanth)?;
        self.statement()?;
        self.code.emit(Opcode::Jump, Some(Operand::Target(loop_start)));
        self.resolve_pending_jump();
        Ok(())
    }

    fn condition(&mut self) -> Result<()> {
        self.production("<Condition> ::= <Expression> <Relop> <Expression>");
        self.expression()?;
        let opcode = self.relop()?;
        self.expression()?;
        self.code.emit(opcode, None);
        self.jumps.emit_pending(&mut self.code, Opcode::JumpZ);
        Ok(())
    }

    fn relop(&mut self) -> Result<Opcode> {
        self.production("<Relop> ::= == | != | > | < | <= | =>");
        let opcode = match self.cursor.peek() {
            Token::Operator(op) => relop_opcode(*op),
            _ => None,
        };
        let opcode = opcode.ok_or_else(|| self.unexpected("relational operator"))?;
        self.advance();
        Ok(opcode)
    }

    fn expression(&mut self) -> Result<()> {
        self.production("<Expression> ::= <Term> <Expression Prime>");
        self.term()?;
        self.expression_prime()
    }

    fn expression_prime(&mut self) -> Result<()> {
        loop {
            let (rule, opcode) = match self.cursor.peek() {
                Token::Operator(Operator::Plus) => (
                    "<Expression Prime> ::= + <Term> <Expression Prime>",
                    Opcode::Add,
                ),
                Token::Operator(Operator::Hyphen) => (
                    "<Expression Prime> ::= - <Term> <Expression Prime>",
                    Opcode::Sub,
                ),
                _ => {
                    self.production("<Expression Prime> ::= ε");
                    return Ok(());
                }
            };
            self.production(rule);
            self.advance();
            self.term()?;
            self.code.emit(opcode, None);
        }
    }

    fn term(&mut self) -> Result<()> {
        self.production("<Term> ::= <Factor> <Term Prime>");
        self.factor()?;
        self.term_prime()
    }

    fn term_prime(&mut self) -> Result<()> {
        loop {
            let (rule, opcode) = match self.cursor.peek() {
                Token::Operator(Operator::Asterisk) => {
                    ("<Term Prime> ::= * <Factor> <Term Prime>", Opcode::Mul)
                }
                Token::Operator(Operator::FSlash) => {
                    ("<Term Prime> ::= / <Factor> <Term Prime>", Opcode::Div)
                }
                _ => {
                    self.production("<Term Prime> ::= ε");
                    return Ok(());
                }
            };
            self.production(rule);
            self.advance();
            self.factor()?;
            self.code.emit(opcode, None);
        }
    }

    fn factor(&mut self) -> Result<()> {
        if *self.cursor.peek() != Token::Operator(Operator::Hyphen) {
            self.production("<Factor> ::= <Primary>");
            return self.primary();
        }

        self.production("<Factor> ::= - <Primary>");
        self.advance();
        self.primary()?;
        self.code.emit(Opcode::PushI, Some(Operand::Immediate(-1)));
        self.code.emit(Opcode::Mul, None);
        Ok(())
    }

    fn primary(&mut self) -> Result<()> {
        let operand = match self.cursor.peek() {
            Token::Identifier(name) => {
                self.production("<Primary> ::= <Identifier>");
                let address = self.symbols.get_address(name)?;
                self.advance();
                self.code.emit(Opcode::PushM, Some(Operand::Memory(address)));
                return Ok(());
            }
            Token::Integer(value) => {
                self.production("<Primary> ::= <Integer>");
                *value
            }
            Token::Keyword(Keyword::True) => {
                self.production("<Primary> ::= true");
                1
            }
            Token::Keyword(Keyword::False) => {
                self.production("<Primary> ::= false");
                0
            }
            Token::Separator(Separator::OpenParanth) => {
                self.production("<Primary> ::= ( <Expression> )");
                self.advance();
                self.expression()?;
                return self.expect_separator(Separator::CloseParanth);
            }
            _ => return Err(self.unexpected("Primary (Identifier, Integer, true, false, or '(')")),
        };
        self.advance();
        self.code.emit(Opcode::PushI, Some(Operand::Immediate(operand)));
        Ok(())
    }

    fn empty(&mut self) {
        self.production("<Empty> ::= ε");
    }

    fn finish(self) -> Result<Compilation> {
        if !self.cursor.at_end() {
            return Err(CompileError::TrailingInput {
                found: self.cursor.peek().clone(),
                position: self.cursor.position(),
            });
        }
        assert!(
            self.jumps.is_empty(),
            "{} jump(s) left unresolved after compilation",
            self.jumps.len()
        );

        Ok(Compilation {
            trace: self.trace,
            symbols: self.symbols,
            instructions: self.code,
        })
    }
}

/// Compiles a whole token stream. The stream should end with [`Token::Eof`].
pub fn parse(tokens: &[Token]) -> Result<Compilation> {
    let mut parser = Parser::new(tokens);
    parser.program()?;
    parser.finish()
}
