use super::*;

fn id(s: &str) -> Token {
    Token::Identifier(s.to_owned())
}

#[test]
fn test_basic_program() {
    let lexed = lex("# integer x; get(x); put(x); #");
    let expected = vec![
        Token::Separator(Separator::Hash),
        Token::Keyword(Keyword::Integer),
        id("x"),
        Token::Separator(Separator::Semicolon),
        Token::Keyword(Keyword::Get),
        Token::Separator(Separator::OpenParanth),
        id("x"),
        Token::Separator(Separator::CloseParanth),
        Token::Separator(Separator::Semicolon),
        Token::Keyword(Keyword::Put),
        Token::Separator(Separator::OpenParanth),
        id("x"),
        Token::Separator(Separator::CloseParanth),
        Token::Separator(Separator::Semicolon),
        Token::Separator(Separator::Hash),
        Token::Eof,
    ];
    assert_eq!(Ok(expected), lexed);
}

#[test]
fn test_case_folding_and_dollar() {
    let lexed = lex("WHILE Max$1").unwrap();
    assert_eq!(
        vec![Token::Keyword(Keyword::While), id("max$1"), Token::Eof],
        lexed
    );
}

#[test]
fn test_comments_are_stripped() {
    let lexed = lex("a \"this is\n a comment\" b \u{201c}curly\u{201d} c").unwrap();
    assert_eq!(vec![id("a"), id("b"), id("c"), Token::Eof], lexed);
}

#[test]
fn test_unterminated_comment() {
    let lexed = lex("a \" never closed b c").unwrap();
    assert_eq!(vec![id("a"), Token::Eof], lexed);
}

#[test]
fn test_operators_longest_match() {
    let lexed = lex("<= < => >= = == != ||").unwrap();
    let expected: Vec<Token> = [
        Operator::IsLessThanOrEqual,
        Operator::IsLessThan,
        Operator::EqualOrGreater,
        Operator::IsGreaterThanOrEqual,
        Operator::Assign,
        Operator::IsEqual,
        Operator::IsNotEqual,
        Operator::LogicalOr,
    ]
    .into_iter()
    .map(Token::Operator)
    .chain(std::iter::once(Token::Eof))
    .collect();
    assert_eq!(expected, lexed);
}

#[test]
fn test_numbers() {
    let lexed = lex("42 3.14 007").unwrap();
    assert_eq!(
        vec![
            Token::Integer(42),
            Token::Real("3.14".into()),
            Token::Integer(7),
            Token::Eof
        ],
        lexed
    );
}

#[test]
fn test_bad_constant() {
    let err = lex("x = 12abc;").unwrap_err();
    assert_eq!(&InnerLexError::BadConstant("12abc".into()), err.get_inner());

    let err = lex("x = 1.;").unwrap_err();
    assert_eq!(&InnerLexError::BadConstant("1.".into()), err.get_inner());

    let err = lex("99999999999999999999").unwrap_err();
    assert!(matches!(err.get_inner(), InnerLexError::BadConstant(_)));
}

#[test]
fn test_bad_char_reports_line() {
    let err = lex("a\nb\n  @").unwrap_err();
    assert_eq!(&InnerLexError::UnexpectedChar('@'), err.get_inner());
    assert_eq!(3, err.get_ln());

    let err = lex("a ! b").unwrap_err();
    assert_eq!(&InnerLexError::UnexpectedChar('!'), err.get_inner());
}

#[test]
fn test_lexeme_roundtrip_for_trace() {
    let lexed = lex("if (a => 1) fi").unwrap();
    let lexemes: Vec<String> = lexed.iter().map(Token::lexeme).collect();
    assert_eq!(vec!["if", "(", "a", "=>", "1", ")", "fi", ""], lexemes);
    assert_eq!(TokenType::Eof, lexed[7].token_type());
}
