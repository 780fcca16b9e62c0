use crate::parser::{ParseError, ShuntingParser};
use crate::tokenizer::Token;

#[test]
fn rpn_order() {
    let rpn = ShuntingParser::parse_str("3+4*2/-(1-5)^2^3").unwrap();
    let expect = [
        Token::Number(3.0),
        Token::Number(4.0),
        Token::Number(2.0),
        Token::BOp("*".to_string()),
        Token::Number(1.0),
        Token::Number(5.0),
        Token::BOp("-".to_string()),
        Token::Number(2.0),
        Token::Number(3.0),
        Token::BOp("^".to_string()),
        Token::BOp("^".to_string()),
        Token::UOp('-'),
        Token::BOp("/".to_string()),
        Token::BOp("+".to_string()),
    ];
    for (i, token) in expect.iter().enumerate() {
        assert_eq!(rpn.0[i], *token);
    }
}

#[test]
fn function_arity() {
    let rpn = ShuntingParser::parse_str("sqrt(-(1-x^2) / (1 + x^2))").unwrap();
    let expect = [
        Token::Number(1.0),
        Token::Ident("x".to_string()),
        Token::Number(2.0),
        Token::BOp("^".to_string()),
        Token::BOp("-".to_string()),
        Token::UOp('-'),
        Token::Number(1.0),
        Token::Ident("x".to_string()),
        Token::Number(2.0),
        Token::BOp("^".to_string()),
        Token::BOp("+".to_string()),
        Token::BOp("/".to_string()),
        Token::Func("sqrt".to_string(), 1),
    ];
    for (i, token) in expect.iter().enumerate() {
        assert_eq!(rpn.0[i], *token);
    }

    let rpn = ShuntingParser::parse_str("max(2, x, atan2(1, x))").unwrap();
    assert_eq!(
        rpn.0.last(),
        Some(&Token::Func("max".to_string(), 3))
    );
}

#[test]
fn mismatched_parens() {
    let rpn = ShuntingParser::parse_str("sqrt(-(1-x^2) / (1 + x^2)");
    assert_eq!(rpn, Err(ParseError::MissingCParen));

    let rpn = ShuntingParser::parse_str("-(1-x^2) / (1 + x^2))");
    assert_eq!(rpn, Err(ParseError::MissingOParen));

    let rpn = ShuntingParser::parse_str("max 4, 6)");
    assert_eq!(rpn, Err(ParseError::MissingOParen));
}

#[test]
fn unknown_names_rejected() {
    assert_eq!(
        ShuntingParser::parse_str("y + 1"),
        Err(ParseError::UnknownName("y".to_string()))
    );
    assert_eq!(
        ShuntingParser::parse_str("foo(x)"),
        Err(ParseError::UnknownName("foo".to_string()))
    );
    // names outside the table are rejected even if they never
    // influence the result
    assert_eq!(
        ShuntingParser::parse_str("0 * open_file(x)"),
        Err(ParseError::UnknownName("open_file".to_string()))
    );
}

#[test]
fn wrong_arity_rejected() {
    assert_eq!(
        ShuntingParser::parse_str("sin(1, 2)"),
        Err(ParseError::WrongArity {
            func: "sin".to_string(),
            expected: "1",
            got: 2,
        })
    );
    assert_eq!(
        ShuntingParser::parse_str("pow(2)"),
        Err(ParseError::WrongArity {
            func: "pow".to_string(),
            expected: "2",
            got: 1,
        })
    );
    assert!(ShuntingParser::parse_str("min(1)").is_ok());
    assert!(ShuntingParser::parse_str("min(1, 2, 3, 4)").is_ok());
}

#[test]
fn comma_outside_function_call_rejected() {
    // a comma inside a plain parenthesized group must not count
    // toward the enclosing call's arity
    assert_eq!(
        ShuntingParser::parse_str("max(1, (2, 3))"),
        Err(ParseError::MisplacedComma)
    );
    assert_eq!(
        ShuntingParser::parse_str("(1, 2)"),
        Err(ParseError::MisplacedComma)
    );
    // commas directly inside nested calls still count correctly
    let rpn = ShuntingParser::parse_str("max(1, min(2, 3), 4)").unwrap();
    assert_eq!(rpn.0.last(), Some(&Token::Func("max".to_string(), 3)));
}

#[test]
fn malformed_rejected() {
    assert_eq!(ShuntingParser::parse_str(""), Err(ParseError::EmptyExpression));
    assert_eq!(ShuntingParser::parse_str("   "), Err(ParseError::EmptyExpression));
    assert_eq!(ShuntingParser::parse_str("3 +"), Err(ParseError::Malformed));
    assert_eq!(ShuntingParser::parse_str("3 4"), Err(ParseError::Malformed));
    assert_eq!(
        ShuntingParser::parse_str("x $ 2"),
        Err(ParseError::BadToken("$".to_string()))
    );
}
