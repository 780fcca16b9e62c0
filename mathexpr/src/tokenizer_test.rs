use crate::tokenizer::{Token, Tokenizer};

#[test]
fn basic_ops() {
    let mut lx = Tokenizer::new("3+4*2/-(1-5)^2^3");
    let expect = [
        Token::Number(3.0),
        Token::BOp("+".to_string()),
        Token::Number(4.0),
        Token::BOp("*".to_string()),
        Token::Number(2.0),
        Token::BOp("/".to_string()),
        Token::UOp('-'),
        Token::OParen,
        Token::Number(1.0),
        Token::BOp("-".to_string()),
        Token::Number(5.0),
        Token::CParen,
        Token::BOp("^".to_string()),
        Token::Number(2.0),
        Token::BOp("^".to_string()),
        Token::Number(3.0),
    ];
    for exp_token in expect.iter() {
        assert_eq!(*exp_token, lx.next().unwrap());
    }
    assert_eq!(lx.next(), None);
}

#[test]
fn double_star_power() {
    let mut lx = Tokenizer::new("x**3 - 2*x - 5");
    let expect = [
        Token::Ident("x".to_string()),
        Token::BOp("^".to_string()),
        Token::Number(3.0),
        Token::BOp("-".to_string()),
        Token::Number(2.0),
        Token::BOp("*".to_string()),
        Token::Ident("x".to_string()),
        Token::BOp("-".to_string()),
        Token::Number(5.0),
    ];
    for exp_token in expect.iter() {
        assert_eq!(*exp_token, lx.next().unwrap());
    }
    assert_eq!(lx.next(), None);
}

#[test]
fn functions_and_variables() {
    let mut lx = Tokenizer::new("3.4e-2 * sin(x)/(7 % -4) * max(2, x)");
    let expect = [
        Token::Number(3.4e-2),
        Token::BOp("*".to_string()),
        Token::Func("sin".to_string(), 0),
        Token::OParen,
        Token::Ident("x".to_string()),
        Token::CParen,
        Token::BOp("/".to_string()),
        Token::OParen,
        Token::Number(7.0),
        Token::BOp("%".to_string()),
        Token::UOp('-'),
        Token::Number(4.0),
        Token::CParen,
        Token::BOp("*".to_string()),
        Token::Func("max".to_string(), 0),
        Token::OParen,
        Token::Number(2.0),
        Token::Comma,
        Token::Ident("x".to_string()),
        Token::CParen,
    ];
    for exp_token in expect.iter() {
        assert_eq!(*exp_token, lx.next().unwrap());
    }
    assert_eq!(lx.next(), None);
}

#[test]
fn numbers() {
    let tests = [
        ("987", 987.0),
        ("41.98", 41.98),
        ("28e3", 28e3),
        ("54E+2", 54e2),
        ("54e-33", 54e-33),
        ("85.365e3", 85.365e3),
        ("5.", 5.0),
    ];
    for (src, num) in tests.iter() {
        let mut lx = Tokenizer::new(src);
        assert_eq!(lx.next(), Some(Token::Number(*num)));
        assert_eq!(lx.next(), None);
    }
}

#[test]
fn trailing_e_is_the_constant() {
    let mut lx = Tokenizer::new("2e");
    assert_eq!(lx.next(), Some(Token::Number(2.0)));
    assert_eq!(lx.next(), Some(Token::Ident("e".to_string())));
    assert_eq!(lx.next(), None);
}

#[test]
fn unary_ops() {
    let mut lx = Tokenizer::new("x---2");
    let expect = [
        Token::Ident("x".to_string()),
        Token::BOp("-".to_string()),
        Token::UOp('-'),
        Token::UOp('-'),
        Token::Number(2.0),
    ];
    for exp_token in expect.iter() {
        assert_eq!(*exp_token, lx.next().unwrap());
    }
    assert_eq!(lx.next(), None);
}

#[test]
fn unknown_chars() {
    let mut lx = Tokenizer::new("x $ 2");
    assert_eq!(lx.next(), Some(Token::Ident("x".to_string())));
    assert_eq!(lx.next(), Some(Token::Unknown('$')));
}
