use crate::context;
use crate::tokenizer::{Token, Tokenizer};
use thiserror::Error;

#[derive(Clone, PartialEq, Debug, Error)]
pub enum ParseError {
    #[error("empty expression")]
    EmptyExpression,
    #[error("missing opening paren")]
    MissingOParen,
    #[error("missing closing paren")]
    MissingCParen,
    #[error("comma outside a function call")]
    MisplacedComma,
    #[error("bad token '{0}'")]
    BadToken(String),
    #[error("operator without associativity")]
    NonAssociative,
    #[error("unknown name '{0}'")]
    UnknownName(String),
    #[error("{func} expects {expected} argument(s), got {got}")]
    WrongArity {
        func: String,
        expected: &'static str,
        got: usize,
    },
    #[error("malformed expression")]
    Malformed,
}

#[derive(PartialEq, Debug)]
pub enum Assoc {
    Left,
    Right,
    None,
}

pub fn precedence(token: &Token) -> (usize, Assoc) {
    match token {
        Token::OParen => (1, Assoc::Left), // keep at bottom
        Token::BOp(o) if o == "+" || o == "-" => (2, Assoc::Left),
        Token::BOp(o) if o == "*" || o == "/" || o == "%" => (3, Assoc::Left),
        Token::UOp('-') => (5, Assoc::Right),
        Token::BOp(o) if o == "^" => (5, Assoc::Right),
        Token::Func(..) => (7, Assoc::Left),
        _ => (99, Assoc::None),
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct RpnExpr(pub Vec<Token>);

pub struct ShuntingParser;

impl ShuntingParser {
    pub fn parse_str(expr: &str) -> Result<RpnExpr, ParseError> {
        Self::parse(&mut Tokenizer::new(expr))
    }

    pub fn parse(lex: &mut impl Iterator<Item = Token>) -> Result<RpnExpr, ParseError> {
        let mut out = Vec::new();
        let mut stack = Vec::new();
        let mut arity = Vec::<usize>::new();

        for token in lex {
            match token {
                Token::Number(_) | Token::Ident(_) => out.push(token),
                Token::OParen => stack.push(token),
                Token::Func(..) => {
                    stack.push(token);
                    arity.push(1);
                }
                Token::Comma | Token::CParen => {
                    while !stack.is_empty() && stack.last() != Some(&Token::OParen) {
                        out.push(stack.pop().unwrap());
                    }
                    if stack.is_empty() {
                        return Err(ParseError::MissingOParen);
                    }
                    // end of grouping: check if this is a function call
                    if token == Token::CParen {
                        stack.pop(); // peel matching OParen
                        match stack.pop() {
                            Some(Token::Func(func, _)) => {
                                out.push(Token::Func(func, arity.pop().unwrap()))
                            }
                            Some(other) => stack.push(other),
                            None => (),
                        }
                    } else {
                        // Comma: only meaningful directly inside a
                        // function call's parens, where it separates
                        // arguments
                        let below = stack.len().checked_sub(2).map(|i| &stack[i]);
                        if !matches!(below, Some(Token::Func(..))) {
                            return Err(ParseError::MisplacedComma);
                        }
                        if let Some(a) = arity.last_mut() {
                            *a += 1;
                        }
                    }
                }
                Token::UOp(_) | Token::BOp(_) => {
                    let (prec_rhs, assoc_rhs) = precedence(&token);
                    while !stack.is_empty() {
                        let (prec_lhs, _) = precedence(stack.last().unwrap());
                        if prec_lhs < prec_rhs {
                            break;
                        } else if prec_lhs > prec_rhs {
                            out.push(stack.pop().unwrap());
                        } else {
                            match assoc_rhs {
                                Assoc::Left => out.push(stack.pop().unwrap()),
                                Assoc::None => return Err(ParseError::NonAssociative),
                                Assoc::Right => break,
                            }
                        }
                    }
                    stack.push(token);
                }
                Token::Unknown(lexeme) => return Err(ParseError::BadToken(lexeme.to_string())),
            }
        }
        while let Some(top) = stack.pop() {
            match top {
                Token::OParen => return Err(ParseError::MissingCParen),
                token => out.push(token),
            }
        }
        let rpn = RpnExpr(out);
        rpn.validate()?;
        Ok(rpn)
    }
}

impl RpnExpr {
    // Static checks so bad expressions fail before any evaluation:
    // every name must be in the allowed table, function arities must
    // match, and the RPN must reduce to exactly one value.
    fn validate(&self) -> Result<(), ParseError> {
        if self.0.is_empty() {
            return Err(ParseError::EmptyExpression);
        }
        let mut depth = 0usize;
        for token in &self.0 {
            match token {
                Token::Number(_) => depth += 1,
                Token::Ident(name) => {
                    if name != context::VAR && context::constant(name).is_none() {
                        return Err(ParseError::UnknownName(name.clone()));
                    }
                    depth += 1;
                }
                Token::Func(name, arity) => {
                    let expected = context::function_arity(name)
                        .ok_or_else(|| ParseError::UnknownName(name.clone()))?;
                    if !expected.accepts(*arity) {
                        return Err(ParseError::WrongArity {
                            func: name.clone(),
                            expected: expected.describe(),
                            got: *arity,
                        });
                    }
                    if depth < *arity {
                        return Err(ParseError::Malformed);
                    }
                    depth = depth - arity + 1;
                }
                Token::UOp(_) => {
                    if depth < 1 {
                        return Err(ParseError::Malformed);
                    }
                }
                Token::BOp(_) => {
                    if depth < 2 {
                        return Err(ParseError::Malformed);
                    }
                    depth -= 1;
                }
                _ => return Err(ParseError::Malformed),
            }
        }
        match depth {
            1 => Ok(()),
            _ => Err(ParseError::Malformed),
        }
    }
}
