use std::iter::Peekable;
use std::str::Chars;

#[derive(Clone, PartialEq, Debug)]
pub enum Token {
    Unknown(char),
    Number(f64),
    Ident(String),
    Func(String, usize), // arity filled in by the parser
    UOp(char),
    BOp(String),
    OParen,
    CParen,
    Comma,
}

pub struct Tokenizer<'a> {
    src: Peekable<Chars<'a>>,
    prev: Option<Token>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(source: &'a str) -> Self {
        Tokenizer {
            src: source.chars().peekable(),
            prev: None,
        }
    }

    // a minus is unary unless it follows a value or a closing paren
    fn makes_unary(prev: &Option<Token>) -> bool {
        !matches!(
            prev,
            Some(Token::Number(_)) | Some(Token::Ident(_)) | Some(Token::CParen)
        )
    }

    fn scan_digits(&mut self, buf: &mut String) {
        while let Some(&c) = self.src.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            buf.push(c);
            self.src.next();
        }
    }

    // [0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?
    fn scan_number(&mut self, first: char) -> Token {
        use std::str::FromStr;
        let mut buf = String::new();
        buf.push(first);
        self.scan_digits(&mut buf);
        if self.src.peek() == Some(&'.') {
            buf.push('.');
            self.src.next();
            self.scan_digits(&mut buf);
        }
        // exponent only when digits follow, else 'e' is the constant
        let mut look = self.src.clone();
        if let Some(e @ ('e' | 'E')) = look.next() {
            let mut exp = String::new();
            exp.push(e);
            let mut next = look.next();
            if let Some(sign @ ('+' | '-')) = next {
                exp.push(sign);
                next = look.next();
            }
            if let Some(d) = next {
                if d.is_ascii_digit() {
                    buf.push_str(&exp);
                    buf.push(d);
                    self.src = look;
                    self.scan_digits(&mut buf);
                }
            }
        }
        Token::Number(f64::from_str(&buf).unwrap())
    }

    // [a-zA-Z_][a-zA-Z0-9_]*, a function call when '(' follows
    fn scan_ident(&mut self, first: char) -> Token {
        let mut buf = String::new();
        buf.push(first);
        while let Some(&c) = self.src.peek() {
            if !c.is_ascii_alphanumeric() && c != '_' {
                break;
            }
            buf.push(c);
            self.src.next();
        }
        match self.src.peek() {
            Some('(') => Token::Func(buf, 0),
            _ => Token::Ident(buf),
        }
    }

    fn get_token(&mut self) -> Option<Token> {
        while matches!(self.src.peek(), Some(c) if c.is_whitespace()) {
            self.src.next();
        }
        let c = self.src.next()?;
        Some(match c {
            '(' => Token::OParen,
            ')' => Token::CParen,
            ',' => Token::Comma,
            '+' | '/' | '%' | '^' => Token::BOp(c.to_string()),
            '*' => {
                // python-style '**' is an alias for '^'
                if self.src.peek() == Some(&'*') {
                    self.src.next();
                    Token::BOp("^".to_string())
                } else {
                    Token::BOp("*".to_string())
                }
            }
            '-' if Self::makes_unary(&self.prev) => Token::UOp('-'),
            '-' => Token::BOp("-".to_string()),
            d if d.is_ascii_digit() => self.scan_number(d),
            a if a.is_ascii_alphabetic() || a == '_' => self.scan_ident(a),
            other => Token::Unknown(other),
        })
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token;
    fn next(&mut self) -> Option<Self::Item> {
        let token = self.get_token();
        self.prev = token.clone();
        token
    }
}
