#![deny(warnings)]
//! A restricted evaluator for math expressions of a single variable.
//!
//! Expressions are tokenized, parsed into RPN with the shunting-yard
//! algorithm, and statically checked against a fixed table of allowed
//! functions and constants plus the one free variable `x`. Anything
//! outside that table is rejected at parse time.

pub use eval::EvalError;
pub use parser::{ParseError, RpnExpr, ShuntingParser};
pub use tokenizer::{Token, Tokenizer};

mod context;
mod eval;
mod parser;
mod tokenizer;

#[cfg(test)]
mod parser_test;
#[cfg(test)]
mod tokenizer_test;

/// A compiled expression, ready to be evaluated at any point.
///
/// Holds the original source text (for error reporting by callers)
/// and the validated RPN form. Evaluation is a pure function of
/// `(self, x)`: no state survives between calls.
#[derive(Clone, PartialEq, Debug)]
pub struct Function {
    source: String,
    rpn: RpnExpr,
}

impl Function {
    pub fn parse(source: &str) -> Result<Function, ParseError> {
        let rpn = ShuntingParser::parse_str(source)?;
        Ok(Function {
            source: source.to_string(),
            rpn,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn eval(&self, x: f64) -> Result<f64, EvalError> {
        eval::eval_rpn(&self.rpn, x)
    }
}
