use crate::context;
use crate::parser::RpnExpr;
use crate::tokenizer::Token;
use thiserror::Error;

#[derive(Clone, PartialEq, Debug, Error)]
pub enum EvalError {
    #[error("unknown name '{0}'")]
    UnknownName(String),
    #[error("'{0}' produced a non-finite value")]
    Domain(String),
    #[error("ran out of operands")]
    MissingOperand,
}

// Math domain failures (log of a negative, division by zero inside
// the expression, overflow) all surface as non-finite values.
fn push_finite(operands: &mut Vec<f64>, value: f64, name: &str) -> Result<(), EvalError> {
    if !value.is_finite() {
        return Err(EvalError::Domain(name.to_string()));
    }
    operands.push(value);
    Ok(())
}

pub(crate) fn eval_rpn(rpn: &RpnExpr, x: f64) -> Result<f64, EvalError> {
    let mut operands: Vec<f64> = Vec::new();

    for token in rpn.0.iter() {
        match token {
            Token::Number(num) => operands.push(*num),
            Token::Ident(name) if name == context::VAR => operands.push(x),
            Token::Ident(name) => match context::constant(name) {
                Some(value) => operands.push(value),
                None => return Err(EvalError::UnknownName(name.clone())),
            },
            Token::BOp(op) => {
                let r = operands.pop().ok_or(EvalError::MissingOperand)?;
                let l = operands.pop().ok_or(EvalError::MissingOperand)?;
                let value = match op.as_str() {
                    "+" => l + r,
                    "-" => l - r,
                    "*" => l * r,
                    "/" => l / r,
                    "%" => l % r,
                    "^" => l.powf(r),
                    other => return Err(EvalError::UnknownName(other.to_string())),
                };
                push_finite(&mut operands, value, op)?;
            }
            Token::UOp(_) => {
                let o = operands.pop().ok_or(EvalError::MissingOperand)?;
                operands.push(-o);
            }
            Token::Func(name, arity) => {
                if *arity > operands.len() {
                    return Err(EvalError::MissingOperand);
                }
                let args = operands.split_off(operands.len() - arity);
                let value = context::apply(name, &args);
                push_finite(&mut operands, value, name)?;
            }
            other => return Err(EvalError::UnknownName(format!("{:?}", other))),
        }
    }
    operands.pop().ok_or(EvalError::MissingOperand)
}
