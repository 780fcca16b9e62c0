//! The fixed set of names an expression may reference: one free
//! variable plus an explicit table of math functions and constants.
//! This table is the whole contract; nothing else is reachable from
//! an expression.

use std::f64::consts;

/// The single free variable every expression is evaluated against.
pub(crate) const VAR: &str = "x";

pub(crate) enum Arity {
    Exact(usize),
    AtLeast(usize),
}

impl Arity {
    pub(crate) fn accepts(&self, n: usize) -> bool {
        match *self {
            Arity::Exact(k) => n == k,
            Arity::AtLeast(k) => n >= k,
        }
    }

    pub(crate) fn describe(&self) -> &'static str {
        match *self {
            Arity::Exact(1) => "1",
            Arity::Exact(2) => "2",
            Arity::AtLeast(_) => "at least 1",
            Arity::Exact(_) => "?",
        }
    }
}

pub(crate) fn constant(name: &str) -> Option<f64> {
    match name {
        "pi" => Some(consts::PI),
        "e" => Some(consts::E),
        "tau" => Some(consts::TAU),
        _ => None,
    }
}

pub(crate) fn function_arity(name: &str) -> Option<Arity> {
    match name {
        "sin" | "cos" | "tan" | "asin" | "acos" | "atan" | "sinh" | "cosh" | "tanh" | "exp"
        | "log" | "log2" | "log10" | "sqrt" | "abs" | "floor" | "ceil" => Some(Arity::Exact(1)),
        "pow" | "atan2" => Some(Arity::Exact(2)),
        "min" | "max" => Some(Arity::AtLeast(1)),
        _ => None,
    }
}

// arity has been checked at parse time; args.len() matches
pub(crate) fn apply(name: &str, args: &[f64]) -> f64 {
    match name {
        "sin" => args[0].sin(),
        "cos" => args[0].cos(),
        "tan" => args[0].tan(),
        "asin" => args[0].asin(),
        "acos" => args[0].acos(),
        "atan" => args[0].atan(),
        "sinh" => args[0].sinh(),
        "cosh" => args[0].cosh(),
        "tanh" => args[0].tanh(),
        "exp" => args[0].exp(),
        "log" => args[0].ln(),
        "log2" => args[0].log2(),
        "log10" => args[0].log10(),
        "sqrt" => args[0].sqrt(),
        "abs" => args[0].abs(),
        "floor" => args[0].floor(),
        "ceil" => args[0].ceil(),
        "pow" => args[0].powf(args[1]),
        "atan2" => args[0].atan2(args[1]),
        "min" => args[1..].iter().fold(args[0], |a, &v| a.min(v)),
        "max" => args[1..].iter().fold(args[0], |a, &v| a.max(v)),
        _ => f64::NAN,
    }
}
