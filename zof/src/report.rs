//! The result and trace model shared by every solver.

use serde::Serialize;
use std::fmt;

/// One row of a solver's iteration history. Each method records the
/// fields relevant to its own update formula, so front ends can
/// render exactly those. `k` is the 1-based iteration index.
#[derive(Clone, Copy, PartialEq, Debug, Serialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum Step {
    Bisection {
        k: usize,
        a: f64,
        b: f64,
        c: f64,
        fc: f64,
        err: f64,
    },
    RegulaFalsi {
        k: usize,
        a: f64,
        b: f64,
        c: f64,
        fc: f64,
        err: f64,
    },
    Secant {
        k: usize,
        x0: f64,
        x1: f64,
        x2: f64,
        fx2: f64,
        err: f64,
    },
    Newton {
        k: usize,
        x: f64,
        fx: f64,
        dfx: f64,
        x_new: f64,
        err: f64,
    },
    FixedPoint {
        k: usize,
        x: f64,
        gx: f64,
        err: f64,
    },
    ModifiedSecant {
        k: usize,
        x: f64,
        fx: f64,
        x_new: f64,
        err: f64,
    },
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Step::Bisection { k, a, b, c, fc, err } | Step::RegulaFalsi { k, a, b, c, fc, err } => {
                write!(f, "{:>3}  a={} b={} c={} f(c)={} err={}", k, a, b, c, fc, err)
            }
            Step::Secant { k, x0, x1, x2, fx2, err } => {
                write!(f, "{:>3}  x0={} x1={} x2={} f(x2)={} err={}", k, x0, x1, x2, fx2, err)
            }
            Step::Newton { k, x, fx, dfx, x_new, err } => {
                write!(f, "{:>3}  x={} f(x)={} f'(x)={} x_new={} err={}", k, x, fx, dfx, x_new, err)
            }
            Step::FixedPoint { k, x, gx, err } => {
                write!(f, "{:>3}  x={} g(x)={} err={}", k, x, gx, err)
            }
            Step::ModifiedSecant { k, x, fx, x_new, err } => {
                write!(f, "{:>3}  x={} f(x)={} x_new={} err={}", k, x, fx, x_new, err)
            }
        }
    }
}

impl Step {
    /// The error/residual metric used for this row's stopping test.
    pub fn err(&self) -> f64 {
        match *self {
            Step::Bisection { err, .. }
            | Step::RegulaFalsi { err, .. }
            | Step::Secant { err, .. }
            | Step::Newton { err, .. }
            | Step::FixedPoint { err, .. }
            | Step::ModifiedSecant { err, .. } => err,
        }
    }
}

/// Terminal output of a solver run.
///
/// `residual` is `|f(root)|` for the root-finding methods and the
/// final step size for fixed-point iteration. `converged` is false
/// when the run saturated `max_iter`; `root` is then the last
/// estimate (best effort, not an error). `history` has exactly
/// `iterations` rows, in iteration order.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct Solution {
    pub root: f64,
    pub residual: f64,
    pub iterations: usize,
    pub converged: bool,
    pub history: Vec<Step>,
}
