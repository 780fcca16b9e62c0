#![deny(warnings)]
//! Numerical root-finding ("zero of functions") for a real function
//! of one variable supplied as an expression string.
//!
//! Six methods: bisection, regula falsi, secant, Newton-Raphson,
//! fixed-point iteration and modified secant. Every solver compiles
//! the expression with [`mathexpr`], runs a bounded iteration loop
//! and returns a [`Solution`] carrying the estimate, the residual,
//! the iteration count and the full per-iteration history, or a
//! [`SolveError`] saying why the run was aborted. Running out of
//! iterations is not an error: the last estimate comes back with
//! `converged: false`.

pub use mathexpr::{EvalError, Function, ParseError};

pub use error::SolveError;
pub use report::{Solution, Step};

mod error;
mod report;

mod bracket;
pub use bracket::{bisection, regula_falsi};
mod open;
pub use open::{fixed_point, modified_secant, newton_raphson, secant};

#[cfg(test)]
mod report_test;

/// Defaults applied by the interactive front end on empty input.
pub const DEFAULT_TOL: f64 = 1e-6;
pub const DEFAULT_MAX_ITER: usize = 50;
/// Default perturbation fraction for the modified secant method.
pub const DEFAULT_DELTA: f64 = 1e-3;

/// Step for the central-difference derivative. Fixed, not adaptive.
const DERIV_STEP: f64 = 1e-6;

/// Central-difference derivative of `f` at `x`:
/// `(f(x+h) - f(x-h)) / 2h` with `h = 1e-6`.
pub fn derivative(f: &Function, x: f64) -> Result<f64, SolveError> {
    let fp = eval(f, x + DERIV_STEP)?;
    let fm = eval(f, x - DERIV_STEP)?;
    Ok((fp - fm) / (2.0 * DERIV_STEP))
}

pub(crate) fn compile(expr: &str) -> Result<Function, SolveError> {
    Function::parse(expr).map_err(|source| SolveError::Parse {
        expr: expr.to_string(),
        source,
    })
}

// attach the expression and the point to evaluation failures
pub(crate) fn eval(f: &Function, x: f64) -> Result<f64, SolveError> {
    f.eval(x).map_err(|source| SolveError::Eval {
        expr: f.source().to_string(),
        x,
        source,
    })
}

pub(crate) fn check_params(tol: f64, max_iter: usize) -> Result<(), SolveError> {
    if !tol.is_finite() || tol <= 0.0 {
        return Err(SolveError::InvalidTolerance { got: tol });
    }
    if max_iter == 0 {
        return Err(SolveError::InvalidMaxIter);
    }
    Ok(())
}
