//! Bracketing methods: bisection and regula falsi.
//!
//! Both demand a sign change over `[a, b]` before looping and keep
//! that invariant as the bracket shrinks. Neither has a failure mode
//! past the precondition: exhausting `max_iter` returns the last
//! estimate as best effort.

use crate::report::{Solution, Step};
use crate::{check_params, compile, eval, SolveError};

/// Bisection on a sign-changing bracket `[a, b]`.
///
/// The error metric is half the bracket width; the loop stops when
/// `f(c)` is exactly zero or the metric drops under `tol`.
pub fn bisection(
    f_expr: &str,
    a: f64,
    b: f64,
    tol: f64,
    max_iter: usize,
) -> Result<Solution, SolveError> {
    check_params(tol, max_iter)?;
    let f = compile(f_expr)?;
    let (mut a, mut b) = (a, b);
    let mut fa = eval(&f, a)?;
    let fb = eval(&f, b)?;
    // a zero at an endpoint passes; only a strictly-same-sign product
    // is rejected
    if fa * fb > 0.0 {
        return Err(SolveError::SameSignBracket { a, b });
    }
    let mut history = Vec::new();
    for k in 1..=max_iter {
        let c = (a + b) / 2.0;
        let fc = eval(&f, c)?;
        let err = (b - a).abs() / 2.0;
        history.push(Step::Bisection { k, a, b, c, fc, err });
        if fc == 0.0 || err < tol {
            return Ok(Solution {
                root: c,
                residual: fc.abs(),
                iterations: k,
                converged: true,
                history,
            });
        }
        if fa * fc < 0.0 {
            b = c;
        } else {
            a = c;
            fa = fc;
        }
    }
    let c = (a + b) / 2.0;
    let fc = eval(&f, c)?;
    Ok(Solution {
        root: c,
        residual: fc.abs(),
        iterations: max_iter,
        converged: false,
        history,
    })
}

/// Regula falsi (false position) on a sign-changing bracket `[a, b]`.
///
/// The new point is the secant intercept; the stopping test is
/// residual-based (`|f(c)| < tol`), unlike bisection's width test.
/// That asymmetry is intended.
pub fn regula_falsi(
    f_expr: &str,
    a: f64,
    b: f64,
    tol: f64,
    max_iter: usize,
) -> Result<Solution, SolveError> {
    check_params(tol, max_iter)?;
    let f = compile(f_expr)?;
    let (mut a, mut b) = (a, b);
    let mut fa = eval(&f, a)?;
    let mut fb = eval(&f, b)?;
    if fa * fb > 0.0 {
        return Err(SolveError::SameSignBracket { a, b });
    }
    let mut history = Vec::new();
    let mut last = (f64::NAN, f64::NAN);
    for k in 1..=max_iter {
        let c = (a * fb - b * fa) / (fb - fa);
        let fc = eval(&f, c)?;
        let err = fc.abs();
        history.push(Step::RegulaFalsi { k, a, b, c, fc, err });
        if fc.abs() < tol {
            return Ok(Solution {
                root: c,
                residual: fc.abs(),
                iterations: k,
                converged: true,
                history,
            });
        }
        if fa * fc < 0.0 {
            b = c;
            fb = fc;
        } else {
            a = c;
            fa = fc;
        }
        last = (c, fc);
    }
    Ok(Solution {
        root: last.0,
        residual: last.1.abs(),
        iterations: max_iter,
        converged: false,
        history,
    })
}
