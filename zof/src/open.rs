//! Open methods: secant, Newton-Raphson, fixed-point iteration and
//! modified secant.
//!
//! No bracket is required, so nothing guarantees convergence. The
//! secant-family methods and Newton abort on an exactly-zero
//! denominator; fixed-point iteration has no failure mode at all and
//! is bounded only by `max_iter`.

use crate::report::{Solution, Step};
use crate::{check_params, compile, derivative, eval, SolveError};

/// Secant method from two starting points `x0`, `x1`.
pub fn secant(
    f_expr: &str,
    x0: f64,
    x1: f64,
    tol: f64,
    max_iter: usize,
) -> Result<Solution, SolveError> {
    check_params(tol, max_iter)?;
    let f = compile(f_expr)?;
    let (mut x0, mut x1) = (x0, x1);
    let mut f0 = eval(&f, x0)?;
    let mut f1 = eval(&f, x1)?;
    let mut history = Vec::new();
    let mut last = (f64::NAN, f64::NAN);
    for k in 1..=max_iter {
        if f1 - f0 == 0.0 {
            return Err(SolveError::DegenerateSecant { x1 });
        }
        let x2 = x1 - f1 * (x1 - x0) / (f1 - f0);
        let f2 = eval(&f, x2)?;
        let err = (x2 - x1).abs();
        // record the pre-shift window
        history.push(Step::Secant { k, x0, x1, x2, fx2: f2, err });
        if f2.abs() < tol || err < tol {
            return Ok(Solution {
                root: x2,
                residual: f2.abs(),
                iterations: k,
                converged: true,
                history,
            });
        }
        x0 = x1;
        f0 = f1;
        x1 = x2;
        f1 = f2;
        last = (x2, f2);
    }
    Ok(Solution {
        root: last.0,
        residual: last.1.abs(),
        iterations: max_iter,
        converged: false,
        history,
    })
}

/// Newton-Raphson from an initial guess, using the numeric
/// central-difference derivative.
///
/// On success the residual is `|f(x_new)|` re-evaluated at the
/// returned root, not the `f(x)` that triggered the stopping test.
pub fn newton_raphson(
    f_expr: &str,
    x0: f64,
    tol: f64,
    max_iter: usize,
) -> Result<Solution, SolveError> {
    check_params(tol, max_iter)?;
    let f = compile(f_expr)?;
    let mut x = x0;
    let mut history = Vec::new();
    for k in 1..=max_iter {
        let fx = eval(&f, x)?;
        let dfx = derivative(&f, x)?;
        if dfx == 0.0 {
            return Err(SolveError::ZeroDerivative { x });
        }
        let x_new = x - fx / dfx;
        let err = (x_new - x).abs();
        history.push(Step::Newton { k, x, fx, dfx, x_new, err });
        if fx.abs() < tol || err < tol {
            let residual = eval(&f, x_new)?.abs();
            return Ok(Solution {
                root: x_new,
                residual,
                iterations: k,
                converged: true,
                history,
            });
        }
        x = x_new;
    }
    let residual = eval(&f, x)?.abs();
    Ok(Solution {
        root: x,
        residual,
        iterations: max_iter,
        converged: false,
        history,
    })
}

/// Fixed-point iteration `x <- g(x)`.
///
/// The caller supplies `g`, not `f`; a root of `f` must be rewritten
/// as a fixed point `x = g(x)` first. Divergence is possible and is
/// only bounded by `max_iter`; the divergent last iterate comes back
/// as a best-effort result. The solution's residual field carries the
/// final step size, there is no `f` to evaluate.
pub fn fixed_point(
    g_expr: &str,
    x0: f64,
    tol: f64,
    max_iter: usize,
) -> Result<Solution, SolveError> {
    check_params(tol, max_iter)?;
    let g = compile(g_expr)?;
    let mut x = x0;
    let mut history = Vec::new();
    let mut err = f64::NAN;
    for k in 1..=max_iter {
        let x_new = eval(&g, x)?;
        err = (x_new - x).abs();
        history.push(Step::FixedPoint { k, x, gx: x_new, err });
        if err < tol {
            return Ok(Solution {
                root: x_new,
                residual: err,
                iterations: k,
                converged: true,
                history,
            });
        }
        x = x_new;
    }
    Ok(Solution {
        root: x,
        residual: err,
        iterations: max_iter,
        converged: false,
        history,
    })
}

/// Modified secant from a single starting point, perturbing by the
/// fraction `delta` (`denom = f(x + delta*x) - f(x)`).
///
/// At `x0 = 0` the perturbation vanishes and the denominator is
/// exactly `f(0) - f(0) = 0`, so the call always fails with
/// [`SolveError::DegenerateDenominator`]. That is the documented
/// behavior, not a case to special-case away.
pub fn modified_secant(
    f_expr: &str,
    x0: f64,
    delta: f64,
    tol: f64,
    max_iter: usize,
) -> Result<Solution, SolveError> {
    check_params(tol, max_iter)?;
    let f = compile(f_expr)?;
    let mut x = x0;
    let mut history = Vec::new();
    for k in 1..=max_iter {
        let fx = eval(&f, x)?;
        let denom = eval(&f, x + delta * x)? - fx;
        if denom == 0.0 {
            return Err(SolveError::DegenerateDenominator { x });
        }
        let x_new = x - delta * x * fx / denom;
        let err = (x_new - x).abs();
        history.push(Step::ModifiedSecant { k, x, fx, x_new, err });
        if fx.abs() < tol || err < tol {
            let residual = eval(&f, x_new)?.abs();
            return Ok(Solution {
                root: x_new,
                residual,
                iterations: k,
                converged: true,
                history,
            });
        }
        x = x_new;
    }
    let residual = eval(&f, x)?.abs();
    Ok(Solution {
        root: x,
        residual,
        iterations: max_iter,
        converged: false,
        history,
    })
}
