use mathexpr::{EvalError, ParseError};
use thiserror::Error;

/// Why a solver run was aborted.
///
/// Evaluation and parse failures always carry the offending
/// expression (and point) so front ends can echo them back verbatim.
/// Exhausting `max_iter` is not represented here; that is a
/// best-effort [`crate::Solution`] with `converged: false`.
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("cannot parse '{expr}': {source}")]
    Parse {
        expr: String,
        #[source]
        source: ParseError,
    },

    #[error("error evaluating '{expr}' at x={x}: {source}")]
    Eval {
        expr: String,
        x: f64,
        #[source]
        source: EvalError,
    },

    #[error("invalid tolerance: must be finite and > 0, got {got}")]
    InvalidTolerance { got: f64 },

    #[error("invalid max_iter: must be >= 1")]
    InvalidMaxIter,

    #[error("f(a) and f(b) must have opposite signs on [{a}, {b}]")]
    SameSignBracket { a: f64, b: f64 },

    #[error("zero division in secant step: f(x1) - f(x0) == 0 at x1={x1}")]
    DegenerateSecant { x1: f64 },

    #[error("zero derivative encountered at x={x}")]
    ZeroDerivative { x: f64 },

    #[error("zero division in modified secant denominator at x={x}")]
    DegenerateDenominator { x: f64 },
}
