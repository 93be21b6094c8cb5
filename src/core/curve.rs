//! Plottable functions.
//!
//! A [`Curve`] maps a real `x` to a real `y`, or reports that it has no real
//! value there.  Plain closures returning `f64` work out of the box: a NaN
//! result is read as "undefined", which is what `f64::sqrt(-1.0)` and friends
//! produce.  [`Partial`] adapts closures that prefer to say so with `None`.

use crate::core::error::DomainError;

pub trait Curve {
    fn eval(&self, x: f64) -> Result<f64, DomainError>;
}

impl<F> Curve for F
where
    F: Fn(f64) -> f64,
{
    #[inline]
    fn eval(&self, x: f64) -> Result<f64, DomainError> {
        let y = self(x);
        if y.is_nan() { Err(DomainError { x }) } else { Ok(y) }
    }
}

/// Wraps `Fn(f64) -> Option<f64>`; `None` means undefined at `x`.
#[derive(Clone, Copy)]
pub struct Partial<F>(pub F);

impl<F> Curve for Partial<F>
where
    F: Fn(f64) -> Option<f64>,
{
    #[inline]
    fn eval(&self, x: f64) -> Result<f64, DomainError> {
        (self.0)(x).ok_or(DomainError { x })
    }
}
