//! # Alpha Theory
//!
//! Smale's alpha theory certifies, from data at a single point, that Newton's
//! method started at that point converges quadratically to a root.
//!
//! For a function `f` and a point `x`:
//!
//! - `beta(f, x) = |f(x) / f'(x)|` is the length of the first Newton step.
//! - `gamma(f, x) = sup_{k >= 2} |f^(k)(x) / (k! f'(x))|^(1 / (k - 1))` bounds the
//!   growth of the higher derivatives.
//! - `alpha(f, x) = beta(f, x) * gamma(f, x)`.
//!
//! When `alpha(f, x) <= ALPHA_THRESHOLD`, `x` is an approximate solution, meaning it
//! lies in the quadratic convergence basin of a root of `f`.
//!
//! Gamma is a supremum over every derivative order, here it is only taken over the
//! derivatives provided. Supplying too few derivatives may underestimate alpha.
//!
//! References:
//!
//! - S. Smale, "Newton's method estimates from data at one point", Springer New York,
//!   1986.
//! - J. D. Hauenstein, F. Sottile, "alphaCertified: certifying solutions to polynomial
//!   systems", ACM Trans. Math. Softw., vol. 38, no. 4, 2012.
//!
// BSD 3-Clause License
//
// Copyright (c) 2026, Chris Swierczewski
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice, this
//    list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
//    this list of conditions and the following disclaimer in the documentation
//    and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its
//    contributors may be used to endorse or promote products derived from
//    this software without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
// DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
// FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
// DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
// SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
// CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
// OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

use num_complex::ComplexFloat;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::errors::{SmaleError, SmaleResult};
use crate::function::ScalarFunction;

/// Largest alpha for which Smale's theorem guarantees quadratic convergence.
#[allow(
    clippy::excessive_precision,
    reason = "Reproduced exactly as published."
)]
pub const ALPHA_THRESHOLD: f64 = 0.15767078078675478;

/// [`ALPHA_THRESHOLD`] as a float of the desired precision.
#[allow(
    clippy::missing_panics_doc,
    reason = "By construction this cannot panic."
)]
#[must_use]
pub fn alpha_threshold<R>() -> R
where
    R: num_traits::Float,
{
    R::from(ALPHA_THRESHOLD).unwrap()
}

/// Alpha, beta and gamma evaluated at a single point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Certificate<R> {
    /// Product of beta and gamma.
    pub alpha: R,

    /// Length of the first Newton step.
    pub beta: R,

    /// Bound on the growth of the higher derivatives.
    pub gamma: R,
}

impl<R> Certificate<R>
where
    R: num_traits::Float,
{
    /// Is the point an approximate solution, i.e. is alpha within the threshold.
    ///
    /// NaN alpha is never an approximate solution.
    #[must_use]
    pub fn is_approximate_solution(&self) -> bool {
        self.alpha <= alpha_threshold()
    }
}

/// Compute beta, the magnitude of the Newton step at `x0`.
///
/// Only the first derivative, `df[0]`, is used. A zero derivative is not checked
/// for, it results in an infinite or NaN beta.
///
/// ```
///     use smale_core::alpha::beta;
///     let f = |x: f64, _: &[f64]| x * x - 4.0;
///     let df = [|x: f64, _: &[f64]| 2.0 * x];
///     assert_eq!(beta(&f, 1.0, &df, &[]).unwrap(), 1.5);
/// ```
///
/// # Errors
///
/// [`SmaleError::MissingDerivative`] if `df` is empty.
pub fn beta<T, F, D>(func: &F, x0: T, df: &[D], args: &[T]) -> SmaleResult<T::Real>
where
    T: ComplexFloat,
    F: ScalarFunction<T> + ?Sized,
    D: ScalarFunction<T>,
{
    let der = df.first().ok_or(SmaleError::MissingDerivative)?;
    Ok((func.eval(x0, args) / der.eval(x0, args)).abs())
}

/// Compute gamma, the worst case growth of the higher derivatives at `x0`.
///
/// `df` holds the derivatives in increasing order starting from the first. The
/// supremum is taken over orders `2..=df.len()`, if any term is NaN the result is
/// NaN. Only the derivatives are evaluated, `func` is accepted so that all three
/// estimators share a call signature.
///
/// ```
///     use smale_core::alpha::gamma;
///     use smale_core::function::Polynomial;
///
///     let f = Polynomial::new(vec![1.0_f64, 0.0, 0.0, -1.0]);
///     let df = f.derivatives();
///     assert!((gamma(&f, 2.0, &df, &[]).unwrap() - 0.5).abs() < 1e-15);
/// ```
///
/// # Errors
///
/// [`SmaleError::GammaDomain`] if fewer than two derivatives are provided.
pub fn gamma<T, F, D>(_func: &F, x0: T, df: &[D], args: &[T]) -> SmaleResult<T::Real>
where
    T: ComplexFloat,
    F: ScalarFunction<T> + ?Sized,
    D: ScalarFunction<T>,
{
    let Some((first, higher)) = df.split_first().filter(|(_, higher)| !higher.is_empty())
    else {
        return Err(SmaleError::GammaDomain {
            provided: df.len(),
        });
    };

    // scale is 1 / (f'(x0) k!)
    let mut scale = T::one() / first.eval(x0, args);
    let mut order = T::one();
    let mut nth_root = T::Real::zero();
    let mut gamma = T::Real::zero();
    for der in higher {
        order = order + T::one();
        nth_root = nth_root + T::Real::one();
        scale = scale / order;

        let term = (scale * der.eval(x0, args)).abs().powf(nth_root.recip());
        if term.is_nan() || term > gamma {
            gamma = term;
        }
    }
    Ok(gamma)
}

/// Compute alpha, the product of [`beta`] and [`gamma`].
///
/// ```
///     use smale_core::alpha::{ALPHA_THRESHOLD, alpha};
///     use smale_core::function::Polynomial;
///
///     let f = Polynomial::new(vec![1.0_f64, 0.0, 0.0, -1.0]);
///     let df = f.derivatives();
///     assert!(alpha(&f, 1.01, &df, &[]).unwrap() < ALPHA_THRESHOLD);
///     assert!(alpha(&f, 10.0, &df, &[]).unwrap() > ALPHA_THRESHOLD);
/// ```
///
/// # Errors
///
/// [`SmaleError::GammaDomain`] if fewer than two derivatives are provided.
pub fn alpha<T, F, D>(func: &F, x0: T, df: &[D], args: &[T]) -> SmaleResult<T::Real>
where
    T: ComplexFloat,
    F: ScalarFunction<T> + ?Sized,
    D: ScalarFunction<T>,
{
    certify(func, x0, df, args).map(|cert| cert.alpha)
}

/// Compute the full [`Certificate`] at `x0`.
///
/// # Errors
///
/// [`SmaleError::GammaDomain`] if fewer than two derivatives are provided.
pub fn certify<T, F, D>(
    func: &F,
    x0: T,
    df: &[D],
    args: &[T],
) -> SmaleResult<Certificate<T::Real>>
where
    T: ComplexFloat,
    F: ScalarFunction<T> + ?Sized,
    D: ScalarFunction<T>,
{
    let gamma = gamma(func, x0, df, args)?;
    let beta = beta(func, x0, df, args)?;
    Ok(Certificate {
        alpha: beta * gamma,
        beta,
        gamma,
    })
}
