//! # Certified Newton
//!
//! Newton's method preceded by an alpha theory check of the starting point.
//!
//! Certification is advisory, the iteration always runs. Any concerns about the
//! starting point are returned alongside the root as [`Advisory`] values, and are
//! logged at warn level.
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

use std::fmt;

use num_complex::ComplexFloat;
use serde::{Deserialize, Serialize};

use crate::alpha::{ALPHA_THRESHOLD, Certificate, alpha_threshold, certify};
use crate::errors::SmaleResult;
use crate::fitting::{Newton, NewtonParams, RootSolver};
use crate::function::ScalarFunction;

/// Non-fatal finding about the starting point of a certified Newton iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Advisory<R> {
    /// Fewer than two derivatives were provided, so no certification was attempted.
    InsufficientDerivatives {
        /// Number of derivatives which were provided.
        provided: usize,
    },

    /// Alpha exceeded [`ALPHA_THRESHOLD`], the starting point may not be an
    /// approximate solution.
    CertificationFailed {
        /// Alpha at the starting point.
        alpha: R,
    },
}

impl<R> fmt::Display for Advisory<R>
where
    R: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientDerivatives { provided } => write!(
                f,
                "Not enough derivatives provided for certification, {provided} provided but 2 are required."
            ),
            Self::CertificationFailed { alpha } => write!(
                f,
                "The estimate may not be an approximate solution, alpha = {alpha} exceeds {ALPHA_THRESHOLD}."
            ),
        }
    }
}

/// Root found by [`smale_newton`], along with how well its starting point was
/// certified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertifiedRoot<T, R> {
    /// Estimated root.
    pub root: T,

    /// Certificate of the starting point, `None` if fewer than two derivatives were
    /// provided.
    pub certificate: Option<Certificate<R>>,

    /// Advisories raised while certifying the starting point.
    pub advisories: Vec<Advisory<R>>,
}

impl<T, R> CertifiedRoot<T, R>
where
    R: num_traits::Float,
{
    /// Was the starting point certified to be an approximate solution.
    #[must_use]
    pub fn is_certified(&self) -> bool {
        self.certificate
            .is_some_and(|cert| cert.is_approximate_solution())
    }
}

/// Find a root using Newton's method, certified by Smale's alpha theory.
///
/// `df` holds the derivatives of `func` in increasing order, starting with the
/// first. The first derivative is used for the Newton iteration, falling back to the
/// secant method if `df` is empty. When at least two derivatives are given, the
/// starting point `x0` is certified before iterating, the more derivatives the
/// sharper the certificate.
///
/// `args` is passed to `func` and every derivative after `x0`.
///
/// ```
///     use smale_core::certified::smale_newton;
///     use smale_core::fitting::NewtonParams;
///     use smale_core::function::Polynomial;
///
///     let f = Polynomial::new(vec![1.0_f64, 0.0, 0.0, -1.0]);
///     let df = f.derivatives();
///     let res = smale_newton(&f, 1.1, &df, &[], &NewtonParams::default()).unwrap();
///     assert!((res.root - 1.0).abs() < 1e-8);
///     assert!(res.is_certified());
///     assert!(res.advisories.is_empty());
/// ```
///
/// # Errors
///
/// [`crate::errors::SmaleError::Convergence`] if the Newton iteration fails.
pub fn smale_newton<T, F, D>(
    func: &F,
    x0: T,
    df: &[D],
    args: &[T],
    params: &NewtonParams<T::Real>,
) -> SmaleResult<CertifiedRoot<T, T::Real>>
where
    T: ComplexFloat,
    T::Real: fmt::Display,
    F: ScalarFunction<T> + ?Sized,
    D: ScalarFunction<T>,
{
    smale_newton_with(&Newton, func, x0, df, args, params)
}

/// Same as [`smale_newton`] but iterating with the provided [`RootSolver`].
///
/// # Errors
///
/// [`crate::errors::SmaleError::Convergence`] if the solver fails.
pub fn smale_newton_with<S, T, F, D>(
    solver: &S,
    func: &F,
    x0: T,
    df: &[D],
    args: &[T],
    params: &NewtonParams<T::Real>,
) -> SmaleResult<CertifiedRoot<T, T::Real>>
where
    S: RootSolver<T> + ?Sized,
    T: ComplexFloat,
    T::Real: fmt::Display,
    F: ScalarFunction<T> + ?Sized,
    D: ScalarFunction<T>,
{
    let mut advisories = Vec::new();

    let certificate = if df.len() < 2 {
        let advisory = Advisory::InsufficientDerivatives {
            provided: df.len(),
        };
        log::warn!("{advisory}");
        advisories.push(advisory);
        None
    } else {
        let cert = certify(func, x0, df, args)?;
        log::debug!(
            "Certified starting point: alpha = {}, beta = {}, gamma = {}",
            cert.alpha,
            cert.beta,
            cert.gamma
        );
        if cert.alpha > alpha_threshold() {
            let advisory = Advisory::CertificationFailed { alpha: cert.alpha };
            log::warn!("{advisory}");
            advisories.push(advisory);
        }
        Some(cert)
    };

    let root = solver.solve(func, x0, df.first(), args, params.tol, params.maxiter)?;
    Ok(CertifiedRoot {
        root,
        certificate,
        advisories,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SmaleError;
    use crate::fitting::{ConvergenceError, FittingResult};
    use crate::function::Polynomial;
    use num_complex::Complex32;
    use std::cell::Cell;

    type Func = fn(f64, &[f64]) -> f64;

    /// Records the derivative it was handed and returns the starting point.
    #[derive(Debug, Default)]
    struct Recorder {
        had_fprime: Cell<Option<bool>>,
    }

    impl RootSolver<f64> for Recorder {
        fn solve<F, D>(
            &self,
            _func: &F,
            x0: f64,
            fprime: Option<&D>,
            _args: &[f64],
            _tol: f64,
            _maxiter: usize,
        ) -> FittingResult<f64>
        where
            F: ScalarFunction<f64> + ?Sized,
            D: ScalarFunction<f64> + ?Sized,
        {
            self.had_fprime.set(Some(fprime.is_some()));
            Ok(x0)
        }
    }

    #[test]
    fn test_certified() {
        let f = Polynomial::new(vec![1.0_f64, 0.0, 0.0, -1.0]);
        let df = f.derivatives();
        let res = smale_newton(&f, 1.0, &df, &[], &NewtonParams::default()).unwrap();
        assert_eq!(res.root, 1.0);
        assert!(res.is_certified());
        assert!(res.advisories.is_empty());
        assert_eq!(res.certificate.map(|c| c.alpha), Some(0.0));
    }

    #[test]
    fn test_insufficient_derivatives() {
        let f = Polynomial::new(vec![1.0_f64, 0.0, 0.0, -1.0]);
        let df = f.derivatives();
        for n in 0..2 {
            let res = smale_newton(&f, 10.0, &df[..n], &[], &NewtonParams::default()).unwrap();
            assert!((res.root - 1.0).abs() < 1e-8, "{res:?}");
            assert_eq!(
                res.advisories,
                vec![Advisory::InsufficientDerivatives { provided: n }]
            );
            assert!(res.certificate.is_none());
            assert!(!res.is_certified());
        }
    }

    #[test]
    fn test_certification_failed() {
        let f = Polynomial::new(vec![1.0_f64, 0.0, 0.0, -1.0]);
        let df = f.derivatives();
        let res = smale_newton(&f, 10.0, &df, &[], &NewtonParams::default()).unwrap();
        assert!((res.root - 1.0).abs() < 1e-8, "{res:?}");
        assert!(!res.is_certified());
        assert_eq!(res.advisories.len(), 1);
        assert!(matches!(
            res.advisories[0],
            Advisory::CertificationFailed { alpha } if alpha > ALPHA_THRESHOLD
        ));
    }

    #[test]
    fn test_solver_receives_first_derivative() {
        let f = |x: f64, _: &[f64]| x;
        let df: [Func; 2] = [|_, _| 1.0, |_, _| 0.0];

        let solver = Recorder::default();
        let _ = smale_newton_with(&solver, &f, 3.0, &df, &[], &NewtonParams::default()).unwrap();
        assert_eq!(solver.had_fprime.get(), Some(true));

        let res = smale_newton_with(&solver, &f, 3.0, &df[..0], &[], &NewtonParams::default())
            .unwrap();
        assert_eq!(solver.had_fprime.get(), Some(false));
        assert_eq!(res.root, 3.0);
    }

    #[test]
    fn test_non_convergence_propagates() {
        // no real roots
        let f = Polynomial::new(vec![1.0_f64, 0.0, 1.0]);
        let df = f.derivatives();
        let res = smale_newton(&f, 0.5, &df, &[], &NewtonParams::default());
        assert_eq!(
            res,
            Err(SmaleError::Convergence(ConvergenceError::Iterations))
        );
    }

    #[test]
    fn test_advisory_display() {
        let msg = Advisory::<f64>::InsufficientDerivatives { provided: 1 }.to_string();
        assert!(msg.contains("Not enough derivatives"), "{msg}");
        let msg = Advisory::CertificationFailed { alpha: 0.5 }.to_string();
        assert!(msg.contains("alpha = 0.5"), "{msg}");
    }

    #[test]
    fn test_nan_alpha() {
        // gamma is NaN, which is neither certified nor a failure
        let f = |x: f64, _: &[f64]| x;
        let df: [Func; 2] = [|_, _| 1.0, |_, _| f64::NAN];
        let res = smale_newton(&f, 1.0, &df, &[], &NewtonParams::default()).unwrap();
        assert_eq!(res.root, 0.0);
        assert!(res.advisories.is_empty(), "{res:?}");
        assert!(res.certificate.is_some_and(|c| c.alpha.is_nan()));
        assert!(!res.is_certified());
    }

    #[test]
    fn test_single_precision() {
        let params = NewtonParams::new(1e-5_f32, 50);

        let f = Polynomial::new(vec![1.0_f32, 0.0, 0.0, -1.0]);
        let df = f.derivatives();
        let res = smale_newton(&f, 1.1_f32, &df, &[], &params).unwrap();
        assert!((res.root - 1.0).abs() < 1e-5, "{res:?}");
        assert!(res.is_certified(), "{res:?}");

        let one = Complex32::new(1.0, 0.0);
        let zero = Complex32::new(0.0, 0.0);
        let f = Polynomial::new(vec![one, zero, zero, -one]);
        let df = f.derivatives();
        let root = Complex32::new(-0.5, 3.0_f32.sqrt() / 2.0);
        let res = smale_newton(&f, root + Complex32::new(0.0, 1e-3), &df, &[], &params).unwrap();
        assert!((res.root - root).norm() < 1e-5, "{res:?}");
        assert!(res.is_certified(), "{res:?}");
    }

    #[test]
    fn test_advisory_serde() {
        let advisories = vec![
            Advisory::InsufficientDerivatives { provided: 1 },
            Advisory::CertificationFailed { alpha: 0.5 },
        ];
        let json = serde_json::to_string(&advisories).unwrap();
        assert_eq!(
            json,
            r#"[{"InsufficientDerivatives":{"provided":1}},{"CertificationFailed":{"alpha":0.5}}]"#
        );
        let back: Vec<Advisory<f64>> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, advisories);
    }
}
