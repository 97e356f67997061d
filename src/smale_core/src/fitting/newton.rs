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
use num_traits::Zero;

use crate::fitting::{ConvergenceError, FittingResult};
use crate::function::ScalarFunction;

/// Solve root using Newton's method.
///
/// When the first derivative `fprime` is given this is the Newton-Raphson
/// iteration, otherwise the derivative is approximated by the secant method. Both
/// real and complex valued functions are supported, every evaluation is passed the
/// extra arguments `args`.
///
/// Iteration stops when a step is no larger than `tol`, or exactly on a root.
///
/// ```
///     use smale_core::fitting::newton;
///     let f = |x: f64, _: &[f64]| x * x - 1.0;
///     let d = |x: f64, _: &[f64]| 2.0 * x;
///     let root = newton(&f, 3.0, Some(&d), &[], 1e-10, 50).unwrap();
///     assert!((root - 1.0).abs() < 1e-12);
///
///     // Secant method when no derivative is available.
///     let root = newton(&f, 3.0, None::<&fn(f64, &[f64]) -> f64>, &[], 1e-10, 50).unwrap();
///     assert!((root - 1.0).abs() < 1e-12);
/// ```
///
/// # Errors
///
/// [`ConvergenceError`] may be returned in the following cases:
///     - Any function evaluation return a non-finite value.
///     - Derivative is zero but not converged.
///     - Failed to converge within `maxiter` iterations.
pub fn newton<T, F, D>(
    func: &F,
    x0: T,
    fprime: Option<&D>,
    args: &[T],
    tol: T::Real,
    maxiter: usize,
) -> FittingResult<T>
where
    T: ComplexFloat,
    F: ScalarFunction<T> + ?Sized,
    D: ScalarFunction<T> + ?Sized,
{
    match fprime {
        Some(der) => newton_raphson(func, der, x0, args, tol, maxiter),
        None => secant(func, x0, args, tol, maxiter),
    }
}

fn newton_raphson<T, F, D>(
    func: &F,
    der: &D,
    x0: T,
    args: &[T],
    tol: T::Real,
    maxiter: usize,
) -> FittingResult<T>
where
    T: ComplexFloat,
    F: ScalarFunction<T> + ?Sized,
    D: ScalarFunction<T> + ?Sized,
{
    let mut x = x0;
    for _ in 0..maxiter {
        let f_eval = func.eval(x, args);
        if f_eval.is_zero() {
            return Ok(x);
        }
        let d_eval = der.eval(x, args);

        if !d_eval.is_finite() || !f_eval.is_finite() {
            return Err(ConvergenceError::NonFinite);
        }

        // Derivative is 0, cannot solve
        if d_eval.is_zero() {
            return Err(ConvergenceError::ZeroDerivative);
        }

        let next = x - f_eval / d_eval;
        if (next - x).abs() <= tol {
            return Ok(next);
        }
        x = next;
    }
    Err(ConvergenceError::Iterations)
}

fn secant<T, F>(func: &F, x0: T, args: &[T], tol: T::Real, maxiter: usize) -> FittingResult<T>
where
    T: ComplexFloat,
    F: ScalarFunction<T> + ?Sized,
{
    let eps = T::from(1e-4).unwrap();
    let two = T::one() + T::one();

    // second point is a small relative nudge away from zero.
    let mut p0 = x0;
    let mut p1 = x0 * (T::one() + eps);
    p1 = if p1.re() >= T::Real::zero() {
        p1 + eps
    } else {
        p1 - eps
    };
    let mut q0 = func.eval(p0, args);
    let mut q1 = func.eval(p1, args);
    if q1.abs() < q0.abs() {
        std::mem::swap(&mut p0, &mut p1);
        std::mem::swap(&mut q0, &mut q1);
    }

    for _ in 0..maxiter {
        if !q0.is_finite() || !q1.is_finite() {
            return Err(ConvergenceError::NonFinite);
        }

        if q1 == q0 {
            if p1 != p0 {
                log::warn!("Secant residuals are equal before reaching tolerance.");
            }
            return Ok((p1 + p0) / two);
        }

        // Divide by the larger residual.
        let p = if q1.abs() > q0.abs() {
            let ratio = q0 / q1;
            (p0 - ratio * p1) / (T::one() - ratio)
        } else {
            let ratio = q1 / q0;
            (p1 - ratio * p0) / (T::one() - ratio)
        };

        if (p - p1).abs() <= tol {
            return Ok(p);
        }
        p0 = p1;
        q0 = q1;
        p1 = p;
        q1 = func.eval(p1, args);
    }
    Err(ConvergenceError::Iterations)
}

#[cfg(test)]
mod tests {
    use crate::fitting::{ConvergenceError, newton};
    use num_complex::Complex64;

    type Func = fn(f64, &[f64]) -> f64;

    #[test]
    fn test_newton_raphson() {
        let f = |x: f64, _: &[f64]| 1.0 * x * x - 1.0;
        let d = |x: f64, _: &[f64]| 2.0 * x;

        let root: f64 = newton(&f, 3.0, Some(&d), &[], 1e-10, 50).unwrap();
        assert!((root - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_exact_root() {
        let f = |x: f64, _: &[f64]| x - 2.0;
        let d = |_: f64, _: &[f64]| 1.0;
        assert_eq!(newton(&f, 2.0, Some(&d), &[], 1e-10, 0), Err(ConvergenceError::Iterations));
        assert_eq!(newton(&f, 2.0, Some(&d), &[], 1e-10, 1), Ok(2.0));
    }

    #[test]
    fn test_secant() {
        let f = |x: f64, args: &[f64]| x * x * x - args[0];
        let root = newton(&f, 10.0, None::<&Func>, &[8.0], 1.48e-8, 50).unwrap();
        assert!((root - 2.0).abs() < 1e-8);

        let root = newton(&f, -3.0, None::<&Func>, &[-8.0], 1.48e-8, 50).unwrap();
        assert!((root + 2.0).abs() < 1e-8);
    }

    #[test]
    fn test_secant_equal_residuals() {
        // flat function, the second point is 2 * (1 + 1e-4) + 1e-4
        let f = |_: f64, _: &[f64]| 1.0;
        let root = newton(&f, 2.0, None::<&Func>, &[], 1e-10, 50).unwrap();
        assert!((root - 2.00015).abs() < 1e-12, "{root}");

        let root = newton(&f, -2.0, None::<&Func>, &[], 1e-10, 50).unwrap();
        assert!((root + 2.00015).abs() < 1e-12, "{root}");
    }

    #[test]
    fn test_secant_complex() {
        type CFunc = fn(Complex64, &[Complex64]) -> Complex64;
        let f = |z: Complex64, _: &[Complex64]| z * z + 1.0;
        let root = newton(&f, Complex64::new(0.1, 1.2), None::<&CFunc>, &[], 1e-12, 50).unwrap();
        assert!((root - Complex64::i()).norm() < 1e-10, "{root}");
    }

    #[test]
    fn test_complex() {
        let f = |z: Complex64, _: &[Complex64]| z * z + 1.0;
        let d = |z: Complex64, _: &[Complex64]| z * 2.0;
        let root = newton(&f, Complex64::new(0.1, 1.2), Some(&d), &[], 1e-12, 50).unwrap();
        assert!((root - Complex64::i()).norm() < 1e-12);
    }

    #[test]
    fn test_failures() {
        let f = |x: f64, _: &[f64]| x * x + 1.0;
        let d = |x: f64, _: &[f64]| 2.0 * x;
        assert_eq!(
            newton(&f, 0.0, Some(&d), &[], 1e-10, 50),
            Err(ConvergenceError::ZeroDerivative)
        );
        // no real root, the iteration wanders
        assert_eq!(
            newton(&f, 0.5, Some(&d), &[], 1e-10, 50),
            Err(ConvergenceError::Iterations)
        );

        let f = |x: f64, _: &[f64]| x.ln();
        let d = |x: f64, _: &[f64]| 1.0 / x;
        assert_eq!(
            newton(&f, 10.0, Some(&d), &[], 1e-10, 50),
            Err(ConvergenceError::NonFinite)
        );
    }
}
