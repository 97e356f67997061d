//! # Fitting
//! Newton iteration used to refine a starting point into a root.
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

mod newton;

use num_complex::ComplexFloat;
use serde::{Deserialize, Serialize};

use crate::function::ScalarFunction;

pub use self::newton::newton;

/// Error type for fitting operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConvergenceError {
    /// Maximum number of iterations reached without convergence.
    #[error("Maximum number of iterations reached without convergence")]
    Iterations,

    /// Non-finite value encountered during evaluation.
    #[error("Non-finite value encountered during evaluation")]
    NonFinite,

    /// Zero derivative encountered during evaluation.
    #[error("Zero derivative encountered during evaluation")]
    ZeroDerivative,
}

/// Result type for fitting operations.
pub type FittingResult<T> = Result<T, ConvergenceError>;

/// Parameters of the Newton iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NewtonParams<R> {
    /// Iteration stops once a step is no larger than this.
    pub tol: R,

    /// Maximum number of steps.
    pub maxiter: usize,
}

impl<R> NewtonParams<R> {
    /// Create a new [`NewtonParams`].
    pub fn new(tol: R, maxiter: usize) -> Self {
        Self { tol, maxiter }
    }
}

impl<R> Default for NewtonParams<R>
where
    R: num_traits::Float,
{
    /// Tolerance of `1.48e-8` with at most 50 steps.
    #[allow(
        clippy::missing_panics_doc,
        reason = "By construction this cannot panic."
    )]
    fn default() -> Self {
        Self {
            tol: R::from(1.48e-8).unwrap(),
            maxiter: 50,
        }
    }
}

/// Root finder which refines a starting point into a root.
///
/// The certified iteration in [`crate::certified`] only computes certificates, the
/// actual iteration is delegated to an implementation of this trait.
pub trait RootSolver<T>
where
    T: ComplexFloat,
{
    /// Find a root of `func` starting at `x0`.
    ///
    /// `fprime` is the first derivative if one is available, `args` is passed to
    /// every function evaluation.
    ///
    /// # Errors
    ///
    /// [`ConvergenceError`] when the iteration does not converge.
    fn solve<F, D>(
        &self,
        func: &F,
        x0: T,
        fprime: Option<&D>,
        args: &[T],
        tol: T::Real,
        maxiter: usize,
    ) -> FittingResult<T>
    where
        F: ScalarFunction<T> + ?Sized,
        D: ScalarFunction<T> + ?Sized;
}

/// The default [`RootSolver`], see [`newton`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Newton;

impl<T> RootSolver<T> for Newton
where
    T: ComplexFloat,
{
    fn solve<F, D>(
        &self,
        func: &F,
        x0: T,
        fprime: Option<&D>,
        args: &[T],
        tol: T::Real,
        maxiter: usize,
    ) -> FittingResult<T>
    where
        F: ScalarFunction<T> + ?Sized,
        D: ScalarFunction<T> + ?Sized,
    {
        newton(func, x0, fprime, args, tol, maxiter)
    }
}
