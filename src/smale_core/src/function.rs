//! # Functions
//!
//! Scalar functions of a single variable, `f(x, args)`, where `args` is a fixed list
//! of extra parameters passed through unchanged on every evaluation.
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
use serde::{Deserialize, Serialize};

/// A scalar function of a single variable.
///
/// Any closure of the form `Fn(T, &[T]) -> T` is a [`ScalarFunction`], so a
/// function and its derivatives may be written inline:
///
/// ```
///     use smale_core::function::ScalarFunction;
///     let f = |x: f64, args: &[f64]| x * x * x - args[0];
///     assert_eq!(f.eval(2.0, &[1.0]), 7.0);
/// ```
///
/// Derivative lists are slices of a single type, when the closures differ they may
/// be boxed as `Box<dyn Fn(T, &[T]) -> T>`.
pub trait ScalarFunction<T> {
    /// Evaluate the function at `x` with the extra arguments `args`.
    fn eval(&self, x: T, args: &[T]) -> T;
}

impl<T, F> ScalarFunction<T> for F
where
    F: Fn(T, &[T]) -> T,
{
    #[inline(always)]
    fn eval(&self, x: T, args: &[T]) -> T {
        self(x, args)
    }
}

/// Dense polynomial of a single variable.
///
/// Coefficients are stored highest degree first, so `[1, 0, 0, -1]` is `x^3 - 1`.
/// Extra arguments are ignored during evaluation.
///
/// ```
///     use smale_core::function::{Polynomial, ScalarFunction};
///     let f = Polynomial::new(vec![1.0_f64, 0.0, 0.0, -1.0]);
///     let df = f.derivatives();
///     assert_eq!(df.len(), 3);
///     assert_eq!(df[0].eval(2.0, &[]), 12.0);
///     assert_eq!(df[2].eval(2.0, &[]), 6.0);
/// ```
///
/// Serialized as the plain list of coefficients. Deserializing goes through
/// [`Polynomial::new`], so leading zeros are dropped and an empty list is the zero
/// polynomial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "Vec<T>",
    into = "Vec<T>",
    bound(
        serialize = "T: Clone + Serialize",
        deserialize = "T: ComplexFloat + Deserialize<'de>"
    )
)]
pub struct Polynomial<T> {
    coeffs: Box<[T]>,
}

impl<T> From<Vec<T>> for Polynomial<T>
where
    T: ComplexFloat,
{
    fn from(coeffs: Vec<T>) -> Self {
        Self::new(coeffs)
    }
}

impl<T> From<Polynomial<T>> for Vec<T> {
    fn from(poly: Polynomial<T>) -> Self {
        poly.coeffs.into_vec()
    }
}

impl<T> Polynomial<T>
where
    T: ComplexFloat,
{
    /// Construct a polynomial from its coefficients, highest degree first.
    ///
    /// Leading zeros are dropped, an empty or all zero list is the zero polynomial.
    pub fn new(coeffs: impl Into<Vec<T>>) -> Self {
        let coeffs: Vec<T> = coeffs.into();
        let mut coeffs: Vec<T> = coeffs.into_iter().skip_while(|c| c.is_zero()).collect();
        if coeffs.is_empty() {
            coeffs.push(T::zero());
        }
        Self {
            coeffs: coeffs.into_boxed_slice(),
        }
    }

    /// Coefficients of the polynomial, highest degree first.
    #[must_use]
    pub fn coeffs(&self) -> &[T] {
        &self.coeffs
    }

    /// Degree of the polynomial, the zero polynomial has degree 0.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Evaluate the polynomial at `x` using Horner's rule.
    #[must_use]
    pub fn evaluate(&self, x: T) -> T {
        self.coeffs.iter().fold(T::zero(), |acc, &c| acc * x + c)
    }

    /// First derivative of the polynomial.
    #[must_use]
    pub fn derivative(&self) -> Self {
        let degree = self.degree();
        if degree == 0 {
            return Self::new(vec![T::zero()]);
        }

        // walk up from the linear term, the power multiplies each coefficient.
        let mut power = T::zero();
        let mut coeffs: Vec<T> = self.coeffs[..degree]
            .iter()
            .rev()
            .map(|&c| {
                power = power + T::one();
                c * power
            })
            .collect();
        coeffs.reverse();
        Self::new(coeffs)
    }

    /// All nonzero derivatives, ordered from the first up to the constant one.
    ///
    /// The result has exactly `degree` entries, and is empty for constants.
    #[must_use]
    pub fn derivatives(&self) -> Vec<Self> {
        let mut ders: Vec<Self> = Vec::with_capacity(self.degree());
        let mut current = self.derivative();
        for _ in 0..self.degree() {
            let next = current.derivative();
            ders.push(current);
            current = next;
        }
        ders
    }
}

impl<T> ScalarFunction<T> for Polynomial<T>
where
    T: ComplexFloat,
{
    #[inline(always)]
    fn eval(&self, x: T, _args: &[T]) -> T {
        self.evaluate(x)
    }
}
