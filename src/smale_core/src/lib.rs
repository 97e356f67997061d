//! # Smale
//! Smale's alpha theory for Newton's method.
//!
//! Newton's method converges quadratically once it is close enough to a root, but
//! "close enough" is usually unknown. Alpha theory gives a test, using the function
//! and its derivatives at the starting point alone, which guarantees the starting
//! point is close enough.
//!
//! [`certified::smale_newton`] runs this test before handing the starting point to
//! Newton's method. A failed or impossible test does not stop the iteration, it is
//! reported back as an [`certified::Advisory`].
//!
//! ```
//!     use smale_core::prelude::*;
//!
//!     // x^3 - a, with a passed as an extra argument.
//!     let f = |x: f64, args: &[f64]| x * x * x - args[0];
//!     let df: [fn(f64, &[f64]) -> f64; 3] = [
//!         |x, _| 3.0 * x * x,
//!         |x, _| 6.0 * x,
//!         |_, _| 6.0,
//!     ];
//!
//!     let res = smale_newton(&f, 1.1, &df, &[1.0], &NewtonParams::default()).unwrap();
//!     assert!((res.root - 1.0).abs() < 1e-8);
//!     assert!(res.is_certified());
//! ```
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

pub mod alpha;
pub mod certified;
pub mod errors;
pub mod fitting;
pub mod function;

/// Common useful imports
pub mod prelude {
    pub use crate::alpha::{ALPHA_THRESHOLD, Certificate, alpha, beta, certify, gamma};
    pub use crate::certified::{Advisory, CertifiedRoot, smale_newton, smale_newton_with};
    pub use crate::errors::{SmaleError, SmaleResult};
    pub use crate::fitting::{
        ConvergenceError, FittingResult, Newton, NewtonParams, RootSolver, newton,
    };
    pub use crate::function::{Polynomial, ScalarFunction};
}
