//! # Errors
//!
//! Hard failures of the alpha theory estimators and of the certified Newton
//! iteration. Advisory outcomes, which never stop the iteration, live in
//! [`crate::certified::Advisory`] instead.
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

use crate::fitting::ConvergenceError;

/// Error type for alpha theory calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SmaleError {
    /// Gamma scans derivative orders two and above, so fewer than two derivatives
    /// leaves nothing to scan.
    #[error("At least two derivatives are required to compute gamma, {provided} provided.")]
    GammaDomain {
        /// Number of derivatives which were supplied.
        provided: usize,
    },

    /// Beta is the Newton step, which needs the first derivative.
    #[error("The first derivative is required to compute beta.")]
    MissingDerivative,

    /// The Newton iteration itself failed.
    #[error(transparent)]
    Convergence(#[from] ConvergenceError),
}

/// Result type for alpha theory calculations.
pub type SmaleResult<T> = Result<T, SmaleError>;
