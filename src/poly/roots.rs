use num::{Complex, Zero};

use crate::{Poly, RealScalar};

mod durand_kerner;
pub use durand_kerner::durand_kerner;
mod initial_guess;
pub use initial_guess::{initial_guesses_circle, initial_guesses_random};

/// Iteration cap used when the caller does not provide one.
pub const DEFAULT_MAX_ITER: usize = 1000;

/// Stopping tolerance used when the caller does not provide one, applied to
/// the largest per-root update of an iteration.
pub const DEFAULT_EPSILON: f64 = 1e-12;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Roots are only defined for polynomials of degree one or higher.
    #[error("polynomial must have degree at least 1")]
    DegreeTooLow,

    /// The coefficient of the highest-degree term is zero, so the degree of
    /// the polynomial cannot be determined.
    #[error("leading coefficient must be nonzero")]
    LeadingZero,

    /// There must be exactly one initial guess per root.
    #[error("expected {expected} initial guesses, got {actual}")]
    WrongGuessCount { expected: usize, actual: usize },

    /// Two initial guesses coincide, which makes the correction denominator
    /// vanish on the very first pass.
    #[error("initial guesses must be pairwise distinct")]
    RepeatedGuesses,

    #[error("unexpected error while running root finder")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<Solution<T>, Error>;

/// The outcome of a solve: one root estimate per degree, with multiplicity,
/// plus some information about how the iteration went.
///
/// Running out of iterations is a normal termination mode, reported through
/// [`Solution::converged`] rather than an error, because slowly converging
/// polynomials still produce usable estimates. Callers that need certainty
/// should re-check [`Solution::max_residual`] against their own tolerance.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution<T: RealScalar> {
    roots: Vec<Complex<T>>,
    converged: bool,
    iterations: usize,
}

impl<T: RealScalar> Solution<T> {
    pub(crate) fn new(roots: Vec<Complex<T>>, converged: bool, iterations: usize) -> Self {
        Self {
            roots,
            converged,
            iterations,
        }
    }

    /// The root estimates, one per degree of the polynomial.
    #[must_use]
    pub fn roots(&self) -> &[Complex<T>] {
        &self.roots
    }

    /// Whether the iteration stopped because the largest per-root update
    /// fell below the tolerance, as opposed to running out of iterations.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.converged
    }

    /// The number of full iterations that were performed.
    #[must_use]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Discard the metadata and keep the root estimates.
    #[must_use]
    pub fn unpack_roots(self) -> Vec<Complex<T>> {
        self.roots
    }

    /// The largest residual `|p(r)|` over all root estimates.
    ///
    /// This is independent of the update-based stopping criterion and is the
    /// recommended acceptance check when [`Solution::converged`] is false.
    #[must_use]
    pub fn max_residual(&self, poly: &Poly<T>) -> T {
        self.roots
            .iter()
            .map(|r| poly.eval(*r).norm())
            .fold(T::zero(), T::max)
    }
}

/// Find all roots of the polynomial with the given coefficients, ordered
/// from the highest degree down, i.e. `[a_n, ..., a_1, a_0]`.
///
/// `epsilon` and `max_iter` fall back to [`DEFAULT_EPSILON`] and
/// [`DEFAULT_MAX_ITER`] when not provided.
///
/// # Errors
/// - [`Error::DegreeTooLow`]: fewer than two coefficients were provided
/// - [`Error::LeadingZero`]: the first coefficient is zero
pub fn solve<T: RealScalar>(
    coeffs: &[Complex<T>],
    epsilon: Option<T>,
    max_iter: Option<usize>,
) -> Result<T> {
    if coeffs.len() < 2 {
        return Err(Error::DegreeTooLow);
    }
    if coeffs[0].is_zero() {
        return Err(Error::LeadingZero);
    }

    let poly = Poly::from_complex_iterator(coeffs.iter().rev().copied());

    let mut guesses = vec![Complex::<T>::zero(); poly.degree_raw()];
    initial_guesses_circle(&poly, &mut guesses);
    durand_kerner(&poly, epsilon, max_iter, &guesses)
}

impl<T: RealScalar> Poly<T> {
    /// A convenient way of finding the roots of a polynomial that was
    /// already constructed, with default initial guesses.
    ///
    /// Use [`durand_kerner`] directly if you need control over the initial
    /// guesses.
    ///
    /// # Errors
    /// - [`Error::DegreeTooLow`]: the polynomial is constant
    pub fn roots(&self, epsilon: T, max_iter: usize) -> Result<T> {
        debug_assert!(self.is_normalized());

        if self.degree_raw() < 1 {
            return Err(Error::DegreeTooLow);
        }

        let mut guesses = vec![Complex::<T>::zero(); self.degree_raw()];
        initial_guesses_circle(self, &mut guesses);
        durand_kerner(self, Some(epsilon), Some(max_iter), &guesses)
    }
}
