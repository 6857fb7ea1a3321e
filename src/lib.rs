#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

//! Root finding for real and complex polynomials, using the Durand-Kerner
//! (Weierstrass) method of simultaneous iteration.
//!
//! The entry points are [`roots::solve`] for raw coefficient slices ordered
//! from the highest degree down, and [`Poly::roots`] for polynomials that
//! were already constructed. Both return a [`roots::Solution`], which carries
//! the root estimates together with a convergence flag: running out of
//! iterations is a normal termination mode, not an error.
//!
//! ```
//! use durand_kerner::poly;
//!
//! // x^2 - 3x + 2 = (x - 1)(x - 2)
//! let p = poly![2.0, -3.0, 1.0];
//! let solution = p.roots(1e-12, 100).unwrap();
//! assert!(solution.converged());
//! ```

/// Create a [`num::Complex`] from a real part, or from a real and an
/// imaginary part.
#[macro_export]
macro_rules! complex {
    () => {
        $crate::num::Complex::new($crate::num::Zero::zero(), $crate::num::Zero::zero())
    };
    ($re:expr) => {
        $crate::num::Complex::new($re, $crate::num::Zero::zero())
    };
    ($re:expr, $im:expr) => {
        $crate::num::Complex::new($re, $im)
    };
}

/// Create a [`Poly`] from a list of coefficients in ascending order of
/// degree. Coefficients are either reals or `(re, im)` pairs.
#[macro_export]
macro_rules! poly {
    [$(($re:expr, $im:expr)),+ $(,)?] => {
        $crate::Poly::from_complex_slice(&[$($crate::complex!($re, $im)),+])
    };
    [$($coeff:expr),+ $(,)?] => {
        $crate::Poly::from_real_slice(&[$($coeff),+])
    };
}

pub use num;

mod scalar;
pub use scalar::{RealScalar, SafeConstants};

pub mod util;

mod poly;
pub use poly::{roots, Poly};

/// A single-precision polynomial.
pub type Poly32 = Poly<f32>;

/// A double-precision polynomial.
pub type Poly64 = Poly<f64>;
