// Implementation of operators, following the conventions of the `num` crate

use itertools::{EitherOrBoth, Itertools};
use num::Complex;
use std::ops::{Add, Mul};

use crate::{util::linalg::convolve_1d, Poly, RealScalar};

impl<T: RealScalar> Add<Self> for Poly<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        // invariant: polynomials are normalized
        debug_assert!(self.is_normalized());
        debug_assert!(rhs.is_normalized());

        let (mut longest, shortest) = if self.len_raw() >= rhs.len_raw() {
            (self.0, rhs.0)
        } else {
            (rhs.0, self.0)
        };
        longest
            .as_mut_slice()
            .iter_mut()
            .zip_longest(shortest.iter())
            .for_each(|p| {
                if let EitherOrBoth::Both(l, r) = p {
                    *l += r;
                }
            });
        Self(longest).normalize()
    }
}

impl<T: RealScalar> Mul<Self> for Poly<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        // invariant: polynomials are normalized
        debug_assert!(self.is_normalized());
        debug_assert!(rhs.is_normalized());

        if self.is_zero() || rhs.is_zero() {
            return Self::zero();
        }
        Self(convolve_1d(&self.0, &rhs.0)).normalize()
    }
}

impl<T: RealScalar> Mul<Complex<T>> for Poly<T> {
    type Output = Self;

    fn mul(self, rhs: Complex<T>) -> Self::Output {
        self.scaled(rhs).normalize()
    }
}
