use num::{Complex, One, Zero};

use crate::{Poly, RealScalar};

impl<T: RealScalar> Poly<T> {
    /// Applies a closure to each coefficient in-place
    pub(crate) fn apply(&mut self, f: impl FnMut(&mut Complex<T>)) {
        self.0.iter_mut().for_each(f);
    }

    /// The length of the polynomial without checking pre-conditions
    pub(crate) fn len_raw(&self) -> usize {
        self.0.len()
    }

    /// The degree of the polynomial without checking pre-conditions
    #[inline]
    pub(crate) fn degree_raw(&self) -> usize {
        self.len_raw() - 1
    }

    /// Scale a polynomial in-place
    pub(crate) fn scale(&mut self, factor: Complex<T>) {
        self.apply(|z| *z *= factor);
    }

    /// Moving version of `scale`
    #[doc(hidden)]
    #[must_use]
    pub fn scaled(mut self, factor: Complex<T>) -> Self {
        self.scale(factor);
        self
    }

    pub(crate) fn is_normalized(&self) -> bool {
        let n = self.len_raw();
        if n == 0 {
            // zero-polynomials are stored as a single constant zero
            return false;
        }
        // a constant is always normalized, as it may be just a constant zero
        if n == 1 {
            return true;
        }
        !self.0[n - 1].is_zero()
    }

    pub(crate) fn normalize(self) -> Self {
        if self.is_normalized() {
            return self;
        }
        let mut end = self.len_raw();
        loop {
            if end == 0 {
                return Self::zero();
            }
            if !self.0[end - 1].is_zero() {
                break;
            }
            end -= 1;
        }
        let ret = Self(self.0[0..end].to_vec());

        // post-condition: polynomial is now normalized
        debug_assert!(ret.is_normalized());
        ret
    }

    /// The last coefficient, i.e. the one with the highest degree
    pub(crate) fn last(&self) -> Complex<T> {
        self.0[self.len_raw() - 1]
    }

    pub(crate) fn is_monic(&self) -> bool {
        self.last().is_one()
    }

    /// Make the polynomial monic in-place.
    ///
    /// Monic polynomials are scaled such that the last coefficient is 1, and
    /// the roots are preserved
    pub(crate) fn make_monic(&mut self) {
        debug_assert!(self.is_normalized());
        let last_coeff = self.last();
        if last_coeff.is_one() {
            // already monic
            return;
        }
        self.apply(|x| *x /= last_coeff);
    }
}

#[cfg(test)]
mod test {
    use num::{complex::Complex64, Zero};

    use crate::Poly;

    /// This was a bug
    #[test]
    fn normalize0() {
        let p = Poly(vec![Complex64::zero()]);
        assert_eq!(p.normalize().0.as_slice(), &[Complex64::zero()]);
    }

    /// This was a bug
    #[test]
    fn is_normalized0() {
        let p = Poly(vec![Complex64::zero()]);
        assert!(p.is_normalized());
    }

    #[test]
    fn normalize_trims_trailing_zeros() {
        let p = Poly(vec![
            Complex64::new(1.0, 0.0),
            Complex64::new(2.0, 0.0),
            Complex64::zero(),
        ]);
        assert_eq!(p.normalize(), poly![1.0, 2.0]);
    }

    #[test]
    fn monic() {
        let mut p = poly![1.0, 3.0, 2.0];
        p.make_monic();
        assert_eq!(p, poly![0.5, 3.0 / 2.0, 1.0]);
        assert!(p.is_monic());
    }
}
