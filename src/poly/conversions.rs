use itertools::Itertools;
use num::Complex;

use crate::{Poly, RealScalar};

impl<T: RealScalar> Poly<T> {
    #[must_use]
    pub fn as_slice(&self) -> &[Complex<T>] {
        self.0.as_slice()
    }

    /// Iterate over coefficients, from the least significant
    pub fn iter(&self) -> std::slice::Iter<'_, Complex<T>> {
        self.0.as_slice().iter()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<Complex<T>> {
        Vec::from(self.as_slice())
    }

    /// The same as [`Poly::new`]
    pub fn from_complex_slice(value: &[Complex<T>]) -> Self {
        Self::new(value)
    }

    #[allow(clippy::needless_pass_by_value)]
    #[must_use]
    pub fn from_complex_vec(value: Vec<Complex<T>>) -> Self {
        Self::new(value.as_slice())
    }

    #[must_use]
    pub fn from_real_slice(value: &[T]) -> Self {
        Self::from_real_iterator(value.iter().copied())
    }

    #[allow(clippy::needless_pass_by_value)]
    #[must_use]
    pub fn from_real_vec(value: Vec<T>) -> Self {
        Self::from_real_slice(value.as_slice())
    }

    #[must_use]
    pub fn from_real_iterator(coeffs: impl Iterator<Item = T>) -> Self {
        Self::from_complex_iterator(coeffs.map(Complex::from))
    }

    #[must_use]
    pub fn from_complex_iterator(coeffs: impl Iterator<Item = Complex<T>>) -> Self {
        Self(coeffs.collect_vec()).normalize()
    }
}

impl<T: RealScalar> From<&[Complex<T>]> for Poly<T> {
    fn from(value: &[Complex<T>]) -> Self {
        Self::from_complex_slice(value)
    }
}

impl<T: RealScalar> From<Vec<Complex<T>>> for Poly<T> {
    fn from(value: Vec<Complex<T>>) -> Self {
        Self::from_complex_vec(value)
    }
}

impl<T: RealScalar> From<Poly<T>> for Vec<Complex<T>> {
    fn from(val: Poly<T>) -> Self {
        val.to_vec()
    }
}

impl<T: RealScalar> std::ops::Index<usize> for Poly<T> {
    type Output = Complex<T>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a, T: RealScalar> IntoIterator for &'a Poly<T> {
    type IntoIter = std::slice::Iter<'a, Complex<T>>;
    type Item = &'a Complex<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod test {
    use num::Complex;

    use crate::Poly;

    #[test]
    fn real_and_complex_agree() {
        let p = Poly::from_real_slice(&[1.0, 2.0, 3.0]);
        let q = Poly::from_complex_slice(&[
            Complex::new(1.0, 0.0),
            Complex::new(2.0, 0.0),
            Complex::new(3.0, 0.0),
        ]);
        assert_eq!(p, q);
    }

    #[test]
    fn trailing_zeros_are_trimmed() {
        let p = Poly::from_real_slice(&[1.0, 2.0, 0.0, 0.0]);
        assert_eq!(p.as_slice().len(), 2);
        assert_eq!(p[1], Complex::new(2.0, 0.0));
    }

    #[test]
    fn vec_round_trip() {
        let coeffs = vec![Complex::new(1.0, 0.0), Complex::new(0.0, 2.0)];
        let p = Poly::from(coeffs.clone());
        assert_eq!(Vec::from(p), coeffs);
    }
}
