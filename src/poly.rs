use std::fmt::Display;

use num::{Complex, One, Zero};

use crate::{
    util::complex::{complex_fmt, complex_sort_mut},
    RealScalar,
};

mod base;
mod conversions;
mod impl_num;
pub mod roots;

/// polynomial as a list of coefficients of terms of ascending degree
#[derive(Clone, Debug, PartialEq)]
pub struct Poly<T: RealScalar>(pub(crate) Vec<Complex<T>>);

impl<T: RealScalar> Poly<T> {
    /// Create a new polynomial from a slice of complex coefficients, in
    /// ascending order of degree.
    ///
    /// Trailing zero coefficients are trimmed, so the polynomial is stored
    /// in its normalized form.
    pub fn new(coeffs: &[Complex<T>]) -> Self {
        Self(coeffs.to_owned()).normalize()
    }

    /// The zero polynomial, i.e. a constant zero.
    #[must_use]
    pub fn zero() -> Self {
        Self(vec![Complex::zero()])
    }

    /// The constant polynomial `1`.
    #[must_use]
    pub fn one() -> Self {
        Self(vec![Complex::one()])
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        debug_assert!(self.is_normalized());
        self.len_raw() == 1 && self.0[0].is_zero()
    }

    #[must_use]
    pub fn is_one(&self) -> bool {
        debug_assert!(self.is_normalized());
        self.len_raw() == 1 && self.0[0].is_one()
    }

    /// The degree of the polynomial, or `-1` for the zero polynomial, whose
    /// degree is undefined.
    ///
    /// # Panics
    /// May theoretically panic for absurdly large polynomials, however such
    /// polynomials will likely not fit in memory anyway.
    #[must_use]
    pub fn degree(&self) -> i64 {
        debug_assert!(self.is_normalized());
        if self.is_zero() {
            return -1;
        }
        self.degree_raw()
            .try_into()
            .expect("usize did not fit into i64")
    }

    /// Evaluate the polynomial at a single point, using Horner's method.
    ///
    /// ```
    /// use durand_kerner::poly;
    /// use num::Complex;
    ///
    /// let p = poly![1.0, 2.0, 3.0];
    /// assert_eq!(p.eval(Complex::new(1.0, 0.0)), Complex::new(6.0, 0.0));
    /// ```
    pub fn eval(&self, x: Complex<T>) -> Complex<T> {
        debug_assert!(self.is_normalized());
        let mut eval = self.last();
        for c in self.0.iter().rev().skip(1) {
            eval = eval * x + *c;
        }
        eval
    }

    /// Evaluate the polynomial at each point in `points`.
    ///
    /// Needs `points.len() == out.len()`.
    pub fn eval_multiple(&self, points: &[Complex<T>], out: &mut [Complex<T>]) {
        debug_assert_eq!(points.len(), out.len());
        for (y, x) in out.iter_mut().zip(points) {
            *y = self.eval(*x);
        }
    }

    /// Monic polynomial from its complex roots.
    ///
    /// # Examples
    /// ```
    /// use durand_kerner::Poly;
    /// use num::{Complex, One, Zero};
    ///
    /// let p = Poly::from_roots(&[Complex::new(-1.0, 0.0), Complex::zero(), Complex::one()]);
    /// assert_eq!(p, Poly::new(&[Complex::zero(), Complex::new(-1.0, 0.0), Complex::zero(), Complex::one()]))
    /// ```
    #[must_use]
    pub fn from_roots(roots: &[Complex<T>]) -> Self {
        if roots.is_empty() {
            return Self::one();
        }

        let mut roots = roots.to_owned();
        complex_sort_mut(roots.as_mut_slice());

        roots
            .into_iter()
            .map(|e| Self::new(&[-e, Complex::<T>::one()]))
            .fold(Self::one(), |acc, x| acc * x)
            .normalize()
    }
}

impl<T: RealScalar> Display for Poly<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut iter = self.iter().enumerate();
        if let Some((_, c)) = iter.next() {
            write!(f, "{}", complex_fmt(c))?;
        } else {
            return Ok(());
        }
        for (i, c) in iter {
            write!(f, " + {}*x^{}", complex_fmt(c), i)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use num::Complex;

    use crate::Poly;

    #[test]
    fn eval() {
        // x^3 - 6x^2 + 11x - 6
        let p = poly![-6.0, 11.0, -6.0, 1.0];
        assert_eq!(p.eval(complex!(2.0)), Complex::new(0.0, 0.0));
        assert_eq!(p.eval(complex!(0.0)), Complex::new(-6.0, 0.0));
    }

    #[test]
    fn from_roots_sorted() {
        let p = Poly::from_roots(&[complex!(3.0), complex!(1.0), complex!(2.0)]);
        assert_eq!(p, poly![-6.0, 11.0, -6.0, 1.0]);
    }

    #[test]
    fn degree() {
        assert_eq!(poly![1.0, 2.0, 3.0].degree(), 2);
        assert_eq!(Poly::<f64>::zero().degree(), -1);
        assert_eq!(Poly::<f64>::one().degree(), 0);
    }

    #[test]
    fn from_no_roots() {
        let p = Poly::<f64>::from_roots(&[]);
        assert!(p.is_one());
    }

    #[test]
    fn display() {
        let p = poly![(2.0, 0.0), (4.5, 0.0), (5.0, 1.0), (6.0, 1.5), (7.0, 2.0)];
        assert_eq!(
            p.to_string(),
            "2 + 4.5*x^1 + (5+i)*x^2 + (6+i1.5)*x^3 + (7+i2)*x^4".to_string()
        );
    }
}
