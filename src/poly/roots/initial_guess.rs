use num::Complex;

use crate::{Poly, RealScalar};

/// Place one starting point per root on a circle around the origin.
///
/// The radius `0.4 * |a_0 / a_n|^(1/n)` is a cheap estimate of the magnitude
/// of the roots. The angles are spread over an odd number of slots, so the
/// configuration is radially asymmetric; symmetric guesses can stall the
/// iteration on symmetric polynomials. Guesses are pairwise distinct by
/// construction.
pub fn initial_guesses_circle<T: RealScalar>(poly: &Poly<T>, out: &mut [Complex<T>]) {
    debug_assert!(poly.is_normalized());

    let n = poly.degree_raw();
    debug_assert_eq!(out.len(), n);

    let ratio = (poly.as_slice()[0] / poly.last()).norm();
    let mut radius = T::from_f64(0.4).expect("overflow")
        * ratio.powf(T::one() / T::from_usize(n).expect("overflow"));
    if radius.is_small() {
        // polynomials with a zero constant term have a root at the origin,
        // and the circle through it degenerates to a point
        radius = T::from_f64(0.5).expect("overflow");
    }

    let n_asym = if n % 2 == 0 { n + 1 } else { n + 2 };
    let angle_increment = T::from_f64(std::f64::consts::TAU).expect("overflow")
        / T::from_usize(n_asym).expect("overflow");
    for (i, y) in out.iter_mut().enumerate() {
        let angle = angle_increment * T::from_usize(i).expect("overflow");
        *y = Complex::from_polar(radius, angle);
    }
}

/// Seeded random starting points, drawn from the annulus that is known to
/// contain all the roots.
///
/// Random guesses are almost surely pairwise distinct, but with an
/// adversarial seed [`super::durand_kerner`] may still reject them.
pub fn initial_guesses_random<T: RealScalar>(poly: &Poly<T>, seed: u64, out: &mut [Complex<T>]) {
    let mut rng = fastrand::Rng::with_seed(seed);
    let low = lower_bound(poly);
    let high = upper_bound(poly);
    let span = high - low;
    for y in out {
        let radius = T::from_f64(rng.f64()).expect("overflow") * span + low;
        let angle = T::from_f64(rng.f64() * std::f64::consts::TAU).expect("overflow");
        *y = Complex::from_polar(radius, angle);
    }
}

/// The radius of a disk containing all the roots
///
/// Uses Deutsch's simple formula \[[McNamee 2005](https://www.researchgate.net/publication/228745231_A_comparison_of_a_priori_bounds_on_real_or_complex_roots_of_polynomials)\]
fn upper_bound<T: RealScalar>(poly: &Poly<T>) -> T {
    debug_assert!(
        poly.degree_raw() >= 1,
        "there are no bounds for a polynomial with no roots"
    );

    let mut this = poly.clone();
    this.make_monic();
    debug_assert!(this.is_monic());

    let n = this.len_raw();

    let next_last = this.as_slice()[n - 2];
    let coeffs_iter = this.as_slice().iter().take(n - 2);
    let coeffs_iter_shifted = this.as_slice().iter().skip(1).take(n - 2);
    let max_term = coeffs_iter
        .zip(coeffs_iter_shifted)
        .map(|(num, denom)| num / denom)
        .map(|z| z.norm())
        .fold(T::zero(), T::max);
    next_last.norm() + max_term
}

/// The radius of a disk containing none of the roots
fn lower_bound<T: RealScalar>(poly: &Poly<T>) -> T {
    let this = Poly::from_complex_iterator(poly.iter().rev().copied());
    upper_bound(&this).recip()
}

#[cfg(test)]
mod test {
    use num::{complex::Complex64, Zero};

    use super::{initial_guesses_circle, initial_guesses_random, lower_bound, upper_bound};
    use crate::Poly;

    fn pairwise_distinct(points: &[Complex64]) -> bool {
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                if (points[i] - points[j]).is_zero() {
                    return false;
                }
            }
        }
        true
    }

    #[test]
    fn circle_guesses_are_distinct() {
        let p = Poly::from_roots(&[
            complex!(1.0),
            complex!(-1.0),
            complex!(0.0, 1.0),
            complex!(0.0, -1.0),
            complex!(2.0),
            complex!(-2.0),
        ]);
        let mut guesses = [Complex64::zero(); 6];
        initial_guesses_circle(&p, &mut guesses);
        assert!(pairwise_distinct(&guesses));
    }

    #[test]
    fn circle_guesses_with_zero_constant_term() {
        // x^2 + x has a root at the origin
        let p = poly![0.0, 1.0, 1.0];
        let mut guesses = [Complex64::zero(); 2];
        initial_guesses_circle(&p, &mut guesses);
        assert!(pairwise_distinct(&guesses));
        assert!(guesses.iter().all(|g| g.norm() > 0.1));
    }

    #[test]
    fn random_guesses_are_within_bounds() {
        let p = Poly::from_roots(&[complex!(1.0), complex!(2.0), complex!(3.0)]);
        let low = lower_bound(&p);
        let high = upper_bound(&p);
        let mut guesses = [Complex64::zero(); 3];
        initial_guesses_random(&p, 1, &mut guesses);
        assert!(pairwise_distinct(&guesses));
        assert!(guesses
            .iter()
            .all(|g| low - 1e-12 <= g.norm() && g.norm() <= high + 1e-12));
    }

    #[test]
    fn bounds_contain_the_roots() {
        let roots = [complex!(0.5), complex!(-1.5), complex!(0.0, 2.0)];
        let p = Poly::from_roots(&roots);
        let low = lower_bound(&p);
        let high = upper_bound(&p);
        assert!(roots.iter().all(|r| low <= r.norm() && r.norm() <= high));
    }
}
