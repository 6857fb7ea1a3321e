use crate::{
    num::{Complex, One, Zero},
    roots::{self, Solution},
    util, Poly, RealScalar,
};

/// Find all roots simultaneously using the Durand-Kerner (Weierstrass)
/// method.
///
/// All corrections of one pass are computed from the same snapshot of the
/// estimate vector and applied together, so the result for a fixed set of
/// initial guesses is bit-for-bit reproducible.
///
/// Roots of multiplicity `m` appear as `m` estimates converging towards the
/// same value. Convergence near such clusters is slow, expect to reach the
/// iteration cap before the tolerance for polynomials with repeated roots.
///
/// # Errors
/// - [`roots::Error::DegreeTooLow`]: the polynomial is constant
/// - [`roots::Error::WrongGuessCount`]: there must be exactly one guess per
///   root, i.e. as many guesses as the degree of the polynomial
/// - [`roots::Error::RepeatedGuesses`]: the guesses must be pairwise
///   distinct
pub fn durand_kerner<T: RealScalar>(
    poly: &Poly<T>,
    epsilon: Option<T>,
    max_iter: Option<usize>,
    initial_guesses: &[Complex<T>],
) -> roots::Result<T> {
    debug_assert!(poly.is_normalized());

    let n = poly.degree_raw();
    if n < 1 {
        return Err(roots::Error::DegreeTooLow);
    }
    if initial_guesses.len() != n {
        return Err(roots::Error::WrongGuessCount {
            expected: n,
            actual: initial_guesses.len(),
        });
    }
    for i in 0..n {
        for j in (i + 1)..n {
            if (initial_guesses[i] - initial_guesses[j]).is_zero() {
                return Err(roots::Error::RepeatedGuesses);
            }
        }
    }

    let epsilon =
        epsilon.unwrap_or_else(|| T::from_f64(roots::DEFAULT_EPSILON).expect("overflow"));
    let max_iter = max_iter.unwrap_or(roots::DEFAULT_MAX_ITER);

    // making the polynomial monic keeps the corrections well-scaled and
    // preserves the roots; work on a copy so the input is left untouched
    let mut this = poly.clone();
    this.make_monic();

    let mut points = Vec::from(initial_guesses);
    let mut deltas = vec![Complex::<T>::zero(); n];

    for i in util::iterator::saturating_counter() {
        if i >= max_iter {
            log::debug!("tolerance not reached after {max_iter} iterations");
            return Ok(Solution::new(points, false, max_iter));
        }

        corrections(&this, &mut points, &mut deltas);

        let mut max_delta = T::zero();
        for (y, d) in points.iter_mut().zip(deltas.iter()) {
            *y -= d;
            max_delta = max_delta.max(d.norm());
        }

        log::trace!("{points:?}");

        // stopping criteria
        if max_delta <= epsilon {
            return Ok(Solution::new(points, true, i + 1));
        }
    }
    unreachable!();
}

/// Weierstrass corrections `p(x_i) / prod_{j != i} (x_i - x_j)` for the
/// whole snapshot.
///
/// Needs `points.len() == out.len()`.
///
/// Estimates can coincide mid-solve, e.g. while distinct starting points
/// collapse onto a repeated root. An exactly-zero pairwise distance would
/// poison the denominator, so the offending estimate is nudged by a small
/// deterministic offset and its correction recomputed instead of aborting
/// the whole solve.
fn corrections<T: RealScalar>(poly: &Poly<T>, points: &mut [Complex<T>], out: &mut [Complex<T>]) {
    debug_assert_eq!(points.len(), out.len());

    let n = points.len();
    poly.eval_multiple(points, out);

    let mut i = 0;
    while i < n {
        let mut denom = Complex::<T>::one();
        let mut collided = false;
        for j in 0..n {
            if i == j {
                continue;
            }
            let pairwise = points[i] - points[j];
            if pairwise.is_zero() {
                log::warn!("estimates {i} and {j} coincide, perturbing estimate {i}");
                points[i] += collision_nudge::<T>();
                out[i] = poly.eval(points[i]);
                collided = true;
                break;
            }
            denom *= pairwise;
        }
        if collided {
            // redo this row with the perturbed estimate
            continue;
        }
        out[i] /= denom;
        i += 1;
    }
}

/// Deterministic offset applied to an estimate that collided with another
fn collision_nudge<T: RealScalar>() -> Complex<T> {
    let offset = T::from_f64(1e-10).expect("overflow");
    Complex::new(offset, offset)
}
