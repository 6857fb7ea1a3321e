use durand_kerner::{
    complex,
    num::complex::Complex64,
    poly,
    roots::{self, Error},
    util::__testing::check_roots,
    Poly,
};

#[test]
fn known_roots_cubic() {
    // x^3 - 6x^2 + 11x - 6 = (x - 1)(x - 2)(x - 3)
    let coeffs = [
        complex!(1.0),
        complex!(-6.0),
        complex!(11.0),
        complex!(-6.0),
    ];
    let solution = roots::solve(&coeffs, None, None).unwrap();
    assert!(solution.converged());

    let mut roots: Vec<Complex64> = solution.unpack_roots();
    roots.sort_by(|a, b| a.re.partial_cmp(&b.re).unwrap());
    for (root, expected) in roots.iter().zip([1.0, 2.0, 3.0]) {
        assert!((root.re - expected).abs() < 1E-9, "{roots:?}");
        assert!(root.im.abs() < 1E-9, "{roots:?}");
    }
}

#[test]
fn conjugate_pair() {
    // x^2 + 1 = (x - i)(x + i)
    let coeffs = [complex!(1.0), complex!(0.0), complex!(1.0)];
    let solution = roots::solve(&coeffs, None, None).unwrap();
    assert!(solution.converged());
    assert!(check_roots(
        solution.unpack_roots(),
        vec![complex!(0.0, 1.0), complex!(0.0, -1.0)],
        1E-9
    ));
}

#[test]
fn repeated_root() {
    // x^3 - 6x^2 + 12x - 8 = (x - 2)^3
    //
    // a triple root is resolved to roughly the cube root of the evaluation
    // noise, which in double precision is around 1E-5
    let coeffs = [
        complex!(1.0),
        complex!(-6.0),
        complex!(12.0),
        complex!(-8.0),
    ];
    let solution = roots::solve(&coeffs, None, None).unwrap();
    let roots = solution.unpack_roots();
    assert_eq!(roots.len(), 3);
    for root in &roots {
        assert!((root - complex!(2.0)).norm() < 1E-4, "{roots:?}");
    }
}

#[test]
fn residuals_of_converged_result() {
    let p = poly![-6.0, 11.0, -6.0, 1.0];
    let solution = p.roots(1E-12, 1000).unwrap();
    assert!(solution.converged());
    assert!(solution.max_residual(&p) < 1E-6);
}

#[test]
fn degree_1_is_exact() {
    // 2x - 4
    let solution = roots::solve(&[complex!(2.0), complex!(-4.0)], None, None).unwrap();
    assert!(solution.converged());
    assert_eq!(solution.roots().len(), 1);
    assert!((solution.roots()[0] - complex!(2.0)).norm() < 1E-12);
}

#[test]
fn zero_leading_coefficient_is_rejected() {
    let coeffs = [complex!(0.0), complex!(1.0), complex!(2.0)];
    assert!(matches!(
        roots::solve(&coeffs, None, None),
        Err(Error::LeadingZero)
    ));
}

#[test]
fn degenerate_degrees_are_rejected() {
    assert!(matches!(
        roots::solve::<f64>(&[], None, None),
        Err(Error::DegreeTooLow)
    ));
    assert!(matches!(
        roots::solve(&[complex!(7.0)], None, None),
        Err(Error::DegreeTooLow)
    ));
}

#[test]
fn deterministic_given_fixed_guesses() {
    let p = poly![-6.0, 11.0, -6.0, 1.0];
    let guesses = [
        complex!(0.4, 0.1),
        complex!(-0.2, 0.3),
        complex!(0.1, -0.35),
    ];
    let first = roots::durand_kerner(&p, Some(1E-12), Some(1000), &guesses).unwrap();
    let second = roots::durand_kerner(&p, Some(1E-12), Some(1000), &guesses).unwrap();

    // bit-identical, not just close
    assert_eq!(first, second);
}

#[test]
fn non_convergence_is_not_an_error() {
    let p = poly![-6.0, 11.0, -6.0, 1.0];
    let solution = p.roots(1E-12, 2).unwrap();
    assert!(!solution.converged());
    assert_eq!(solution.iterations(), 2);
    // partial estimates are still returned
    assert_eq!(solution.roots().len(), 3);
}

#[test]
fn back_and_forth() {
    let p = poly![2.0, -3.0, 4.0, 1.0];
    let solution = p.roots(1E-14, 1000).unwrap();
    assert!(solution.converged());

    // because p is monic, we expect pp to be almost identical
    let pp = Poly::from_roots(&solution.unpack_roots());
    const EPSILON: f64 = 1E-9;
    for (a, b) in p.iter().zip(pp.iter()) {
        assert!((a - b).norm() < EPSILON);
    }
}

#[test]
fn solution_accessors() {
    let coeffs = [complex!(1.0), complex!(0.0), complex!(-4.0)];
    let solution = roots::solve(&coeffs, None, None).unwrap();
    assert!(solution.converged());
    assert!(solution.iterations() > 0);
    let roots: Vec<Complex64> = solution.unpack_roots();
    assert!(check_roots(
        roots,
        vec![complex!(2.0), complex!(-2.0)],
        1E-9
    ));
}
