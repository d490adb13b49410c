//! Randomized checks of the algebraic identities vectors have to satisfy.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use gola::{vector, Tolerance, Vector, VectorError};

const ITERATIONS: usize = 500;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn rng() -> fastrand::Rng {
    fastrand::Rng::with_seed(0x601a)
}

/// A vector with `dim` components in `[-10, 10)`.
fn random_vector(rng: &mut fastrand::Rng, dim: usize) -> Vector {
    Vector::from_fn(dim, |_| rng.f64() * 20.0 - 10.0)
}

/// A vector that is guaranteed not to be (close to) zero.
fn random_nonzero(rng: &mut fastrand::Rng, dim: usize) -> Vector {
    loop {
        let v = random_vector(rng, dim);
        if v.mag() > 1e-3 {
            return v;
        }
    }
}

#[test]
fn add_then_sub() {
    init_logger();
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let dim = rng.usize(0..8);
        let a = random_vector(&mut rng, dim);
        let b = random_vector(&mut rng, dim);
        assert_abs_diff_eq!(&(&a + &b) - &b, a, epsilon = 1e-12);
    }
}

#[test]
fn add_is_commutative_and_associative() {
    init_logger();
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let dim = rng.usize(1..8);
        let a = random_vector(&mut rng, dim);
        let b = random_vector(&mut rng, dim);
        let c = random_vector(&mut rng, dim);

        // Floating-point addition of two operands is commutative even bit-for-bit.
        assert_eq!(&a + &b, &b + &a);
        assert_abs_diff_eq!(&(&a + &b) + &c, &a + &(&b + &c), epsilon = 1e-12);
    }
}

#[test]
fn clone_does_not_alias() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let dim = rng.usize(1..8);
        let a = random_vector(&mut rng, dim);
        let before = a.to_string();
        let mut copy = a.clone();
        copy.scale(rng.f64() + 2.0);
        copy[0] = 1234.5;
        assert_eq!(a.to_string(), before);
        assert_ne!(a, copy);
    }
}

#[test]
fn unit_has_magnitude_one() {
    init_logger();
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let dim = rng.usize(1..8);
        let v = random_nonzero(&mut rng, dim);
        let unit = v.unit();
        assert_abs_diff_eq!(unit.mag(), 1.0, epsilon = 1e-12);
        assert!(unit.is_parallel_within(&v, Tolerance::DEFAULT));
        assert_eq!(v.try_unit(), Ok(unit));
    }
}

#[test]
fn decomposition() {
    init_logger();
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let dim = rng.usize(2..8);
        let v = random_vector(&mut rng, dim);
        let base = random_nonzero(&mut rng, dim);

        let proj = v.proj(&base);
        let perp = v.perp(&base);
        assert_abs_diff_eq!(&proj + &perp, v, epsilon = 1e-9);
        assert_abs_diff_eq!(perp.dot(&base), 0.0, epsilon = 1e-9);
        assert!(perp.is_orthogonal_within(&base, Tolerance::DEFAULT.with_zero(1e-9)));
    }
}

#[test]
fn cross_product() {
    init_logger();
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let a = random_vector(&mut rng, 3);
        let b = random_vector(&mut rng, 3);
        let cross = a.cross(&b);

        assert_abs_diff_eq!(cross.dot(&a), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(cross.dot(&b), 0.0, epsilon = 1e-9);
        assert!(cross.is_orthogonal_within(&a, Tolerance::DEFAULT.with_zero(1e-9)));

        // |a × b| = |a| |b| sin θ
        let area = a.mag() * b.mag() * a.angle(&b).sin();
        assert_relative_eq!(a.parallelogram_area(&b), area, epsilon = 1e-9, max_relative = 1e-9);
        assert_relative_eq!(a.triangle_area(&b) * 2.0, a.parallelogram_area(&b));

        assert_eq!(b.cross(&a), -cross);
    }
}

#[test]
fn cross_product_scenario() {
    let a = vector![8.462, 7.893, -8.187];
    let b = vector![6.984, -5.975, 4.778];
    let expected = vector![
        7.893 * 4.778 - (-5.975) * (-8.187),
        -(8.462 * 4.778 - 6.984 * (-8.187)),
        8.462 * (-5.975) - 6.984 * 7.893,
    ];
    assert_eq!(a.cross(&b), expected);
    assert_eq!(a.try_cross(&b), Ok(expected));
}

#[test]
fn zero_vector_is_parallel_and_orthogonal() {
    let mut rng = rng();
    let zero = vector![0, 0];
    for _ in 0..ITERATIONS {
        let v = random_vector(&mut rng, 2);
        assert!(zero.is_parallel(&v));
        assert!(v.is_parallel(&zero));
        assert!(zero.is_orthogonal(&v));
        assert!(v.is_orthogonal(&zero));
    }
}

#[test]
fn scaled_vectors_are_parallel() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let dim = rng.usize(1..8);
        let v = random_nonzero(&mut rng, dim);
        let k = rng.f64() * 10.0 + 0.1;
        let scaled = v.clone() * k;
        assert!(v.is_parallel_within(&scaled, Tolerance::DEFAULT));
        assert!(v.is_parallel_within(&-scaled, Tolerance::DEFAULT));
    }
}

#[test]
fn display_round_trips() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let dim = rng.usize(0..8);
        let v = random_vector(&mut rng, dim);
        assert_eq!(v.to_string().parse::<Vector>(), Ok(v));
    }
}

#[test]
fn mismatched_dimensions_fail() {
    init_logger();
    let a = vector![1, 2, 3];
    let b = vector![1, 2];
    let mismatch = VectorError::DimensionMismatch {
        expected: 3,
        actual: 2,
    };

    assert_eq!(a.try_add(&b), Err(mismatch.clone()));
    assert_eq!(a.try_sub(&b), Err(mismatch.clone()));
    assert_eq!(a.try_dot(&b), Err(mismatch.clone()));
    assert_eq!(a.try_eq(&b), Err(mismatch.clone()));
    assert_eq!(a.try_angle(&b), Err(mismatch.clone()));
    assert_eq!(a.try_proj(&b), Err(mismatch.clone()));
    assert_eq!(a.try_perp(&b), Err(mismatch));
    assert_eq!(
        a.try_cross(&b),
        Err(VectorError::NotThreeDimensional { lhs: 3, rhs: 2 })
    );

    // `==` treats a mismatch as inequality instead.
    assert_ne!(a, b);

    let ops: [fn(); 6] = [
        || {
            let _ = &vector![1, 2, 3] + &vector![1, 2];
        },
        || {
            let _ = &vector![1, 2, 3] - &vector![1, 2];
        },
        || {
            vector![1, 2, 3].dot(&vector![1, 2]);
        },
        || {
            vector![1, 2, 3].is_parallel(&vector![1, 2]);
        },
        || {
            vector![1, 2, 3].is_orthogonal(&vector![1, 2]);
        },
        || {
            vector![1, 2].cross(&vector![1, 2]);
        },
    ];
    for op in ops {
        assert!(std::panic::catch_unwind(op).is_err());
    }
}
