use arcade_math::{Vector2D, PI};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn samples() -> Vec<Vector2D> {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut out: Vec<Vector2D> = (0..500)
        .map(|_| Vector2D::random(&mut rng, -1000.0, 1000.0))
        .collect();
    out.push(Vector2D::new(0.1, 0.2));
    out.push(Vector2D::new(-0.0, 3.0));
    out
}

#[test]
fn identities_hold_exactly() {
    for v in samples() {
        assert_eq!(v.add(Vector2D::new(0.0, 0.0)), v);
        assert_eq!(v.negate().negate(), v);
        assert_eq!(Vector2D::from_array(&v.to_array()), v);
    }
}

#[test]
fn normalized_vectors_have_unit_length() {
    for v in samples().into_iter().filter(|v| !v.is_zero()) {
        assert!((v.normalize().magnitude() - 1.0).abs() < 1e-9, "{}", v);
    }
}

#[test]
fn lerp_reaches_both_ends() {
    let vs = samples();
    for pair in vs.windows(2) {
        let (v, target) = (pair[0], pair[1]);
        assert_eq!(v.lerp(target, 0.0), v);
        assert_eq!(v.lerp(target, 1.0), target);
    }
}

#[test]
fn degenerate_inputs_collapse_to_zero() {
    let zero = Vector2D::new(0.0, 0.0);

    assert_eq!(zero.normalize(), zero);
    assert_eq!(Vector2D::new(1.0, 2.0).divide(0.0), zero);
    assert_eq!(zero.set_magnitude(42.0), zero);
    assert_eq!(Vector2D::new(5.0, 5.0).project(zero), zero);
}

#[test]
fn reference_values() {
    assert_eq!(Vector2D::new(3.0, 4.0).magnitude(), 5.0);
    assert!(Vector2D::new(1.0, 0.0)
        .rotate(PI / 2.0)
        .approx_eq(&Vector2D::new(0.0, 1.0), 0.001));
    assert!(
        (Vector2D::new(1.0, 0.0).angle_between(&Vector2D::new(0.0, 1.0)) - PI / 2.0).abs() < 1e-9
    );
    assert_eq!(Vector2D::from_array(&[2.0, 3.0]).to_array(), [2.0, 3.0]);
    assert_eq!(
        Vector2D::midpoint(Vector2D::new(0.0, 0.0), Vector2D::new(4.0, 4.0)),
        Vector2D::new(2.0, 2.0)
    );
    assert!(Vector2D::new(1.0, -1.0)
        .reflect(Vector2D::new(0.0, 1.0))
        .equals(&Vector2D::new(1.0, 1.0)));
}
