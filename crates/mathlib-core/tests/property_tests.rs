//! # Property-Based Tests
//!
//! Algebraic invariants of vectors and matrices, checked with proptest.
//!
//! Inputs stay in `[-10, 10]` so f32 rounding error has a known bound;
//! matrices that get inverted are diagonally dominant and well-conditioned.

use mathlib_core::{
    MathValue, Matrix, Matrix2f, Matrix3f, Matrix4f, Vector, Vector3f, Vector4f, utils,
    values_from_bytes, values_to_bytes,
};
use proptest::array::{uniform3, uniform4, uniform9, uniform16};
use proptest::prelude::*;

fn component() -> impl Strategy<Value = f32> {
    -10.0f32..10.0
}

fn vector3() -> impl Strategy<Value = Vector3f> {
    uniform3(component()).prop_map(Vector3f::from)
}

fn vector4() -> impl Strategy<Value = Vector4f> {
    uniform4(component()).prop_map(Vector4f::from)
}

fn matrix4() -> impl Strategy<Value = Matrix4f> {
    uniform16(component()).prop_map(Matrix4f::from)
}

/// Diagonal in `[10, 20]`, off-diagonal in `[-1, 1]`.
fn dominant_matrix4() -> impl Strategy<Value = Matrix4f> {
    (uniform4(10.0f32..20.0), uniform16(-1.0f32..1.0)).prop_map(|(diag, off)| {
        let mut m = Matrix4f::from(off);
        for (i, d) in diag.into_iter().enumerate() {
            let _ = m.set_value(i, i, d);
        }
        m
    })
}

// =============================================================================
// VECTOR PROPERTIES
// =============================================================================

proptest! {
    /// The dot product is commutative.
    #[test]
    fn dot_commutes(a in vector4(), b in vector4()) {
        prop_assert_eq!(a.dot(&b), b.dot(&a));
    }

    /// Normalizing a non-degenerate vector yields unit length.
    #[test]
    fn nor_yields_unit(v in vector3()) {
        prop_assume!(v.len() > 0.1);
        let mut n = v;
        n.nor();
        prop_assert!(n.is_unit_eps(1e-5));
        prop_assert!(n.is_collinear(&v));
    }

    /// The cross product is orthogonal to both operands.
    #[test]
    fn cross_is_orthogonal(a in vector3(), b in vector3()) {
        let c = Vector3f::cross(&a, &b);
        let tolerance = 1e-5 * (a.len2() * b.len() + b.len2() * a.len() + 1.0);
        prop_assert!(c.dot(&a).abs() <= tolerance);
        prop_assert!(c.dot(&b).abs() <= tolerance);
    }

    /// Limiting never lengthens and never exceeds the limit.
    #[test]
    fn limit_bounds_length(v in vector3(), limit in 0.0f32..5.0) {
        let mut l = v;
        l.limit(limit);
        prop_assert!(l.len() <= v.len() + 1e-5);
        prop_assert!(l.len() <= limit + 1e-5);
    }

    /// Lerp hits both endpoints.
    #[test]
    fn lerp_endpoints(a in vector4(), b in vector4()) {
        let mut start = a;
        start.lerp(&b, 0.0);
        prop_assert_eq!(start, a);

        let mut end = a;
        end.lerp(&b, 1.0);
        prop_assert!(end.eps_equals(&b, 1e-5));
    }

    /// clamp01 always lands in the unit interval.
    #[test]
    fn clamp01_in_range(v in -100.0f32..100.0) {
        let c = utils::clamp01(v);
        prop_assert!((0.0..=1.0).contains(&c));
    }
}

// =============================================================================
// MATRIX PROPERTIES
// =============================================================================

proptest! {
    /// Transposing twice is the identity.
    #[test]
    fn transpose_is_involution(m in matrix4()) {
        let mut t = m;
        t.tra().tra();
        prop_assert_eq!(t, m);
    }

    /// (AB)ᵀ = BᵀAᵀ.
    #[test]
    fn transpose_of_product(a in matrix4(), b in matrix4()) {
        let mut lhs = a * b;
        lhs.tra();

        let (mut at, mut bt) = (a, b);
        at.tra();
        bt.tra();
        prop_assert_eq!(lhs, bt * at);
    }

    /// det(Mᵀ) = det(M).
    #[test]
    fn transpose_keeps_determinant(values in uniform9(component())) {
        let m = Matrix3f::from(values);
        let mut t = m;
        t.tra();
        prop_assert!((m.det() - t.det()).abs() <= 1e-2);
    }

    /// 2x2 determinants are exact under transposition.
    #[test]
    fn transpose_keeps_determinant_2x2(values in uniform4(component())) {
        let m = Matrix2f::from(values);
        let mut t = m;
        t.tra();
        prop_assert_eq!(m.det(), t.det());
    }

    /// M M⁻¹ = M⁻¹ M = I for well-conditioned matrices.
    #[test]
    fn inverse_is_two_sided(m in dominant_matrix4()) {
        let mut inv = m;
        inv.inv().expect("dominant matrices are invertible");
        prop_assert!((m * inv).is_identity(1e-4));
        prop_assert!((inv * m).is_identity(1e-4));
    }

    /// Failed inversion leaves the matrix untouched.
    #[test]
    fn singular_inverse_is_no_op(row in uniform4(component())) {
        let mut m = Matrix4f::from_rows([row, row, [1.0, 0.0, 0.0, 0.0], [0.0, 0.0, 0.0, 1.0]]);
        let before = m;
        prop_assert!(m.inv().is_err());
        prop_assert_eq!(m, before);
    }
}

// =============================================================================
// PERSISTENCE PROPERTIES
// =============================================================================

proptest! {
    /// Encoded results decode to the same values, bit for bit.
    #[test]
    fn persistence_roundtrip(
        vectors in proptest::collection::vec(vector3(), 0..20),
        scalars in proptest::collection::vec(component(), 0..20),
        m in matrix4(),
    ) {
        let mut values: Vec<MathValue> = vectors
            .into_iter()
            .map(|v| MathValue::Vector(v.into()))
            .collect();
        values.extend(scalars.into_iter().map(MathValue::Scalar));
        values.push(MathValue::Matrix(m.into()));

        let bytes = values_to_bytes(&values).expect("serialize");
        prop_assert_eq!(values_from_bytes(&bytes).expect("deserialize"), values);
    }
}
