//! Curve parameter set binding a field, the Weierstrass coefficients, the
//! scalar-group order and a generator point.

use lazy_static::lazy_static;
use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::element::FieldElement;
use crate::errors::CurveError;
use crate::field::FiniteField;
use crate::point::Point;

/// Parameters `(p, a, b, n, gx, gy)` of an elliptic curve over `F_p` with a
/// generator of order `n`.
///
/// Immutable once constructed; every point derived through the curve shares
/// these values. The secp256k1 instance lives in the process-wide
/// [`struct@SECP256K1`] singleton.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Curve {
    pub p: BigUint,
    pub a: BigUint,
    pub b: BigUint,
    pub n: BigUint,
    pub gx: BigUint,
    pub gy: BigUint,
}

impl Curve {
    pub fn new(p: BigUint, a: BigUint, b: BigUint, n: BigUint, gx: BigUint, gy: BigUint) -> Self {
        Curve { p, a, b, n, gx, gy }
    }

    /// The prime field the coordinates live in.
    pub fn field(&self) -> FiniteField {
        FiniteField::new(self.p.clone())
    }

    /// The scalar group `Z_n`, used for signature arithmetic.
    pub fn scalar_field(&self) -> FiniteField {
        FiniteField::new(self.n.clone())
    }

    fn element(&self, num: BigUint) -> Result<FieldElement, CurveError> {
        FieldElement::new(num, self.p.clone())
    }

    /// Builds a curve point from raw coordinates, validating membership.
    pub fn point(&self, x: BigUint, y: BigUint) -> Result<Point<FieldElement>, CurveError> {
        Point::new(
            self.element(x)?,
            self.element(y)?,
            self.element(self.a.clone())?,
            self.element(self.b.clone())?,
        )
    }

    /// The identity element of the curve group.
    pub fn infinity(&self) -> Point<FieldElement> {
        // a and b are reduced residues by construction
        Point::infinity(
            FieldElement::new(self.a.clone(), self.p.clone()).expect("curve coefficient a"),
            FieldElement::new(self.b.clone(), self.p.clone()).expect("curve coefficient b"),
        )
    }

    /// The generator point `G`.
    pub fn g(&self) -> Point<FieldElement> {
        self.point(self.gx.clone(), self.gy.clone())
            .expect("generator is on the curve")
    }

    /// Derives the public point `sk * G`. Fails unless `0 < sk < n`.
    pub fn pub_point(&self, sk: &BigUint) -> Result<Point<FieldElement>, CurveError> {
        if sk.is_zero() || sk >= &self.n {
            return Err(CurveError::InvalidSecret);
        }
        Ok(self.g().smul(sk))
    }

    /// Scalar multiplication in the generated subgroup: `k` is reduced
    /// modulo the group order before the double-and-add walk.
    pub fn smul(&self, point: &Point<FieldElement>, k: &BigUint) -> Point<FieldElement> {
        point.smul(&(k % &self.n))
    }

    /// `u*G + v*P`, the combination both signature verifiers need.
    pub fn double_smul(
        &self,
        u: &BigUint,
        v: &BigUint,
        point: &Point<FieldElement>,
    ) -> Point<FieldElement> {
        self.smul(&self.g(), u).add_point(&self.smul(point, v))
    }
}

lazy_static! {
    /// The secp256k1 curve, `y^2 = x^3 + 7` over `F_p` with
    /// `p = 2^256 - 2^32 - 977`.
    pub static ref SECP256K1: Curve = Curve::new(
        BigUint::parse_bytes(
            b"fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f",
            16,
        )
        .expect("secp256k1 p"),
        BigUint::zero(),
        BigUint::from(7u8),
        BigUint::parse_bytes(
            b"fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141",
            16,
        )
        .expect("secp256k1 n"),
        BigUint::parse_bytes(
            b"79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
            16,
        )
        .expect("secp256k1 gx"),
        BigUint::parse_bytes(
            b"483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8",
            16,
        )
        .expect("secp256k1 gy"),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_curve() -> Curve {
        // y^2 = x^3 + 7 over F_223, generator (47, 71) of order 21
        Curve::new(
            BigUint::from(223u32),
            BigUint::zero(),
            BigUint::from(7u8),
            BigUint::from(21u8),
            BigUint::from(47u8),
            BigUint::from(71u8),
        )
    }

    #[test]
    fn generator_is_on_curve() {
        assert!(!small_curve().g().is_infinity());
        assert!(!SECP256K1.g().is_infinity());
    }

    #[test]
    fn order_times_generator_is_infinity() {
        let curve = &*SECP256K1;
        assert!(curve.g().smul(&curve.n).is_infinity());
    }

    #[test]
    fn pub_point_rejects_out_of_range_secrets() {
        let curve = small_curve();
        assert_eq!(
            curve.pub_point(&BigUint::zero()).unwrap_err(),
            CurveError::InvalidSecret
        );
        assert_eq!(
            curve.pub_point(&BigUint::from(21u8)).unwrap_err(),
            CurveError::InvalidSecret
        );
        assert!(curve.pub_point(&BigUint::from(20u8)).is_ok());
    }

    #[test]
    fn smul_reduces_by_group_order() {
        let curve = small_curve();
        let g = curve.g();
        assert_eq!(
            curve.smul(&g, &BigUint::from(22u8)),
            g.smul(&BigUint::from(1u8))
        );
        assert!(curve.smul(&g, &BigUint::from(21u8)).is_infinity());
    }

    #[test]
    fn double_smul_matches_separate_walks() {
        let curve = small_curve();
        let p = curve.g().smul(&BigUint::from(5u8));
        let lhs = curve.double_smul(&BigUint::from(3u8), &BigUint::from(4u8), &p);
        let rhs = curve
            .g()
            .smul(&BigUint::from(3u8))
            .add_point(&p.smul(&BigUint::from(4u8)));
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn key_negation_mirrors_public_point() {
        // eG = (x, y) implies (n-e)G = (x, p-y)
        let curve = &*SECP256K1;
        let p1 = curve.pub_point(&BigUint::from(1u8)).unwrap();
        let p2 = curve.pub_point(&(&curve.n - BigUint::from(1u8))).unwrap();
        assert_eq!(p1.x(), p2.x());
        let y1 = p1.y().unwrap().num().clone();
        let y2 = p2.y().unwrap().num().clone();
        assert_eq!(y1, &curve.p - y2);
    }
}
