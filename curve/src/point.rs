//! Generic point on a short Weierstrass curve `y^2 = x^3 + ax + b`, with
//! the chord-and-tangent group law.
//!
//! The point is a tagged sum of the point at infinity and an affine
//! coordinate pair, so the degenerate cases of the addition law are handled
//! by exhaustive matching instead of sentinel coordinates.

use core::ops::{Add, Neg, Sub};

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::errors::CurveError;
use crate::group::Operand;

/// Coordinates of a curve point: the identity element or an affine pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Coords<F> {
    Infinity,
    Affine { x: F, y: F },
}

/// A point on the curve `y^2 = x^3 + ax + b` over the field of `F`.
///
/// Carries the curve coefficients so that points from different curves
/// never compare equal. Construction of an affine point validates curve
/// membership; the group operations are closed and cannot fail.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point<F: Operand> {
    a: F,
    b: F,
    coords: Coords<F>,
}

impl<F: Operand> Point<F> {
    /// Constructs an affine point, failing unless `(x, y)` satisfies the
    /// curve equation.
    pub fn new(x: F, y: F, a: F, b: F) -> Result<Self, CurveError> {
        let lhs = y.pow(&BigInt::from(2));
        let rhs = x.pow(&BigInt::from(3)).add(&a.mul(&x)).add(&b);
        if lhs != rhs {
            return Err(CurveError::NotOnCurve);
        }
        Ok(Point {
            a,
            b,
            coords: Coords::Affine { x, y },
        })
    }

    /// The identity element of the curve group.
    pub fn infinity(a: F, b: F) -> Self {
        Point {
            a,
            b,
            coords: Coords::Infinity,
        }
    }

    pub fn is_infinity(&self) -> bool {
        matches!(self.coords, Coords::Infinity)
    }

    pub fn coords(&self) -> &Coords<F> {
        &self.coords
    }

    /// X-coordinate, `None` for the point at infinity.
    pub fn x(&self) -> Option<&F> {
        match &self.coords {
            Coords::Infinity => None,
            Coords::Affine { x, .. } => Some(x),
        }
    }

    /// Y-coordinate, `None` for the point at infinity.
    pub fn y(&self) -> Option<&F> {
        match &self.coords {
            Coords::Infinity => None,
            Coords::Affine { y, .. } => Some(y),
        }
    }

    /// Curve coefficient `a`.
    pub fn coeff_a(&self) -> &F {
        &self.a
    }

    /// Curve coefficient `b`.
    pub fn coeff_b(&self) -> &F {
        &self.b
    }

    /// Point addition covering the full case split of the chord-and-tangent
    /// law: identity operands, additive inverses, distinct points, a
    /// vertical tangent, and doubling.
    pub fn add_point(&self, other: &Self) -> Self {
        debug_assert!(
            self.a == other.a && self.b == other.b,
            "points are not on the same curve"
        );

        let (x1, y1) = match &self.coords {
            Coords::Infinity => return other.clone(),
            Coords::Affine { x, y } => (x, y),
        };
        let (x2, y2) = match &other.coords {
            Coords::Infinity => return self.clone(),
            Coords::Affine { x, y } => (x, y),
        };

        // additive inverses: same x, different y
        if x1 == x2 && y1 != y2 {
            return Self::infinity(self.a.clone(), self.b.clone());
        }

        if x1 != x2 {
            // chord through two distinct points
            let s = y2.sub(y1).div(&x2.sub(x1));
            let x3 = s.pow(&BigInt::from(2)).sub(x1).sub(x2);
            let y3 = s.mul(&x1.sub(&x3)).sub(y1);
            return Point {
                a: self.a.clone(),
                b: self.b.clone(),
                coords: Coords::Affine { x: x3, y: y3 },
            };
        }

        // doubling a point with a vertical tangent
        if y1.is_zero() {
            return Self::infinity(self.a.clone(), self.b.clone());
        }

        // tangent at a doubled point: s = (3x^2 + a) / 2y
        let s = x1
            .pow(&BigInt::from(2))
            .smul(&BigUint::from(3u8))
            .add(&self.a)
            .div(&y1.smul(&BigUint::from(2u8)));
        let x3 = s.pow(&BigInt::from(2)).sub(&x1.smul(&BigUint::from(2u8)));
        let y3 = s.mul(&x1.sub(&x3)).sub(y1);
        Point {
            a: self.a.clone(),
            b: self.b.clone(),
            coords: Coords::Affine { x: x3, y: y3 },
        }
    }

    /// Reflection across the x-axis; the identity inverts to itself.
    pub fn invert(&self) -> Self {
        match &self.coords {
            Coords::Infinity => self.clone(),
            Coords::Affine { x, y } => Point {
                a: self.a.clone(),
                b: self.b.clone(),
                coords: Coords::Affine {
                    x: x.clone(),
                    y: y.neg(),
                },
            },
        }
    }

    pub fn sub_point(&self, other: &Self) -> Self {
        self.add_point(&other.invert())
    }

    /// Scalar multiplication by double-and-add over the binary expansion of
    /// `k`, least significant bit first. `k = 0` yields the identity.
    pub fn smul(&self, k: &BigUint) -> Self {
        let mut result = Self::infinity(self.a.clone(), self.b.clone());
        if k.is_zero() {
            return result;
        }
        let mut current = self.clone();
        for i in 0..k.bits() {
            if k.bit(i) {
                result = result.add_point(&current);
            }
            // the final doubling is never consumed
            if i + 1 < k.bits() {
                current = current.add_point(&current);
            }
        }
        result
    }
}

impl<F: Operand> Add for &Point<F> {
    type Output = Point<F>;

    fn add(self, rhs: Self) -> Point<F> {
        self.add_point(rhs)
    }
}

impl<F: Operand> Sub for &Point<F> {
    type Output = Point<F>;

    fn sub(self, rhs: Self) -> Point<F> {
        self.sub_point(rhs)
    }
}

impl<F: Operand> Neg for &Point<F> {
    type Output = Point<F>;

    fn neg(self) -> Point<F> {
        self.invert()
    }
}
