//! Field element value type.

use core::fmt::{self, Display, Formatter};
use core::ops::{Add, Div, Mul, Neg, Sub};

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::errors::CurveError;
use crate::field::FiniteField;
use crate::group::Operand;

/// An immutable element of `F_prime`, the pair `(num, prime)` with
/// `0 <= num < prime`.
///
/// Elements from different fields never compare equal and cannot be
/// combined; the operator impls panic on a prime mismatch since that is a
/// programming error rather than input-dependent state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldElement {
    num: BigUint,
    prime: BigUint,
}

impl FieldElement {
    /// Constructs an element, rejecting values outside `[0, prime-1]`.
    pub fn new(num: BigUint, prime: BigUint) -> Result<Self, CurveError> {
        if num >= prime {
            return Err(CurveError::ValueNotInField);
        }
        Ok(FieldElement { num, prime })
    }

    /// The residue value.
    pub fn num(&self) -> &BigUint {
        &self.num
    }

    /// The field modulus.
    pub fn prime(&self) -> &BigUint {
        &self.prime
    }

    fn field(&self) -> FiniteField {
        FiniteField::new(self.prime.clone())
    }

    fn assert_same_field(&self, other: &Self) {
        assert_eq!(
            self.prime, other.prime,
            "cannot operate on elements of different fields"
        );
    }

    fn wrap(&self, num: BigUint) -> Self {
        FieldElement {
            num,
            prime: self.prime.clone(),
        }
    }
}

impl Operand for FieldElement {
    fn add(&self, other: &Self) -> Self {
        self.assert_same_field(other);
        self.wrap((&self.num + &other.num) % &self.prime)
    }

    fn sub(&self, other: &Self) -> Self {
        self.assert_same_field(other);
        self.wrap((&self.num + &self.prime - &other.num) % &self.prime)
    }

    fn mul(&self, other: &Self) -> Self {
        self.assert_same_field(other);
        self.wrap((&self.num * &other.num) % &self.prime)
    }

    fn div(&self, other: &Self) -> Self {
        self.assert_same_field(other);
        let exp = &self.prime - BigUint::from(2u8);
        self.wrap((&self.num * other.num.modpow(&exp, &self.prime)) % &self.prime)
    }

    /// Exponentiation with the exponent reduced modulo `prime - 1`, so
    /// negative exponents resolve through Fermat's little theorem.
    ///
    /// Panics when called with a negative exponent on the zero element.
    fn pow(&self, exp: &BigInt) -> Self {
        let num = self
            .field()
            .pow(&self.num, exp)
            .expect("negative exponent on zero element");
        self.wrap(num)
    }

    fn neg(&self) -> Self {
        let num = self.field().neg(&self.num);
        self.wrap(num)
    }

    fn smul(&self, k: &BigUint) -> Self {
        self.wrap((&self.num * k) % &self.prime)
    }

    fn is_even(&self) -> bool {
        (&self.num % BigUint::from(2u8)).is_zero()
    }

    fn is_zero(&self) -> bool {
        self.num.is_zero()
    }
}

impl FieldElement {
    /// Square root for fields with `p % 4 == 3`; the result is not checked
    /// against the input, see [`FiniteField::sqrt`].
    pub fn sqrt(&self) -> Result<Self, CurveError> {
        let num = self.field().sqrt(&self.num)?;
        Ok(self.wrap(num))
    }
}

impl Add for &FieldElement {
    type Output = FieldElement;

    fn add(self, rhs: Self) -> FieldElement {
        Operand::add(self, rhs)
    }
}

impl Sub for &FieldElement {
    type Output = FieldElement;

    fn sub(self, rhs: Self) -> FieldElement {
        Operand::sub(self, rhs)
    }
}

impl Mul for &FieldElement {
    type Output = FieldElement;

    fn mul(self, rhs: Self) -> FieldElement {
        Operand::mul(self, rhs)
    }
}

impl Div for &FieldElement {
    type Output = FieldElement;

    fn div(self, rhs: Self) -> FieldElement {
        Operand::div(self, rhs)
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        Operand::neg(self)
    }
}

impl Display for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement_{}({})", self.prime, self.num)
    }
}
