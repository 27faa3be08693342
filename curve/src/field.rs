//! Modular arithmetic over a prime field `F_p`.
//!
//! Values are plain `BigUint` residues in `[0, p-1]`. The binary operations
//! require both operands to already be reduced; handing in an out-of-range
//! value is rejected rather than silently clamped.

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

use crate::errors::CurveError;

/// A prime field defined by its modulus `p`.
///
/// Division and negative exponents rely on Fermat's little theorem, so the
/// modulus must actually be prime for those operations to be meaningful.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FiniteField {
    p: BigUint,
}

impl FiniteField {
    pub fn new(p: BigUint) -> Self {
        FiniteField { p }
    }

    /// The field modulus.
    pub fn prime(&self) -> &BigUint {
        &self.p
    }

    /// Reduces an arbitrary non-negative integer into the field.
    pub fn modulo(&self, a: &BigUint) -> BigUint {
        a % &self.p
    }

    /// Fails unless `a` is already a reduced residue.
    pub fn assert_member(&self, a: &BigUint) -> Result<(), CurveError> {
        if a >= &self.p {
            return Err(CurveError::ValueNotInField);
        }
        Ok(())
    }

    /// `(a + b) mod p`.
    pub fn add(&self, a: &BigUint, b: &BigUint) -> Result<BigUint, CurveError> {
        self.assert_member(a)?;
        self.assert_member(b)?;
        Ok((a + b) % &self.p)
    }

    /// `(a - b) mod p`, wrapping below zero.
    pub fn sub(&self, a: &BigUint, b: &BigUint) -> Result<BigUint, CurveError> {
        self.assert_member(a)?;
        self.assert_member(b)?;
        Ok((a + &self.p - b) % &self.p)
    }

    /// `(a * b) mod p`.
    pub fn mul(&self, a: &BigUint, b: &BigUint) -> Result<BigUint, CurveError> {
        self.assert_member(a)?;
        self.assert_member(b)?;
        Ok((a * b) % &self.p)
    }

    /// `a / b` computed as `a * b^(p-2) mod p` per Fermat's little theorem.
    pub fn div(&self, a: &BigUint, b: &BigUint) -> Result<BigUint, CurveError> {
        self.assert_member(a)?;
        self.assert_member(b)?;
        let exp = &self.p - BigUint::from(2u8);
        Ok((a * b.modpow(&exp, &self.p)) % &self.p)
    }

    /// `a^e mod p` for a possibly negative exponent.
    ///
    /// The exponent is first reduced modulo `p - 1`, which maps a negative
    /// exponent onto its positive Fermat equivalent. That reduction assumes
    /// the base is invertible, so a negative exponent on a zero base fails.
    pub fn pow(&self, a: &BigUint, e: &BigInt) -> Result<BigUint, CurveError> {
        if a.is_zero() && e.sign() == num_bigint::Sign::Minus {
            return Err(CurveError::ZeroInverse);
        }
        let order = BigInt::from(&self.p - BigUint::one());
        let mut exp = e % &order;
        if exp.sign() == num_bigint::Sign::Minus {
            exp += &order;
        }
        let exp = exp.to_biguint().unwrap_or_default();
        Ok(a.modpow(&exp, &self.p))
    }

    /// Additive inverse, `p - a` (and `0` for `0`).
    pub fn neg(&self, a: &BigUint) -> BigUint {
        if a.is_zero() {
            BigUint::zero()
        } else {
            &self.p - a
        }
    }

    /// Square root via `a^((p+1)/4)`, valid only when `p % 4 == 3`.
    ///
    /// For a quadratic non-residue this still returns a value; it is the
    /// caller's job to square the result and compare when the input is not
    /// known to be a residue.
    pub fn sqrt(&self, a: &BigUint) -> Result<BigUint, CurveError> {
        if &self.p % BigUint::from(4u8) != BigUint::from(3u8) {
            return Err(CurveError::SqrtUnsupported);
        }
        let exp = (&self.p + BigUint::one()) / BigUint::from(4u8);
        Ok(a.modpow(&exp, &self.p))
    }
}
