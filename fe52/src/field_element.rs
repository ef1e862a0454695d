//! Field element held in five 52-bit limbs.
//! Byte layout follows the implementation in <https://github.com/bitcoin-core/secp256k1>

use crate::{FieldBytes, hex};
use core::fmt;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

#[cfg(feature = "alloc")]
use alloc::string::String;
#[cfg(feature = "serde")]
use serdect::serde::{Serialize, ser};
#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// Bits held by each of the four low limbs in normalized form.
const LIMB_MASK: u64 = 0xFFFFFFFFFFFFF;

/// Bits held by the top limb in normalized form.
const TOP_LIMB_MASK: u64 = 0x0FFFFFFFFFFFF;

/// 256-bit field element in radix 2^52.
/// Uses 5 64-bit limbs (little-endian), where in the normalized form
/// first 4 contain 52 bits of the value each, and the last one contains 48 bits.
/// Arithmetic libraries let limbs grow past those budgets between reductions;
/// such lazily-reduced values must be normalized before encoding.
///
/// The `Debug` rendering, `FieldElement5x52([l0, l1, l2, l3, l4])`, is the
/// text format read by [`crate::debug_repr`].
#[derive(Clone, Copy, Debug)]
pub struct FieldElement5x52(pub(crate) [u64; 5]);

impl FieldElement5x52 {
    /// Zero element.
    pub const ZERO: Self = Self([0, 0, 0, 0, 0]);

    /// Multiplicative identity.
    pub const ONE: Self = Self([1, 0, 0, 0, 0]);

    /// Wraps the given limbs, least significant first.
    ///
    /// Limbs are not checked against the normalized budget; see
    /// [`FieldElement5x52::from_limbs_checked`].
    pub const fn from_limbs(limbs: [u64; 5]) -> Self {
        Self(limbs)
    }

    /// Wraps the given limbs if they are within the normalized budget:
    /// limbs 0 to 3 below 2^52, limb 4 below 2^48.
    ///
    /// Reduction modulo the field prime is not checked.
    pub fn from_limbs_checked(limbs: [u64; 5]) -> CtOption<Self> {
        let res = Self(limbs);
        CtOption::new(res, res.is_normalized())
    }

    /// Splits a `u64` over the two low limbs.
    pub const fn from_u64(val: u64) -> Self {
        let w0 = val & LIMB_MASK;
        let w1 = val >> 52;
        Self([w0, w1, 0, 0, 0])
    }

    /// Returns the limbs, least significant first.
    pub const fn limbs(&self) -> [u64; 5] {
        self.0
    }

    /// Checks that no limb carries bits past its normalized budget.
    pub fn is_normalized(&self) -> Choice {
        let low = (self.0[0] | self.0[1] | self.0[2] | self.0[3]) & !LIMB_MASK;
        let high = self.0[4] & !TOP_LIMB_MASK;
        (low | high).ct_eq(&0)
    }

    /// Returns the big-endian encoding of this field element.
    ///
    /// Bits 48 and up of the top limb are discarded. For a normalized
    /// element this is the SEC1 encoding.
    pub const fn to_bytes(self) -> FieldBytes {
        let mut ret = [0u8; 32];
        ret[0] = (self.0[4] >> 40) as u8;
        ret[1] = (self.0[4] >> 32) as u8;
        ret[2] = (self.0[4] >> 24) as u8;
        ret[3] = (self.0[4] >> 16) as u8;
        ret[4] = (self.0[4] >> 8) as u8;
        ret[5] = self.0[4] as u8;
        ret[6] = (self.0[3] >> 44) as u8;
        ret[7] = (self.0[3] >> 36) as u8;
        ret[8] = (self.0[3] >> 28) as u8;
        ret[9] = (self.0[3] >> 20) as u8;
        ret[10] = (self.0[3] >> 12) as u8;
        ret[11] = (self.0[3] >> 4) as u8;
        // limb boundary at bit 104 falls mid-byte
        ret[12] = ((self.0[2] >> 48) as u8 & 0xFu8) | ((self.0[3] as u8 & 0xFu8) << 4);
        ret[13] = (self.0[2] >> 40) as u8;
        ret[14] = (self.0[2] >> 32) as u8;
        ret[15] = (self.0[2] >> 24) as u8;
        ret[16] = (self.0[2] >> 16) as u8;
        ret[17] = (self.0[2] >> 8) as u8;
        ret[18] = self.0[2] as u8;
        ret[19] = (self.0[1] >> 44) as u8;
        ret[20] = (self.0[1] >> 36) as u8;
        ret[21] = (self.0[1] >> 28) as u8;
        ret[22] = (self.0[1] >> 20) as u8;
        ret[23] = (self.0[1] >> 12) as u8;
        ret[24] = (self.0[1] >> 4) as u8;
        // and again at bit 52
        ret[25] = ((self.0[0] >> 48) as u8 & 0xFu8) | ((self.0[1] as u8 & 0xFu8) << 4);
        ret[26] = (self.0[0] >> 40) as u8;
        ret[27] = (self.0[0] >> 32) as u8;
        ret[28] = (self.0[0] >> 24) as u8;
        ret[29] = (self.0[0] >> 16) as u8;
        ret[30] = (self.0[0] >> 8) as u8;
        ret[31] = self.0[0] as u8;
        ret
    }

    /// Returns the lowercase hex rendering of [`FieldElement5x52::to_bytes`].
    #[cfg(feature = "alloc")]
    pub fn to_hex(self) -> String {
        hex::to_hex(&self.to_bytes())
    }

    /// Determine if this `FieldElement5x52` is zero.
    ///
    /// # Returns
    ///
    /// If zero, return `Choice(1)`.  Otherwise, return `Choice(0)`.
    pub fn is_zero(&self) -> Choice {
        (self.0[0] | self.0[1] | self.0[2] | self.0[3] | self.0[4]).ct_eq(&0)
    }
}

/// Packs five 52-bit limbs, least significant first, into 32 big-endian bytes.
///
/// Never fails. The output is only a meaningful field encoding when the
/// limbs are normalized.
pub const fn pack(limbs: &[u64; 5]) -> FieldBytes {
    FieldElement5x52::from_limbs(*limbs).to_bytes()
}

impl Default for FieldElement5x52 {
    fn default() -> Self {
        Self::ZERO
    }
}

impl ConditionallySelectable for FieldElement5x52 {
    #[inline(always)]
    fn conditional_select(
        a: &FieldElement5x52,
        b: &FieldElement5x52,
        choice: Choice,
    ) -> FieldElement5x52 {
        FieldElement5x52([
            u64::conditional_select(&a.0[0], &b.0[0], choice),
            u64::conditional_select(&a.0[1], &b.0[1], choice),
            u64::conditional_select(&a.0[2], &b.0[2], choice),
            u64::conditional_select(&a.0[3], &b.0[3], choice),
            u64::conditional_select(&a.0[4], &b.0[4], choice),
        ])
    }
}

impl ConstantTimeEq for FieldElement5x52 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[0].ct_eq(&other.0[0])
            & self.0[1].ct_eq(&other.0[1])
            & self.0[2].ct_eq(&other.0[2])
            & self.0[3].ct_eq(&other.0[3])
            & self.0[4].ct_eq(&other.0[4])
    }
}

impl PartialEq for FieldElement5x52 {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for FieldElement5x52 {}

impl From<[u64; 5]> for FieldElement5x52 {
    fn from(limbs: [u64; 5]) -> Self {
        Self::from_limbs(limbs)
    }
}

impl From<FieldElement5x52> for FieldBytes {
    fn from(fe: FieldElement5x52) -> FieldBytes {
        fe.to_bytes()
    }
}

impl From<&FieldElement5x52> for FieldBytes {
    fn from(fe: &FieldElement5x52) -> FieldBytes {
        fe.to_bytes()
    }
}

/// Hex of the big-endian encoding. Width, fill and `#` flags are ignored.
impl fmt::Display for FieldElement5x52 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        hex::write_hex(f, &self.to_bytes(), hex::Case::Lower)
    }
}

/// No `0x` prefix is written, even for `{:#x}`.
impl fmt::LowerHex for FieldElement5x52 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        hex::write_hex(f, &self.to_bytes(), hex::Case::Lower)
    }
}

/// No `0x` prefix is written, even for `{:#X}`.
impl fmt::UpperHex for FieldElement5x52 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        hex::write_hex(f, &self.to_bytes(), hex::Case::Upper)
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for FieldElement5x52 {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

#[cfg(feature = "serde")]
impl Serialize for FieldElement5x52 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serdect::array::serialize_hex_lower_or_bin(&self.to_bytes(), serializer)
    }
}
