//! Hexadecimal rendering of encoded field elements.
//!
//! Output is two digits per byte in array order, so the most significant
//! byte comes first. No prefix and no separators are emitted.

use crate::FieldBytes;
use base16ct::HexDisplay;
use core::fmt;

#[cfg(feature = "alloc")]
use alloc::string::String;

/// Length of the hex rendering of a [`FieldBytes`] value.
pub const HEX_SIZE: usize = 2 * crate::FIELD_BYTES_SIZE;

/// Letter case used for the digits `a` through `f`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Case {
    /// `0-9a-f`
    #[default]
    Lower,

    /// `0-9A-F`
    Upper,
}

/// Write the hex rendering of `bytes` to `out` without allocating.
pub fn write_hex<W: fmt::Write>(out: &mut W, bytes: &FieldBytes, case: Case) -> fmt::Result {
    match case {
        Case::Lower => write!(out, "{:x}", HexDisplay(bytes)),
        Case::Upper => write!(out, "{:X}", HexDisplay(bytes)),
    }
}

/// Lowercase hex rendering of `bytes`.
#[cfg(feature = "alloc")]
pub fn to_hex(bytes: &FieldBytes) -> String {
    base16ct::lower::encode_string(bytes)
}

/// Uppercase hex rendering of `bytes`.
#[cfg(feature = "alloc")]
pub fn to_hex_upper(bytes: &FieldBytes) -> String {
    base16ct::upper::encode_string(bytes)
}

#[cfg(all(test, feature = "alloc"))]
mod tests {
    use super::{Case, HEX_SIZE, to_hex, to_hex_upper, write_hex};
    use alloc::string::String;
    use hex_literal::hex;

    const BYTES: [u8; 32] = hex!("00ff10a0 0123456789abcdef fedcba9876543210 0000000000000000 01020304");

    #[test]
    fn lower_digits() {
        let s = to_hex(&BYTES);
        assert_eq!(s.len(), HEX_SIZE);
        assert_eq!(
            s,
            "00ff10a00123456789abcdeffedcba9876543210000000000000000001020304"
        );
    }

    #[test]
    fn upper_digits() {
        assert_eq!(to_hex_upper(&BYTES), to_hex(&BYTES).to_uppercase());
    }

    #[test]
    fn matches_hex_crate() {
        assert_eq!(to_hex(&BYTES), ::hex::encode(BYTES));
    }

    #[test]
    fn streaming_matches_owned() {
        let mut lower = String::new();
        write_hex(&mut lower, &BYTES, Case::Lower).unwrap();
        assert_eq!(lower, to_hex(&BYTES));

        let mut upper = String::new();
        write_hex(&mut upper, &BYTES, Case::Upper).unwrap();
        assert_eq!(upper, to_hex_upper(&BYTES));
    }

    #[test]
    fn zero_bytes() {
        assert_eq!(to_hex(&[0u8; 32]), "0".repeat(64));
    }
}
