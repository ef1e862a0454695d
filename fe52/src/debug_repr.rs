//! Reading limbs back from the `Debug` rendering of [`FieldElement5x52`].
//!
//! Only one shape is accepted, the one `#[derive(Debug)]` produces:
//!
//! ```text
//! FieldElement5x52([d0, d1, d2, d3, d4])
//! ```
//!
//! where each `di` is an unsigned decimal literal that fits in a `u64` and the
//! separator is exactly `", "`. This is a fixture format for replaying values
//! copied out of logs, not a general deserializer.

use crate::{FieldElement5x52, ParseError, Result};
use core::str::FromStr;

/// Text preceding the limb list.
pub const PREFIX: &str = "FieldElement5x52([";

/// Text following the limb list.
pub const SUFFIX: &str = "])";

/// Separator between limbs.
pub const SEPARATOR: &str = ", ";

/// Parses `FieldElement5x52([d0, d1, d2, d3, d4])` into its five limbs,
/// least significant first.
///
/// ```
/// let limbs = fe52::debug_repr::parse("FieldElement5x52([1, 2, 3, 4, 5])")?;
/// assert_eq!(limbs, [1, 2, 3, 4, 5]);
/// # Ok::<(), fe52::ParseError>(())
/// ```
pub fn parse(text: &str) -> Result<[u64; 5]> {
    let inner = text
        .strip_prefix(PREFIX)
        .and_then(|rest| rest.strip_suffix(SUFFIX))
        .ok_or(ParseError::MalformedInput)?;

    let mut limbs = [0u64; 5];
    let mut tokens = inner.split(SEPARATOR);

    for limb in limbs.iter_mut() {
        *limb = parse_limb(tokens.next().ok_or(ParseError::MalformedInput)?)?;
    }

    if tokens.next().is_some() {
        return Err(ParseError::MalformedInput);
    }

    Ok(limbs)
}

/// `u64::from_str` also takes a leading `+`, which is not a limb literal.
fn parse_limb(token: &str) -> Result<u64> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::MalformedInput);
    }

    token.parse().map_err(|_| ParseError::MalformedInput)
}

impl FromStr for FieldElement5x52 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        parse(s).map(Self::from_limbs)
    }
}

#[cfg(test)]
mod tests {
    use super::parse;
    use crate::{FieldElement5x52, ParseError};

    #[test]
    fn five_limbs() {
        assert_eq!(
            parse("FieldElement5x52([1293581911306459, 534340368401923, 2629461762533819, 1417293729163992, 179486335370645])"),
            Ok([
                1293581911306459,
                534340368401923,
                2629461762533819,
                1417293729163992,
                179486335370645
            ])
        );
        assert_eq!(parse("FieldElement5x52([0, 0, 0, 0, 0])"), Ok([0; 5]));
        assert_eq!(parse("FieldElement5x52([007, 0, 0, 0, 00])"), Ok([7, 0, 0, 0, 0]));
    }

    #[test]
    fn wide_limbs_are_accepted() {
        let max = "FieldElement5x52([18446744073709551615, 0, 0, 0, 18446744073709551615])";
        assert_eq!(parse(max), Ok([u64::MAX, 0, 0, 0, u64::MAX]));
    }

    #[test]
    fn wrong_limb_count() {
        for text in [
            "FieldElement5x52([])",
            "FieldElement5x52([1, 2, 3, 4])",
            "FieldElement5x52([1, 2, 3, 4, 5, 6])",
        ] {
            assert_eq!(parse(text), Err(ParseError::MalformedInput), "{text}");
        }
    }

    #[test]
    fn bad_tokens() {
        for text in [
            "FieldElement5x52([1, 2, x, 4, 5])",
            "FieldElement5x52([1, 2, -3, 4, 5])",
            "FieldElement5x52([1, 2, +3, 4, 5])",
            "FieldElement5x52([1, 2, 3 , 4, 5])",
            "FieldElement5x52([1, 2, , 4, 5])",
            "FieldElement5x52([1,2, 3, 4, 5])",
            "FieldElement5x52([1, 2, 0x3, 4, 5])",
            "FieldElement5x52([1, 2, 18446744073709551616, 4, 5])",
        ] {
            assert_eq!(parse(text), Err(ParseError::MalformedInput), "{text}");
        }
    }

    #[test]
    fn bad_wrapper() {
        for text in [
            "",
            "[1, 2, 3, 4, 5]",
            "FieldElement([1, 2, 3, 4, 5])",
            "FieldElement5x52([1, 2, 3, 4, 5]",
            "FieldElement5x52([1, 2, 3, 4, 5]) ",
            " FieldElement5x52([1, 2, 3, 4, 5])",
            "FieldElement5x52(1, 2, 3, 4, 5)",
        ] {
            assert_eq!(parse(text), Err(ParseError::MalformedInput), "{text:?}");
        }
    }

    #[test]
    fn from_str() {
        let fe: FieldElement5x52 = "FieldElement5x52([1, 0, 0, 0, 0])".parse().unwrap();
        assert_eq!(fe, FieldElement5x52::ONE);
        assert!("FieldElement5x52([1, 0, 0, 0])".parse::<FieldElement5x52>().is_err());
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn debug_output_parses_back() {
        let fe = FieldElement5x52::from_limbs([u64::MAX, 1 << 52, 42, 0, 7]);
        let text = alloc::format!("{fe:?}");
        assert_eq!(text.parse::<FieldElement5x52>(), Ok(fe));
    }
}
