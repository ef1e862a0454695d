//! Error types.

use core::fmt;

/// Errors produced when reading limbs from text.
///
/// Encoding itself never fails; see [`crate::pack`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ParseError {
    /// Input is not a five-element bracketed list of unsigned decimal
    /// integers wrapped in the element type name.
    MalformedInput,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MalformedInput => f.write_str("malformed field element limbs"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Result type.
pub type Result<T> = core::result::Result<T, ParseError>;
