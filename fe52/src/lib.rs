#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

//! Encoding of 256-bit field elements stored as five 52-bit limbs.
//!
//! secp256k1 field arithmetic keeps elements in a radix-2^52 form so that
//! products of two limbs fit in a `u128` with room to spare. Serializing such
//! an element means reassembling the 52-bit limbs into 8-bit bytes, which is
//! what this crate does:
//!
//! ```
//! use fe52::FieldElement5x52;
//!
//! let fe = FieldElement5x52::from_limbs([1, 0, 0, 0, 0]);
//! let bytes = fe.to_bytes();
//! assert_eq!(bytes[31], 1);
//! assert!(bytes[..31].iter().all(|&b| b == 0));
//! ```
//!
//! Elements are expected to be *normalized*: limbs 0 to 3 below 2^52 and
//! limb 4 below 2^48. The encoder does not reduce or carry, and bits of the
//! top limb at or above position 48 are dropped.
//! [`FieldElement5x52::from_limbs_checked`] verifies the limb budget for
//! callers who need it.
//!
//! ## Text input
//!
//! The [`debug_repr`] module parses the `Debug` rendering of an element,
//! e.g. `FieldElement5x52([1, 0, 0, 0, 0])`, which is handy for replaying
//! values captured from logs.
//!
//! ## `serde` support
//!
//! When the `serde` feature of this crate is enabled, `Serialize` is impl'd
//! for [`FieldElement5x52`]. There is no `Deserialize`, as the crate only
//! encodes.

#[cfg(feature = "alloc")]
#[allow(unused_extern_crates)]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod debug_repr;
mod error;
mod field_element;
pub mod hex;

pub use crate::{
    error::{ParseError, Result},
    field_element::{FieldElement5x52, pack},
};
pub use subtle;

#[cfg(feature = "zeroize")]
pub use zeroize;

/// Size of an encoded field element in bytes.
pub const FIELD_BYTES_SIZE: usize = 32;

/// Big-endian encoding of a field element.
pub type FieldBytes = [u8; FIELD_BYTES_SIZE];

/// Parse the `Debug` rendering of a field element and return the lowercase
/// hex encoding of its bytes.
///
/// ```
/// let hex = fe52::encode_hex("FieldElement5x52([1, 0, 0, 0, 0])")?;
/// assert!(hex.ends_with("0001"));
/// # Ok::<(), fe52::ParseError>(())
/// ```
#[cfg(feature = "alloc")]
pub fn encode_hex(text: &str) -> Result<alloc::string::String> {
    let limbs = debug_repr::parse(text)?;
    Ok(hex::to_hex(&pack(&limbs)))
}
