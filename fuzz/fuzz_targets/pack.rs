#![no_main]
use fe52::{FieldElement5x52, pack};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|limbs: [u64; 5]| {
    let bytes = pack(&limbs);

    // Bits above the normalized budget never reach the encoding
    let masked = [
        limbs[0] & ((1 << 52) - 1),
        limbs[1] & ((1 << 52) - 1),
        limbs[2] & ((1 << 52) - 1),
        limbs[3] & ((1 << 52) - 1),
        limbs[4] & ((1 << 48) - 1),
    ];
    assert_eq!(pack(&masked), bytes);
    assert!(bool::from(FieldElement5x52::from_limbs(masked).is_normalized()));

    let hex = FieldElement5x52::from_limbs(limbs).to_hex();
    assert_eq!(hex.len(), 64);
    assert_eq!(hex, fe52::hex::to_hex(&bytes));
});
