#![no_main]
use fe52::{FieldElement5x52, debug_repr};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };

    // `Debug` output of anything accepted must read back to the same limbs
    if let Ok(limbs) = debug_repr::parse(text) {
        let fe = FieldElement5x52::from_limbs(limbs);
        assert_eq!(debug_repr::parse(&format!("{fe:?}")), Ok(limbs));
        assert_eq!(fe52::encode_hex(text).unwrap(), fe.to_hex());
    }
});
