#![no_main]

use libfuzzer_sys::fuzz_target;
use schnorr_nizk::{GroupEngine, Integer, Ristretto255, Statement};

fuzz_target!(|data: &[u8]| {
    let group = Ristretto255::new();

    if let Ok(s) = std::str::from_utf8(data) {
        let _ = Statement::from_integer(&group, s);
        let _ = Integer::parse_decimal(s);
    }

    if data.len() >= 32 {
        let value = num_bigint::BigUint::from_bytes_le(&data[..32]);
        if let Some(element) = group.element_from_integer(&value) {
            assert_eq!(group.element_to_integer(&element), value);
        }
    }
});
