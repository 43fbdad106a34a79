#![no_main]

use libfuzzer_sys::fuzz_target;
use schnorr_nizk::{rfc5114, Proof, Verifier};

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(proof) = Proof::from_json(json) {
        let verifier = Verifier::new(rfc5114());
        let _ = verifier.verify("2", &proof);
    }
});
