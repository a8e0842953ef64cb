#![no_main]

use bodyguard_core::verdict::is_malicious_pair;
use bodyguard_core::{decode_body, dispose, evaluate, inspect_body, pairs, Verdict};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let inspection = inspect_body(Some(data));

    // Undecodable input must fail open; decodable input must agree with the value-level verdict.
    match decode_body(data) {
        Ok(value) => {
            let verdict = evaluate(&value);
            assert_eq!(inspection.verdict, verdict);
            assert_eq!(
                verdict == Verdict::Reject,
                pairs(&value).any(|pair| is_malicious_pair(&pair))
            );
            dispose(value);
        }
        Err(_) => assert_eq!(inspection.verdict, Verdict::Accept),
    }
});
