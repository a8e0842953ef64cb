//! Core of the Bodyguard request inspector.
//!
//! A decoded JSON body is walked depth-first ([`scan::pairs`]) and rejected
//! when any terminal pair is `"is_malicious": true` ([`verdict::evaluate`]).
//! Bodies that cannot be decoded fail open ([`verdict::inspect_body`]).

pub mod body;
pub mod errors;
pub mod response;
pub mod scan;
pub mod verdict;

// Convenience re-exports
pub use body::{decode_body, dispose};
pub use errors::DecodeError;
pub use response::ResponseBody;
pub use scan::{pairs, AssocKey, Pair, Pairs};
pub use verdict::{
    evaluate, evaluate_body, inspect_body, inspect_value, reason_codes, Inspection, Verdict,
    MALICIOUS_KEY,
};

// Re-export the value model so callers never need a second serde_json import.
pub use serde_json::Value;
