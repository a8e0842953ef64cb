//! Accept/reject decision over a decoded request body.
//!
//! A body is rejected iff some terminal pair has the exact key
//! [`MALICIOUS_KEY`] and the JSON boolean `true` as its value. Anything that
//! cannot be decoded is accepted (fail open).

use crate::body::{decode_body, dispose};
use crate::errors::DecodeError;
use crate::scan::{pairs, AssocKey, Pair};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Key whose boolean `true` value marks a request as malicious.
pub const MALICIOUS_KEY: &str = "is_malicious";

/// Reason codes attached to every inspection.
pub mod reason_codes {
    // Accepts (A_*)
    pub const A_CLEAN: &str = "A_CLEAN";
    pub const A_EMPTY_BODY: &str = "A_EMPTY_BODY";
    pub const A_UNDECODABLE: &str = "A_UNDECODABLE";

    // Rejects (R_*)
    pub const R_MALICIOUS_FLAG: &str = "R_MALICIOUS_FLAG";
}

/// Binary outcome of an inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Accept,
    Reject,
}

impl Verdict {
    /// HTTP status the verdict maps to.
    pub fn status_code(self) -> u16 {
        match self {
            Self::Accept => 200,
            Self::Reject => 403,
        }
    }

    pub fn is_reject(self) -> bool {
        matches!(self, Self::Reject)
    }
}

/// A verdict plus the reason it was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Inspection {
    pub verdict: Verdict,
    pub reason_code: &'static str,
}

impl Inspection {
    fn accept(reason_code: &'static str) -> Self {
        Self {
            verdict: Verdict::Accept,
            reason_code,
        }
    }

    fn reject(reason_code: &'static str) -> Self {
        Self {
            verdict: Verdict::Reject,
            reason_code,
        }
    }
}

/// True for `("is_malicious", true)`, false for every other pair.
///
/// Only a boolean `true` counts: `"true"`, `1` and containers do not. The
/// [`AssocKey::Root`] sentinel and array indices never match.
pub fn is_malicious_pair(pair: &Pair<'_>) -> bool {
    matches!(pair, (AssocKey::Key(MALICIOUS_KEY), Value::Bool(true)))
}

/// Scan `value` and stop at the first malicious pair.
pub fn evaluate(value: &Value) -> Verdict {
    inspect_value(value).verdict
}

pub fn inspect_value(value: &Value) -> Inspection {
    match pairs(value).find(is_malicious_pair) {
        Some((key, _)) => {
            tracing::trace!(key = %key, "malicious flag found");
            Inspection::reject(reason_codes::R_MALICIOUS_FLAG)
        }
        None => Inspection::accept(reason_codes::A_CLEAN),
    }
}

/// Inspect a raw body.
///
/// `None` means the request carried no body at all. Missing, empty and
/// undecodable bodies are all accepted; the reason code says which.
pub fn inspect_body(body: Option<&[u8]>) -> Inspection {
    let Some(bytes) = body else {
        return Inspection::accept(reason_codes::A_EMPTY_BODY);
    };

    match decode_body(bytes) {
        Ok(value) => {
            let inspection = inspect_value(&value);
            dispose(value);
            inspection
        }
        Err(err) => fail_open(&err),
    }
}

/// Verdict-only form of [`inspect_body`].
pub fn evaluate_body(body: Option<&[u8]>) -> Verdict {
    inspect_body(body).verdict
}

fn fail_open(err: &DecodeError) -> Inspection {
    tracing::debug!(reason_code = err.reason_code(), error = %err, "body not decodable, accepting");
    Inspection::accept(err.reason_code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flag_true_rejects() {
        assert_eq!(evaluate(&json!({"is_malicious": true})), Verdict::Reject);
    }

    #[test]
    fn flag_false_accepts() {
        assert_eq!(evaluate(&json!({"is_malicious": false})), Verdict::Accept);
        assert_eq!(evaluate(&json!({"data": null})), Verdict::Accept);
    }

    #[test]
    fn truthy_non_booleans_do_not_match() {
        for v in [
            json!({"is_malicious": "true"}),
            json!({"is_malicious": 1}),
            json!({"is_malicious": 1.0}),
            json!({"is_malicious": "1 == 1"}),
            json!({"is_malicious": {}}),
            json!({"is_malicious": []}),
            json!({"is_malicious": [true]}),
            json!({"is_malicious": {"nested": true}}),
        ] {
            assert_eq!(evaluate(&v), Verdict::Accept, "{}", v);
        }
    }

    #[test]
    fn key_match_is_exact_and_case_sensitive() {
        for v in [
            json!({"Is_Malicious": true}),
            json!({"IS_MALICIOUS": true}),
            json!({"is_malicious_": true}),
            json!({"not_is_malicious": true}),
            json!({" is_malicious": true}),
            json!({"flag": "is_malicious"}),
            json!(["is_malicious", true]),
        ] {
            assert_eq!(evaluate(&v), Verdict::Accept, "{}", v);
        }
    }

    #[test]
    fn bare_true_document_is_not_malicious() {
        assert_eq!(evaluate(&json!(true)), Verdict::Accept);
        assert!(!is_malicious_pair(&(AssocKey::Root, &json!(true))));
    }

    #[test]
    fn array_elements_match_independently() {
        let v = json!({"is_malicious": [true, {"is_malicious": true}]});
        assert_eq!(evaluate(&v), Verdict::Reject);
    }

    #[test]
    fn inspection_carries_reason_codes() {
        assert_eq!(
            inspect_value(&json!({"a": {"is_malicious": true}})),
            Inspection {
                verdict: Verdict::Reject,
                reason_code: reason_codes::R_MALICIOUS_FLAG
            }
        );
        assert_eq!(
            inspect_value(&json!({})).reason_code,
            reason_codes::A_CLEAN
        );
    }

    #[test]
    fn missing_and_empty_bodies_fail_open() {
        assert_eq!(inspect_body(None).reason_code, reason_codes::A_EMPTY_BODY);
        assert_eq!(
            inspect_body(Some(b"")).reason_code,
            reason_codes::A_EMPTY_BODY
        );
        assert_eq!(
            inspect_body(Some(b"\n  ")).reason_code,
            reason_codes::A_EMPTY_BODY
        );
        assert_eq!(evaluate_body(None), Verdict::Accept);
    }

    #[test]
    fn undecodable_bodies_fail_open() {
        for body in [
            &b"{\"is_malicious\": true"[..],
            b"is_malicious=true",
            b"{'is_malicious': True}",
            b"\xff\xfe",
        ] {
            let inspection = inspect_body(Some(body));
            assert_eq!(inspection.verdict, Verdict::Accept);
            assert_eq!(inspection.reason_code, reason_codes::A_UNDECODABLE);
        }
    }

    #[test]
    fn flag_nested_past_128_levels_rejects() {
        for depth in [127, 128, 129, 200, 500, 5_000] {
            let body = format!(
                "{}{{\"is_malicious\": true}}{}",
                "[".repeat(depth),
                "]".repeat(depth)
            );
            let inspection = inspect_body(Some(body.as_bytes()));
            assert_eq!(inspection.verdict, Verdict::Reject, "depth {}", depth);
            assert_eq!(inspection.reason_code, reason_codes::R_MALICIOUS_FLAG);
        }
    }

    #[test]
    fn decoded_body_is_scanned() {
        assert_eq!(
            evaluate_body(Some(br#"{"hidden": {"is_malicious": true}}"#)),
            Verdict::Reject
        );
    }

    #[test]
    fn status_codes() {
        assert_eq!(Verdict::Accept.status_code(), 200);
        assert_eq!(Verdict::Reject.status_code(), 403);
        assert!(Verdict::Reject.is_reject());
    }

    #[test]
    fn verdict_serializes_snake_case() {
        assert_eq!(serde_json::to_value(Verdict::Reject).unwrap(), json!("reject"));
        assert_eq!(
            serde_json::to_value(Inspection::accept(reason_codes::A_CLEAN)).unwrap(),
            json!({"verdict": "accept", "reason_code": "A_CLEAN"})
        );
    }
}
