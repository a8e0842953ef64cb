use crate::pages::{HOME_PAGE, NOT_FOUND_PAGE};
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::http::{Method, StatusCode, Uri};
use axum::response::{Html, IntoResponse};
use axum::Json;
use bodyguard_core::verdict::reason_codes;
use bodyguard_core::{inspect_body, Inspection, ResponseBody, Verdict};

pub async fn home() -> Html<&'static str> {
    Html(HOME_PAGE)
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html(NOT_FOUND_PAGE))
}

/// Inspect the request body and answer 200 or 403.
///
/// A body that cannot be read (too large, aborted stream) is treated like an
/// undecodable one and accepted.
pub async fn handle_request(
    method: Method,
    uri: Uri,
    body: Result<Bytes, BytesRejection>,
) -> (StatusCode, Json<ResponseBody>) {
    let inspection = match &body {
        Ok(bytes) => inspect_body(Some(&bytes[..])),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "body not readable, accepting");
            Inspection {
                verdict: Verdict::Accept,
                reason_code: reason_codes::A_UNDECODABLE,
            }
        }
    };

    if inspection.verdict.is_reject() {
        tracing::warn!(
            method = %method,
            path = uri.path(),
            reason_code = inspection.reason_code,
            "request rejected"
        );
    } else {
        tracing::info!(
            method = %method,
            path = uri.path(),
            reason_code = inspection.reason_code,
            "request accepted"
        );
    }

    respond(inspection.verdict)
}

fn respond(verdict: Verdict) -> (StatusCode, Json<ResponseBody>) {
    let status = match verdict {
        Verdict::Accept => StatusCode::OK,
        Verdict::Reject => StatusCode::FORBIDDEN,
    };
    (status, Json(ResponseBody::for_verdict(verdict)))
}
