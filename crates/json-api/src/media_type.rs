//! Content-type guard for request bodies.

use salvo::{
    http::{Method, header::CONTENT_TYPE},
    prelude::*,
    writing::Scribe,
};

use crate::errors::ApiError;

/// Whether a `Content-Type` header value names JSON, ignoring parameters such as `charset`.
pub(crate) fn is_json_media_type(value: &str) -> bool {
    let essence = value.split(';').next().unwrap_or_default().trim();

    essence.eq_ignore_ascii_case("application/json")
        || essence
            .rsplit_once('+')
            .is_some_and(|(kind, suffix)| {
                kind.to_ascii_lowercase().starts_with("application/")
                    && suffix.eq_ignore_ascii_case("json")
            })
}

fn carries_body(method: &Method) -> bool {
    matches!(*method, Method::POST | Method::PUT | Method::PATCH)
}

/// Reject body-carrying requests whose content type is not JSON.
#[handler]
pub(crate) async fn require_json(req: &mut Request, res: &mut Response, ctrl: &mut FlowCtrl) {
    if !carries_body(req.method()) {
        return;
    }

    let content_type = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());

    if content_type.is_some_and(is_json_media_type) {
        return;
    }

    tracing::debug!(?content_type, "rejected request body media type");

    ApiError::unsupported_media_type(format!(
        "unsupported media type {}, expected application/json",
        content_type.unwrap_or("(none)")
    ))
    .render(res);

    ctrl.skip_rest();
}
