//! Error envelope shared by every failing response.

use std::fmt::{Display, Formatter, Result as FmtResult};

use salvo::{
    catcher::Catcher,
    http::ResBody,
    oapi::{self, Components, EndpointOutRegister, Operation, ToSchema},
    prelude::*,
    writing::Scribe,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred";

/// Machine-readable error category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) enum ErrorKind {
    /// The request body or a parameter was malformed or violated a product invariant.
    ValidationError,

    /// No product has the requested identifier, or no route matched.
    NotFound,

    /// The route exists but does not accept the request method.
    MethodNotAllowed,

    /// The request body was not `application/json`.
    MediaTypeError,

    /// Any other client error.
    RequestError,

    /// An unexpected failure. Details are logged, never returned.
    InternalServerError,
}

impl ErrorKind {
    fn for_status(status: StatusCode) -> Self {
        match status {
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => Self::ValidationError,
            StatusCode::NOT_FOUND => Self::NotFound,
            StatusCode::METHOD_NOT_ALLOWED => Self::MethodNotAllowed,
            StatusCode::UNSUPPORTED_MEDIA_TYPE => Self::MediaTypeError,
            status if status.is_client_error() => Self::RequestError,
            _ => Self::InternalServerError,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::ValidationError => "ValidationError",
            Self::NotFound => "NotFound",
            Self::MethodNotAllowed => "MethodNotAllowed",
            Self::MediaTypeError => "MediaTypeError",
            Self::RequestError => "RequestError",
            Self::InternalServerError => "InternalServerError",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorResponse {
    /// HTTP status code, repeated from the status line
    pub status: u16,

    /// Error category
    pub error: ErrorKind,

    /// Human-readable explanation
    pub message: String,
}

/// A failed request, rendered as an [`ErrorResponse`].
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub(crate) struct ApiError {
    status: StatusCode,
    kind: ErrorKind,
    message: String,
}

impl ApiError {
    /// Build an error for `status`, using `message` or the status reason when it is blank.
    ///
    /// Server errors always carry the generic message.
    pub(crate) fn from_status(status: StatusCode, message: impl Into<String>) -> Self {
        let kind = ErrorKind::for_status(status);

        let message = match message.into() {
            _ if kind == ErrorKind::InternalServerError => INTERNAL_ERROR_MESSAGE.to_string(),
            message if message.trim().is_empty() => status
                .canonical_reason()
                .unwrap_or(INTERNAL_ERROR_MESSAGE)
                .to_string(),
            message => message,
        };

        Self {
            status,
            kind,
            message,
        }
    }

    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::from_status(StatusCode::BAD_REQUEST, message)
    }

    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        Self::from_status(StatusCode::NOT_FOUND, message)
    }

    pub(crate) fn unsupported_media_type(message: impl Into<String>) -> Self {
        Self::from_status(StatusCode::UNSUPPORTED_MEDIA_TYPE, message)
    }

    pub(crate) fn internal() -> Self {
        Self::from_status(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
    }

    #[cfg(test)]
    pub(crate) fn status(&self) -> StatusCode {
        self.status
    }

    #[cfg(test)]
    pub(crate) fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl From<ApiError> for ErrorResponse {
    fn from(error: ApiError) -> Self {
        Self {
            status: error.status.as_u16(),
            error: error.kind,
            message: error.message,
        }
    }
}

impl Scribe for ApiError {
    fn render(self, res: &mut Response) {
        res.status_code(self.status);
        res.render(Json(ErrorResponse::from(self)));
    }
}

impl EndpointOutRegister for ApiError {
    fn register(components: &mut Components, operation: &mut Operation) {
        for status in [
            StatusCode::BAD_REQUEST,
            StatusCode::NOT_FOUND,
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            StatusCode::INTERNAL_SERVER_ERROR,
        ] {
            operation.responses.insert(
                status.as_str(),
                oapi::Response::new(status.canonical_reason().unwrap_or_default())
                    .add_content("application/json", ErrorResponse::to_schema(components)),
            );
        }
    }
}

/// Rewrites framework-generated failures (unmatched routes, rejected extractors, panics)
/// into the shared envelope. Responses that already carry a body are left untouched.
#[handler]
async fn render_envelope(res: &mut Response, ctrl: &mut FlowCtrl) {
    let brief = match &res.body {
        ResBody::None => String::new(),
        ResBody::Error(error) => error.brief.clone(),
        _ => return,
    };

    let status = res.status_code.unwrap_or(StatusCode::NOT_FOUND);

    res.body = ResBody::None;

    ApiError::from_status(status, brief).render(res);

    ctrl.skip_rest();
}

/// Catcher installed on every service.
pub(crate) fn catcher() -> Catcher {
    Catcher::default().hoop(render_envelope)
}
