//! Body extractor accepting either JSON or URL-encoded forms.

use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use serde::de::DeserializeOwned;

use super::error::ErrorResponse;

/// Deserializes the body as a form when the request says so, JSON otherwise.
#[derive(Debug, Clone)]
pub struct JsonOrForm<T>(pub T);

/// An unreadable request body. Rendered as 400 `VALIDATION_FAILED`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyRejection(pub String);

impl From<JsonRejection> for BodyRejection {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => Self(
                "Request body must be application/json or application/x-www-form-urlencoded"
                    .to_string(),
            ),
            other => Self(format!("Invalid request body: {}", other.body_text())),
        }
    }
}

impl From<FormRejection> for BodyRejection {
    fn from(rejection: FormRejection) -> Self {
        Self(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl IntoResponse for BodyRejection {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("VALIDATION_FAILED", self.0)),
        )
            .into_response()
    }
}

#[axum::async_trait]
impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + 'static,
{
    type Rejection = BodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|ct| ct.starts_with("application/x-www-form-urlencoded"))
            .unwrap_or(false);

        if is_form {
            let Form(value) = Form::<T>::from_request(req, state).await?;
            Ok(Self(value))
        } else {
            let Json(value) = Json::<T>::from_request(req, state).await?;
            Ok(Self(value))
        }
    }
}
