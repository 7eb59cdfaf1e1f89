//! Request extractors.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use estate_core::error::CoreError;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::error::AppError;

/// JSON body that is deserialized and then checked with [`Validate`].
///
/// Malformed JSON, missing fields and wrong content types become
/// `400 BAD_REQUEST`; rule failures become `400 VALIDATION_ERROR`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        value
            .validate()
            .map_err(|errors| AppError::Core(CoreError::Validation(describe(&errors))))?;
        Ok(Self(value))
    }
}

/// Path parameters whose rejection renders as an [`AppError`] body.
///
/// A non-numeric id becomes `400 BAD_REQUEST` with the usual
/// `{ "error", "code" }` shape instead of axum's plain-text rejection.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathParam<T>(pub T);

impl<T, S> FromRequestParts<S> for PathParam<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// Flatten validator output into `field: message` pairs.
fn describe(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match (&e.message, &**field) {
                // Struct-level check.
                (Some(msg), "__all__") => msg.to_string(),
                (Some(msg), _) => format!("{field}: {msg}"),
                (None, _) => format!("{field}: failed '{}' check", e.code),
            })
        })
        .collect();
    parts.sort();
    if parts.is_empty() {
        errors.to_string()
    } else {
        parts.join("; ")
    }
}
