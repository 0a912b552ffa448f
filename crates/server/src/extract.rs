//! Request body extractor accepting JSON or url-encoded forms.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use serde::de::DeserializeOwned;

use crate::errors::ApiError;

/// Body decoded from `application/x-www-form-urlencoded` when the request
/// says so, from JSON otherwise.
#[derive(Debug, Clone)]
pub struct JsonOrForm<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map_or(false, |ct| ct.starts_with("application/x-www-form-urlencoded"));
        if is_form {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|r| ApiError::Rejected(r.status(), r.body_text()))?;
            Ok(Self(value))
        } else {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|r| ApiError::Rejected(r.status(), r.body_text()))?;
            Ok(Self(value))
        }
    }
}
