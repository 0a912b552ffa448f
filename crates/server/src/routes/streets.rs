use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use service::street::domain::{StreetInput, StreetOutput};

use crate::{errors::ApiError, extract::JsonOrForm, state::ServerState};

/// A city id that is not an integer cannot name a city.
fn city_id(raw: &str) -> Result<i32, ApiError> {
    raw.parse().map_err(|_| ApiError::NotFound(format!("city `{raw}`")))
}

#[utoipa::path(
    get, path = "/city/{city_id}/street/", tag = "street",
    params(("city_id" = i32, Path, description = "City id")),
    responses(
        (status = 200, description = "Streets of the city", body = [crate::openapi::StreetDoc]),
        (status = 404, description = "Unknown city", body = crate::openapi::DetailDoc)
    )
)]
pub async fn list(
    State(state): State<ServerState>,
    Path(raw): Path<String>,
) -> Result<Json<Vec<StreetOutput>>, ApiError> {
    let id = city_id(&raw)?;
    let streets = state.streets.list(id).await?;
    info!(city_id = id, count = streets.len(), "list streets");
    Ok(Json(streets))
}

#[utoipa::path(
    post, path = "/city/{city_id}/street/", tag = "street",
    params(("city_id" = i32, Path, description = "City id")),
    request_body = crate::openapi::StreetInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::StreetDoc),
        (status = 400, description = "Field errors"),
        (status = 404, description = "Unknown city", body = crate::openapi::DetailDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Path(raw): Path<String>,
    JsonOrForm(input): JsonOrForm<StreetInput>,
) -> Result<(StatusCode, Json<StreetOutput>), ApiError> {
    let id = city_id(&raw)?;
    let street = state.streets.create(id, input).await?;
    Ok((StatusCode::CREATED, Json(street)))
}
