use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use service::city::domain::{CityInput, CityOutput};

use crate::{errors::ApiError, extract::JsonOrForm, state::ServerState};

#[utoipa::path(
    get, path = "/city/", tag = "city",
    responses(
        (status = 200, description = "All cities in creation order", body = [crate::openapi::CityDoc]),
        (status = 500, description = "Database error")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<CityOutput>>, ApiError> {
    let cities = state.cities.list().await?;
    info!(count = cities.len(), "list cities");
    Ok(Json(cities))
}

#[utoipa::path(
    post, path = "/city/", tag = "city",
    request_body = crate::openapi::CityInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::CityDoc),
        (status = 400, description = "Field errors")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    JsonOrForm(input): JsonOrForm<CityInput>,
) -> Result<(StatusCode, Json<CityOutput>), ApiError> {
    let city = state.cities.create(input).await?;
    Ok((StatusCode::CREATED, Json(city)))
}
