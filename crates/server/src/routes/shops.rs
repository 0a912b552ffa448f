use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use service::shop::{domain::{ShopInput, ShopOutput}, ShopFilter};

use crate::{errors::ApiError, extract::JsonOrForm, state::ServerState};

#[utoipa::path(
    get, path = "/shop/", tag = "shop",
    params(crate::openapi::ShopListParams),
    responses(
        (status = 200, description = "Matching shops in creation order", body = [crate::openapi::ShopDoc]),
        (status = 404, description = "Unknown parameter, bad `opened` or unknown city", body = crate::openapi::DetailDoc)
    )
)]
pub async fn list(
    State(state): State<ServerState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<ShopOutput>>, ApiError> {
    let filter = ShopFilter::from_pairs(pairs)?;
    let now = state.clock.time_of_day();
    let shops = state.shops.list(&filter, now).await?;
    info!(count = shops.len(), %now, "list shops");
    Ok(Json(shops))
}

#[utoipa::path(
    post, path = "/shop/", tag = "shop",
    request_body = crate::openapi::ShopInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ShopDoc),
        (status = 400, description = "Field errors")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    JsonOrForm(input): JsonOrForm<ShopInput>,
) -> Result<(StatusCode, Json<ShopOutput>), ApiError> {
    let now = state.clock.time_of_day();
    let shop = state.shops.create(input, now).await?;
    Ok((StatusCode::CREATED, Json(shop)))
}
