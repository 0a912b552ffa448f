use utoipa::{IntoParams, OpenApi, ToSchema};

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct DetailDoc { pub detail: String }

#[derive(ToSchema)]
pub struct CityDoc { pub id: i32, pub name: String }

#[derive(ToSchema)]
pub struct CityInputDoc { pub name: String }

#[derive(ToSchema)]
pub struct StreetDoc { pub id: i32, pub name: String }

#[derive(ToSchema)]
pub struct StreetInputDoc {
    pub name: String,
    /// Must be the id in the path when given.
    pub city: Option<i32>,
}

#[derive(ToSchema)]
pub struct ShopDoc {
    pub id: i32,
    pub name: String,
    pub city_name: String,
    pub street_name: String,
    pub house_numbers: String,
    #[schema(example = "08:00:00")]
    pub opening_time: String,
    #[schema(example = "20:00:00")]
    pub closing_time: String,
    pub is_opened: bool,
}

#[derive(ToSchema)]
pub struct ShopInputDoc {
    pub name: String,
    /// City name.
    pub city: String,
    /// Street name within `city`.
    pub street: String,
    pub house_numbers: String,
    #[schema(example = "08:00")]
    pub opening_time: String,
    #[schema(example = "20:00")]
    pub closing_time: String,
}

/// Shop listing filters. Any other parameter is answered with 404.
#[derive(IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ShopListParams {
    /// Exact city name.
    pub city: Option<String>,
    /// Exact street name.
    pub street: Option<String>,
    /// `1` for open now, `0` for closed now.
    pub opened: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::root::index,
        crate::routes::cities::list,
        crate::routes::cities::create,
        crate::routes::streets::list,
        crate::routes::streets::create,
        crate::routes::shops::list,
        crate::routes::shops::create,
    ),
    components(
        schemas(
            HealthResponse,
            DetailDoc,
            CityDoc,
            CityInputDoc,
            StreetDoc,
            StreetInputDoc,
            ShopDoc,
            ShopInputDoc,
            crate::routes::root::ApiRoot,
        )
    ),
    tags(
        (name = "health"),
        (name = "directory"),
        (name = "city"),
        (name = "street"),
        (name = "shop")
    )
)]
pub struct ApiDoc;
