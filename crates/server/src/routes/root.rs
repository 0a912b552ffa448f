use axum::{extract::Host, Json};
use serde::Serialize;

/// Links to the collection endpoints, absolute against the request host.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ApiRoot {
    pub city: String,
    pub shop: String,
}

impl ApiRoot {
    pub fn for_host(host: &str) -> Self {
        Self {
            city: format!("http://{host}/city/"),
            shop: format!("http://{host}/shop/"),
        }
    }
}

#[utoipa::path(
    get, path = "/", tag = "directory",
    responses((status = 200, description = "Collection links", body = ApiRoot))
)]
pub async fn index(Host(host): Host) -> Json<ApiRoot> {
    Json(ApiRoot::for_host(&host))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_use_host() {
        let root = ApiRoot::for_host("testserver");
        assert_eq!(root.city, "http://testserver/city/");
        assert_eq!(root.shop, "http://testserver/shop/");
    }
}
