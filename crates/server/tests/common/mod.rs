#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chrono::NaiveTime;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::ServiceExt;

use models::{city, shop, street};
use service::clock::FixedClock;

pub const HOST: &str = "testserver";
pub const CITY_NAMES: [&str; 3] = ["Moscow", "Saint Petersburg", "Rostov-on-Don"];
pub const STREET_NAMES: [&str; 3] = ["Prospekt Stachki", "Ulitsa Borko", "Prospekt Lenina"];
pub const SHOP_NAMES: [&str; 3] = ["Opened 1", "Opened 2", "Closed"];

pub struct TestApp {
    pub router: Router,
    pub db: DatabaseConnection,
}

/// Empty directory whose clock is stopped at `hour:00`.
pub async fn app_at(hour: u32) -> anyhow::Result<TestApp> {
    let db = models::db::connect_in_memory().await?;
    let router = server::build_app(db.clone(), Arc::new(FixedClock::at_hour(hour)));
    Ok(TestApp { router, db })
}

/// 3 cities × 3 streets × 3 shops, all opening at 08:00. "Closed" closes
/// at 12:00, the others at 20:00.
pub async fn seeded_app_at(hour: u32) -> anyhow::Result<TestApp> {
    let app = app_at(hour).await?;
    let opening = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
    for city_name in CITY_NAMES {
        let c = city::create(&app.db, city_name).await?;
        for street_name in STREET_NAMES {
            let s = street::create(&app.db, c.id, street_name).await?;
            for shop_name in SHOP_NAMES {
                let closing_hour = if shop_name == "Closed" { 12 } else { 20 };
                shop::create(&app.db, &shop::NewShop {
                    name: shop_name.into(),
                    city_id: c.id,
                    street_id: s.id,
                    house_numbers: "1".into(),
                    opening_time: opening,
                    closing_time: NaiveTime::from_hms_opt(closing_hour, 0, 0).unwrap(),
                })
                .await?;
            }
        }
    }
    Ok(app)
}

impl TestApp {
    pub async fn send(&self, req: Request<Body>) -> anyhow::Result<(StatusCode, Value)> {
        let resp = self.router.clone().oneshot(req).await?;
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await?;
        let body = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
        Ok((status, body))
    }

    pub async fn get(&self, uri: &str) -> anyhow::Result<(StatusCode, Value)> {
        let req = Request::builder().uri(uri).header("host", HOST).body(Body::empty())?;
        self.send(req).await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> anyhow::Result<(StatusCode, Value)> {
        let req = Request::builder()
            .method("POST")
            .uri(uri)
            .header("host", HOST)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body)?))?;
        self.send(req).await
    }

    pub async fn post_form(&self, uri: &str, body: &'static str) -> anyhow::Result<(StatusCode, Value)> {
        let req = Request::builder()
            .method("POST")
            .uri(uri)
            .header("host", HOST)
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(body))?;
        self.send(req).await
    }

    pub async fn shop_count(&self) -> anyhow::Result<usize> {
        let (_, body) = self.get("/shop/").await?;
        Ok(body.as_array().map_or(0, Vec::len))
    }
}
