use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use models::shop::ShopView;
use models::validation::{body_text, BodyText};

/// Create-shop input. `city` and `street` are names; the street is looked up
/// within the named city. Times are `hh:mm[:ss[.uuuuuu]]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShopInput {
    #[serde(default, deserialize_with = "body_text")]
    pub name: Option<BodyText>,
    #[serde(default, deserialize_with = "body_text")]
    pub city: Option<BodyText>,
    #[serde(default, deserialize_with = "body_text")]
    pub street: Option<BodyText>,
    #[serde(default, deserialize_with = "body_text")]
    pub house_numbers: Option<BodyText>,
    #[serde(default, deserialize_with = "body_text")]
    pub opening_time: Option<BodyText>,
    #[serde(default, deserialize_with = "body_text")]
    pub closing_time: Option<BodyText>,
}

/// Public view of a shop, with `is_opened` evaluated at a given time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopOutput {
    pub id: i32,
    pub name: String,
    pub city_name: String,
    pub street_name: String,
    pub house_numbers: String,
    pub opening_time: NaiveTime,
    pub closing_time: NaiveTime,
    pub is_opened: bool,
}

impl ShopOutput {
    pub fn at(view: ShopView, now: NaiveTime) -> Self {
        let is_opened = view.is_open_at(now);
        Self {
            id: view.id,
            name: view.name,
            city_name: view.city_name,
            street_name: view.street_name,
            house_numbers: view.house_numbers,
            opening_time: view.opening_time,
            closing_time: view.closing_time,
            is_opened,
        }
    }
}

/// Database-level part of a shop listing. Open/closed is evaluated in
/// memory against the request's clock reading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShopQuery {
    pub city_id: Option<i32>,
    pub street_name: Option<String>,
}
