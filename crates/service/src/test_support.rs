#![cfg(test)]
use chrono::NaiveTime;
use sea_orm::DatabaseConnection;

use models::{city, shop, street};

/// Fresh in-memory database with the schema applied. Every call is isolated.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    models::db::connect_in_memory().await
}

pub const CITY_NAMES: [&str; 3] = ["Moscow", "Saint Petersburg", "Rostov-on-Don"];
pub const STREET_NAMES: [&str; 3] = ["Prospekt Stachki", "Ulitsa Borko", "Prospekt Lenina"];
pub const SHOP_NAMES: [&str; 3] = ["Opened 1", "Opened 2", "Closed"];

/// Every city gets every street, every street gets three shops opening at
/// 08:00. "Closed" closes at 12:00, the others at 20:00. 27 shops in total.
pub async fn seed_directory(db: &DatabaseConnection) -> Result<(), anyhow::Error> {
    let opening = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
    for city_name in CITY_NAMES {
        let c = city::create(db, city_name).await?;
        for street_name in STREET_NAMES {
            let s = street::create(db, c.id, street_name).await?;
            for shop_name in SHOP_NAMES {
                let closing_hour = if shop_name == "Closed" { 12 } else { 20 };
                shop::create(db, &shop::NewShop {
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
    Ok(())
}
