//! Entity tests against an in-memory SQLite database with migrations applied.

use anyhow::Result;
use chrono::NaiveTime;
use sea_orm::{EntityTrait, ModelTrait, PaginatorTrait, QueryFilter, ColumnTrait};

use crate::db::connect_in_memory;
use crate::errors::ModelError;
use crate::validation::{messages, NON_FIELD_ERRORS};
use crate::{city, shop, street};

fn hm(h: u32) -> NaiveTime { NaiveTime::from_hms_opt(h, 0, 0).unwrap() }

fn new_shop(city_id: i32, street_id: i32, name: &str, closing: u32) -> shop::NewShop {
    shop::NewShop {
        name: name.into(),
        city_id,
        street_id,
        house_numbers: "1".into(),
        opening_time: hm(8),
        closing_time: hm(closing),
    }
}

#[tokio::test]
async fn cannot_save_nameless_city() -> Result<()> {
    let db = connect_in_memory().await?;
    let err = city::create(&db, "").await.unwrap_err();
    match err {
        ModelError::Validation(e) => assert_eq!(e.get("name").unwrap(), [messages::BLANK]),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(city::Entity::find().count(&db).await?, 0);
    Ok(())
}

#[tokio::test]
async fn duplicate_city_is_reported_on_name() -> Result<()> {
    let db = connect_in_memory().await?;
    city::create(&db, "Moscow").await?;
    let err = city::create(&db, "Moscow").await.unwrap_err();
    match err {
        ModelError::Validation(e) => assert_eq!(e.get("name").unwrap(), [messages::CITY_NOT_UNIQUE]),
        other => panic!("unexpected error: {other}"),
    }
    // case-sensitive
    city::create(&db, "moscow").await?;
    assert_eq!(city::Entity::find().count(&db).await?, 2);
    Ok(())
}

#[tokio::test]
async fn street_names_unique_per_city_only() -> Result<()> {
    let db = connect_in_memory().await?;
    let moscow = city::create(&db, "Moscow").await?;
    let rostov = city::create(&db, "Rostov-on-Don").await?;

    street::create(&db, moscow.id, "Prospekt Lenina").await?;
    street::create(&db, rostov.id, "Prospekt Lenina").await?;
    let err = street::create(&db, moscow.id, "Prospekt Lenina").await.unwrap_err();
    match err {
        ModelError::Validation(e) => assert_eq!(e.get(NON_FIELD_ERRORS).unwrap(), [messages::STREET_NOT_UNIQUE]),
        other => panic!("unexpected error: {other}"),
    }
    Ok(())
}

#[tokio::test]
async fn shop_with_closing_before_opening_is_rejected() -> Result<()> {
    let db = connect_in_memory().await?;
    let c = city::create(&db, "Moscow").await?;
    let s = street::create(&db, c.id, "Ulitsa Borko").await?;
    let mut input = new_shop(c.id, s.id, "Night Owl", 20);
    input.opening_time = hm(21);
    assert!(matches!(shop::create(&db, &input).await, Err(ModelError::Validation(_))));
    assert_eq!(shop::Entity::find().count(&db).await?, 0);
    Ok(())
}

#[tokio::test]
async fn shop_times_round_trip_through_storage() -> Result<()> {
    let db = connect_in_memory().await?;
    let c = city::create(&db, "Moscow").await?;
    let s = street::create(&db, c.id, "Ulitsa Borko").await?;
    let created = shop::create(&db, &new_shop(c.id, s.id, "Opened 1", 20)).await?;
    let found = shop::Entity::find_by_id(created.id).one(&db).await?.unwrap();
    assert_eq!(found.opening_time, hm(8));
    assert_eq!(found.closing_time, hm(20));
    assert!(found.is_open_at(hm(15)));
    Ok(())
}

#[tokio::test]
async fn deleting_city_cascades_to_streets_and_shops() -> Result<()> {
    let db = connect_in_memory().await?;
    let c = city::create(&db, "Saint Petersburg").await?;
    let s = street::create(&db, c.id, "Nevsky").await?;
    shop::create(&db, &new_shop(c.id, s.id, "Opened 1", 20)).await?;

    c.delete(&db).await?;
    assert_eq!(street::Entity::find().count(&db).await?, 0);
    assert_eq!(shop::Entity::find().count(&db).await?, 0);
    Ok(())
}

#[tokio::test]
async fn deleting_street_cascades_to_shops() -> Result<()> {
    let db = connect_in_memory().await?;
    let c = city::create(&db, "Saint Petersburg").await?;
    let s1 = street::create(&db, c.id, "Nevsky").await?;
    let s2 = street::create(&db, c.id, "Liteyny").await?;
    shop::create(&db, &new_shop(c.id, s1.id, "A", 20)).await?;
    shop::create(&db, &new_shop(c.id, s2.id, "B", 20)).await?;

    s1.delete(&db).await?;
    let left = shop::Entity::find().all(&db).await?;
    assert_eq!(left.len(), 1);
    assert_eq!(left[0].name, "B");
    Ok(())
}

#[tokio::test]
async fn shop_view_joins_city_and_street_names() -> Result<()> {
    let db = connect_in_memory().await?;
    let c = city::create(&db, "Rostov-on-Don").await?;
    let s = street::create(&db, c.id, "Prospekt Stachki").await?;
    shop::create(&db, &new_shop(c.id, s.id, "Closed", 12)).await?;
    shop::create(&db, &new_shop(c.id, s.id, "Opened 1", 20)).await?;

    let rows = shop::find_with_names()
        .filter(street::Column::Name.eq("Prospekt Stachki"))
        .into_model::<shop::ShopView>()
        .all(&db)
        .await?;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "Closed");
    assert_eq!(rows[0].city_name, "Rostov-on-Don");
    assert_eq!(rows[0].street_name, "Prospekt Stachki");
    assert!(rows[0].is_closed_at(hm(15)));
    assert!(rows[1].is_open_at(hm(15)));
    Ok(())
}
