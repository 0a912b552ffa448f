use chrono::NaiveTime;
use sea_orm::{entity::prelude::*, FromQueryResult, QueryOrder, QuerySelect, Select, Set, DatabaseConnection};
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::validation::{self, FieldErrors, HOUSE_NUMBERS_MAX_LEN, NAME_MAX_LEN};
use crate::{city, street};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "shop")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub city_id: i32,
    pub street_id: i32,
    pub house_numbers: String,
    pub opening_time: Time,
    pub closing_time: Time,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    City,
    Street,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::City => Entity::belongs_to(city::Entity)
                .from(Column::CityId)
                .to(city::Column::Id)
                .into(),
            Relation::Street => Entity::belongs_to(street::Entity)
                .from(Column::StreetId)
                .to(street::Column::Id)
                .into(),
        }
    }
}

impl Related<city::Entity> for Entity {
    fn to() -> RelationDef { Relation::City.def() }
}

impl Related<street::Entity> for Entity {
    fn to() -> RelationDef { Relation::Street.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Open hours are the half-open interval `[opening, closing)`: a shop is
/// open at its opening time and already closed at its closing time.
pub fn is_open(opening: NaiveTime, closing: NaiveTime, now: NaiveTime) -> bool {
    opening <= now && now < closing
}

impl Model {
    pub fn is_open_at(&self, now: NaiveTime) -> bool {
        is_open(self.opening_time, self.closing_time, now)
    }

    pub fn is_closed_at(&self, now: NaiveTime) -> bool { !self.is_open_at(now) }
}

/// Shop row joined with the names of its city and street.
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult, Serialize)]
pub struct ShopView {
    pub id: i32,
    pub name: String,
    pub city_id: i32,
    pub street_id: i32,
    pub city_name: String,
    pub street_name: String,
    pub house_numbers: String,
    pub opening_time: Time,
    pub closing_time: Time,
}

impl ShopView {
    pub fn is_open_at(&self, now: NaiveTime) -> bool {
        is_open(self.opening_time, self.closing_time, now)
    }

    pub fn is_closed_at(&self, now: NaiveTime) -> bool { !self.is_open_at(now) }
}

/// Base query for [`ShopView`] rows, in creation order. Callers add their
/// own filters and finish with `into_model::<ShopView>()`.
pub fn find_with_names() -> Select<Entity> {
    Entity::find()
        .column_as(city::Column::Name, "city_name")
        .column_as(street::Column::Name, "street_name")
        .inner_join(city::Entity)
        .inner_join(street::Entity)
        .order_by_asc(Column::Id)
}

/// Validated input for a new shop. City and street are already resolved.
#[derive(Clone, Debug)]
pub struct NewShop {
    pub name: String,
    pub city_id: i32,
    pub street_id: i32,
    pub house_numbers: String,
    pub opening_time: NaiveTime,
    pub closing_time: NaiveTime,
}

impl NewShop {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        validation::char_field(&mut errors, "name", Some(&self.name), NAME_MAX_LEN);
        validation::char_field(&mut errors, "house_numbers", Some(&self.house_numbers), HOUSE_NUMBERS_MAX_LEN);
        errors.into_result()?;
        validation::opening_hours(self.opening_time, self.closing_time)
    }
}

pub async fn create(db: &DatabaseConnection, input: &NewShop) -> Result<Model, errors::ModelError> {
    input.validate()?;
    let am = ActiveModel {
        name: Set(input.name.trim().to_string()),
        city_id: Set(input.city_id),
        street_id: Set(input.street_id),
        house_numbers: Set(input.house_numbers.trim().to_string()),
        opening_time: Set(input.opening_time),
        closing_time: Set(input.closing_time),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
