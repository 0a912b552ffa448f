use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::validation::{self, messages, FieldErrors, NAME_MAX_LEN, NON_FIELD_ERRORS};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "street")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub city_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    City,
    Shop,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::City => Entity::belongs_to(crate::city::Entity)
                .from(Column::CityId)
                .to(crate::city::Column::Id)
                .into(),
            Relation::Shop => Entity::has_many(crate::shop::Entity).into(),
        }
    }
}

impl Related<crate::city::Entity> for Entity {
    fn to() -> RelationDef { Relation::City.def() }
}

impl Related<crate::shop::Entity> for Entity {
    fn to() -> RelationDef { Relation::Shop.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: Option<&str>) -> Result<String, FieldErrors> {
    let mut errors = FieldErrors::new();
    let name = validation::char_field(&mut errors, "name", name, NAME_MAX_LEN);
    match name {
        Some(n) if errors.is_empty() => Ok(n),
        _ => Err(errors),
    }
}

pub fn duplicate_in_city() -> FieldErrors {
    FieldErrors::single(NON_FIELD_ERRORS, messages::STREET_NOT_UNIQUE)
}

/// Insert a street into an existing city.
pub async fn create(db: &DatabaseConnection, city_id: i32, name: &str) -> Result<Model, errors::ModelError> {
    let name = validate_name(Some(name))?;
    let am = ActiveModel {
        name: Set(name),
        city_id: Set(city_id),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::from_insert(e, duplicate_in_city))
}
