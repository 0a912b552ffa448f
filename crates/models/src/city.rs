use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::validation::{self, messages, FieldErrors, NAME_MAX_LEN};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "city")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Street,
    Shop,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Street => Entity::has_many(crate::street::Entity).into(),
            Relation::Shop => Entity::has_many(crate::shop::Entity).into(),
        }
    }
}

impl Related<crate::street::Entity> for Entity {
    fn to() -> RelationDef { Relation::Street.def() }
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

pub fn duplicate_name() -> FieldErrors {
    FieldErrors::single("name", messages::CITY_NOT_UNIQUE)
}

/// Insert a city. The name is validated; a name that is already taken is
/// reported as a field error on `name`.
pub async fn create(db: &DatabaseConnection, name: &str) -> Result<Model, errors::ModelError> {
    let name = validate_name(Some(name))?;
    let am = ActiveModel {
        name: Set(name),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::from_insert(e, duplicate_name))
}
