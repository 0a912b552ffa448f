use serde::{Deserialize, Serialize};

use models::validation::{body_text, BodyText};

/// Create-city input. Fields are optional so a missing one can be reported
/// as a field error instead of a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CityInput {
    #[serde(default, deserialize_with = "body_text")]
    pub name: Option<BodyText>,
}

/// Public view of a city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityOutput {
    pub id: i32,
    pub name: String,
}

impl From<models::city::Model> for CityOutput {
    fn from(m: models::city::Model) -> Self { Self { id: m.id, name: m.name } }
}
