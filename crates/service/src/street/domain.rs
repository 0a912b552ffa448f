use std::fmt;

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};

use models::validation::{body_text, BodyText};

/// Primary-key reference as it may arrive from a client: a JSON number or
/// a numeric string. Any other JSON type is kept as `Other` with its type
/// name so it can be reported on the field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PkRef {
    Int(i64),
    Text(String),
    Other(&'static str),
}

impl PkRef {
    pub fn as_id(&self) -> Option<i32> {
        match self {
            PkRef::Int(v) => i32::try_from(*v).ok(),
            PkRef::Text(s) => s.trim().parse().ok(),
            PkRef::Other(_) => None,
        }
    }
}

impl fmt::Display for PkRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PkRef::Int(v) => write!(f, "{v}"),
            PkRef::Text(s) => f.write_str(s),
            PkRef::Other(kind) => f.write_str(kind),
        }
    }
}

struct PkRefVisitor;

impl<'de> Visitor<'de> for PkRefVisitor {
    type Value = PkRef;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a primary key")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<PkRef, E> { Ok(PkRef::Int(v)) }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<PkRef, E> {
        Ok(i64::try_from(v).map_or(PkRef::Other("int"), PkRef::Int))
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<PkRef, E> { Ok(PkRef::Other("float")) }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<PkRef, E> { Ok(PkRef::Other("bool")) }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<PkRef, E> { Ok(PkRef::Text(v.to_string())) }

    fn visit_string<E: de::Error>(self, v: String) -> Result<PkRef, E> { Ok(PkRef::Text(v)) }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<PkRef, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(PkRef::Other("list"))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<PkRef, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(PkRef::Other("dict"))
    }
}

impl<'de> Deserialize<'de> for PkRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PkRefVisitor)
    }
}

/// Create-street input. The owning city comes from the request path; `city`
/// in the body is optional and, when present, must name that same city.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StreetInput {
    #[serde(default, deserialize_with = "body_text")]
    pub name: Option<BodyText>,
    #[serde(default)]
    pub city: Option<PkRef>,
}

/// Public view of a street. The city is implied by the URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreetOutput {
    pub id: i32,
    pub name: String,
}

impl From<models::street::Model> for StreetOutput {
    fn from(m: models::street::Model) -> Self { Self { id: m.id, name: m.name } }
}
