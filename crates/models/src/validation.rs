//! Field-level validation shared by the entity constructors.
//!
//! Errors are collected per field into [`FieldErrors`], which serializes to
//! `{"field": ["message", ...]}`. Checks that span several fields report
//! under [`NON_FIELD_ERRORS`].

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveTime;
use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize, Serializer};

pub const NON_FIELD_ERRORS: &str = "non_field_errors";

/// Maximum length of city, street and shop names.
pub const NAME_MAX_LEN: usize = 256;
/// Maximum length of a shop's house numbers, e.g. `3d\6`.
pub const HOUSE_NUMBERS_MAX_LEN: usize = 16;

pub mod messages {
    pub const REQUIRED: &str = "This field is required.";
    pub const BLANK: &str = "This field may not be blank.";
    pub const TIME_FORMAT: &str =
        "Time has wrong format. Use one of these formats instead: hh:mm[:ss[.uuuuuu]].";
    pub const CLOSING_BEFORE_OPENING: &str =
        "Shop cannot have closing time earlier than opening time";
    pub const STREET_NOT_UNIQUE: &str = "The fields name, city must make a unique set.";
    pub const CITY_NOT_UNIQUE: &str = "city with this name already exists.";
    pub const NULL: &str = "This field may not be null.";
    pub const NOT_A_STRING: &str = "Not a valid string.";

    pub fn max_length(max: usize) -> String {
        format!("Ensure this field has no more than {max} characters.")
    }

    pub fn invalid_pk(pk: impl std::fmt::Display) -> String {
        format!("Invalid pk \"{pk}\" - object does not exist.")
    }

    /// `kind` is the client-side type name: `str`, `bool`, `list`, ...
    pub fn pk_type(kind: &str) -> String {
        format!("Incorrect type. Expected pk value, received {kind}.")
    }

    pub fn unknown_slug(field: &str, value: &str) -> String {
        format!("Object with {field}={value} does not exist.")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self { Self::default() }

    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn contains(&self, field: &str) -> bool { self.0.contains_key(field) }

    pub fn merge(&mut self, other: FieldErrors) {
        for (field, msgs) in other.0 {
            self.0.entry(field).or_default().extend(msgs);
        }
    }

    /// `Ok(())` when nothing was recorded, otherwise the collected errors.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, msgs) in &self.0 {
            for msg in msgs {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{field}: {msg}")?;
                first = false;
            }
        }
        Ok(())
    }
}

/// A scalar body field as the client sent it. Strings and numbers are kept
/// as text; `null` and structured values are kept as markers so they can be
/// reported against their own field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyText {
    Text(String),
    Null,
    Invalid,
}

impl BodyText {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for BodyText {
    fn from(s: &str) -> Self { Self::Text(s.to_string()) }
}

impl From<String> for BodyText {
    fn from(s: String) -> Self { Self::Text(s) }
}

impl Serialize for BodyText {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(s) => serializer.serialize_str(s),
            _ => serializer.serialize_none(),
        }
    }
}

struct BodyTextVisitor;

impl<'de> Visitor<'de> for BodyTextVisitor {
    type Value = BodyText;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string or a number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<BodyText, E> { Ok(BodyText::Text(v.to_string())) }

    fn visit_string<E: de::Error>(self, v: String) -> Result<BodyText, E> { Ok(BodyText::Text(v)) }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<BodyText, E> { Ok(BodyText::Text(v.to_string())) }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<BodyText, E> { Ok(BodyText::Text(v.to_string())) }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<BodyText, E> { Ok(BodyText::Text(v.to_string())) }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<BodyText, E> { Ok(BodyText::Invalid) }

    fn visit_unit<E: de::Error>(self) -> Result<BodyText, E> { Ok(BodyText::Null) }

    fn visit_none<E: de::Error>(self) -> Result<BodyText, E> { Ok(BodyText::Null) }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<BodyText, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(BodyText::Invalid)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<BodyText, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(BodyText::Invalid)
    }
}

impl<'de> Deserialize<'de> for BodyText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(BodyTextVisitor)
    }
}

/// `deserialize_with` helper for optional body fields: a missing key stays
/// `None` (with `#[serde(default)]`) while an explicit `null` becomes
/// [`BodyText::Null`].
pub fn body_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<BodyText>, D::Error> {
    BodyText::deserialize(deserializer).map(Some)
}

/// Text of a body field, or the error for a `null` or non-scalar value.
pub fn text_of<'a>(field: &str, value: Option<&'a BodyText>) -> Result<Option<&'a str>, FieldErrors> {
    match value {
        None => Ok(None),
        Some(BodyText::Text(s)) => Ok(Some(s)),
        Some(BodyText::Null) => Err(FieldErrors::single(field, messages::NULL)),
        Some(BodyText::Invalid) => Err(FieldErrors::single(field, messages::NOT_A_STRING)),
    }
}

/// [`char_field`] over a raw body value.
pub fn char_value(errors: &mut FieldErrors, field: &str, value: Option<&BodyText>, max_len: usize) -> Option<String> {
    match text_of(field, value) {
        Ok(text) => char_field(errors, field, text, max_len),
        Err(e) => {
            errors.merge(e);
            None
        }
    }
}

/// [`time_field`] over a raw body value. Anything that is not text is a
/// format error.
pub fn time_value(errors: &mut FieldErrors, field: &str, value: Option<&BodyText>) -> Option<NaiveTime> {
    match value {
        Some(BodyText::Null) => {
            errors.add(field, messages::NULL);
            None
        }
        Some(BodyText::Invalid) => {
            errors.add(field, messages::TIME_FORMAT);
            None
        }
        other => time_field(errors, field, other.and_then(BodyText::as_text)),
    }
}

/// Required, non-blank, length-bounded text field. Surrounding whitespace is
/// trimmed before the checks and the trimmed value is returned.
pub fn char_field(errors: &mut FieldErrors, field: &str, value: Option<&str>, max_len: usize) -> Option<String> {
    let Some(raw) = value else {
        errors.add(field, messages::REQUIRED);
        return None;
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        errors.add(field, messages::BLANK);
        return None;
    }
    if trimmed.chars().count() > max_len {
        errors.add(field, messages::max_length(max_len));
        return None;
    }
    Some(trimmed.to_string())
}

/// Parse `hh:mm`, `hh:mm:ss` or `hh:mm:ss.ffffff`.
pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M:%S%.f")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .ok()
}

/// Required time-of-day field.
pub fn time_field(errors: &mut FieldErrors, field: &str, value: Option<&str>) -> Option<NaiveTime> {
    let Some(raw) = value else {
        errors.add(field, messages::REQUIRED);
        return None;
    };
    match parse_time(raw) {
        Some(t) => Some(t),
        None => {
            errors.add(field, messages::TIME_FORMAT);
            None
        }
    }
}

/// A shop may close at the same moment it opens, never before.
pub fn opening_hours(opening: NaiveTime, closing: NaiveTime) -> Result<(), FieldErrors> {
    if closing < opening {
        return Err(FieldErrors::single(NON_FIELD_ERRORS, messages::CLOSING_BEFORE_OPENING));
    }
    Ok(())
}
