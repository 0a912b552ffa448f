//! Query-string contract of the shop listing.
//!
//! Only `city`, `street` and `opened` are accepted. An empty value counts as
//! absent. `opened` must be exactly `0` or `1`.

use chrono::NaiveTime;
use thiserror::Error;

use models::shop::ShopView;

pub const CITY: &str = "city";
pub const STREET: &str = "street";
pub const OPENED: &str = "opened";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenState {
    Open,
    Closed,
}

impl OpenState {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "1" => Some(Self::Open),
            "0" => Some(Self::Closed),
            _ => None,
        }
    }

    pub fn matches(self, shop: &ShopView, now: NaiveTime) -> bool {
        match self {
            Self::Open => shop.is_open_at(now),
            Self::Closed => shop.is_closed_at(now),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("unknown filter parameter `{0}`")]
    UnknownParameter(String),
    #[error("invalid opened value `{0}`, expected 0 or 1")]
    InvalidOpened(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShopFilter {
    pub city: Option<String>,
    pub street: Option<String>,
    pub opened: Option<OpenState>,
}

impl ShopFilter {
    /// Build a filter from raw query pairs. A repeated key keeps its last value.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut filter = Self::default();
        let mut opened = None;
        for (key, value) in pairs {
            let (key, value) = (key.as_ref(), value.as_ref());
            let value = (!value.is_empty()).then(|| value.to_string());
            match key {
                CITY => filter.city = value,
                STREET => filter.street = value,
                // only the surviving value is checked
                OPENED => opened = value,
                other => return Err(FilterError::UnknownParameter(other.to_string())),
            }
        }
        if let Some(v) = opened {
            filter.opened = Some(OpenState::parse(&v).ok_or(FilterError::InvalidOpened(v))?);
        }
        Ok(filter)
    }

    pub fn is_empty(&self) -> bool { self == &Self::default() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(pairs: &[(&str, &str)]) -> Result<ShopFilter, FilterError> {
        ShopFilter::from_pairs(pairs.iter().copied())
    }

    #[test]
    fn no_parameters_is_empty_filter() {
        assert!(parse(&[]).unwrap().is_empty());
    }

    #[test]
    fn all_parameters_are_combined() {
        let f = parse(&[("city", "Moscow"), ("street", "Prospekt Lenina"), ("opened", "1")]).unwrap();
        assert_eq!(f.city.as_deref(), Some("Moscow"));
        assert_eq!(f.street.as_deref(), Some("Prospekt Lenina"));
        assert_eq!(f.opened, Some(OpenState::Open));
    }

    #[test]
    fn unknown_parameter_is_rejected() {
        assert_eq!(parse(&[("rating", "10")]), Err(FilterError::UnknownParameter("rating".into())));
        assert!(parse(&[("city", "Moscow"), ("rating", "")]).is_err());
    }

    #[test]
    fn opened_must_be_zero_or_one() {
        assert_eq!(parse(&[("opened", "0")]).unwrap().opened, Some(OpenState::Closed));
        for bad in ["15", "T17", "01", " 1", "true"] {
            assert_eq!(parse(&[("opened", bad)]), Err(FilterError::InvalidOpened(bad.into())));
        }
    }

    #[test]
    fn empty_values_are_ignored() {
        let f = parse(&[("city", ""), ("street", ""), ("opened", "")]).unwrap();
        assert!(f.is_empty());
    }

    #[test]
    fn last_repeated_value_wins() {
        let f = parse(&[("city", "Moscow"), ("city", "Rostov-on-Don")]).unwrap();
        assert_eq!(f.city.as_deref(), Some("Rostov-on-Don"));
    }

    #[test]
    fn last_repeated_opened_wins() {
        assert_eq!(parse(&[("opened", "2"), ("opened", "1")]).unwrap().opened, Some(OpenState::Open));
        assert_eq!(parse(&[("opened", "1"), ("opened", "")]).unwrap().opened, None);
        assert_eq!(parse(&[("opened", "1"), ("opened", "2")]), Err(FilterError::InvalidOpened("2".into())));
    }
}
