use std::sync::Arc;

use chrono::NaiveTime;
use tracing::{debug, info, instrument};

use models::shop::NewShop;
use models::validation::{self, messages, BodyText, FieldErrors, HOUSE_NUMBERS_MAX_LEN, NAME_MAX_LEN};
use crate::city::repository::CityRepository;
use crate::errors::ServiceError;
use crate::shop::domain::{ShopInput, ShopOutput, ShopQuery};
use crate::shop::filter::ShopFilter;
use crate::shop::repository::ShopRepository;
use crate::street::repository::StreetRepository;

/// Application service for shops.
pub struct ShopService {
    shops: Arc<dyn ShopRepository>,
    cities: Arc<dyn CityRepository>,
    streets: Arc<dyn StreetRepository>,
}

impl ShopService {
    pub fn new(
        shops: Arc<dyn ShopRepository>,
        cities: Arc<dyn CityRepository>,
        streets: Arc<dyn StreetRepository>,
    ) -> Self {
        Self { shops, cities, streets }
    }

    /// Shops matching every active part of `filter`, open/closed judged at
    /// `now`. An unknown city is not found; a street name that matches
    /// nothing simply yields no shops.
    #[instrument(skip(self))]
    pub async fn list(&self, filter: &ShopFilter, now: NaiveTime) -> Result<Vec<ShopOutput>, ServiceError> {
        let city_id = match &filter.city {
            Some(name) => {
                let city = self.cities.find_by_name(name).await?.ok_or_else(|| ServiceError::not_found("city"))?;
                Some(city.id)
            }
            None => None,
        };
        let query = ShopQuery { city_id, street_name: filter.street.clone() };
        let rows = self.shops.list(&query).await?;
        let total = rows.len();
        let out: Vec<ShopOutput> = rows
            .into_iter()
            .filter(|s| filter.opened.map_or(true, |state| state.matches(s, now)))
            .map(|s| ShopOutput::at(s, now))
            .collect();
        debug!(total, matched = out.len(), "shops_filtered");
        Ok(out)
    }

    /// Resolve the city and street names of `input` into ids, recording
    /// field errors for anything missing or unknown.
    async fn resolve_location(
        &self,
        errors: &mut FieldErrors,
        city: Option<&BodyText>,
        street: Option<&BodyText>,
    ) -> Result<Option<(i32, i32)>, ServiceError> {
        let city_name = validation::char_value(errors, "city", city, NAME_MAX_LEN);
        let street_name = validation::char_value(errors, "street", street, NAME_MAX_LEN);

        let city = match city_name {
            Some(name) => {
                let found = self.cities.find_by_name(&name).await?;
                if found.is_none() {
                    errors.add("city", messages::unknown_slug("name", &name));
                }
                found
            }
            None => None,
        };
        let (Some(city), Some(street_name)) = (city, street_name) else {
            return Ok(None);
        };
        match self.streets.find_in_city(city.id, &street_name).await? {
            Some(street) => Ok(Some((city.id, street.id))),
            None => {
                errors.add("street", messages::unknown_slug("name", &street_name));
                Ok(None)
            }
        }
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: ShopInput, now: NaiveTime) -> Result<ShopOutput, ServiceError> {
        let mut errors = FieldErrors::new();
        let name = validation::char_value(&mut errors, "name", input.name.as_ref(), NAME_MAX_LEN);
        let house_numbers = validation::char_value(
            &mut errors,
            "house_numbers",
            input.house_numbers.as_ref(),
            HOUSE_NUMBERS_MAX_LEN,
        );
        let opening_time = validation::time_value(&mut errors, "opening_time", input.opening_time.as_ref());
        let closing_time = validation::time_value(&mut errors, "closing_time", input.closing_time.as_ref());
        let location = self
            .resolve_location(&mut errors, input.city.as_ref(), input.street.as_ref())
            .await?;
        errors.into_result()?;

        let (Some(name), Some(house_numbers), Some(opening_time), Some(closing_time), Some((city_id, street_id))) =
            (name, house_numbers, opening_time, closing_time, location)
        else {
            return Err(ServiceError::Validation(FieldErrors::single(validation::NON_FIELD_ERRORS, messages::REQUIRED)));
        };
        validation::opening_hours(opening_time, closing_time)?;

        let new_shop = NewShop { name, city_id, street_id, house_numbers, opening_time, closing_time };
        let created = self.shops.create(&new_shop).await?;
        info!(shop_id = created.id, city_id, street_id, name = %created.name, "shop_created");
        Ok(ShopOutput::at(created, now))
    }
}
