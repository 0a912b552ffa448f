use std::sync::Arc;
use tracing::{info, instrument};

use models::street;
use models::validation::{self, messages, FieldErrors};
use crate::city::repository::CityRepository;
use crate::errors::ServiceError;
use crate::street::domain::{PkRef, StreetInput, StreetOutput};
use crate::street::repository::StreetRepository;

pub const CITY_MISMATCH: &str = "Street must belong to the city in the request path.";

/// Application service for streets. Every operation is scoped to a city
/// that must exist.
pub struct StreetService {
    streets: Arc<dyn StreetRepository>,
    cities: Arc<dyn CityRepository>,
}

impl StreetService {
    pub fn new(streets: Arc<dyn StreetRepository>, cities: Arc<dyn CityRepository>) -> Self {
        Self { streets, cities }
    }

    async fn ensure_city(&self, city_id: i32) -> Result<(), ServiceError> {
        match self.cities.get(city_id).await? {
            Some(_) => Ok(()),
            None => Err(ServiceError::not_found("city")),
        }
    }

    pub async fn list(&self, city_id: i32) -> Result<Vec<StreetOutput>, ServiceError> {
        self.ensure_city(city_id).await?;
        let list = self.streets.list_by_city(city_id).await?;
        Ok(list.into_iter().map(StreetOutput::from).collect())
    }

    /// Checks the optional `city` reference in the body against the path city.
    async fn check_city_ref(&self, errors: &mut FieldErrors, city_id: i32, pk: &PkRef) -> Result<(), ServiceError> {
        let Some(id) = pk.as_id() else {
            match pk {
                PkRef::Int(_) => errors.add("city", messages::invalid_pk(pk)),
                PkRef::Text(_) => errors.add("city", messages::pk_type("str")),
                PkRef::Other(kind) => errors.add("city", messages::pk_type(kind)),
            }
            return Ok(());
        };
        if self.cities.get(id).await?.is_none() {
            errors.add("city", messages::invalid_pk(pk));
        } else if id != city_id {
            errors.add("city", CITY_MISMATCH);
        }
        Ok(())
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, city_id: i32, input: StreetInput) -> Result<StreetOutput, ServiceError> {
        self.ensure_city(city_id).await?;

        let mut errors = FieldErrors::new();
        let name = validation::text_of("name", input.name.as_ref())
            .and_then(street::validate_name)
            .map_err(|e| errors.merge(e))
            .ok();
        if let Some(pk) = &input.city {
            self.check_city_ref(&mut errors, city_id, pk).await?;
        }
        errors.into_result()?;
        let name = name.ok_or_else(|| ServiceError::Validation(FieldErrors::single("name", messages::REQUIRED)))?;

        if self.streets.find_in_city(city_id, &name).await?.is_some() {
            return Err(street::duplicate_in_city().into());
        }
        let created = self.streets.create(city_id, &name).await?;
        info!(street_id = created.id, city_id, name = %created.name, "street_created");
        Ok(created.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::city::repository::SeaOrmCityRepository;
    use crate::street::repository::SeaOrmStreetRepository;
    use crate::test_support::get_db;
    use models::{city, validation::NON_FIELD_ERRORS};
    use sea_orm::DatabaseConnection;

    async fn setup() -> anyhow::Result<(DatabaseConnection, StreetService)> {
        let db = get_db().await?;
        let svc = StreetService::new(
            Arc::new(SeaOrmStreetRepository { db: db.clone() }),
            Arc::new(SeaOrmCityRepository { db: db.clone() }),
        );
        Ok((db, svc))
    }

    fn input(name: &str) -> StreetInput { StreetInput { name: Some(name.into()), city: None } }

    #[tokio::test]
    async fn list_only_returns_streets_of_requested_city() -> anyhow::Result<()> {
        let (db, svc) = setup().await?;
        let moscow = city::create(&db, "Moscow").await?;
        let rostov = city::create(&db, "Rostov-on-Don").await?;
        let s1 = svc.create(moscow.id, input("Prospekt Lenina")).await?;
        let s2 = svc.create(rostov.id, input("Prospekt Lenina")).await?;

        let listed = svc.list(moscow.id).await?;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, s1.id);
        assert_ne!(listed[0].id, s2.id);
        Ok(())
    }

    #[tokio::test]
    async fn list_for_unknown_city_is_not_found() -> anyhow::Result<()> {
        let (db, svc) = setup().await?;
        city::create(&db, "Moscow").await?;
        assert!(matches!(svc.list(4).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_street_in_same_city_is_rejected() -> anyhow::Result<()> {
        let (db, svc) = setup().await?;
        let c = city::create(&db, "Moscow").await?;
        svc.create(c.id, input("Ulitsa Borko")).await?;
        let err = svc.create(c.id, input("Ulitsa Borko")).await.unwrap_err();
        assert_eq!(err.field_errors().unwrap().get(NON_FIELD_ERRORS).unwrap(), [messages::STREET_NOT_UNIQUE]);
        Ok(())
    }

    #[tokio::test]
    async fn unknown_city_pk_in_body_is_a_field_error() -> anyhow::Result<()> {
        let (db, svc) = setup().await?;
        let c = city::create(&db, "Rostov-on-Don").await?;
        let err = svc
            .create(c.id, StreetInput { name: Some("Prospekt Stachki".into()), city: Some(PkRef::Int(777)) })
            .await
            .unwrap_err();
        assert_eq!(err.field_errors().unwrap().get("city").unwrap(), [messages::invalid_pk(777)]);
        assert!(svc.list(c.id).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn matching_city_pk_in_body_is_accepted() -> anyhow::Result<()> {
        let (db, svc) = setup().await?;
        let c = city::create(&db, "Rostov-on-Don").await?;
        let created = svc
            .create(c.id, StreetInput { name: Some("Prospekt Stachki".into()), city: Some(PkRef::Text(c.id.to_string())) })
            .await?;
        assert_eq!(created.name, "Prospekt Stachki");
        Ok(())
    }

    #[tokio::test]
    async fn other_city_pk_in_body_is_rejected() -> anyhow::Result<()> {
        let (db, svc) = setup().await?;
        let a = city::create(&db, "Moscow").await?;
        let b = city::create(&db, "Rostov-on-Don").await?;
        let err = svc
            .create(a.id, StreetInput { name: Some("Tverskaya".into()), city: Some(PkRef::Int(b.id as i64)) })
            .await
            .unwrap_err();
        assert_eq!(err.field_errors().unwrap().get("city").unwrap(), [CITY_MISMATCH]);
        Ok(())
    }

    #[tokio::test]
    async fn create_in_unknown_city_is_not_found() -> anyhow::Result<()> {
        let (_db, svc) = setup().await?;
        assert!(matches!(svc.create(9, input("Nowhere")).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn non_numeric_city_pk_reports_its_type() -> anyhow::Result<()> {
        let (db, svc) = setup().await?;
        let c = city::create(&db, "Moscow").await?;
        for (pk, kind) in [(PkRef::Text("moscow".into()), "str"), (PkRef::Other("bool"), "bool")] {
            let err = svc
                .create(c.id, StreetInput { name: Some("Arbat".into()), city: Some(pk) })
                .await
                .unwrap_err();
            assert_eq!(err.field_errors().unwrap().get("city").unwrap(), [messages::pk_type(kind)]);
        }
        Ok(())
    }

    #[tokio::test]
    async fn null_name_is_a_field_error() -> anyhow::Result<()> {
        let (db, svc) = setup().await?;
        let c = city::create(&db, "Moscow").await?;
        let err = svc
            .create(c.id, StreetInput { name: Some(validation::BodyText::Null), city: None })
            .await
            .unwrap_err();
        assert_eq!(err.field_errors().unwrap().get("name").unwrap(), [messages::NULL]);
        Ok(())
    }
}
