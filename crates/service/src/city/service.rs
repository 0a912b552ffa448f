use std::sync::Arc;
use tracing::{info, instrument};

use models::{city, validation};
use crate::city::domain::{CityInput, CityOutput};
use crate::city::repository::CityRepository;
use crate::errors::ServiceError;

/// Application service for cities: name rules and uniqueness.
pub struct CityService {
    repo: Arc<dyn CityRepository>,
}

impl CityService {
    pub fn new(repo: Arc<dyn CityRepository>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<CityOutput>, ServiceError> {
        let list = self.repo.list().await?;
        Ok(list.into_iter().map(CityOutput::from).collect())
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CityInput) -> Result<CityOutput, ServiceError> {
        let name = city::validate_name(validation::text_of("name", input.name.as_ref())?)?;
        if self.repo.find_by_name(&name).await?.is_some() {
            return Err(city::duplicate_name().into());
        }
        let created = self.repo.create(&name).await?;
        info!(city_id = created.id, name = %created.name, "city_created");
        Ok(created.into())
    }
}
