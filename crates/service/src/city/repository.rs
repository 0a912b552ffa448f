use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use models::city;
use crate::errors::ServiceError;

#[async_trait]
pub trait CityRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<city::Model>, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<city::Model>, ServiceError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<city::Model>, ServiceError>;
    async fn create(&self, name: &str) -> Result<city::Model, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmCityRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl CityRepository for SeaOrmCityRepository {
    async fn list(&self) -> Result<Vec<city::Model>, ServiceError> {
        Ok(city::Entity::find().order_by_asc(city::Column::Id).all(&self.db).await?)
    }

    async fn get(&self, id: i32) -> Result<Option<city::Model>, ServiceError> {
        Ok(city::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<city::Model>, ServiceError> {
        Ok(city::Entity::find()
            .filter(city::Column::Name.eq(name))
            .one(&self.db)
            .await?)
    }

    async fn create(&self, name: &str) -> Result<city::Model, ServiceError> {
        Ok(city::create(&self.db, name).await?)
    }
}
