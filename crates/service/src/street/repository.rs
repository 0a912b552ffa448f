use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use models::street;
use crate::errors::ServiceError;

#[async_trait]
pub trait StreetRepository: Send + Sync {
    async fn list_by_city(&self, city_id: i32) -> Result<Vec<street::Model>, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<street::Model>, ServiceError>;
    async fn find_in_city(&self, city_id: i32, name: &str) -> Result<Option<street::Model>, ServiceError>;
    async fn create(&self, city_id: i32, name: &str) -> Result<street::Model, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmStreetRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl StreetRepository for SeaOrmStreetRepository {
    async fn list_by_city(&self, city_id: i32) -> Result<Vec<street::Model>, ServiceError> {
        Ok(street::Entity::find()
            .filter(street::Column::CityId.eq(city_id))
            .order_by_asc(street::Column::Id)
            .all(&self.db)
            .await?)
    }

    async fn get(&self, id: i32) -> Result<Option<street::Model>, ServiceError> {
        Ok(street::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn find_in_city(&self, city_id: i32, name: &str) -> Result<Option<street::Model>, ServiceError> {
        Ok(street::Entity::find()
            .filter(street::Column::CityId.eq(city_id))
            .filter(street::Column::Name.eq(name))
            .one(&self.db)
            .await?)
    }

    async fn create(&self, city_id: i32, name: &str) -> Result<street::Model, ServiceError> {
        Ok(street::create(&self.db, city_id, name).await?)
    }
}
