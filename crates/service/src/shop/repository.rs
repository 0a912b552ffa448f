use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, QueryFilter};

use models::{shop, street};
use models::shop::{NewShop, ShopView};
use crate::errors::ServiceError;
use crate::shop::domain::ShopQuery;

#[async_trait]
pub trait ShopRepository: Send + Sync {
    /// Shops matching `query`, with city and street names, in creation order.
    async fn list(&self, query: &ShopQuery) -> Result<Vec<ShopView>, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<ShopView>, ServiceError>;
    async fn create(&self, input: &NewShop) -> Result<ShopView, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmShopRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl ShopRepository for SeaOrmShopRepository {
    async fn list(&self, query: &ShopQuery) -> Result<Vec<ShopView>, ServiceError> {
        let mut select = shop::find_with_names();
        if let Some(city_id) = query.city_id {
            select = select.filter(shop::Column::CityId.eq(city_id));
        }
        if let Some(name) = &query.street_name {
            select = select.filter(street::Column::Name.eq(name.as_str()));
        }
        Ok(select.into_model::<ShopView>().all(&self.db).await?)
    }

    async fn get(&self, id: i32) -> Result<Option<ShopView>, ServiceError> {
        Ok(shop::find_with_names()
            .filter(shop::Column::Id.eq(id))
            .into_model::<ShopView>()
            .one(&self.db)
            .await?)
    }

    async fn create(&self, input: &NewShop) -> Result<ShopView, ServiceError> {
        let created = shop::create(&self.db, input).await?;
        self.get(created.id)
            .await?
            .ok_or_else(|| ServiceError::Db(format!("shop {} vanished after insert", created.id)))
    }
}
