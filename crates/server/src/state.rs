use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::{
    city::{repository::SeaOrmCityRepository, CityService},
    clock::Clock,
    shop::{repository::SeaOrmShopRepository, ShopService},
    street::{repository::SeaOrmStreetRepository, StreetService},
};

/// Shared handler state. Cloning is cheap; everything sits behind `Arc`.
#[derive(Clone)]
pub struct ServerState {
    pub cities: Arc<CityService>,
    pub streets: Arc<StreetService>,
    pub shops: Arc<ShopService>,
    pub clock: Arc<dyn Clock>,
}

impl ServerState {
    /// Wire the SeaORM repositories into the services.
    pub fn new(db: DatabaseConnection, clock: Arc<dyn Clock>) -> Self {
        let city_repo = Arc::new(SeaOrmCityRepository { db: db.clone() });
        let street_repo = Arc::new(SeaOrmStreetRepository { db: db.clone() });
        let shop_repo = Arc::new(SeaOrmShopRepository { db });

        let cities = Arc::new(CityService::new(city_repo.clone()));
        let streets = Arc::new(StreetService::new(street_repo.clone(), city_repo.clone()));
        let shops = Arc::new(ShopService::new(shop_repo, city_repo, street_repo));
        Self { cities, streets, shops, clock }
    }
}
