use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Street: index on city_id for per-city listing
        manager
            .create_index(
                Index::create()
                    .name("idx_street_city")
                    .table(Street::Table)
                    .col(Street::CityId)
                    .to_owned(),
            )
            .await?;

        // Shop: city and street filters
        manager
            .create_index(
                Index::create()
                    .name("idx_shop_city")
                    .table(Shop::Table)
                    .col(Shop::CityId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_shop_street")
                    .table(Shop::Table)
                    .col(Shop::StreetId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_street_city").table(Street::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_shop_city").table(Shop::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_shop_street").table(Shop::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Street { Table, CityId }

#[derive(DeriveIden)]
enum Shop { Table, CityId, StreetId }
