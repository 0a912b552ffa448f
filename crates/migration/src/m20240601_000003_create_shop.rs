//! Create `shop` table.
//! Shops reference both their street and, redundantly, their city.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Shop::Table)
                    .if_not_exists()
                    .col(pk_auto(Shop::Id))
                    .col(string_len(Shop::Name, 256))
                    .col(integer(Shop::CityId))
                    .col(integer(Shop::StreetId))
                    .col(string_len(Shop::HouseNumbers, 16))
                    .col(time(Shop::OpeningTime))
                    .col(time(Shop::ClosingTime))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shop_city")
                            .from(Shop::Table, Shop::CityId)
                            .to(City::Table, City::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shop_street")
                            .from(Shop::Table, Shop::StreetId)
                            .to(Street::Table, Street::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Shop::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Shop {
    Table,
    Id,
    Name,
    CityId,
    StreetId,
    HouseNumbers,
    OpeningTime,
    ClosingTime,
}

#[derive(DeriveIden)]
enum City { Table, Id }

#[derive(DeriveIden)]
enum Street { Table, Id }
