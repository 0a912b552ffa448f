//! Create `street` table.
//! A street name is unique within its city only.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Street::Table)
                    .if_not_exists()
                    .col(pk_auto(Street::Id))
                    .col(string_len(Street::Name, 256))
                    .col(integer(Street::CityId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_street_city")
                            .from(Street::Table, Street::CityId)
                            .to(City::Table, City::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Composite unique index: no duplicate street names in a city
        manager
            .create_index(
                Index::create()
                    .name("uniq_street_name_city")
                    .table(Street::Table)
                    .col(Street::Name)
                    .col(Street::CityId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Street::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Street { Table, Id, Name, CityId }

#[derive(DeriveIden)]
enum City { Table, Id }
