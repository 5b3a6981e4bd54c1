use sea_orm_migration::prelude::*;

/// Name of the unique index on `perks.title`.
pub const TITLE_UNIQUE_INDEX: &str = "ux_perks_title";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Perks::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Perks::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Perks::Title).string().not_null())
                    .col(
                        ColumnDef::new(Perks::Description)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Perks::Category)
                            .string_len(16)
                            .not_null()
                            .default("other"),
                    )
                    .col(
                        ColumnDef::new(Perks::DiscountPercent)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(ColumnDef::new(Perks::Merchant).string().null())
                    .col(
                        ColumnDef::new(Perks::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(TITLE_UNIQUE_INDEX)
                    .table(Perks::Table)
                    .col(Perks::Title)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_perks_created_at")
                    .table(Perks::Table)
                    .col(Perks::CreatedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Perks::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Perks {
    Table,
    Id,
    Title,
    Description,
    Category,
    DiscountPercent,
    Merchant,
    CreatedAt,
}
