use sea_orm_migration::prelude::*;

/// Creates the `game` table holding the shared game catalog.
///
/// Ids are supplied by the caller (they come from the upstream catalog), so
/// the primary key is not auto-incrementing.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Game {
    Table,
    Id,
    Title,
    Thumbnail,
    ShortDescription,
    GameUrl,
    Genre,
    Platform,
    Publisher,
    Developer,
    ReleaseDate,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Game::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Game::Id).integer().not_null().primary_key())
                    .col(ColumnDef::new(Game::Title).string_len(255).not_null())
                    .col(ColumnDef::new(Game::Thumbnail).text().null())
                    .col(ColumnDef::new(Game::ShortDescription).text().null())
                    .col(ColumnDef::new(Game::GameUrl).text().null())
                    .col(ColumnDef::new(Game::Genre).string_len(255).null())
                    .col(ColumnDef::new(Game::Platform).string_len(255).null())
                    .col(ColumnDef::new(Game::Publisher).string_len(255).null())
                    .col(ColumnDef::new(Game::Developer).string_len(255).null())
                    .col(ColumnDef::new(Game::ReleaseDate).date().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Game::Table).to_owned())
            .await
    }
}
