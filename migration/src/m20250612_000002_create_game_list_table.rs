use sea_orm_migration::prelude::*;

/// Creates the `game_list` table for user-owned lists.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum GameList {
    Table,
    Id,
    Name,
    Description,
    User,
    IsPrivate,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GameList::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GameList::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(GameList::Name)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(GameList::Description).text().null())
                    .col(ColumnDef::new(GameList::User).string_len(100).not_null())
                    .col(
                        ColumnDef::new(GameList::IsPrivate)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(GameList::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GameList::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Owner lookups ("my lists", ownership-scoped update/delete) filter on user
        manager
            .create_index(
                Index::create()
                    .name("idx_game_list_user")
                    .table(GameList::Table)
                    .col(GameList::User)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GameList::Table).to_owned())
            .await
    }
}
