use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GameListGame::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(GameListGame::GameListId).integer().not_null())
                    .col(ColumnDef::new(GameListGame::GameId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(GameListGame::GameListId)
                            .col(GameListGame::GameId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_list_game_game_list_id")
                            .from(GameListGame::Table, GameListGame::GameListId)
                            .to(GameList::Table, GameList::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_list_game_game_id")
                            .from(GameListGame::Table, GameListGame::GameId)
                            .to(Game::Table, Game::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Add index on game_id for reverse lookup
        manager
            .create_index(
                Index::create()
                    .name("idx_game_list_game_game_id")
                    .table(GameListGame::Table)
                    .col(GameListGame::GameId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GameListGame::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum GameListGame {
    Table,
    GameListId,
    GameId,
}

#[derive(DeriveIden)]
enum GameList {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Game {
    Table,
    Id,
}
