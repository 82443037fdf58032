use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Junction between `game_list` and `game`, no extra attributes.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "game_list_game")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub game_list_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub game_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::game_list::Entity",
        from = "Column::GameListId",
        to = "super::game_list::Column::Id"
    )]
    GameList,
    #[sea_orm(
        belongs_to = "super::game::Entity",
        from = "Column::GameId",
        to = "super::game::Column::Id"
    )]
    Game,
}

impl Related<super::game_list::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameList.def()
    }
}

impl Related<super::game::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Game.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
