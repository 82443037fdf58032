use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "game_list")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub description: Option<String>,
    pub user: String,
    pub is_private: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::game_list_game::Entity")]
    GameListGame,
}

impl Related<super::game_list_game::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameListGame.def()
    }
}

impl Related<super::game::Entity> for Entity {
    fn to() -> RelationDef {
        super::game_list_game::Relation::Game.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::game_list_game::Relation::GameList.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
