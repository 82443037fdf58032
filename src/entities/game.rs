use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Shared game catalog entry. Ids come from the upstream catalog, so the
/// primary key is caller-supplied rather than generated.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "game")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub title: String,
    pub thumbnail: Option<String>,
    pub short_description: Option<String>,
    pub game_url: Option<String>,
    pub genre: Option<String>,
    pub platform: Option<String>,
    pub publisher: Option<String>,
    pub developer: Option<String>,
    pub release_date: Option<Date>,
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

impl Related<super::game_list::Entity> for Entity {
    fn to() -> RelationDef {
        super::game_list_game::Relation::GameList.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::game_list_game::Relation::Game.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
