pub use sea_orm_migration::prelude::*;

mod m20250612_000001_create_game_table;
mod m20250612_000002_create_game_list_table;
mod m20250612_000003_create_game_list_game_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250612_000001_create_game_table::Migration),
            Box::new(m20250612_000002_create_game_list_table::Migration),
            Box::new(m20250612_000003_create_game_list_game_table::Migration),
        ]
    }
}
