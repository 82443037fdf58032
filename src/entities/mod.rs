pub mod game;
pub mod game_list;
pub mod game_list_game;
