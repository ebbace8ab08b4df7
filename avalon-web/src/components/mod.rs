pub mod game_selector;
pub mod game_viewer;
pub mod loading;
pub mod player_card;
