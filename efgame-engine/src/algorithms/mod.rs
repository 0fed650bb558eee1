pub mod game_strategy;
pub mod partial_iso;
