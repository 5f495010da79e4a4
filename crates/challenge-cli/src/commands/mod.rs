pub mod config;
pub mod list;
pub mod play;
pub mod player;
pub mod simulate;
