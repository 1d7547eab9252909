pub mod database;
pub mod game_db;

pub use game_db::GameDatabase;
