use rusqlite::Result as SqlResult;
use std::path::Path;

use super::database::Database;

/// Schema for players, their chat log and their game state.
pub struct GameDatabase {
    db: Database,
}

impl GameDatabase {
    pub fn with_path<P: AsRef<Path>>(path: P) -> SqlResult<Self> {
        Self::init(Database::new(path)?)
    }

    #[cfg(test)]
    pub fn in_memory() -> SqlResult<Self> {
        Self::init(Database::in_memory()?)
    }

    fn init(db: Database) -> SqlResult<Self> {
        let game_db = Self { db };
        game_db.init_schema()?;
        Ok(game_db)
    }

    fn init_schema(&self) -> SqlResult<()> {
        let conn = self.db.connection();

        conn.execute(
            "CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY,
                username VARCHAR(50) NOT NULL UNIQUE,
                created_at TEXT NOT NULL DEFAULT (datetime('now'))
            )",
            [],
        )?;

        // role is "user" or "dm"
        conn.execute(
            "CREATE TABLE IF NOT EXISTS chat_messages (
                id INTEGER PRIMARY KEY,
                user_id INTEGER REFERENCES users(id) ON DELETE CASCADE,
                role VARCHAR(10),
                content TEXT NOT NULL,
                timestamp TEXT NOT NULL DEFAULT (datetime('now'))
            )",
            [],
        )?;

        // data holds inventory, stats, etc. as JSON
        conn.execute(
            "CREATE TABLE IF NOT EXISTS game_state (
                id INTEGER PRIMARY KEY,
                user_id INTEGER UNIQUE REFERENCES users(id) ON DELETE CASCADE,
                data TEXT,
                updated_at TEXT NOT NULL DEFAULT (datetime('now'))
            )",
            [],
        )?;

        conn.execute_batch(
            "CREATE TRIGGER IF NOT EXISTS game_state_touch
             AFTER UPDATE OF data ON game_state
             BEGIN
                 UPDATE game_state SET updated_at = datetime('now') WHERE id = NEW.id;
             END;",
        )?;

        Ok(())
    }

    /// User tables present in the database, sorted by name.
    pub fn table_names(&self) -> SqlResult<Vec<String>> {
        let conn = self.db.connection();
        let mut stmt = conn.prepare(
            "SELECT name FROM sqlite_master
             WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
             ORDER BY name",
        )?;
        let names = stmt
            .query_map([], |row| row.get(0))?
            .collect::<SqlResult<Vec<String>>>()?;
        Ok(names)
    }
}
