use rusqlite::{Connection, Result as SqlResult};
use std::path::Path;

/// Connection wrapper with foreign keys switched on.
pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn new<P: AsRef<Path>>(path: P) -> SqlResult<Self> {
        Self::configure(Connection::open(path)?)
    }

    #[cfg(test)]
    pub fn in_memory() -> SqlResult<Self> {
        Self::configure(Connection::open_in_memory()?)
    }

    fn configure(conn: Connection) -> SqlResult<Self> {
        conn.pragma_update(None, "foreign_keys", true)?;
        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}
