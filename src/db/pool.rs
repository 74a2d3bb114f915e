//! SQLite connection handle shared by the command handlers.

use rusqlite::{Connection, Result};
use std::path::Path;

/// Thin wrapper around a single rusqlite connection. One CLI invocation
/// opens the database once and hands the handle down to the query layer,
/// so nothing heavier than this is needed.
pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }
}
