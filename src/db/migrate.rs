use crate::ui::messages::{success, warning};
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `bookings` table exists.
fn bookings_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='bookings'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if the `bookings` table has a `client` column.
fn bookings_has_client_column(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('bookings')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "client" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `bookings` table with the modern schema (including `client`).
///
/// Note: there is intentionally NO uniqueness constraint on
/// (date, space, start_slot). The legacy system validates availability
/// before inserting with no guard in between, and the storage layer keeps
/// that contract unchanged.
fn create_bookings_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS bookings (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            date           TEXT NOT NULL,
            start_slot     TEXT NOT NULL,
            duration_hours INTEGER NOT NULL DEFAULT 1,
            space          TEXT NOT NULL DEFAULT 'principal-zone'
                           CHECK(space IN ('principal-zone','natural-light','cyclorama','darkroom')),
            status         TEXT NOT NULL DEFAULT 'pending'
                           CHECK(status IN ('pending','confirmed','cancelled','completed')),
            client         TEXT DEFAULT '',
            source         TEXT NOT NULL DEFAULT 'cli',
            created_at     TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_bookings_date_space ON bookings(date, space);
        CREATE INDEX IF NOT EXISTS idx_bookings_status ON bookings(status);
        "#,
    )?;
    Ok(())
}

/// Migrate an old `bookings` table to include the `client` column.
fn migrate_add_client_to_bookings(conn: &Connection) -> Result<()> {
    if !bookings_table_exists(conn)? {
        return Ok(()); // no table, nothing to migrate
    }

    if bookings_has_client_column(conn)? {
        return Ok(()); // already present
    }

    warning("Adding 'client' column to bookings table...");

    conn.execute_batch(
        r#"
        ALTER TABLE bookings ADD COLUMN client TEXT DEFAULT '';
        "#,
    )?;

    success("'client' column added.");
    Ok(())
}

/// Run every pending schema migration, in order.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    create_bookings_table(conn)?;
    migrate_add_client_to_bookings(conn)?;
    Ok(())
}
