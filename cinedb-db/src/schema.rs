//! SQLite schema creation, teardown and versioning.

use rusqlite::Connection;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Database was written by a newer schema: expected version {expected}, found {found}")]
    VersionMismatch { expected: i32, found: i32 },
}

/// Current schema version. Increment when the schema changes.
pub const CURRENT_VERSION: i32 = 1;

/// Create all tables and views if they don't exist.
///
/// This is idempotent: safe to call on an existing database.
pub fn create_schema(conn: &Connection) -> Result<(), SchemaError> {
    conn.execute_batch(SCHEMA_SQL)?;
    if get_schema_version(conn)? < CURRENT_VERSION {
        set_schema_version(conn, CURRENT_VERSION)?;
    }
    log::debug!("Schema ready (version {CURRENT_VERSION})");
    Ok(())
}

/// Drop every view and table, leaving an empty database.
pub fn drop_schema(conn: &Connection) -> Result<(), SchemaError> {
    conn.execute_batch(DROP_SQL)?;
    log::debug!("Schema dropped");
    Ok(())
}

/// Delete all rows while keeping tables, views and the version record.
pub fn clear_data(conn: &Connection) -> Result<(), SchemaError> {
    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(CLEAR_SQL)?;
    tx.commit()?;
    log::debug!("All rows cleared");
    Ok(())
}

/// Open or create a movie database at the given path.
pub fn open_database(path: &std::path::Path) -> Result<Connection, SchemaError> {
    let conn = Connection::open(path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;

    let version = get_schema_version(&conn)?;
    if version > CURRENT_VERSION {
        return Err(SchemaError::VersionMismatch {
            expected: CURRENT_VERSION,
            found: version,
        });
    }
    if version < CURRENT_VERSION {
        create_schema(&conn)?;
    }

    Ok(conn)
}

/// Open an in-memory database with the full schema. Useful for testing.
pub fn open_memory() -> Result<Connection, SchemaError> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;
    create_schema(&conn)?;
    Ok(conn)
}

/// Get the current schema version, or 0 if no schema exists.
pub fn get_schema_version(conn: &Connection) -> Result<i32, SchemaError> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
        [],
        |row| row.get(0),
    )?;

    if !exists {
        return Ok(0);
    }

    let version: i32 = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )?;
    Ok(version)
}

fn set_schema_version(conn: &Connection, version: i32) -> Result<(), SchemaError> {
    conn.execute(
        "INSERT INTO schema_version (version) VALUES (?1)",
        [version],
    )?;
    Ok(())
}

const SCHEMA_SQL: &str = r#"
-- Schema version tracking
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER NOT NULL,
    applied_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- Entities
CREATE TABLE IF NOT EXISTS critics (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS movies (
    name TEXT NOT NULL,
    year INTEGER NOT NULL CHECK (year > 1984),
    genre TEXT NOT NULL CHECK (genre IN ('Horror', 'Comedy', 'Action', 'Drama')),
    PRIMARY KEY (name, year)
);

CREATE TABLE IF NOT EXISTS actors (
    id INTEGER PRIMARY KEY CHECK (id > 0),
    name TEXT NOT NULL,
    age INTEGER NOT NULL CHECK (age > 0),
    height INTEGER NOT NULL CHECK (height > 0)
);

CREATE TABLE IF NOT EXISTS studios (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL
);

-- Critic ratings (1-5), one per critic per movie
CREATE TABLE IF NOT EXISTS ratings (
    movie_name TEXT NOT NULL,
    movie_year INTEGER NOT NULL,
    critic_id INTEGER NOT NULL REFERENCES critics(id) ON DELETE CASCADE,
    rating INTEGER NOT NULL CHECK (rating BETWEEN 1 AND 5),
    FOREIGN KEY (movie_name, movie_year) REFERENCES movies(name, year) ON DELETE CASCADE,
    UNIQUE (movie_name, movie_year, critic_id)
);
CREATE INDEX IF NOT EXISTS idx_ratings_critic ON ratings(critic_id);

-- Actor appearances
CREATE TABLE IF NOT EXISTS casts (
    movie_name TEXT NOT NULL,
    movie_year INTEGER NOT NULL,
    actor_id INTEGER NOT NULL REFERENCES actors(id) ON DELETE CASCADE,
    salary INTEGER NOT NULL CHECK (salary > 0),
    FOREIGN KEY (movie_name, movie_year) REFERENCES movies(name, year) ON DELETE CASCADE,
    UNIQUE (movie_name, movie_year, actor_id)
);
CREATE INDEX IF NOT EXISTS idx_casts_actor ON casts(actor_id);

-- Roles played within an appearance
CREATE TABLE IF NOT EXISTS roles (
    movie_name TEXT NOT NULL,
    movie_year INTEGER NOT NULL,
    actor_id INTEGER NOT NULL,
    role TEXT NOT NULL,
    FOREIGN KEY (movie_name, movie_year, actor_id)
        REFERENCES casts(movie_name, movie_year, actor_id) ON DELETE CASCADE,
    UNIQUE (movie_name, movie_year, actor_id, role)
);

-- At most one producing studio per movie
CREATE TABLE IF NOT EXISTS productions (
    studio_id INTEGER NOT NULL REFERENCES studios(id) ON DELETE CASCADE,
    movie_name TEXT NOT NULL,
    movie_year INTEGER NOT NULL,
    budget INTEGER NOT NULL CHECK (budget >= 0),
    revenue INTEGER NOT NULL CHECK (revenue >= 0),
    FOREIGN KEY (movie_name, movie_year) REFERENCES movies(name, year) ON DELETE CASCADE,
    UNIQUE (movie_name, movie_year)
);
CREATE INDEX IF NOT EXISTS idx_productions_studio ON productions(studio_id);

-- Derived views
CREATE VIEW IF NOT EXISTS total_salaries AS
    SELECT m.name AS movie_name,
           m.year AS movie_year,
           COALESCE(SUM(c.salary), 0) AS total_salary
    FROM movies m
    LEFT JOIN casts c ON c.movie_name = m.name AND c.movie_year = m.year
    GROUP BY m.name, m.year;

CREATE VIEW IF NOT EXISTS total_actor_roles AS
    SELECT c.movie_name AS movie_name,
           c.movie_year AS movie_year,
           c.actor_id AS actor_id,
           COUNT(r.role) AS role_count
    FROM casts c
    LEFT JOIN roles r ON r.movie_name = c.movie_name
                     AND r.movie_year = c.movie_year
                     AND r.actor_id = c.actor_id
    GROUP BY c.movie_name, c.movie_year, c.actor_id;

CREATE VIEW IF NOT EXISTS actor_casts AS
    SELECT a.id AS actor_id,
           a.age AS age,
           c.movie_name AS movie_name,
           c.movie_year AS movie_year
    FROM actors a
    JOIN casts c ON c.actor_id = a.id;

-- avg_rating is NULL for movies nobody rated
CREATE VIEW IF NOT EXISTS movie_ratings AS
    SELECT m.name AS movie_name,
           m.year AS movie_year,
           AVG(r.rating) AS avg_rating
    FROM movies m
    LEFT JOIN ratings r ON r.movie_name = m.name AND r.movie_year = m.year
    GROUP BY m.name, m.year;
"#;

const DROP_SQL: &str = r#"
DROP VIEW IF EXISTS movie_ratings;
DROP VIEW IF EXISTS actor_casts;
DROP VIEW IF EXISTS total_actor_roles;
DROP VIEW IF EXISTS total_salaries;
DROP TABLE IF EXISTS roles;
DROP TABLE IF EXISTS casts;
DROP TABLE IF EXISTS ratings;
DROP TABLE IF EXISTS productions;
DROP TABLE IF EXISTS critics;
DROP TABLE IF EXISTS actors;
DROP TABLE IF EXISTS studios;
DROP TABLE IF EXISTS movies;
DROP TABLE IF EXISTS schema_version;
"#;

const CLEAR_SQL: &str = r#"
DELETE FROM roles;
DELETE FROM casts;
DELETE FROM ratings;
DELETE FROM productions;
DELETE FROM critics;
DELETE FROM actors;
DELETE FROM studios;
DELETE FROM movies;
"#;
