//! CRUD operations for entities and the relationships between them.
//!
//! Every write runs in its own transaction: it commits when all statements
//! succeed and rolls back when the transaction guard is dropped on error.
//! Constraint failures are classified by [`OperationError`]'s conversion
//! from `rusqlite::Error`.

use cinedb_catalog::types::*;
use rusqlite::{params, Connection};

use crate::error::OperationError;

// ── Critic Operations ───────────────────────────────────────────────────────

/// Insert a critic.
pub fn add_critic(conn: &Connection, critic: &Critic) -> Result<(), OperationError> {
    in_transaction(conn, |tx| {
        tx.execute(
            "INSERT INTO critics (id, name) VALUES (?1, ?2)",
            params![critic.id, critic.name],
        )?;
        Ok(())
    })?;
    log::debug!("Added critic {} ({})", critic.id, critic.name);
    Ok(())
}

/// Delete a critic and, by cascade, their ratings.
pub fn delete_critic(conn: &Connection, critic_id: i64) -> Result<(), OperationError> {
    let changed = in_transaction(conn, |tx| {
        Ok(tx.execute("DELETE FROM critics WHERE id = ?1", params![critic_id])?)
    })?;
    expect_changed(changed, || format!("critic {critic_id}"))
}

/// Look up a critic by id.
pub fn get_critic_profile(
    conn: &Connection,
    critic_id: i64,
) -> Result<Option<Critic>, OperationError> {
    let mut stmt = conn.prepare("SELECT id, name FROM critics WHERE id = ?1")?;
    let rows = stmt.query_map(params![critic_id], row_to_critic)?;
    let rows = rows.collect::<Result<Vec<_>, _>>()?;
    Ok(single_row(rows, || format!("critic {critic_id}")))
}

// ── Actor Operations ────────────────────────────────────────────────────────

/// Insert an actor. Id, age and height must be positive.
pub fn add_actor(conn: &Connection, actor: &Actor) -> Result<(), OperationError> {
    in_transaction(conn, |tx| {
        tx.execute(
            "INSERT INTO actors (id, name, age, height) VALUES (?1, ?2, ?3, ?4)",
            params![actor.id, actor.name, actor.age, actor.height],
        )?;
        Ok(())
    })?;
    log::debug!("Added actor {} ({})", actor.id, actor.name);
    Ok(())
}

/// Delete an actor and, by cascade, their casts and roles.
pub fn delete_actor(conn: &Connection, actor_id: i64) -> Result<(), OperationError> {
    let changed = in_transaction(conn, |tx| {
        Ok(tx.execute("DELETE FROM actors WHERE id = ?1", params![actor_id])?)
    })?;
    expect_changed(changed, || format!("actor {actor_id}"))
}

/// Look up an actor by id.
pub fn get_actor_profile(
    conn: &Connection,
    actor_id: i64,
) -> Result<Option<Actor>, OperationError> {
    let mut stmt = conn.prepare("SELECT id, name, age, height FROM actors WHERE id = ?1")?;
    let rows = stmt.query_map(params![actor_id], row_to_actor)?;
    let rows = rows.collect::<Result<Vec<_>, _>>()?;
    Ok(single_row(rows, || format!("actor {actor_id}")))
}

// ── Movie Operations ────────────────────────────────────────────────────────

/// Insert a movie. The year must be after 1984.
pub fn add_movie(conn: &Connection, movie: &Movie) -> Result<(), OperationError> {
    in_transaction(conn, |tx| {
        tx.execute(
            "INSERT INTO movies (name, year, genre) VALUES (?1, ?2, ?3)",
            params![movie.name, movie.year, movie.genre.as_str()],
        )?;
        Ok(())
    })?;
    log::debug!("Added movie {} ({})", movie.name, movie.year);
    Ok(())
}

/// Delete a movie and everything that references it.
pub fn delete_movie(conn: &Connection, name: &str, year: i32) -> Result<(), OperationError> {
    let changed = in_transaction(conn, |tx| {
        Ok(tx.execute(
            "DELETE FROM movies WHERE name = ?1 AND year = ?2",
            params![name, year],
        )?)
    })?;
    expect_changed(changed, || format!("movie '{name}' ({year})"))
}

/// Look up a movie by its (name, year) key.
pub fn get_movie_profile(
    conn: &Connection,
    name: &str,
    year: i32,
) -> Result<Option<Movie>, OperationError> {
    let mut stmt =
        conn.prepare("SELECT name, year, genre FROM movies WHERE name = ?1 AND year = ?2")?;
    let rows = stmt.query_map(params![name, year], row_to_movie)?;
    let rows = rows.collect::<Result<Vec<_>, _>>()?;
    Ok(single_row(rows, || format!("movie '{name}' ({year})")))
}

// ── Studio Operations ───────────────────────────────────────────────────────

/// Insert a studio.
pub fn add_studio(conn: &Connection, studio: &Studio) -> Result<(), OperationError> {
    in_transaction(conn, |tx| {
        tx.execute(
            "INSERT INTO studios (id, name) VALUES (?1, ?2)",
            params![studio.id, studio.name],
        )?;
        Ok(())
    })?;
    log::debug!("Added studio {} ({})", studio.id, studio.name);
    Ok(())
}

/// Delete a studio and, by cascade, its productions.
pub fn delete_studio(conn: &Connection, studio_id: i64) -> Result<(), OperationError> {
    let changed = in_transaction(conn, |tx| {
        Ok(tx.execute("DELETE FROM studios WHERE id = ?1", params![studio_id])?)
    })?;
    expect_changed(changed, || format!("studio {studio_id}"))
}

/// Look up a studio by id.
pub fn get_studio_profile(
    conn: &Connection,
    studio_id: i64,
) -> Result<Option<Studio>, OperationError> {
    let mut stmt = conn.prepare("SELECT id, name FROM studios WHERE id = ?1")?;
    let rows = stmt.query_map(params![studio_id], row_to_studio)?;
    let rows = rows.collect::<Result<Vec<_>, _>>()?;
    Ok(single_row(rows, || format!("studio {studio_id}")))
}

// ── Rating Operations ───────────────────────────────────────────────────────

/// Record a critic's rating (1 to 5) of a movie.
pub fn critic_rated_movie(
    conn: &Connection,
    movie_name: &str,
    movie_year: i32,
    critic_id: i64,
    rating: i32,
) -> Result<(), OperationError> {
    in_transaction(conn, |tx| {
        tx.execute(
            "INSERT INTO ratings (movie_name, movie_year, critic_id, rating)
             VALUES (?1, ?2, ?3, ?4)",
            params![movie_name, movie_year, critic_id, rating],
        )?;
        Ok(())
    })?;
    log::debug!("Critic {critic_id} rated '{movie_name}' ({movie_year}): {rating}");
    Ok(())
}

/// Remove a critic's rating of a movie.
pub fn critic_didnt_rate_movie(
    conn: &Connection,
    movie_name: &str,
    movie_year: i32,
    critic_id: i64,
) -> Result<(), OperationError> {
    let changed = in_transaction(conn, |tx| {
        Ok(tx.execute(
            "DELETE FROM ratings WHERE movie_name = ?1 AND movie_year = ?2 AND critic_id = ?3",
            params![movie_name, movie_year, critic_id],
        )?)
    })?;
    expect_changed(changed, || {
        format!("rating of '{movie_name}' ({movie_year}) by critic {critic_id}")
    })
}

// ── Cast Operations ─────────────────────────────────────────────────────────

/// Cast an actor in a movie with the given roles.
///
/// The cast row and all role rows are written together; if any role fails
/// (for example a duplicate role name) nothing is kept. An empty `roles`
/// slice casts the actor without roles.
pub fn actor_played_in_movie(
    conn: &Connection,
    movie_name: &str,
    movie_year: i32,
    actor_id: i64,
    salary: i64,
    roles: &[String],
) -> Result<(), OperationError> {
    in_transaction(conn, |tx| {
        tx.execute(
            "INSERT INTO casts (movie_name, movie_year, actor_id, salary)
             VALUES (?1, ?2, ?3, ?4)",
            params![movie_name, movie_year, actor_id, salary],
        )?;
        if roles.is_empty() {
            return Ok(());
        }
        let mut stmt = tx.prepare(
            "INSERT INTO roles (movie_name, movie_year, actor_id, role)
             VALUES (?1, ?2, ?3, ?4)",
        )?;
        for role in roles {
            stmt.execute(params![movie_name, movie_year, actor_id, role])?;
        }
        Ok(())
    })?;
    log::debug!(
        "Actor {actor_id} cast in '{movie_name}' ({movie_year}) with {} role(s)",
        roles.len()
    );
    Ok(())
}

/// Remove an actor from a movie's cast, along with their roles.
pub fn actor_didnt_play_in_movie(
    conn: &Connection,
    movie_name: &str,
    movie_year: i32,
    actor_id: i64,
) -> Result<(), OperationError> {
    let changed = in_transaction(conn, |tx| {
        Ok(tx.execute(
            "DELETE FROM casts WHERE movie_name = ?1 AND movie_year = ?2 AND actor_id = ?3",
            params![movie_name, movie_year, actor_id],
        )?)
    })?;
    expect_changed(changed, || {
        format!("actor {actor_id} in '{movie_name}' ({movie_year})")
    })
}

/// Roles an actor plays in a movie, in name order.
pub fn roles_for_cast(
    conn: &Connection,
    movie_name: &str,
    movie_year: i32,
    actor_id: i64,
) -> Result<Vec<String>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT role FROM roles
         WHERE movie_name = ?1 AND movie_year = ?2 AND actor_id = ?3
         ORDER BY role",
    )?;
    let rows = stmt.query_map(params![movie_name, movie_year, actor_id], |row| {
        row.get::<_, String>(0)
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

// ── Production Operations ───────────────────────────────────────────────────

/// Record that a studio produced a movie. A movie has at most one producer.
pub fn studio_produced_movie(
    conn: &Connection,
    studio_id: i64,
    movie_name: &str,
    movie_year: i32,
    budget: i64,
    revenue: i64,
) -> Result<(), OperationError> {
    in_transaction(conn, |tx| {
        tx.execute(
            "INSERT INTO productions (studio_id, movie_name, movie_year, budget, revenue)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![studio_id, movie_name, movie_year, budget, revenue],
        )?;
        Ok(())
    })?;
    log::debug!("Studio {studio_id} produced '{movie_name}' ({movie_year})");
    Ok(())
}

/// Remove a studio's production of a movie.
pub fn studio_didnt_produce_movie(
    conn: &Connection,
    studio_id: i64,
    movie_name: &str,
    movie_year: i32,
) -> Result<(), OperationError> {
    let changed = in_transaction(conn, |tx| {
        Ok(tx.execute(
            "DELETE FROM productions
             WHERE studio_id = ?1 AND movie_name = ?2 AND movie_year = ?3",
            params![studio_id, movie_name, movie_year],
        )?)
    })?;
    expect_changed(changed, || {
        format!("production of '{movie_name}' ({movie_year}) by studio {studio_id}")
    })
}

// ── Helpers ─────────────────────────────────────────────────────────────────

/// Run `f` inside a transaction, committing only if it succeeds.
fn in_transaction<T>(
    conn: &Connection,
    f: impl FnOnce(&Connection) -> Result<T, OperationError>,
) -> Result<T, OperationError> {
    let tx = conn.unchecked_transaction()?;
    let value = f(&tx)?;
    tx.commit()?;
    Ok(value)
}

fn expect_changed(changed: usize, what: impl FnOnce() -> String) -> Result<(), OperationError> {
    if changed == 0 {
        return Err(OperationError::not_exists(what()));
    }
    Ok(())
}

/// Keep a lookup result only when it is unambiguous.
fn single_row<T>(mut rows: Vec<T>, what: impl FnOnce() -> String) -> Option<T> {
    match rows.len() {
        1 => rows.pop(),
        0 => None,
        n => {
            log::warn!("Lookup of {} matched {} rows", what(), n);
            None
        }
    }
}

// ── Row Mapping Helpers ─────────────────────────────────────────────────────

fn row_to_critic(row: &rusqlite::Row<'_>) -> rusqlite::Result<Critic> {
    Ok(Critic {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

fn row_to_actor(row: &rusqlite::Row<'_>) -> rusqlite::Result<Actor> {
    Ok(Actor {
        id: row.get(0)?,
        name: row.get(1)?,
        age: row.get(2)?,
        height: row.get(3)?,
    })
}

fn row_to_studio(row: &rusqlite::Row<'_>) -> rusqlite::Result<Studio> {
    Ok(Studio {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

/// Expects columns `name, year, genre` at positions 0..=2.
pub(crate) fn row_to_movie(row: &rusqlite::Row<'_>) -> rusqlite::Result<Movie> {
    Ok(Movie {
        name: row.get(0)?,
        year: row.get(1)?,
        genre: genre_column(row, 2)?,
    })
}

pub(crate) fn genre_column(row: &rusqlite::Row<'_>, idx: usize) -> rusqlite::Result<Genre> {
    let genre: String = row.get(idx)?;
    genre.parse().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}
