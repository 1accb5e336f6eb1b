//! Analytical queries over ratings, casts and productions.
//!
//! Basic queries answer a question about one movie or actor; the report
//! queries return ordered rows covering the whole database.

use cinedb_catalog::types::*;
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::OperationError;
use crate::operations::{genre_column, row_to_movie};

// ── Basic Queries ───────────────────────────────────────────────────────────

/// Mean rating of a movie, or 0.0 if it has no ratings or does not exist.
pub fn average_rating(
    conn: &Connection,
    movie_name: &str,
    movie_year: i32,
) -> Result<f64, OperationError> {
    let avg: f64 = conn.query_row(
        "SELECT COALESCE(AVG(rating), 0.0) FROM ratings
         WHERE movie_name = ?1 AND movie_year = ?2",
        params![movie_name, movie_year],
        |row| row.get(0),
    )?;
    Ok(avg)
}

/// Mean of the average ratings of every movie the actor is cast in.
///
/// Unrated movies contribute 0. Returns 0.0 for an actor with no casts.
pub fn average_actor_rating(conn: &Connection, actor_id: i64) -> Result<f64, OperationError> {
    let avg: f64 = conn.query_row(
        "SELECT COALESCE(AVG(COALESCE(mr.avg_rating, 0.0)), 0.0)
         FROM casts c
         JOIN movie_ratings mr ON mr.movie_name = c.movie_name AND mr.movie_year = c.movie_year
         WHERE c.actor_id = ?1",
        params![actor_id],
        |row| row.get(0),
    )?;
    Ok(avg)
}

/// The actor's best-rated movie.
///
/// Unrated movies rank below any rated one. Ties go to the earlier year,
/// then to the lexicographically larger name. `None` if the actor was never
/// cast.
pub fn best_performance(conn: &Connection, actor_id: i64) -> Result<Option<Movie>, OperationError> {
    conn.query_row(
        "SELECT m.name, m.year, m.genre
         FROM casts c
         JOIN movies m ON m.name = c.movie_name AND m.year = c.movie_year
         JOIN movie_ratings mr ON mr.movie_name = m.name AND mr.movie_year = m.year
         WHERE c.actor_id = ?1
         ORDER BY COALESCE(mr.avg_rating, -1) DESC, m.year ASC, m.name DESC
         LIMIT 1",
        params![actor_id],
        row_to_movie,
    )
    .optional()
    .map_err(Into::into)
}

/// Production budget minus total cast salaries.
///
/// An unproduced movie has a budget of 0, so the result may be negative.
/// `None` if the movie does not exist.
pub fn stage_crew_budget(
    conn: &Connection,
    movie_name: &str,
    movie_year: i32,
) -> Result<Option<i64>, OperationError> {
    conn.query_row(
        "SELECT COALESCE(p.budget, 0) - ts.total_salary
         FROM total_salaries ts
         LEFT JOIN productions p ON p.movie_name = ts.movie_name AND p.movie_year = ts.movie_year
         WHERE ts.movie_name = ?1 AND ts.movie_year = ?2",
        params![movie_name, movie_year],
        |row| row.get(0),
    )
    .optional()
    .map_err(Into::into)
}

/// Whether the actor holds at least half of the movie's roles.
///
/// False when the movie or actor is missing, or the actor has no roles in it.
pub fn overly_invested_in_movie(
    conn: &Connection,
    movie_name: &str,
    movie_year: i32,
    actor_id: i64,
) -> Result<bool, OperationError> {
    let invested: bool = conn.query_row(
        "SELECT EXISTS(
             SELECT 1 FROM total_actor_roles t
             WHERE t.movie_name = ?1 AND t.movie_year = ?2 AND t.actor_id = ?3
               AND t.role_count > 0
               AND 2 * t.role_count >= (
                   SELECT SUM(role_count) FROM total_actor_roles
                   WHERE movie_name = ?1 AND movie_year = ?2))",
        params![movie_name, movie_year, actor_id],
        |row| row.get(0),
    )?;
    Ok(invested)
}

// ── Reports ─────────────────────────────────────────────────────────────────

/// Total revenue per movie name, pooling every year that name was released.
///
/// Unproduced movies contribute 0. Ordered by name, descending.
pub fn franchise_revenue(conn: &Connection) -> Result<Vec<FranchiseRevenue>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT m.name, COALESCE(SUM(p.revenue), 0)
         FROM movies m
         LEFT JOIN productions p ON p.movie_name = m.name AND p.movie_year = m.year
         GROUP BY m.name
         ORDER BY m.name DESC",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(FranchiseRevenue {
            movie_name: row.get(0)?,
            revenue: row.get(1)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Total revenue per studio and release year, ordered studio then year,
/// both descending.
pub fn studio_revenue_by_year(
    conn: &Connection,
) -> Result<Vec<StudioYearRevenue>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT studio_id, movie_year, SUM(revenue)
         FROM productions
         GROUP BY studio_id, movie_year
         ORDER BY studio_id DESC, movie_year DESC",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(StudioYearRevenue {
            studio_id: row.get(0)?,
            year: row.get(1)?,
            revenue: row.get(2)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Critics who rated every movie a studio produced.
///
/// Studios without productions have no fans. Ordered critic then studio,
/// both descending.
pub fn get_fan_critics(conn: &Connection) -> Result<Vec<FanCritic>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT r.critic_id, p.studio_id
         FROM productions p
         JOIN ratings r ON r.movie_name = p.movie_name AND r.movie_year = p.movie_year
         GROUP BY r.critic_id, p.studio_id
         HAVING COUNT(*) = (SELECT COUNT(*) FROM productions p2 WHERE p2.studio_id = p.studio_id)
         ORDER BY r.critic_id DESC, p.studio_id DESC",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(FanCritic {
            critic_id: row.get(0)?,
            studio_id: row.get(1)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Average age of the distinct actors cast in each genre, by genre ascending.
///
/// An actor in several movies of one genre counts once for that genre.
pub fn average_age_by_genre(conn: &Connection) -> Result<Vec<GenreAge>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT genre, AVG(age)
         FROM (
             SELECT DISTINCT m.genre AS genre, ac.actor_id AS actor_id, ac.age AS age
             FROM actor_casts ac
             JOIN movies m ON m.name = ac.movie_name AND m.year = ac.movie_year
         )
         GROUP BY genre
         ORDER BY genre ASC",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(GenreAge {
            genre: genre_column(row, 0)?,
            average_age: row.get(1)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Actors whose every movie was produced, all by the same studio.
///
/// Ordered by actor, descending.
pub fn get_exclusive_actors(conn: &Connection) -> Result<Vec<ExclusiveActor>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT c.actor_id, MIN(p.studio_id)
         FROM casts c
         LEFT JOIN productions p ON p.movie_name = c.movie_name AND p.movie_year = c.movie_year
         GROUP BY c.actor_id
         HAVING COUNT(p.studio_id) = COUNT(*) AND COUNT(DISTINCT p.studio_id) = 1
         ORDER BY c.actor_id DESC",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(ExclusiveActor {
            actor_id: row.get(0)?,
            studio_id: row.get(1)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

// ── Statistics ──────────────────────────────────────────────────────────────

/// Row counts for every table.
pub fn database_stats(conn: &Connection) -> Result<DatabaseStats, OperationError> {
    let count = |table: &str| -> Result<i64, OperationError> {
        Ok(conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |r| r.get(0))?)
    };

    Ok(DatabaseStats {
        critics: count("critics")?,
        actors: count("actors")?,
        movies: count("movies")?,
        studios: count("studios")?,
        ratings: count("ratings")?,
        casts: count("casts")?,
        roles: count("roles")?,
        productions: count("productions")?,
    })
}

/// Summary statistics for the database.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DatabaseStats {
    pub critics: i64,
    pub actors: i64,
    pub movies: i64,
    pub studios: i64,
    pub ratings: i64,
    pub casts: i64,
    pub roles: i64,
    pub productions: i64,
}
