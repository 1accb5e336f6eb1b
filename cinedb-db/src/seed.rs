//! Bulk loading of YAML seed data.

use cinedb_catalog::types::SeedData;
use rusqlite::{params, Connection};

use crate::error::OperationError;
use crate::operations::*;

/// Statistics from seeding the database.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedStats {
    pub inserted: usize,
    /// Rows that were already present and left untouched.
    pub skipped: usize,
}

/// Load a seed file (or directory of seed files) into the database.
pub fn seed_from_file(
    conn: &Connection,
    path: &std::path::Path,
) -> Result<SeedStats, OperationError> {
    let data = cinedb_catalog::load_seed(path)?;
    seed(conn, &data)
}

/// Insert seed data through the regular CRUD operations.
///
/// Entities go in before the relationships that reference them. Rows that
/// already exist are skipped, so seeding the same data twice is harmless.
/// A row that collides with different stored data (such as a second studio
/// for an already produced movie) stops seeding with `AlreadyExists`, as
/// does any other failure; rows inserted before it are kept.
pub fn seed(conn: &Connection, data: &SeedData) -> Result<SeedStats, OperationError> {
    let mut stats = SeedStats::default();

    for critic in &data.critics {
        tally(&mut stats, "critic", add_critic(conn, critic), || Ok(true))?;
    }
    for actor in &data.actors {
        tally(&mut stats, "actor", add_actor(conn, actor), || Ok(true))?;
    }
    for movie in &data.movies {
        tally(&mut stats, "movie", add_movie(conn, movie), || Ok(true))?;
    }
    for studio in &data.studios {
        tally(&mut stats, "studio", add_studio(conn, studio), || Ok(true))?;
    }

    for r in &data.ratings {
        let result = critic_rated_movie(conn, &r.movie_name, r.movie_year, r.critic_id, r.rating);
        tally(&mut stats, "rating", result, || {
            row_exists(
                conn,
                "SELECT EXISTS(SELECT 1 FROM ratings
                 WHERE movie_name = ?1 AND movie_year = ?2 AND critic_id = ?3)",
                params![r.movie_name, r.movie_year, r.critic_id],
            )
        })?;
    }
    for c in &data.casts {
        let roles = distinct_roles(&c.roles);
        let result = actor_played_in_movie(
            conn,
            &c.movie_name,
            c.movie_year,
            c.actor_id,
            c.salary,
            &roles,
        );
        tally(&mut stats, "cast", result, || {
            row_exists(
                conn,
                "SELECT EXISTS(SELECT 1 FROM casts
                 WHERE movie_name = ?1 AND movie_year = ?2 AND actor_id = ?3)",
                params![c.movie_name, c.movie_year, c.actor_id],
            )
        })?;
    }
    for p in &data.productions {
        let result = studio_produced_movie(
            conn,
            p.studio_id,
            &p.movie_name,
            p.movie_year,
            p.budget,
            p.revenue,
        );
        // A movie produced by a different studio is a conflict, not a repeat.
        tally(&mut stats, "production", result, || {
            row_exists(
                conn,
                "SELECT EXISTS(SELECT 1 FROM productions
                 WHERE movie_name = ?1 AND movie_year = ?2 AND studio_id = ?3)",
                params![p.movie_name, p.movie_year, p.studio_id],
            )
        })?;
    }

    log::debug!(
        "Seeded {} row(s), skipped {} existing",
        stats.inserted,
        stats.skipped
    );
    Ok(stats)
}

/// Count one seed row.
///
/// `AlreadyExists` is only a skip when `already_present` confirms the row
/// is stored; otherwise the seed conflicts with the database and the error
/// is returned.
fn tally(
    stats: &mut SeedStats,
    kind: &str,
    result: Result<(), OperationError>,
    already_present: impl FnOnce() -> Result<bool, OperationError>,
) -> Result<(), OperationError> {
    match result {
        Ok(()) => {
            stats.inserted += 1;
            Ok(())
        }
        Err(OperationError::AlreadyExists(detail)) => {
            if !already_present()? {
                return Err(OperationError::AlreadyExists(detail));
            }
            log::warn!("Skipping existing {kind}: {detail}");
            stats.skipped += 1;
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn row_exists(
    conn: &Connection,
    sql: &str,
    params: impl rusqlite::Params,
) -> Result<bool, OperationError> {
    Ok(conn.query_row(sql, params, |row| row.get(0))?)
}

/// Seed files may repeat a role; keep the first occurrence of each.
fn distinct_roles(roles: &[String]) -> Vec<String> {
    let mut distinct: Vec<String> = Vec::with_capacity(roles.len());
    for role in roles {
        if !distinct.contains(role) {
            distinct.push(role.clone());
        }
    }
    if distinct.len() < roles.len() {
        log::debug!("Dropped {} repeated role(s)", roles.len() - distinct.len());
    }
    distinct
}
