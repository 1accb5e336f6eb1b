use cinedb_db::Connection;

use crate::CliError;
use crate::cli_types::MovieKey;

use super::report_outcome;

pub(crate) fn run_rate(
    conn: &Connection,
    movie: &MovieKey,
    critic_id: i64,
    rating: i32,
) -> Result<(), CliError> {
    report_outcome(cinedb_db::critic_rated_movie(
        conn,
        &movie.name,
        movie.year,
        critic_id,
        rating,
    ))
}

pub(crate) fn run_unrate(
    conn: &Connection,
    movie: &MovieKey,
    critic_id: i64,
) -> Result<(), CliError> {
    report_outcome(cinedb_db::critic_didnt_rate_movie(
        conn,
        &movie.name,
        movie.year,
        critic_id,
    ))
}

pub(crate) fn run_cast(
    conn: &Connection,
    movie: &MovieKey,
    actor_id: i64,
    salary: i64,
    roles: &[String],
) -> Result<(), CliError> {
    report_outcome(cinedb_db::actor_played_in_movie(
        conn,
        &movie.name,
        movie.year,
        actor_id,
        salary,
        roles,
    ))?;
    if !roles.is_empty() {
        log::info!("  Roles: {}", roles.join(", "));
    }
    Ok(())
}

pub(crate) fn run_uncast(
    conn: &Connection,
    movie: &MovieKey,
    actor_id: i64,
) -> Result<(), CliError> {
    report_outcome(cinedb_db::actor_didnt_play_in_movie(
        conn,
        &movie.name,
        movie.year,
        actor_id,
    ))
}

pub(crate) fn run_produce(
    conn: &Connection,
    studio_id: i64,
    movie: &MovieKey,
    budget: i64,
    revenue: i64,
) -> Result<(), CliError> {
    report_outcome(cinedb_db::studio_produced_movie(
        conn,
        studio_id,
        &movie.name,
        movie.year,
        budget,
        revenue,
    ))
}

pub(crate) fn run_unproduce(
    conn: &Connection,
    studio_id: i64,
    movie: &MovieKey,
) -> Result<(), CliError> {
    report_outcome(cinedb_db::studio_didnt_produce_movie(
        conn,
        studio_id,
        &movie.name,
        movie.year,
    ))
}
