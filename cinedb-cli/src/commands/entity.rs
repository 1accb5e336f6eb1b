use cinedb_catalog::{Actor, Critic, Movie, Studio};
use cinedb_db::Connection;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::cli_types::{ActorAction, CriticAction, MovieAction, StudioAction};

use super::report_outcome;

/// Profile lookups only fail on database errors; absence is just a warning.
fn lookup<T>(result: Result<Option<T>, cinedb_db::OperationError>) -> Result<Option<T>, CliError> {
    result.map_err(|e| CliError::database(format!("Lookup failed: {}", e)))
}

pub(crate) fn run_critic(conn: &Connection, action: CriticAction) -> Result<(), CliError> {
    match action {
        CriticAction::Add { id, name } => {
            report_outcome(cinedb_db::add_critic(conn, &Critic::new(id, name)))
        }
        CriticAction::Delete { id } => report_outcome(cinedb_db::delete_critic(conn, id)),
        CriticAction::Show { id } => {
            match lookup(cinedb_db::get_critic_profile(conn, id))? {
                Some(critic) => {
                    log::info!("{}", critic.name.if_supports_color(Stdout, |t| t.bold()));
                    log::info!("  ID: {}", critic.id);
                }
                None => log::warn!("No critic with id {}", id),
            }
            Ok(())
        }
    }
}

pub(crate) fn run_actor(conn: &Connection, action: ActorAction) -> Result<(), CliError> {
    match action {
        ActorAction::Add {
            id,
            name,
            age,
            height,
        } => report_outcome(cinedb_db::add_actor(conn, &Actor::new(id, name, age, height))),
        ActorAction::Delete { id } => report_outcome(cinedb_db::delete_actor(conn, id)),
        ActorAction::Show { id } => {
            match lookup(cinedb_db::get_actor_profile(conn, id))? {
                Some(actor) => {
                    log::info!("{}", actor.name.if_supports_color(Stdout, |t| t.bold()));
                    log::info!("  ID:     {}", actor.id);
                    log::info!("  Age:    {}", actor.age);
                    log::info!("  Height: {} cm", actor.height);
                }
                None => log::warn!("No actor with id {}", id),
            }
            Ok(())
        }
    }
}

pub(crate) fn run_movie(conn: &Connection, action: MovieAction) -> Result<(), CliError> {
    match action {
        MovieAction::Add { movie, genre } => {
            report_outcome(cinedb_db::add_movie(conn, &Movie::new(movie.name, movie.year, genre)))
        }
        MovieAction::Delete { movie } => {
            report_outcome(cinedb_db::delete_movie(conn, &movie.name, movie.year))
        }
        MovieAction::Show { movie } => {
            match lookup(cinedb_db::get_movie_profile(conn, &movie.name, movie.year))? {
                Some(found) => {
                    log::info!(
                        "{} ({})",
                        found.name.if_supports_color(Stdout, |t| t.bold()),
                        found.year,
                    );
                    log::info!(
                        "  Genre: {}",
                        found.genre.if_supports_color(Stdout, |t| t.cyan())
                    );
                }
                None => log::warn!("No movie '{}' from {}", movie.name, movie.year),
            }
            Ok(())
        }
    }
}

pub(crate) fn run_studio(conn: &Connection, action: StudioAction) -> Result<(), CliError> {
    match action {
        StudioAction::Add { id, name } => {
            report_outcome(cinedb_db::add_studio(conn, &Studio::new(id, name)))
        }
        StudioAction::Delete { id } => report_outcome(cinedb_db::delete_studio(conn, id)),
        StudioAction::Show { id } => {
            match lookup(cinedb_db::get_studio_profile(conn, id))? {
                Some(studio) => {
                    log::info!("{}", studio.name.if_supports_color(Stdout, |t| t.bold()));
                    log::info!("  ID: {}", studio.id);
                }
                None => log::warn!("No studio with id {}", id),
            }
            Ok(())
        }
    }
}
