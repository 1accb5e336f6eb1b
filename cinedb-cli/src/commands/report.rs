use cinedb_db::{Connection, OperationError};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::cli_types::ReportKind;

fn query<T>(result: Result<T, OperationError>) -> Result<T, CliError> {
    result.map_err(|e| CliError::database(format!("Report failed: {}", e)))
}

fn heading(title: &str) {
    log::info!("{}", title.if_supports_color(Stdout, |t| t.bold()));
}

fn log_empty(rows: usize) {
    if rows == 0 {
        log::info!("  {}", "(no rows)".if_supports_color(Stdout, |t| t.dimmed()));
    }
}

pub(crate) fn run_report(conn: &Connection, report: ReportKind) -> Result<(), CliError> {
    match report {
        ReportKind::AverageRating { movie } => {
            let avg = query(cinedb_db::average_rating(conn, &movie.name, movie.year))?;
            log::info!("{:.2}", avg);
        }
        ReportKind::ActorRating { actor_id } => {
            let avg = query(cinedb_db::average_actor_rating(conn, actor_id))?;
            log::info!("{:.2}", avg);
        }
        ReportKind::BestPerformance { actor_id } => {
            match query(cinedb_db::best_performance(conn, actor_id))? {
                Some(movie) => log::info!(
                    "{} ({}) [{}]",
                    movie.name.if_supports_color(Stdout, |t| t.bold()),
                    movie.year,
                    movie.genre,
                ),
                None => log::warn!("Actor {} has not been cast in any movie", actor_id),
            }
        }
        ReportKind::CrewBudget { movie } => {
            match query(cinedb_db::stage_crew_budget(conn, &movie.name, movie.year))? {
                Some(budget) => log::info!("{}", budget),
                None => log::warn!("No movie '{}' from {}", movie.name, movie.year),
            }
        }
        ReportKind::OverlyInvested { movie, actor_id } => {
            let invested = query(cinedb_db::overly_invested_in_movie(
                conn,
                &movie.name,
                movie.year,
                actor_id,
            ))?;
            log::info!("{}", invested);
        }
        ReportKind::Franchise => {
            let rows = query(cinedb_db::franchise_revenue(conn))?;
            heading("Revenue by title");
            for row in &rows {
                log::info!("  {:<40} {:>14}", row.movie_name, row.revenue);
            }
            log_empty(rows.len());
        }
        ReportKind::StudioYears => {
            let rows = query(cinedb_db::studio_revenue_by_year(conn))?;
            heading("Revenue by studio and year");
            for row in &rows {
                log::info!("  studio {:>6}  {}  {:>14}", row.studio_id, row.year, row.revenue);
            }
            log_empty(rows.len());
        }
        ReportKind::FanCritics => {
            let rows = query(cinedb_db::get_fan_critics(conn))?;
            heading("Fan critics");
            for row in &rows {
                log::info!("  critic {:>6} -> studio {}", row.critic_id, row.studio_id);
            }
            log_empty(rows.len());
        }
        ReportKind::GenreAges => {
            let rows = query(cinedb_db::average_age_by_genre(conn))?;
            heading("Average actor age by genre");
            for row in &rows {
                log::info!("  {:<8} {:>6.1}", row.genre.as_str(), row.average_age);
            }
            log_empty(rows.len());
        }
        ReportKind::ExclusiveActors => {
            let rows = query(cinedb_db::get_exclusive_actors(conn))?;
            heading("Exclusive actors");
            for row in &rows {
                log::info!("  actor {:>6} -> studio {}", row.actor_id, row.studio_id);
            }
            log_empty(rows.len());
        }
    }
    Ok(())
}
