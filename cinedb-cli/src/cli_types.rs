//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use cinedb_catalog::Genre;

#[derive(Parser)]
#[command(name = "cinedb")]
#[command(about = "Manage a database of movies, actors, critics and studios", long_about = None)]
pub(crate) struct Cli {
    /// SQLite database file (defaults to the configured path)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// A movie is identified by its title and release year.
#[derive(Args, Clone)]
pub(crate) struct MovieKey {
    /// Movie title
    pub name: String,

    /// Release year
    pub year: i32,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Create, drop or clear the database schema
    Schema {
        #[command(subcommand)]
        action: SchemaAction,
    },

    /// Manage critics
    Critic {
        #[command(subcommand)]
        action: CriticAction,
    },

    /// Manage actors
    Actor {
        #[command(subcommand)]
        action: ActorAction,
    },

    /// Manage movies
    Movie {
        #[command(subcommand)]
        action: MovieAction,
    },

    /// Manage studios
    Studio {
        #[command(subcommand)]
        action: StudioAction,
    },

    /// Record a critic's rating (1-5) of a movie
    #[command(allow_negative_numbers = true)]
    Rate {
        #[command(flatten)]
        movie: MovieKey,
        critic_id: i64,
        rating: i32,
    },

    /// Remove a critic's rating of a movie
    Unrate {
        #[command(flatten)]
        movie: MovieKey,
        critic_id: i64,
    },

    /// Cast an actor in a movie
    #[command(allow_negative_numbers = true)]
    Cast {
        #[command(flatten)]
        movie: MovieKey,
        actor_id: i64,
        salary: i64,

        /// Role played (repeat for several roles)
        #[arg(short, long = "role")]
        roles: Vec<String>,
    },

    /// Remove an actor from a movie's cast, along with their roles
    Uncast {
        #[command(flatten)]
        movie: MovieKey,
        actor_id: i64,
    },

    /// Record that a studio produced a movie
    #[command(allow_negative_numbers = true)]
    Produce {
        studio_id: i64,
        #[command(flatten)]
        movie: MovieKey,
        budget: i64,
        revenue: i64,
    },

    /// Remove a studio's production of a movie
    Unproduce {
        studio_id: i64,
        #[command(flatten)]
        movie: MovieKey,
    },

    /// Run an analytical report
    Report {
        #[command(subcommand)]
        report: ReportKind,
    },

    /// Load critics, actors, movies, studios and their relationships from YAML
    Seed {
        /// A seed file, or a directory of .yaml files
        path: PathBuf,
    },

    /// Show row counts for every table
    Stats,

    /// Manage CLI settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum SchemaAction {
    /// Create all tables and views (no-op when present)
    Create,

    /// Drop all tables and views
    Drop,

    /// Delete every row, keeping the schema
    Clear,
}

#[derive(Subcommand)]
pub(crate) enum CriticAction {
    /// Add a critic
    Add { id: i64, name: String },

    /// Delete a critic and their ratings
    Delete { id: i64 },

    /// Show a critic's profile
    Show { id: i64 },
}

#[derive(Subcommand)]
pub(crate) enum ActorAction {
    /// Add an actor
    #[command(allow_negative_numbers = true)]
    Add {
        id: i64,
        name: String,
        age: i32,
        /// Height in centimetres
        height: i32,
    },

    /// Delete an actor and their casts
    Delete { id: i64 },

    /// Show an actor's profile
    Show { id: i64 },
}

#[derive(Subcommand)]
pub(crate) enum MovieAction {
    /// Add a movie
    Add {
        #[command(flatten)]
        movie: MovieKey,

        /// Action, Comedy, Drama or Horror
        genre: Genre,
    },

    /// Delete a movie with its ratings, casts and productions
    Delete {
        #[command(flatten)]
        movie: MovieKey,
    },

    /// Show a movie's profile
    Show {
        #[command(flatten)]
        movie: MovieKey,
    },
}

#[derive(Subcommand)]
pub(crate) enum StudioAction {
    /// Add a studio
    Add { id: i64, name: String },

    /// Delete a studio and its productions
    Delete { id: i64 },

    /// Show a studio's profile
    Show { id: i64 },
}

#[derive(Subcommand)]
pub(crate) enum ReportKind {
    /// Average critic rating of a movie
    AverageRating {
        #[command(flatten)]
        movie: MovieKey,
    },

    /// Average rating across an actor's movies
    ActorRating { actor_id: i64 },

    /// An actor's best rated movie
    BestPerformance { actor_id: i64 },

    /// Production budget left after cast salaries
    CrewBudget {
        #[command(flatten)]
        movie: MovieKey,
    },

    /// Whether an actor holds at least half of a movie's roles
    OverlyInvested {
        #[command(flatten)]
        movie: MovieKey,
        actor_id: i64,
    },

    /// Revenue per movie title across all years
    Franchise,

    /// Revenue per studio per year
    StudioYears,

    /// Critics who rated every movie a studio produced
    FanCritics,

    /// Average actor age per genre
    GenreAges,

    /// Actors whose movies were all produced by one studio
    ExclusiveActors,
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the settings file and the database path in use
    Show,

    /// Print the settings file path
    Path,

    /// Save a default database path
    SetDb { path: PathBuf },

    /// Forget the saved database path
    ClearDb,
}
