//! SQLite persistence layer for the movie database.
//!
//! Provides schema management, CRUD operations, analytical queries and
//! seeding, backed by SQLite (via rusqlite with bundled feature).

pub mod error;
pub mod operations;
pub mod queries;
pub mod schema;
pub mod seed;

pub use rusqlite::Connection;

pub use error::{OperationError, ReturnValue};
pub use operations::{
    actor_didnt_play_in_movie, actor_played_in_movie, add_actor, add_critic, add_movie,
    add_studio, critic_didnt_rate_movie, critic_rated_movie, delete_actor, delete_critic,
    delete_movie, delete_studio, get_actor_profile, get_critic_profile, get_movie_profile,
    get_studio_profile, roles_for_cast, studio_didnt_produce_movie, studio_produced_movie,
};
pub use queries::{
    average_actor_rating, average_age_by_genre, average_rating, best_performance,
    database_stats, franchise_revenue, get_exclusive_actors, get_fan_critics,
    overly_invested_in_movie, stage_crew_budget, studio_revenue_by_year, DatabaseStats,
};
pub use schema::{clear_data, create_schema, drop_schema, open_database, open_memory, SchemaError};
pub use seed::{seed, seed_from_file, SeedStats};
