//! Movie database data model types and YAML seed loading.
//!
//! This crate defines the entities and report rows of the movie database
//! without any database dependencies. Consumers can use these types directly
//! for serialization, display, or passing to `cinedb-db` for persistence.

pub mod types;
pub mod yaml;

pub use types::*;
pub use yaml::{load_seed, parse_seed, YamlError};
