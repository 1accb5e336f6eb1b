//! Data model types for the movie database.
//!
//! These types represent the persistent schema: critics, actors, movies,
//! studios, the relationships between them, and the rows returned by the
//! report queries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ── Critic ──────────────────────────────────────────────────────────────────

/// A film critic who rates movies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Critic {
    pub id: i64,
    pub name: String,
}

impl Critic {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

// ── Actor ───────────────────────────────────────────────────────────────────

/// An actor. Id, age and height must all be positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: i64,
    pub name: String,
    pub age: i32,
    /// Height in centimetres.
    pub height: i32,
}

impl Actor {
    pub fn new(id: i64, name: impl Into<String>, age: i32, height: i32) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            height,
        }
    }
}

// ── Movie ───────────────────────────────────────────────────────────────────

/// A movie, identified by its name and release year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub name: String,
    pub year: i32,
    pub genre: Genre,
}

impl Movie {
    pub fn new(name: impl Into<String>, year: i32, genre: Genre) -> Self {
        Self {
            name: name.into(),
            year,
            genre,
        }
    }
}

/// Movie genres accepted by the `movies` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Comedy,
    Drama,
    Horror,
}

impl Genre {
    pub const ALL: [Genre; 4] = [Genre::Action, Genre::Comedy, Genre::Drama, Genre::Horror];

    /// The spelling stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Action => "Action",
            Self::Comedy => "Comedy",
            Self::Drama => "Drama",
            Self::Horror => "Horror",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown genre '{0}' (expected one of Action, Comedy, Drama, Horror)")]
pub struct ParseGenreError(pub String);

impl FromStr for Genre {
    type Err = ParseGenreError;

    /// Case-insensitive, so CLI input like `horror` is accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genre::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseGenreError(s.to_string()))
    }
}

// ── Studio ──────────────────────────────────────────────────────────────────

/// A production studio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Studio {
    pub id: i64,
    pub name: String,
}

impl Studio {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

// ── Relationships ───────────────────────────────────────────────────────────

/// A critic's rating (1 to 5) of a movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    pub movie_name: String,
    pub movie_year: i32,
    pub critic_id: i64,
    pub rating: i32,
}

/// An actor's appearance in a movie, with the roles they played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cast {
    pub movie_name: String,
    pub movie_year: i32,
    pub actor_id: i64,
    pub salary: i64,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// A studio's production of a movie. A movie has at most one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Production {
    pub studio_id: i64,
    pub movie_name: String,
    pub movie_year: i32,
    pub budget: i64,
    pub revenue: i64,
}

// ── Report Rows ─────────────────────────────────────────────────────────────

/// Total production revenue of every movie sharing a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FranchiseRevenue {
    pub movie_name: String,
    pub revenue: i64,
}

/// A studio's total revenue for movies released in one year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudioYearRevenue {
    pub studio_id: i64,
    pub year: i32,
    pub revenue: i64,
}

/// A critic who rated every movie a studio produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FanCritic {
    pub critic_id: i64,
    pub studio_id: i64,
}

/// Average age of the distinct actors cast in movies of a genre.
#[derive(Debug, Clone, PartialEq)]
pub struct GenreAge {
    pub genre: Genre,
    pub average_age: f64,
}

/// An actor whose every movie was produced by the same studio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExclusiveActor {
    pub actor_id: i64,
    pub studio_id: i64,
}

// ── Seed Data ───────────────────────────────────────────────────────────────

/// Contents of a YAML seed file. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub critics: Vec<Critic>,
    #[serde(default)]
    pub actors: Vec<Actor>,
    #[serde(default)]
    pub movies: Vec<Movie>,
    #[serde(default)]
    pub studios: Vec<Studio>,
    #[serde(default)]
    pub ratings: Vec<Rating>,
    #[serde(default)]
    pub casts: Vec<Cast>,
    #[serde(default)]
    pub productions: Vec<Production>,
}

impl SeedData {
    pub fn is_empty(&self) -> bool {
        self.critics.is_empty()
            && self.actors.is_empty()
            && self.movies.is_empty()
            && self.studios.is_empty()
            && self.ratings.is_empty()
            && self.casts.is_empty()
            && self.productions.is_empty()
    }
}
