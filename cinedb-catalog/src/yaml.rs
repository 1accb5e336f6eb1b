//! YAML loading for seed data.
//!
//! A seed is either a single YAML file or a directory of them. Each file is
//! a mapping with any of the sections `critics`, `actors`, `movies`,
//! `studios`, `ratings`, `casts` and `productions`.

use crate::types::SeedData;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum YamlError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("YAML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_yml::Error,
    },
    #[error("Seed path not found: {0}")]
    NotFound(String),
}

/// Load seed data from a file, or from every `.yaml`/`.yml` file in a
/// directory (in file-name order, sections concatenated).
pub fn load_seed(path: &Path) -> Result<SeedData, YamlError> {
    if !path.exists() {
        return Err(YamlError::NotFound(path.display().to_string()));
    }
    if !path.is_dir() {
        return load_seed_file(path);
    }

    let mut entries: Vec<_> = std::fs::read_dir(path)
        .map_err(|e| YamlError::Io {
            path: path.display().to_string(),
            source: e,
        })?
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.path()
                .extension()
                .is_some_and(|ext| ext == "yaml" || ext == "yml")
        })
        .collect();
    entries.sort_by_key(|e| e.file_name());

    let mut all = SeedData::default();
    for entry in entries {
        let seed = load_seed_file(&entry.path())?;
        all.critics.extend(seed.critics);
        all.actors.extend(seed.actors);
        all.movies.extend(seed.movies);
        all.studios.extend(seed.studios);
        all.ratings.extend(seed.ratings);
        all.casts.extend(seed.casts);
        all.productions.extend(seed.productions);
    }

    Ok(all)
}

/// Parse seed data from a YAML string. `origin` is only used in errors.
pub fn parse_seed(contents: &str, origin: &str) -> Result<SeedData, YamlError> {
    // An empty document deserializes as null rather than an empty mapping.
    if contents.trim().is_empty() {
        return Ok(SeedData::default());
    }
    serde_yml::from_str(contents).map_err(|e| YamlError::Parse {
        path: origin.to_string(),
        source: e,
    })
}

fn load_seed_file(path: &Path) -> Result<SeedData, YamlError> {
    let contents = std::fs::read_to_string(path).map_err(|e| YamlError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_seed(&contents, &path.display().to_string())
}
