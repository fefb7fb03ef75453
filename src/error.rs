use thiserror::Error;

use crate::tree::Rank;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid document tree JSON: {0}")]
    Interchange(#[from] serde_json::Error),
}

/// A tree handed to the generator breaks the nesting rules the parser enforces.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Heading '{title}' ({child}) is nested under a {parent}")]
    HeadingOutOfOrder {
        parent: Rank,
        child: Rank,
        title: String,
    },

    #[error("Heading '{title}' is nested inside a list item")]
    HeadingInList { title: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Toml {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}
