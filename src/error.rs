//! Error types

use thiserror::Error;

/// Errors raised while resolving or rendering a page
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown page: {0} (available: about, technologies)")]
    UnknownPage(String),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
