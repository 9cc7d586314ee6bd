//! Error types for Meadowlark

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Tour not found: {0}")]
    TourNotFound(String),

    #[error("Duplicate tour id in seed: {0}")]
    DuplicateTourId(u64),

    #[error("No acceptable representation for: {0}")]
    Unacceptable(String),

    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
