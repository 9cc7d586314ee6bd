//! Meadowlark - Tour catalogue API with content-negotiated listings

pub mod config;
pub mod error;
pub mod types;

pub mod store;
pub mod representation;
pub mod api;

pub use config::Config;
pub use error::{Error, Result};
pub use types::*;
