//! Storage layer for tours

mod tour_store;

pub use tour_store::{parse_tour_id, TourStore};
