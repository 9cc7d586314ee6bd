//! Core types for Meadowlark

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A tour in the catalogue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Tour {
    /// Identifier assigned when the catalogue is seeded
    pub id: u64,
    /// Human-readable label
    pub name: String,
    /// Price in dollars
    pub price: f64,
}

impl Tour {
    pub fn new(id: u64, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }

    /// Apply the fields present in `patch`, leaving the rest untouched
    pub fn apply(&mut self, patch: TourPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
    }
}

/// Partial update for a single tour
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TourPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
}

impl TourPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none()
    }
}

/// The catalogue a fresh process starts with
pub fn default_tours() -> Vec<Tour> {
    vec![
        Tour::new(0, "HoodRiver", 99.99),
        Tour::new(1, "OregonCoast", 149.95),
    ]
}
