// API handlers for the dashboard.
//
// GET /api/status   — row counts and slider bounds
// GET /api/features — filtered, ranked view with example quotes
// GET /api/export   — the same view as a CSV download

use serde::Deserialize;

use crate::pipeline::Thresholds;
use crate::store::ThresholdBounds;

pub mod export;
pub mod features;
pub mod status;

/// Threshold query parameters shared by /api/features and /api/export.
/// Missing parameters fall back to the data-derived floor; supplied values
/// are clamped into the bounds the UI was given.
#[derive(Deserialize, Default)]
pub struct ThresholdQuery {
    pub min_score: Option<f64>,
    pub min_nps: Option<f64>,
    pub min_freq: Option<u32>,
}

impl ThresholdQuery {
    pub fn resolve(&self, bounds: &ThresholdBounds) -> Thresholds {
        let floor = Thresholds::floor(bounds);
        Thresholds {
            min_score: self.min_score.unwrap_or(floor.min_score),
            min_nps: self.min_nps.unwrap_or(floor.min_nps),
            min_freq: self.min_freq.unwrap_or(floor.min_freq),
        }
        .clamped(bounds)
    }
}
