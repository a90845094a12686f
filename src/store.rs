// Read-only feature store.
//
// Both input tables are loaded once at startup and never mutated. The store
// is handed explicitly to the pipeline and the presenters — there is no
// ambient global state. Threshold bounds are derived from the data here so
// filter controls can never offer an out-of-domain value.

use serde::Serialize;

use crate::config::Config;
use crate::data::loader::{self, DataLoadError};
use crate::data::models::{ClusterRecord, FeedbackRecord, UNCATEGORIZED_CLUSTER};

/// Inclusive (min, max) ranges for the three filterable columns, derived
/// from the loaded cluster table. These drive slider ranges in the web UI
/// and default thresholds everywhere.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ThresholdBounds {
    pub score: (f64, f64),
    pub nps: (f64, f64),
    pub frequency: (u32, u32),
}

impl ThresholdBounds {
    fn from_clusters(clusters: &[ClusterRecord]) -> Self {
        if clusters.is_empty() {
            // Degenerate but valid: an empty table filters to an empty view.
            return Self {
                score: (0.0, 0.0),
                nps: (0.0, 10.0),
                frequency: (1, 1),
            };
        }

        let mut bounds = Self {
            score: (f64::INFINITY, f64::NEG_INFINITY),
            nps: (f64::INFINITY, f64::NEG_INFINITY),
            frequency: (u32::MAX, 0),
        };
        for c in clusters {
            bounds.score = (bounds.score.0.min(c.score), bounds.score.1.max(c.score));
            bounds.nps = (bounds.nps.0.min(c.avg_nps), bounds.nps.1.max(c.avg_nps));
            bounds.frequency = (
                bounds.frequency.0.min(c.frequency),
                bounds.frequency.1.max(c.frequency),
            );
        }
        // Frequency keeps a fixed floor of 1 so the default threshold is
        // always a meaningful "at least one mention".
        bounds.frequency.0 = 1;
        bounds.frequency.1 = bounds.frequency.1.max(1);
        bounds
    }
}

/// Immutable holder of the two input tables plus derived bounds.
pub struct FeatureStore {
    clusters: Vec<ClusterRecord>,
    feedback: Vec<FeedbackRecord>,
    bounds: ThresholdBounds,
}

impl FeatureStore {
    /// Load both tables from the configured CSV paths.
    pub fn load(config: &Config) -> Result<Self, DataLoadError> {
        let clusters = loader::load_clusters(&config.cluster_path)?;
        let feedback = loader::load_feedback(&config.feedback_path)?;
        tracing::info!(
            clusters = clusters.len(),
            feedback = feedback.len(),
            "loaded input tables"
        );
        Ok(Self::from_parts(clusters, feedback))
    }

    /// Build a store from already-materialized records (tests, embedding).
    pub fn from_parts(clusters: Vec<ClusterRecord>, feedback: Vec<FeedbackRecord>) -> Self {
        let bounds = ThresholdBounds::from_clusters(&clusters);
        Self {
            clusters,
            feedback,
            bounds,
        }
    }

    pub fn clusters(&self) -> &[ClusterRecord] {
        &self.clusters
    }

    pub fn feedback(&self) -> &[FeedbackRecord] {
        &self.feedback
    }

    pub fn bounds(&self) -> &ThresholdBounds {
        &self.bounds
    }

    /// Feedback rows the offline pipeline couldn't assign to a cluster.
    pub fn uncategorized_count(&self) -> usize {
        self.feedback
            .iter()
            .filter(|f| f.cluster == UNCATEGORIZED_CLUSTER)
            .count()
    }
}
