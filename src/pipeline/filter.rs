// Threshold filtering.
//
// Pure function of (records, thresholds). All three bounds are inclusive
// lower bounds; an empty result is a valid state the presenter turns into a
// "no matches" notice, never an error.

use serde::{Deserialize, Serialize};

use crate::data::models::ClusterRecord;
use crate::store::ThresholdBounds;

/// The three filter thresholds. Each is an inclusive lower bound.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Thresholds {
    pub min_score: f64,
    pub min_nps: f64,
    pub min_freq: u32,
}

impl Thresholds {
    /// The permissive defaults: each threshold at the bottom of its
    /// data-derived range, so the initial view shows everything.
    pub fn floor(bounds: &ThresholdBounds) -> Self {
        Self {
            min_score: bounds.score.0,
            min_nps: bounds.nps.0,
            min_freq: bounds.frequency.0,
        }
    }

    /// Clamp each threshold into its data-derived range. Used at the web
    /// boundary so hand-crafted query strings can't push a slider value
    /// outside the domain the UI was given.
    pub fn clamped(self, bounds: &ThresholdBounds) -> Self {
        Self {
            min_score: self.min_score.clamp(bounds.score.0, bounds.score.1),
            min_nps: self.min_nps.clamp(bounds.nps.0, bounds.nps.1),
            min_freq: self.min_freq.clamp(bounds.frequency.0, bounds.frequency.1),
        }
    }

    fn accepts(&self, c: &ClusterRecord) -> bool {
        c.score >= self.min_score && c.avg_nps >= self.min_nps && c.frequency >= self.min_freq
    }
}

/// Return the clusters satisfying all three thresholds, in input order.
pub fn apply(clusters: &[ClusterRecord], thresholds: &Thresholds) -> Vec<ClusterRecord> {
    clusters
        .iter()
        .filter(|c| thresholds.accepts(c))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cluster(id: i64, frequency: u32, avg_nps: f64, score: f64) -> ClusterRecord {
        ClusterRecord {
            cluster_id: id,
            summary: String::new(),
            frequency,
            avg_nps,
            avg_tier_weight: 2.0,
            score,
        }
    }

    fn sample() -> Vec<ClusterRecord> {
        vec![
            cluster(0, 12, 8.0, 43.2),
            cluster(1, 3, 4.5, 5.4),
            cluster(2, 25, 6.0, 60.0),
            cluster(3, 7, 9.5, 26.6),
        ]
    }

    #[test]
    fn test_all_three_bounds_are_conjunctive() {
        let t = Thresholds {
            min_score: 20.0,
            min_nps: 7.0,
            min_freq: 5,
        };
        let out = apply(&sample(), &t);
        // Only clusters 0 and 3 pass all three; 2 fails on NPS, 1 on all.
        let ids: Vec<i64> = out.iter().map(|c| c.cluster_id).collect();
        assert_eq!(ids, vec![0, 3]);
        for c in &out {
            assert!(c.score >= t.min_score && c.avg_nps >= t.min_nps && c.frequency >= t.min_freq);
        }
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let t = Thresholds {
            min_score: 60.0,
            min_nps: 6.0,
            min_freq: 25,
        };
        let out = apply(&sample(), &t);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].cluster_id, 2);
    }

    #[test]
    fn test_no_matches_is_empty_not_error() {
        let t = Thresholds {
            min_score: 0.0,
            min_nps: 0.0,
            min_freq: 1000,
        };
        assert!(apply(&sample(), &t).is_empty());
    }

    #[test]
    fn test_raising_a_threshold_never_grows_the_result() {
        let base = Thresholds {
            min_score: 10.0,
            min_nps: 5.0,
            min_freq: 2,
        };
        let baseline = apply(&sample(), &base).len();
        for min_score in [10.0, 30.0, 50.0, 70.0] {
            let t = Thresholds { min_score, ..base };
            assert!(apply(&sample(), &t).len() <= baseline);
        }
        for min_freq in [2, 8, 13, 26] {
            let t = Thresholds { min_freq, ..base };
            assert!(apply(&sample(), &t).len() <= baseline);
        }
    }

    #[test]
    fn test_clamped_pins_out_of_domain_values() {
        let bounds = crate::store::ThresholdBounds {
            score: (5.4, 60.0),
            nps: (4.5, 9.5),
            frequency: (1, 25),
        };
        let t = Thresholds {
            min_score: -10.0,
            min_nps: 42.0,
            min_freq: 9999,
        }
        .clamped(&bounds);
        assert_eq!(t.min_score, 5.4);
        assert_eq!(t.min_nps, 9.5);
        assert_eq!(t.min_freq, 25);
    }
}
