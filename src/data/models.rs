// Data models — Rust structs that map to rows of the two input tables.
//
// These are the types that flow through the application. They're separate
// from the CSV loading code so other modules can use them without depending
// on the csv crate directly.

use serde::{Deserialize, Serialize};

/// Sentinel cluster id for feedback the offline pipeline couldn't categorize.
///
/// Producer runs are inconsistent about the cluster identifier: some emit a
/// numeric `cluster_id` column, others a `topic_cluster` label ("Cluster 3",
/// "Miscellaneous"). The loader canonicalizes everything to an `i64` and
/// parks non-numeric labels in this bucket.
pub const UNCATEGORIZED_CLUSTER: i64 = -1;

/// One feature cluster from the prioritization table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterRecord {
    pub cluster_id: i64,
    /// Human-readable theme summary produced offline.
    pub summary: String,
    /// Count of feedback mentions in this cluster.
    pub frequency: u32,
    /// Average Net Promoter Score (0-10) across the cluster.
    pub avg_nps: f64,
    /// Average customer tier weight (Free=1, SMB=2, Enterprise=3).
    pub avg_tier_weight: f64,
    /// Precomputed priority score. Trusted as-is; see [`priority_score`].
    pub score: f64,
}

/// One verbatim comment from the raw feedback table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub text: String,
    /// Foreign key into [`ClusterRecord::cluster_id`].
    pub cluster: i64,
}

/// The priority score formula the offline pipeline uses:
///
/// `frequency × (1 + avg_tier_weight) × avg_nps ÷ 10`
///
/// The stored `score` column is authoritative — this is only used to warn
/// about producer drift at load time and for display checks in tests.
pub fn priority_score(frequency: u32, avg_tier_weight: f64, avg_nps: f64) -> f64 {
    frequency as f64 * (1.0 + avg_tier_weight) * avg_nps / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_score_formula() {
        // 12 mentions, avg tier 2.5 (SMB/Enterprise mix), avg NPS 8.0:
        // 12 * 3.5 * 8.0 / 10 = 33.6
        let score = priority_score(12, 2.5, 8.0);
        assert!((score - 33.6).abs() < 1e-9, "Expected 33.6, got {score}");
    }

    #[test]
    fn test_priority_score_zero_nps() {
        assert_eq!(priority_score(50, 3.0, 0.0), 0.0);
    }
}
