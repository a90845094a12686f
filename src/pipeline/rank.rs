// Ranking — stable descending sort by score.
//
// Stability matters: equal scores keep their original table order, which
// keeps terminal output, the web view, and CSV exports deterministic.

use crate::data::models::ClusterRecord;

/// Sort clusters by score, highest first. `sort_by` is stable, so ties
/// preserve input order; `total_cmp` gives a total order even if a
/// producer ever sneaks a NaN past the loader.
pub fn by_score_desc(mut clusters: Vec<ClusterRecord>) -> Vec<ClusterRecord> {
    clusters.sort_by(|a, b| b.score.total_cmp(&a.score));
    clusters
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cluster(id: i64, score: f64) -> ClusterRecord {
        ClusterRecord {
            cluster_id: id,
            summary: String::new(),
            frequency: 1,
            avg_nps: 5.0,
            avg_tier_weight: 1.0,
            score,
        }
    }

    #[test]
    fn test_sorted_descending() {
        let ranked = by_score_desc(vec![cluster(1, 5.0), cluster(2, 50.0), cluster(3, 20.0)]);
        let ids: Vec<i64> = ranked.iter().map(|c| c.cluster_id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_ties_keep_input_order() {
        // A and C tie at 42.0; A was first in the table so it stays first.
        let ranked = by_score_desc(vec![
            cluster(10, 42.0), // A
            cluster(20, 17.5), // B
            cluster(30, 42.0), // C
        ]);
        let ids: Vec<i64> = ranked.iter().map(|c| c.cluster_id).collect();
        assert_eq!(ids, vec![10, 30, 20]);
    }

    #[test]
    fn test_empty_input() {
        assert!(by_score_desc(vec![]).is_empty());
    }
}
