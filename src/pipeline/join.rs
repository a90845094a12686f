// Example joining — illustrative quotes for a ranked cluster.
//
// A pure lookup: all feedback rows whose cluster id matches, in their
// original table order, capped at EXAMPLE_CAP. Zero matches is a normal
// outcome (producer runs disagree about id schemes, and some clusters are
// summarized from data the feedback export doesn't include) — the presenter
// shows "no examples yet", nothing fails.

use crate::data::models::FeedbackRecord;

/// How many example comments to attach to each cluster. Observed producer
/// dashboards used 3 or 5; 3 keeps the rendered cards scannable.
pub const EXAMPLE_CAP: usize = 3;

/// Return up to [`EXAMPLE_CAP`] verbatim comments for `cluster_id`, in
/// original table order.
pub fn examples_for(cluster_id: i64, feedback: &[FeedbackRecord]) -> Vec<String> {
    feedback
        .iter()
        .filter(|f| f.cluster == cluster_id)
        .take(EXAMPLE_CAP)
        .map(|f| f.text.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feedback(cluster: i64, text: &str) -> FeedbackRecord {
        FeedbackRecord {
            text: text.to_string(),
            cluster,
        }
    }

    fn sample() -> Vec<FeedbackRecord> {
        vec![
            feedback(1, "please add dark mode"),
            feedback(2, "exports are slow"),
            feedback(1, "dark mode would save my eyes"),
            feedback(1, "night theme please"),
            feedback(1, "DARK MODE"),
            feedback(2, "CSV export takes minutes"),
        ]
    }

    #[test]
    fn test_cap_is_enforced() {
        let examples = examples_for(1, &sample());
        assert_eq!(examples.len(), EXAMPLE_CAP);
    }

    #[test]
    fn test_original_order_preserved() {
        let examples = examples_for(1, &sample());
        assert_eq!(
            examples,
            vec![
                "please add dark mode",
                "dark mode would save my eyes",
                "night theme please",
            ]
        );
    }

    #[test]
    fn test_fewer_matches_than_cap() {
        let examples = examples_for(2, &sample());
        assert_eq!(examples.len(), 2);
    }

    #[test]
    fn test_zero_matches_is_empty_not_error() {
        assert!(examples_for(99, &sample()).is_empty());
    }
}
