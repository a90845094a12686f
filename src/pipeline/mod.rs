// The filter → rank → join pipeline.
//
// Every threshold change recomputes the whole view from the immutable
// store. The tables are at most a few hundred rows, so a full pass per
// interaction is cheaper than any incremental bookkeeping.

use serde::Serialize;

use crate::data::models::ClusterRecord;
use crate::store::FeatureStore;

pub mod filter;
pub mod join;
pub mod rank;

pub use filter::Thresholds;

/// One ranked cluster plus its example quotes, ready for a presenter.
#[derive(Debug, Clone, Serialize)]
pub struct RankedFeature {
    #[serde(flatten)]
    pub cluster: ClusterRecord,
    pub examples: Vec<String>,
}

/// The filtered, ranked, example-joined view handed to presenters and the
/// exporter. An empty view is a valid filtered state.
#[derive(Debug, Clone, Serialize)]
pub struct RankedView {
    pub features: Vec<RankedFeature>,
}

impl RankedView {
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// The bare cluster records in ranked order, for the CSV exporter
    /// (examples are display-only and never exported).
    pub fn clusters(&self) -> Vec<ClusterRecord> {
        self.features.iter().map(|f| f.cluster.clone()).collect()
    }
}

/// Run the full pipeline for one set of thresholds.
pub fn build_view(store: &FeatureStore, thresholds: &Thresholds) -> RankedView {
    let filtered = filter::apply(store.clusters(), thresholds);
    let ranked = rank::by_score_desc(filtered);

    let features = ranked
        .into_iter()
        .map(|cluster| {
            let examples = join::examples_for(cluster.cluster_id, store.feedback());
            RankedFeature { cluster, examples }
        })
        .collect();

    RankedView { features }
}
