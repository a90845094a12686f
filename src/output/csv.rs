// CSV export of the filtered, ranked cluster table.
//
// Column order is fixed so downstream spreadsheets and re-imports are
// stable. Real-valued columns are rendered to 2 decimal places, matching
// the dashboard display; the loader re-reads that precision losslessly.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::data::models::ClusterRecord;

/// Download name offered by the web dashboard and the CLI default basename.
pub const EXPORT_FILENAME: &str = "prioritized_features_filtered.csv";

const COLUMNS: [&str; 6] = [
    "cluster_id",
    "summary",
    "frequency",
    "avg_nps",
    "avg_tier_weight",
    "score",
];

/// Serialize clusters (already filtered and ranked) to CSV bytes.
pub fn to_bytes(clusters: &[ClusterRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(COLUMNS)?;

    for c in clusters {
        writer.write_record([
            c.cluster_id.to_string(),
            c.summary.clone(),
            c.frequency.to_string(),
            format!("{:.2}", c.avg_nps),
            format!("{:.2}", c.avg_tier_weight),
            format!("{:.2}", c.score),
        ])?;
    }

    writer.flush().context("flushing CSV export buffer")?;
    writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("finalizing CSV export: {e}"))
}

/// Write the export to disk, creating parent directories as needed.
/// Returns the path for display.
pub fn write_file(clusters: &[ClusterRecord], path: &Path) -> Result<String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    let bytes = to_bytes(clusters)?;
    fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(path.display().to_string())
}
