// CSV loading for the two input tables.
//
// Both tables come from an offline prioritization pipeline and are loaded
// once at startup. All schema validation happens here: required columns are
// checked against the header, numeric columns are coerced with per-row error
// context, and the drifting cluster-identifier schema (numeric `cluster_id`
// vs. label `topic_cluster`) is canonicalized to an i64 before anything
// downstream sees the data.

use std::path::Path;

use thiserror::Error;
use tracing::warn;

use crate::data::models::{priority_score, ClusterRecord, FeedbackRecord, UNCATEGORIZED_CLUSTER};

/// Fatal loading failures. Anything here means no partial render — the
/// caller surfaces the message and stops.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("input file not found: {path}")]
    FileNotFound { path: String },

    #[error("{path}: missing required column `{column}`")]
    MissingColumn { path: String, column: String },

    #[error("{path} row {row}: invalid value {value:?} for column `{column}`")]
    InvalidValue {
        path: String,
        row: usize,
        column: String,
        value: String,
    },

    #[error("failed to read {path}")]
    Read {
        path: String,
        #[source]
        source: csv::Error,
    },
}

/// Stored scores further than this from the formula-derived value get a
/// warning at load time. The stored value stays authoritative either way.
const SCORE_DRIFT_TOLERANCE: f64 = 0.01;

/// Load the cluster prioritization table.
///
/// Accepts either a numeric `cluster_id` column or a label `topic_cluster`
/// column for the identifier; everything else is required by exact name.
pub fn load_clusters(path: &Path) -> Result<Vec<ClusterRecord>, DataLoadError> {
    let mut reader = open(path)?;
    let headers = headers(&mut reader, path)?;

    let id_col = find_column(&headers, path, &["cluster_id", "topic_cluster"])?;
    let summary_col = find_column(&headers, path, &["summary"])?;
    let freq_col = find_column(&headers, path, &["frequency"])?;
    let nps_col = find_column(&headers, path, &["avg_nps"])?;
    let tier_col = find_column(&headers, path, &["avg_tier_weight"])?;
    let score_col = find_column(&headers, path, &["score"])?;

    let mut clusters = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record.map_err(|source| DataLoadError::Read {
            path: display_path(path),
            source,
        })?;
        // Header is row 1 in the file; data rows start at 2.
        let row = i + 2;

        let cluster = ClusterRecord {
            cluster_id: parse_cluster_id(field(&record, id_col)),
            summary: field(&record, summary_col).trim().to_string(),
            frequency: parse_u32(&record, freq_col, "frequency", path, row)?,
            avg_nps: parse_f64(&record, nps_col, "avg_nps", path, row)?,
            avg_tier_weight: parse_f64(&record, tier_col, "avg_tier_weight", path, row)?,
            score: parse_f64(&record, score_col, "score", path, row)?,
        };

        let derived = priority_score(cluster.frequency, cluster.avg_tier_weight, cluster.avg_nps);
        if (cluster.score - derived).abs() > SCORE_DRIFT_TOLERANCE {
            warn!(
                cluster_id = cluster.cluster_id,
                stored = cluster.score,
                derived,
                "stored score disagrees with the priority formula; keeping stored value"
            );
        }

        clusters.push(cluster);
    }

    Ok(clusters)
}

/// Load the raw feedback table (`text`, `cluster` columns).
pub fn load_feedback(path: &Path) -> Result<Vec<FeedbackRecord>, DataLoadError> {
    let mut reader = open(path)?;
    let headers = headers(&mut reader, path)?;

    let text_col = find_column(&headers, path, &["text"])?;
    let cluster_col = find_column(&headers, path, &["cluster", "topic_cluster"])?;

    let mut feedback = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| DataLoadError::Read {
            path: display_path(path),
            source,
        })?;
        feedback.push(FeedbackRecord {
            text: field(&record, text_col).trim().to_string(),
            cluster: parse_cluster_id(field(&record, cluster_col)),
        });
    }

    Ok(feedback)
}

/// Canonicalize a cluster identifier to an i64.
///
/// Handles the three shapes producer runs have emitted:
///   - plain integers ("3"), including float-formatted ones ("3.0")
///   - "Cluster N" labels ("Cluster 3")
///   - free-form labels ("Miscellaneous") → the uncategorized bucket
pub fn parse_cluster_id(raw: &str) -> i64 {
    let raw = raw.trim();

    if let Ok(id) = raw.parse::<i64>() {
        return id;
    }

    // pandas int columns round-trip through CSV as floats ("3.0").
    // A numeric value that isn't integral is malformed, not a label.
    if let Ok(f) = raw.parse::<f64>() {
        if f.fract() == 0.0 && f.is_finite() {
            return f as i64;
        }
        return UNCATEGORIZED_CLUSTER;
    }

    // "Cluster 3"-style labels: take the trailing digit run
    let digits: String = raw
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_digit())
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    if !digits.is_empty() {
        if let Ok(id) = digits.parse::<i64>() {
            return id;
        }
    }

    UNCATEGORIZED_CLUSTER
}

// --- Helpers ---

fn open(path: &Path) -> Result<csv::Reader<std::fs::File>, DataLoadError> {
    if !path.exists() {
        return Err(DataLoadError::FileNotFound {
            path: display_path(path),
        });
    }
    csv::Reader::from_path(path).map_err(|source| DataLoadError::Read {
        path: display_path(path),
        source,
    })
}

fn headers(
    reader: &mut csv::Reader<std::fs::File>,
    path: &Path,
) -> Result<csv::StringRecord, DataLoadError> {
    reader
        .headers()
        .map(|h| h.clone())
        .map_err(|source| DataLoadError::Read {
            path: display_path(path),
            source,
        })
}

/// Find the first of `candidates` present in the header, by exact name.
fn find_column(
    headers: &csv::StringRecord,
    path: &Path,
    candidates: &[&str],
) -> Result<usize, DataLoadError> {
    for candidate in candidates {
        if let Some(idx) = headers.iter().position(|h| h.trim() == *candidate) {
            return Ok(idx);
        }
    }
    Err(DataLoadError::MissingColumn {
        path: display_path(path),
        column: candidates.join("` or `"),
    })
}

fn field<'a>(record: &'a csv::StringRecord, idx: usize) -> &'a str {
    record.get(idx).unwrap_or("")
}

fn parse_u32(
    record: &csv::StringRecord,
    idx: usize,
    column: &str,
    path: &Path,
    row: usize,
) -> Result<u32, DataLoadError> {
    let raw = field(record, idx).trim();
    // Accept float-formatted counts ("12.0") the same way ids are accepted.
    raw.parse::<u32>()
        .ok()
        .or_else(|| {
            raw.parse::<f64>()
                .ok()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= u32::MAX as f64)
                .map(|f| f as u32)
        })
        .ok_or_else(|| DataLoadError::InvalidValue {
            path: display_path(path),
            row,
            column: column.to_string(),
            value: raw.to_string(),
        })
}

fn parse_f64(
    record: &csv::StringRecord,
    idx: usize,
    column: &str,
    path: &Path,
    row: usize,
) -> Result<f64, DataLoadError> {
    let raw = field(record, idx).trim();
    raw.parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .ok_or_else(|| DataLoadError::InvalidValue {
            path: display_path(path),
            row,
            column: column.to_string(),
            value: raw.to_string(),
        })
}

fn display_path(path: &Path) -> String {
    path.display().to_string()
}
