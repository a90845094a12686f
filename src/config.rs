// Central configuration loaded from environment variables.
//
// The .env file is loaded automatically at startup via dotenvy. Both input
// paths have defaults matching what the offline prioritization pipeline
// writes next to the binary.

use std::env;
use std::path::PathBuf;

use anyhow::Result;

pub struct Config {
    /// Cluster prioritization table (LODESTAR_CLUSTER_CSV).
    pub cluster_path: PathBuf,
    /// Raw feedback table (LODESTAR_FEEDBACK_CSV).
    pub feedback_path: PathBuf,
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(Self {
            cluster_path: env::var("LODESTAR_CLUSTER_CSV")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./clustered_prioritization.csv")),
            feedback_path: env::var("LODESTAR_FEEDBACK_CSV")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./feedback.csv")),
        })
    }
}
