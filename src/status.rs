// System status display — dataset paths, row counts, threshold bounds.

use colored::Colorize;

use crate::config::Config;
use crate::store::FeatureStore;

/// Print a status summary of the loaded datasets.
pub fn show(store: &FeatureStore, config: &Config) {
    println!("\n{}", "=== Lodestar Status ===".bold());

    println!("\n  Datasets:");
    println!(
        "    Clusters: {} ({} rows)",
        config.cluster_path.display(),
        store.clusters().len()
    );
    println!(
        "    Feedback: {} ({} rows)",
        config.feedback_path.display(),
        store.feedback().len()
    );

    let uncategorized = store.uncategorized_count();
    if uncategorized > 0 {
        println!(
            "    {} {uncategorized} feedback rows in the uncategorized bucket",
            "~".yellow()
        );
    }

    let b = store.bounds();
    println!("\n  Filter ranges (derived from data):");
    println!("    Score:     {:.2} – {:.2}", b.score.0, b.score.1);
    println!("    Avg NPS:   {:.2} – {:.2}", b.nps.0, b.nps.1);
    println!("    Frequency: {} – {}", b.frequency.0, b.frequency.1);
    println!();
}
