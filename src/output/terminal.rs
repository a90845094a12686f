// Colored terminal output for the ranked feature view.
//
// This module handles all terminal-specific formatting: colors, layout,
// quote previews. The main.rs display calls delegate here.

use colored::Colorize;

use crate::data::models::UNCATEGORIZED_CLUSTER;
use crate::pipeline::{RankedView, Thresholds};

/// Display the filtered, ranked feature list in the terminal.
pub fn display_feature_list(view: &RankedView, thresholds: &Thresholds) {
    if view.is_empty() {
        println!(
            "\n{}",
            "No feature clusters match the current thresholds.".yellow()
        );
        println!(
            "  (min score {:.2}, min NPS {:.2}, min frequency {})",
            thresholds.min_score, thresholds.min_nps, thresholds.min_freq
        );
        return;
    }

    println!(
        "\n{}",
        format!(
            "=== Prioritized Features ({} clusters) ===",
            view.features.len()
        )
        .bold()
    );

    for (i, feature) in view.features.iter().enumerate() {
        let c = &feature.cluster;
        let label = if c.cluster_id == UNCATEGORIZED_CLUSTER {
            "Uncategorized".to_string()
        } else {
            format!("Cluster {}", c.cluster_id)
        };

        println!();
        println!("  {:>3}. {}  {}", i + 1, label.bold(), c.summary);
        println!(
            "       score {}   avg NPS {:.2}   frequency {}   avg tier {:.2}",
            format!("{:.2}", c.score).bold(),
            c.avg_nps,
            c.frequency,
            c.avg_tier_weight,
        );

        if feature.examples.is_empty() {
            println!("       {}", "no examples available".dimmed());
        } else {
            for quote in &feature.examples {
                let preview = super::truncate_chars(quote, 120);
                println!("       - \"{}\"", preview.dimmed());
            }
        }
    }
    println!();
}
