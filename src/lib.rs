// Lodestar: feature prioritization dashboard for clustered customer feedback
//
// This is the library root. Each module corresponds to a stage of the
// load → filter → rank → join → present/export loop over the two
// precomputed input tables. No clustering or scoring happens here — an
// offline pipeline produces the tables this crate consumes.

pub mod config;
pub mod data;
pub mod output;
pub mod pipeline;
pub mod status;
pub mod store;

#[cfg(feature = "web")]
pub mod web;
