// Input tables — models and CSV loading for the two precomputed datasets.

pub mod loader;
pub mod models;
