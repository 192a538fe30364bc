//! Subway line modeling: stations, distance-weighted sections, and the
//! chain-maintenance rules that keep every line a single contiguous path.

pub mod models;
