//! Column-to-metric mapping.
//!
//! Source CSVs name their columns freely ("Step Count", "steps", "歩数").
//! This crate resolves each canonical [`Metric`](vitals_model::Metric) to at
//! most one source column using an ordered alias table:
//!
//! 1. exact (normalized, case-insensitive) match against literal aliases
//! 2. containment match, alias by alias, including regex aliases
//!
//! Alias order is the only tie-break, so results are deterministic.

#![deny(unsafe_code)]

mod patterns;
mod resolve;
mod utils;

pub use patterns::{Alias, aliases_for};
pub use resolve::{build_column_mapping, resolve_column};
pub use utils::normalize_text;
