//! Canonical metric keys and source column mappings.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical key a source column can be mapped onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Calendar date of the row.
    Date,
    /// Step count.
    Steps,
    /// Hours slept.
    SleepHours,
    /// Active energy in kcal.
    ActiveEnergyKcal,
    /// Resting heart rate in bpm.
    RestingHrBpm,
    /// Body weight in kg.
    WeightKg,
}

impl Metric {
    /// All canonical keys, date first.
    pub const ALL: [Metric; 6] = [
        Metric::Date,
        Metric::Steps,
        Metric::SleepHours,
        Metric::ActiveEnergyKcal,
        Metric::RestingHrBpm,
        Metric::WeightKg,
    ];

    /// The five numeric metrics.
    pub const NUMERIC: [Metric; 5] = [
        Metric::Steps,
        Metric::SleepHours,
        Metric::ActiveEnergyKcal,
        Metric::RestingHrBpm,
        Metric::WeightKg,
    ];

    /// Canonical field name.
    pub fn key(self) -> &'static str {
        match self {
            Metric::Date => "date",
            Metric::Steps => "steps",
            Metric::SleepHours => "sleep_hours",
            Metric::ActiveEnergyKcal => "active_energy_kcal",
            Metric::RestingHrBpm => "resting_hr_bpm",
            Metric::WeightKg => "weight_kg",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Resolved source column per canonical key.
///
/// Derived once per table. A metric missing from the map is unmapped and
/// all of its output values are null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    columns: BTreeMap<Metric, String>,
}

impl ColumnMapping {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the source column for `metric`, replacing any previous one.
    pub fn insert(&mut self, metric: Metric, column: impl Into<String>) {
        self.columns.insert(metric, column.into());
    }

    /// Source column for `metric`, if one matched.
    pub fn column(&self, metric: Metric) -> Option<&str> {
        self.columns.get(&metric).map(String::as_str)
    }

    /// Canonical keys with no matching source column.
    pub fn unmapped(&self) -> Vec<Metric> {
        Metric::ALL
            .into_iter()
            .filter(|metric| !self.columns.contains_key(metric))
            .collect()
    }

    /// Iterates over `(metric, column)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Metric, &str)> {
        self.columns.iter().map(|(m, c)| (*m, c.as_str()))
    }
}
