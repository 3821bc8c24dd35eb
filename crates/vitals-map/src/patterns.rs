//! Alias tables per canonical metric.
//!
//! Order matters: the first alias that matches wins, both in the exact pass
//! and in the containment pass. English aliases come first, then the
//! Japanese labels used by localized exports, then regex fallbacks.

use std::sync::LazyLock;

use regex::Regex;
use vitals_model::Metric;

/// A known name (or name pattern) for a canonical metric.
#[derive(Debug, Clone)]
pub enum Alias {
    /// Literal token, compared after [`normalize_text`](crate::normalize_text).
    Literal(&'static str),
    /// Regular expression tested against the normalized column name.
    /// Only used by the containment pass.
    Pattern(Regex),
}

const DATE: &[&str] = &[
    "date",
    "day",
    "datetime",
    "start date",
    "start_date",
    "日付",
    "日時",
];
const DATE_PATTERNS: &[&str] = &[r"^(date|time)"];

const STEPS: &[&str] = &["steps", "step", "step_count", "歩数"];

const SLEEP_HOURS: &[&str] = &[
    "sleep_hours",
    "sleep hour",
    "sleep_duration",
    "sleep_duration_hours",
    "睡眠",
];

const ACTIVE_ENERGY: &[&str] = &[
    "active_energy_kcal",
    "move_kcal",
    "active energy",
    "active_kcal",
    "アクティブエネルギー",
];
const ACTIVE_ENERGY_PATTERNS: &[&str] = &[r"active.*(kcal|energy)"];

const RESTING_HR: &[&str] = &[
    "resting_hr_bpm",
    "resting heart",
    "resting_heart_rate",
    "rest hr",
    "restinghr",
    "安静時心拍",
];

const WEIGHT: &[&str] = &["weight_kg", "body mass", "weight", "体重"];

static ALIAS_TABLE: LazyLock<Vec<(Metric, Vec<Alias>)>> = LazyLock::new(|| {
    Metric::ALL
        .into_iter()
        .map(|metric| {
            let (literals, patterns) = raw_aliases(metric);
            let mut aliases: Vec<Alias> = literals.iter().copied().map(Alias::Literal).collect();
            aliases.extend(
                patterns
                    .iter()
                    .filter_map(|p| Regex::new(p).ok())
                    .map(Alias::Pattern),
            );
            (metric, aliases)
        })
        .collect()
});

fn raw_aliases(metric: Metric) -> (&'static [&'static str], &'static [&'static str]) {
    match metric {
        Metric::Date => (DATE, DATE_PATTERNS),
        Metric::Steps => (STEPS, &[]),
        Metric::SleepHours => (SLEEP_HOURS, &[]),
        Metric::ActiveEnergyKcal => (ACTIVE_ENERGY, ACTIVE_ENERGY_PATTERNS),
        Metric::RestingHrBpm => (RESTING_HR, &[]),
        Metric::WeightKg => (WEIGHT, &[]),
    }
}

/// Returns the ordered alias list for `metric`.
pub fn aliases_for(metric: Metric) -> &'static [Alias] {
    ALIAS_TABLE
        .iter()
        .find(|(m, _)| *m == metric)
        .map(|(_, aliases)| aliases.as_slice())
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pattern_compiles() {
        for metric in Metric::ALL {
            let (literals, patterns) = raw_aliases(metric);
            assert_eq!(
                aliases_for(metric).len(),
                literals.len() + patterns.len(),
                "alias table for {metric} dropped a pattern"
            );
        }
    }

    #[test]
    fn literals_precede_patterns() {
        let aliases = aliases_for(Metric::Date);
        assert!(matches!(aliases.first(), Some(Alias::Literal("date"))));
        assert!(matches!(aliases.last(), Some(Alias::Pattern(_))));
    }
}
