//! Weekly averages over the record window.

use vitals_model::{HealthRecord, Metric};

/// Mean of each metric across the window, ignoring missing values.
///
/// Steps and active energy are rounded to whole numbers; sleep, resting
/// heart rate and weight to one decimal. Rounding is half away from zero.
/// A metric with no values in the window averages to `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WeeklyAverages {
    pub steps: Option<f64>,
    pub sleep_hours: Option<f64>,
    pub active_energy_kcal: Option<f64>,
    pub resting_hr_bpm: Option<f64>,
    pub weight_kg: Option<f64>,
}

impl WeeklyAverages {
    pub fn from_records(records: &[HealthRecord]) -> Self {
        Self {
            steps: mean(records, Metric::Steps).map(f64::round),
            sleep_hours: mean(records, Metric::SleepHours).map(round_one),
            active_energy_kcal: mean(records, Metric::ActiveEnergyKcal).map(f64::round),
            resting_hr_bpm: mean(records, Metric::RestingHrBpm).map(round_one),
            weight_kg: mean(records, Metric::WeightKg).map(round_one),
        }
    }
}

fn mean(records: &[HealthRecord], metric: Metric) -> Option<f64> {
    let values: Vec<f64> = records.iter().filter_map(|r| r.value(metric)).collect();
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

fn round_one(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
