//! Daily health records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::mapping::Metric;

/// One calendar day of canonical metrics.
///
/// The date is always present. Every metric is independently optional:
/// `None` means "no data", never zero. Serializes with the canonical field
/// names and `null` for absent values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthRecord {
    /// Calendar day (`YYYY-MM-DD` on the wire).
    pub date: NaiveDate,
    /// Step count.
    pub steps: Option<f64>,
    /// Hours slept.
    pub sleep_hours: Option<f64>,
    /// Active energy burned, in kcal.
    pub active_energy_kcal: Option<f64>,
    /// Resting heart rate, in bpm.
    pub resting_hr_bpm: Option<f64>,
    /// Body weight, in kg.
    pub weight_kg: Option<f64>,
}

impl HealthRecord {
    /// Creates a record for `date` with every metric absent.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            steps: None,
            sleep_hours: None,
            active_energy_kcal: None,
            resting_hr_bpm: None,
            weight_kg: None,
        }
    }

    /// Returns the value stored for a numeric metric.
    ///
    /// [`Metric::Date`] has no numeric value and always yields `None`.
    pub fn value(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Date => None,
            Metric::Steps => self.steps,
            Metric::SleepHours => self.sleep_hours,
            Metric::ActiveEnergyKcal => self.active_energy_kcal,
            Metric::RestingHrBpm => self.resting_hr_bpm,
            Metric::WeightKg => self.weight_kg,
        }
    }

    /// Stores a value for a numeric metric. Ignored for [`Metric::Date`].
    pub fn set_value(&mut self, metric: Metric, value: Option<f64>) {
        match metric {
            Metric::Date => {}
            Metric::Steps => self.steps = value,
            Metric::SleepHours => self.sleep_hours = value,
            Metric::ActiveEnergyKcal => self.active_energy_kcal = value,
            Metric::RestingHrBpm => self.resting_hr_bpm = value,
            Metric::WeightKg => self.weight_kg = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, d).unwrap()
    }

    #[test]
    fn serializes_absent_metrics_as_null() {
        let mut record = HealthRecord::new(day(25));
        record.steps = Some(8000.0);

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["date"], "2025-08-25");
        assert_eq!(value["steps"], 8000.0);
        assert!(value["sleep_hours"].is_null());
        assert!(value["weight_kg"].is_null());
    }

    #[test]
    fn value_and_set_value_agree() {
        let mut record = HealthRecord::new(day(1));
        for metric in Metric::NUMERIC {
            record.set_value(metric, Some(1.5));
            assert_eq!(record.value(metric), Some(1.5));
        }
        record.set_value(Metric::Date, Some(3.0));
        assert_eq!(record.value(Metric::Date), None);
    }
}
