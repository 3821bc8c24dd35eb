//! Attention flags raised from the latest day and the week.

use std::fmt;

use vitals_model::HealthRecord;

/// Latest-day step count below which low activity is flagged.
pub const LOW_STEPS_THRESHOLD: f64 = 5000.0;
/// Nights shorter than this many hours count as short sleep.
pub const SHORT_SLEEP_HOURS: f64 = 6.0;
/// Latest-day resting heart rate at or above which it is flagged.
pub const ELEVATED_RESTING_HR_BPM: f64 = 75.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Alert {
    /// Latest steps below [`LOW_STEPS_THRESHOLD`]. A missing value counts as zero.
    LowActivity { steps: f64 },
    /// Nights in the window with sleep below [`SHORT_SLEEP_HOURS`].
    ShortSleep { nights: usize },
    /// Latest resting heart rate at or above [`ELEVATED_RESTING_HR_BPM`].
    ElevatedRestingHr { bpm: f64 },
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LowActivity { steps } => write!(
                f,
                "Low activity: {} steps (below {})",
                crate::format_numeric(*steps),
                crate::format_numeric(LOW_STEPS_THRESHOLD)
            ),
            Self::ShortSleep { nights } => {
                let noun = if *nights == 1 { "night" } else { "nights" };
                write!(f, "Short sleep: {nights} {noun} under {SHORT_SLEEP_HOURS:.1} h")
            }
            Self::ElevatedRestingHr { bpm } => write!(
                f,
                "Elevated resting heart rate: {} bpm ({} or above)",
                crate::format_numeric(*bpm),
                crate::format_numeric(ELEVATED_RESTING_HR_BPM)
            ),
        }
    }
}

/// Evaluates the attention flags for a date-sorted window.
///
/// Returns flags in display order. An empty window raises nothing.
pub fn evaluate_alerts(records: &[HealthRecord]) -> Vec<Alert> {
    let Some(latest) = records.last() else {
        return Vec::new();
    };

    let mut alerts = Vec::new();

    let steps = latest.steps.unwrap_or(0.0);
    if steps < LOW_STEPS_THRESHOLD {
        alerts.push(Alert::LowActivity { steps });
    }

    let nights = records
        .iter()
        .filter(|r| r.sleep_hours.is_some_and(|h| h < SHORT_SLEEP_HOURS))
        .count();
    if nights > 0 {
        alerts.push(Alert::ShortSleep { nights });
    }

    if let Some(bpm) = latest.resting_hr_bpm.filter(|bpm| *bpm >= ELEVATED_RESTING_HR_BPM) {
        alerts.push(Alert::ElevatedRestingHr { bpm });
    }

    alerts
}
