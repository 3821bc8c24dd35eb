//! Dashboard assembly and text serialization.

use std::fmt;

use chrono::NaiveDate;
use vitals_model::HealthRecord;

use crate::alerts::{Alert, evaluate_alerts};
use crate::decorate::{RenderOptions, decorate};
use crate::error::{ReportError, Result};
use crate::format::{format_numeric, one_decimal, whole, with_unit};
use crate::stats::WeeklyAverages;

/// Everything shown on the dashboard, computed from one record window.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    /// The most recent day in the window.
    pub latest: HealthRecord,
    pub averages: WeeklyAverages,
    /// All days in the window, oldest first.
    pub days: Vec<HealthRecord>,
    pub alerts: Vec<Alert>,
}

impl Dashboard {
    /// Date shown in the header.
    pub fn header_date(&self) -> NaiveDate {
        self.latest.date
    }
}

/// Builds the dashboard for a date-sorted window.
///
/// # Errors
///
/// [`ReportError::EmptyData`] when `records` is empty.
pub fn build_dashboard(records: &[HealthRecord]) -> Result<Dashboard> {
    let latest = records.last().cloned().ok_or(ReportError::EmptyData)?;
    Ok(Dashboard {
        latest,
        averages: WeeklyAverages::from_records(records),
        days: records.to_vec(),
        alerts: evaluate_alerts(records),
    })
}

/// Builds, serializes and decorates the dashboard in one step.
pub fn render_dashboard(records: &[HealthRecord], options: &RenderOptions) -> Result<String> {
    let dashboard = build_dashboard(records)?;
    tracing::debug!(
        date = %dashboard.header_date(),
        days = dashboard.days.len(),
        alerts = dashboard.alerts.len(),
        "rendering dashboard"
    );
    Ok(decorate(
        &dashboard.to_string(),
        dashboard.header_date(),
        options,
    ))
}

fn numeric(value: Option<f64>, unit: &str) -> String {
    with_unit(value.map(format_numeric), unit)
}

fn decimal(value: Option<f64>, unit: &str) -> String {
    with_unit(value.map(one_decimal), unit)
}

impl fmt::Display for Dashboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let latest = &self.latest;
        writeln!(f, "# Health Dashboard {}", self.header_date())?;
        writeln!(f)?;

        writeln!(f, "## Latest")?;
        writeln!(f, "- Steps: {}", numeric(latest.steps, ""))?;
        writeln!(f, "- Sleep: {}", decimal(latest.sleep_hours, "h"))?;
        writeln!(f, "- Active energy: {}", numeric(latest.active_energy_kcal, "kcal"))?;
        writeln!(f, "- Resting HR: {}", numeric(latest.resting_hr_bpm, "bpm"))?;
        writeln!(f, "- Weight: {}", decimal(latest.weight_kg, "kg"))?;
        writeln!(f)?;

        let avg = &self.averages;
        writeln!(f, "## Weekly averages")?;
        writeln!(f, "- Steps: {}", with_unit(avg.steps.map(whole), ""))?;
        writeln!(f, "- Sleep: {}", decimal(avg.sleep_hours, "h"))?;
        writeln!(
            f,
            "- Active energy: {}",
            with_unit(avg.active_energy_kcal.map(whole), "kcal")
        )?;
        writeln!(f, "- Resting HR: {}", decimal(avg.resting_hr_bpm, "bpm"))?;
        writeln!(f, "- Weight: {}", decimal(avg.weight_kg, "kg"))?;

        if let (Some(first), Some(last)) = (self.days.first(), self.days.last()) {
            writeln!(f)?;
            writeln!(f, "## Weekly summary ({} to {})", first.date, last.date)?;
            for day in &self.days {
                writeln!(
                    f,
                    "- {}: steps {} / sleep {} / active {} / weight {}",
                    day.date,
                    numeric(day.steps, ""),
                    decimal(day.sleep_hours, "h"),
                    numeric(day.active_energy_kcal, "kcal"),
                    decimal(day.weight_kg, "kg"),
                )?;
            }
        }

        if !self.alerts.is_empty() {
            writeln!(f)?;
            writeln!(f, "## Attention")?;
            for alert in &self.alerts {
                writeln!(f, "- {alert}")?;
            }
        }

        Ok(())
    }
}
