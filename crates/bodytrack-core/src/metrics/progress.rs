use serde::Serialize;

use crate::error::Result;
use crate::model::{Entry, Targets};

use super::latest;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricProgress {
    pub current: f64,
    pub target: f64,
    pub progress_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressSnapshot {
    pub weight: MetricProgress,
    #[serde(rename = "bodyFat")]
    pub body_fat: MetricProgress,
}

/// Progress of the most recent entry against `targets`.
///
/// Weight is `current / target`, body fat is `target / current` (lower body
/// fat counts as progress). A zero denominator yields 0.
pub fn compute_progress(entries: &[Entry], targets: &Targets) -> Result<ProgressSnapshot> {
    let entry = latest(entries)?;

    let weight_pct = if targets.weight > 0.0 {
        entry.weight / targets.weight * 100.0
    } else {
        0.0
    };
    let body_fat_pct = if entry.body_fat > 0.0 {
        targets.body_fat / entry.body_fat * 100.0
    } else {
        0.0
    };

    Ok(ProgressSnapshot {
        weight: MetricProgress {
            current: entry.weight,
            target: targets.weight,
            progress_percentage: weight_pct,
        },
        body_fat: MetricProgress {
            current: entry.body_fat,
            target: targets.body_fat,
            progress_percentage: body_fat_pct,
        },
    })
}
