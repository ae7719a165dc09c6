use serde::Serialize;

use crate::error::{Result, TrackerError};
use crate::model::Entry;

/// Direction of the latest change.
///
/// Binary on purpose: a single value or an unchanged value reports
/// `Decreasing`, same as a real drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increasing,
    Decreasing,
}

/// Descriptive statistics for one tracked metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSummary {
    pub current: f64,
    pub average: f64,
    pub min: f64,
    pub max: f64,
    pub trend: Trend,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsSnapshot {
    pub total_entries: usize,
    pub weight: MetricSummary,
    #[serde(rename = "bodyFat")]
    pub body_fat: MetricSummary,
}

/// Summarize weight and body fat across all entries.
pub fn compute_analytics(entries: &[Entry]) -> Result<AnalyticsSnapshot> {
    let weights: Vec<f64> = entries.iter().map(|e| e.weight).collect();
    let body_fats: Vec<f64> = entries.iter().map(|e| e.body_fat).collect();

    Ok(AnalyticsSnapshot {
        total_entries: entries.len(),
        weight: summarize(&weights)?,
        body_fat: summarize(&body_fats)?,
    })
}

fn summarize(values: &[f64]) -> Result<MetricSummary> {
    let (&current, earlier) = values.split_last().ok_or(TrackerError::NoData)?;

    let trend = match earlier.last() {
        Some(&previous) if current > previous => Trend::Increasing,
        _ => Trend::Decreasing,
    };

    let average = mean(values);
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Ok(MetricSummary {
        current,
        average,
        min,
        max,
        trend,
    })
}

/// Arithmetic mean. Falls back to summing pre-divided values when the plain
/// sum overflows, so large finite inputs still give a finite mean.
fn mean(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let sum: f64 = values.iter().sum();
    if sum.is_finite() {
        sum / n
    } else {
        values.iter().map(|v| v / n).sum()
    }
}
