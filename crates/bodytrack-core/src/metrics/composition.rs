use serde::Serialize;

use crate::error::Result;
use crate::model::Entry;

use super::latest;

/// Lean/fat split of the latest entry. Same unit as `weight`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompositionSnapshot {
    pub weight: f64,
    #[serde(rename = "bodyFat")]
    pub body_fat: f64,
    pub lean_mass: f64,
    pub fat_mass: f64,
}

pub fn compute_composition(entries: &[Entry]) -> Result<CompositionSnapshot> {
    let entry = latest(entries)?;
    let (weight, body_fat) = (entry.weight, entry.body_fat);

    // Both masses are meaningless unless both inputs are positive.
    let (lean_mass, fat_mass) = if weight > 0.0 && body_fat > 0.0 {
        (
            weight * (1.0 - body_fat / 100.0),
            weight * (body_fat / 100.0),
        )
    } else {
        (0.0, 0.0)
    };

    Ok(CompositionSnapshot {
        weight,
        body_fat,
        lean_mass,
        fat_mass,
    })
}
