use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Result;

use super::{into_object, take_number_or_zero, BODY_FAT_KEY, WEIGHT_KEY};

/// The user's current goal values. Replaced wholesale on every update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Targets {
    pub weight: f64,
    #[serde(rename = "bodyFat")]
    pub body_fat: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for Targets {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl Targets {
    pub fn new(weight: f64, body_fat: f64) -> Self {
        Self {
            weight,
            body_fat,
            extra: Map::new(),
        }
    }

    /// Build a full replacement from a client payload. Missing goals become
    /// zero ("not set"); they are never carried over from older targets.
    pub fn from_json(value: Value) -> Result<Self> {
        let mut fields = into_object(value, "targets")?;
        let weight = take_number_or_zero(&mut fields, WEIGHT_KEY)?;
        let body_fat = take_number_or_zero(&mut fields, BODY_FAT_KEY)?;
        Ok(Self {
            weight,
            body_fat,
            extra: fields,
        })
    }
}
