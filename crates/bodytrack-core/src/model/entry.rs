use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Result;

use super::{into_object, take_required_number, BODY_FAT_KEY, DATE_KEY, WEIGHT_KEY};

/// One timestamped body-metric record. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    pub weight: f64,
    #[serde(rename = "bodyFat")]
    pub body_fat: f64,
    /// Server-assigned insertion time (UTC, RFC 3339 on the wire).
    pub date: DateTime<Utc>,
    /// Any other client-supplied fields, echoed back untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A validated entry that has not been stamped yet.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryDraft {
    pub weight: f64,
    pub body_fat: f64,
    pub extra: Map<String, Value>,
}

impl EntryDraft {
    pub fn new(weight: f64, body_fat: f64) -> Self {
        Self {
            weight,
            body_fat,
            extra: Map::new(),
        }
    }

    /// Validate a client payload. `weight` and `bodyFat` must be present and
    /// numeric and are normalized to `f64`; a client-sent `date` is discarded
    /// since the server owns it.
    pub fn from_json(value: Value) -> Result<Self> {
        let mut fields = into_object(value, "entry")?;
        let weight = take_required_number(&mut fields, WEIGHT_KEY)?;
        let body_fat = take_required_number(&mut fields, BODY_FAT_KEY)?;
        fields.remove(DATE_KEY);
        Ok(Self {
            weight,
            body_fat,
            extra: fields,
        })
    }

    pub fn stamp(self, date: DateTime<Utc>) -> Entry {
        Entry {
            weight: self.weight,
            body_fat: self.body_fat,
            date,
            extra: self.extra,
        }
    }
}
