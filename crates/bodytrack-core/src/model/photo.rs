//! Progress photos, stored inline as `data:image/...` URLs.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::error::{Result, TrackerError};

use super::into_object;

const DATA_URL_KEY: &str = "dataUrl";
const IMAGE_PREFIX: &str = "data:image/";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Photo {
    #[serde(rename = "dataUrl")]
    pub data_url: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PhotoDraft {
    pub data_url: String,
}

impl PhotoDraft {
    /// Validate a client payload against the configured size cap (bytes of the
    /// encoded URL).
    pub fn from_json(value: Value, max_data_url_bytes: usize) -> Result<Self> {
        let mut fields = into_object(value, "photo")?;
        let data_url = match fields.remove(DATA_URL_KEY) {
            Some(Value::String(s)) => s,
            None | Some(Value::Null) => {
                return Err(TrackerError::malformed(DATA_URL_KEY, "is required"))
            }
            Some(_) => return Err(TrackerError::malformed(DATA_URL_KEY, "must be a string")),
        };

        if !data_url.starts_with(IMAGE_PREFIX) {
            return Err(TrackerError::malformed(
                DATA_URL_KEY,
                "must be a data:image/ URL",
            ));
        }
        if data_url.len() > max_data_url_bytes {
            return Err(TrackerError::PayloadTooLarge(format!(
                "{DATA_URL_KEY} is {} bytes, limit is {max_data_url_bytes}",
                data_url.len()
            )));
        }
        Ok(Self { data_url })
    }

    pub fn stamp(self, date: DateTime<Utc>) -> Photo {
        Photo {
            data_url: self.data_url,
            date,
        }
    }
}
