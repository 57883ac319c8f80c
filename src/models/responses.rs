use serde::Deserialize;
use serde_json::Value;

use crate::error::{Result, ViewerError};
use crate::models::Body;

// API Response wrappers
#[derive(Debug, Deserialize)]
pub struct KeyResponse {
    pub key: String,
}

/// `bodies` is kept untyped at first so that a non-array payload can be
/// reported as a format error rather than a generic decode failure.
#[derive(Debug, Deserialize)]
pub struct BodiesResponse {
    #[serde(default)]
    pub bodies: Value,
}

impl KeyResponse {
    pub fn parse(text: &str) -> Result<Self> {
        serde_json::from_str(text)
            .map_err(|e| ViewerError::format(format!("key response: {}", e)))
    }
}

impl BodiesResponse {
    pub fn parse(text: &str) -> Result<Self> {
        serde_json::from_str(text)
            .map_err(|e| ViewerError::format(format!("bodies response: {}", e)))
    }

    /// Validate the payload against the body schema.
    pub fn into_bodies(self) -> Result<Vec<Body>> {
        let Value::Array(items) = self.bodies else {
            return Err(ViewerError::format("`bodies` is not an array"));
        };

        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                serde_json::from_value(item)
                    .map_err(|e| ViewerError::format(format!("body #{}: {}", index, e)))
            })
            .collect()
    }
}
