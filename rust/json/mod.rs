//! Allows serialization and deserialization to JSON, with the ``serde`` crate.

use serde::{Deserialize, Serialize};

use crate::error::TaxResult;

/// Handles the `to` and `from` JSON conversion.
pub trait JSON: Serialize + for<'de> Deserialize<'de> {
    /// Return a JSON string representing the object.
    fn to_json(&self) -> TaxResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Create an object from a JSON string representation.
    fn from_json(json: &str) -> TaxResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
