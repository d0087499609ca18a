//! Pipe-delimited storage for multi-select fields

use crate::error::{Error, Result};
use crate::record::json_kind;

/// Converts between a stored `a|b|c` string and the selected values
///
/// There is no escaping: a value containing `|` does not survive a round trip.
pub struct MultiValueCodec;

impl MultiValueCodec {
    pub const DELIMITER: &str = "|";

    /// Split a stored scalar into its values
    ///
    /// Numbers and booleans are read as their text. `null` and the empty
    /// string are an empty selection. Arrays and objects are rejected, since
    /// they are already decoded.
    pub fn decode(raw: &serde_json::Value) -> Result<Vec<String>> {
        let text = match raw {
            serde_json::Value::Null => return Ok(Vec::new()),
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::Bool(b) => b.to_string(),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
                return Err(Error::InvalidInput(format!(
                    "value cannot be an {}",
                    json_kind(raw)
                )));
            }
        };
        Ok(Self::decode_str(&text))
    }

    /// Split a stored string into its values
    pub fn decode_str(raw: &str) -> Vec<String> {
        if raw.is_empty() {
            return Vec::new();
        }
        raw.split(Self::DELIMITER).map(str::to_string).collect()
    }

    /// Join values for storage
    pub fn encode<S: AsRef<str>>(values: &[S]) -> String {
        values
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(Self::DELIMITER)
    }
}
