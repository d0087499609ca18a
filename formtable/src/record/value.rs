//! Cell value representation

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A single field value read from a source record
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Present but empty
    #[default]
    Null,
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    DateTime(DateTime<Utc>),
    Guid(Uuid),
}

impl Value {
    /// Text inserted into rendered output. Null renders as the empty string.
    pub fn render(&self) -> String {
        match self {
            Value::Null => String::new(),
            other => other.to_string(),
        }
    }

    /// Parse from a JSON value
    ///
    /// Strings are kept verbatim (no GUID/date sniffing) so rendering never
    /// reformats what the record holds.
    pub fn from_json(json: &serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(f) = n.as_f64() {
                    Value::Float(f)
                } else {
                    Value::String(n.to_string())
                }
            }
            serde_json::Value::String(s) => Value::String(s.clone()),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
                Value::String(json.to_string())
            }
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "(null)"),
            Value::String(s) => write!(f, "{}", s),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::Bool(b) => write!(f, "{}", b),
            Value::DateTime(dt) => write!(f, "{}", dt.to_rfc3339()),
            Value::Guid(g) => write!(f, "{}", g),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(dt: DateTime<Utc>) -> Self {
        Value::DateTime(dt)
    }
}

impl From<Uuid> for Value {
    fn from(g: Uuid) -> Self {
        Value::Guid(g)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_from_json_scalars() {
        assert_eq!(Value::from_json(&json!(null)), Value::Null);
        assert_eq!(Value::from_json(&json!(42)), Value::Int(42));
        assert_eq!(Value::from_json(&json!(1.5)), Value::Float(1.5));
        assert_eq!(Value::from_json(&json!(false)), Value::Bool(false));
        assert_eq!(
            Value::from_json(&json!("2024-01-01T00:00:00Z")),
            Value::String("2024-01-01T00:00:00Z".to_string())
        );
    }

    #[test]
    fn test_from_json_structured_collapses_to_text() {
        assert_eq!(
            Value::from_json(&json!(["a", "b"])),
            Value::String(r#"["a","b"]"#.to_string())
        );
    }

    #[test]
    fn test_render() {
        assert_eq!(Value::Null.render(), "");
        assert_eq!(Value::Int(0).render(), "0");
        assert_eq!(Value::Bool(true).render(), "true");
        assert_eq!(Value::from("x").render(), "x");

        let guid = Uuid::nil();
        assert_eq!(
            Value::Guid(guid).render(),
            "00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn test_render_datetime_rfc3339() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(Value::DateTime(dt).render(), "2024-01-02T03:04:05+00:00");
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some("a")), Value::String("a".to_string()));
    }
}
