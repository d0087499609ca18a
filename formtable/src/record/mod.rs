//! Source records: the rows a table renders
//!
//! A record is either a JSON object (key lookup) or a caller type that
//! exposes named attributes. Both shapes answer the same question, "is this
//! field present, and if so what is it", through [`SourceRecord::get`].

mod value;

pub use value::Value;

use crate::error::{Error, Result};

/// An attribute-bearing object
///
/// Return `Some` for every attribute the object has, including ones whose
/// value is empty or zero. `None` means the attribute does not exist.
pub trait Attributes {
    fn attribute(&self, name: &str) -> Option<Value>;
}

/// Borrowed view of a record, resolved by shape
#[derive(Clone, Copy)]
pub enum SourceRecord<'a> {
    /// Key-value mapping; presence is key containment
    Map(&'a serde_json::Map<String, serde_json::Value>),
    /// Object; presence is attribute existence
    Object(&'a dyn Attributes),
}

impl<'a> SourceRecord<'a> {
    /// Look up a field. A present `null` is `Some(Value::Null)`.
    pub fn get(&self, name: &str) -> Option<Value> {
        match self {
            SourceRecord::Map(map) => map.get(name).map(Value::from_json),
            SourceRecord::Object(obj) => obj.attribute(name),
        }
    }

    pub fn object(obj: &'a dyn Attributes) -> Self {
        SourceRecord::Object(obj)
    }

    /// View a JSON value as a record. Only objects qualify.
    pub fn from_json(json: &'a serde_json::Value) -> Option<Self> {
        json.as_object().map(SourceRecord::Map)
    }
}

impl std::fmt::Debug for SourceRecord<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceRecord::Map(map) => f.debug_tuple("Map").field(map).finish(),
            SourceRecord::Object(_) => f.write_str("Object(..)"),
        }
    }
}

/// An owned row held by a table
pub enum Row {
    Map(serde_json::Map<String, serde_json::Value>),
    Object(Box<dyn Attributes + Send + Sync>),
}

impl Row {
    /// Build a row from JSON; anything but an object is rejected
    pub fn from_json(json: serde_json::Value) -> Result<Self> {
        match json {
            serde_json::Value::Object(map) => Ok(Row::Map(map)),
            other => Err(Error::InvalidInput(format!(
                "row must be a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Wrap an attribute-bearing object
    pub fn object(obj: impl Attributes + Send + Sync + 'static) -> Self {
        Row::Object(Box::new(obj))
    }

    pub fn as_source(&self) -> SourceRecord<'_> {
        match self {
            Row::Map(map) => SourceRecord::Map(map),
            Row::Object(obj) => SourceRecord::Object(obj.as_ref()),
        }
    }
}

impl std::fmt::Debug for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Row::Map(map) => f.debug_tuple("Map").field(map).finish(),
            Row::Object(_) => f.write_str("Object(..)"),
        }
    }
}

pub(crate) fn json_kind(json: &serde_json::Value) -> &'static str {
    match json {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct User {
        id: i64,
        nickname: Option<String>,
    }

    impl Attributes for User {
        fn attribute(&self, name: &str) -> Option<Value> {
            match name {
                "id" => Some(self.id.into()),
                "nickname" => Some(self.nickname.clone().into()),
                _ => None,
            }
        }
    }

    #[test]
    fn test_map_presence_is_key_containment() {
        let json = json!({"name": "", "count": 0, "gone": null});
        let record = SourceRecord::from_json(&json).unwrap();

        assert_eq!(record.get("name"), Some(Value::String(String::new())));
        assert_eq!(record.get("count"), Some(Value::Int(0)));
        assert_eq!(record.get("gone"), Some(Value::Null));
        assert_eq!(record.get("missing"), None);
    }

    #[test]
    fn test_object_presence_is_attribute_existence() {
        let user = User {
            id: 7,
            nickname: None,
        };
        let record = SourceRecord::object(&user);

        assert_eq!(record.get("id"), Some(Value::Int(7)));
        assert_eq!(record.get("nickname"), Some(Value::Null));
        assert_eq!(record.get("email"), None);
    }

    #[test]
    fn test_from_json_requires_object() {
        assert!(SourceRecord::from_json(&json!([1, 2])).is_none());
        assert!(SourceRecord::from_json(&json!("x")).is_none());
    }

    #[test]
    fn test_row_from_json() {
        let row = Row::from_json(json!({"id": 1})).unwrap();
        assert_eq!(row.as_source().get("id"), Some(Value::Int(1)));

        let err = Row::from_json(json!([1])).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidInput("row must be a JSON object, got array".to_string())
        );
    }

    #[test]
    fn test_row_object() {
        let row = Row::object(User {
            id: 3,
            nickname: Some("ace".to_string()),
        });
        assert_eq!(row.as_source().get("nickname"), Some(Value::from("ace")));
    }
}
