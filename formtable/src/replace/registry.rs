//! Per-field replacement patterns

use std::collections::{HashMap, HashSet};

use super::engine::resolve;
use crate::record::SourceRecord;

/// Replacement patterns keyed by field name
///
/// Populated during table setup, then only read while rendering.
/// Registering a field twice keeps the last pattern.
#[derive(Debug, Clone, Default)]
pub struct ReplacementRegistry {
    patterns: HashMap<String, String>,
}

impl ReplacementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pattern for a field. Use `{field_name}` to inject values.
    pub fn add_field_replacement(&mut self, field: impl Into<String>, pattern: impl Into<String>) {
        let field = field.into();
        let pattern = pattern.into();
        log::debug!("Registering replacement for '{}': {}", field, pattern);
        self.patterns.insert(field, pattern);
    }

    pub fn has_field_replacement(&self, field: &str) -> bool {
        self.patterns.contains_key(field)
    }

    /// The registered pattern text for a field
    pub fn pattern(&self, field: &str) -> Option<&str> {
        self.patterns.get(field).map(String::as_str)
    }

    pub fn patterns(&self) -> &HashMap<String, String> {
        &self.patterns
    }

    /// Resolve the field's pattern against a record, if it has one
    pub fn field_replacement(
        &self,
        field: &str,
        record: SourceRecord<'_>,
        raw_fields: &HashSet<String>,
    ) -> Option<String> {
        self.patterns
            .get(field)
            .map(|pattern| resolve(pattern, record, field, raw_fields))
    }
}
