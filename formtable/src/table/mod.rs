//! Table: display fields, labels and per-row cell rendering

mod label;

pub use label::make_label;

use std::collections::{HashMap, HashSet};

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{Error, Result};
use crate::escape::escape_html;
use crate::record::Row;
use crate::replace::{QueryString, ReplacementRegistry};
use crate::routes::{RouteTable, StaticRoutes};

/// One rendered cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCell {
    pub field: String,
    pub html: String,
}

/// A row's cells, one per display field, in display order
///
/// Serializes as a map from field to cell, keys in display order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderedRow {
    pub cells: Vec<RenderedCell>,
}

impl RenderedRow {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|cell| cell.field == field)
            .map(|cell| cell.html.as_str())
    }
}

impl Serialize for RenderedRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for cell in &self.cells {
            map.serialize_entry(&cell.field, &cell.html)?;
        }
        map.end()
    }
}

/// A table over a collection of rows
pub struct Table {
    display_fields: Vec<String>,
    labels: HashMap<String, String>,
    raw_fields: HashSet<String>,
    replacements: ReplacementRegistry,
    routes: Box<dyn RouteTable + Send + Sync>,
    rows: Vec<Row>,
}

impl std::fmt::Debug for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Table")
            .field("display_fields", &self.display_fields)
            .field("labels", &self.labels)
            .field("raw_fields", &self.raw_fields)
            .field("replacements", &self.replacements)
            .field("rows", &self.rows.len())
            .finish_non_exhaustive()
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    /// Create a table with no routes
    pub fn new() -> Self {
        Self::with_routes(StaticRoutes::new())
    }

    /// Create a table that resolves route links against `routes`
    pub fn with_routes(routes: impl RouteTable + Send + Sync + 'static) -> Self {
        Self {
            display_fields: Vec::new(),
            labels: HashMap::new(),
            raw_fields: HashSet::new(),
            replacements: ReplacementRegistry::new(),
            routes: Box::new(routes),
            rows: Vec::new(),
        }
    }

    pub fn set_data(&mut self, rows: Vec<Row>) {
        self.rows = rows;
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Append display fields, keeping first-seen order
    pub fn set_display_fields<I, S>(&mut self, field_names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in field_names {
            let name = name.into();
            if !self.display_fields.contains(&name) {
                self.display_fields.push(name);
            }
        }
    }

    pub fn display_fields(&self) -> &[String] {
        &self.display_fields
    }

    pub fn is_display_field(&self, field: &str) -> bool {
        self.display_fields.iter().any(|f| f == field)
    }

    /// Add labels for display fields
    ///
    /// Every field is checked first; on error no label is stored.
    pub fn set_labels<I, K, V>(&mut self, labels: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let labels: Vec<(String, String)> = labels
            .into_iter()
            .map(|(field, label)| (field.into(), label.into()))
            .collect();

        if let Some((field, _)) = labels.iter().find(|(field, _)| !self.is_display_field(field)) {
            return Err(Error::InvalidField(field.clone()));
        }

        self.labels.extend(labels);
        Ok(())
    }

    /// The explicit label for a field, or one derived from its name
    pub fn label(&self, field: &str) -> String {
        self.labels
            .get(field)
            .cloned()
            .unwrap_or_else(|| make_label(field))
    }

    /// Explicitly set labels only
    pub fn labels(&self) -> &HashMap<String, String> {
        &self.labels
    }

    /// Mark fields whose output is inserted without escaping
    pub fn set_raw_fields<I, S>(&mut self, field_names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.raw_fields.extend(field_names.into_iter().map(Into::into));
    }

    pub fn is_raw_field(&self, field: &str) -> bool {
        self.raw_fields.contains(field)
    }

    pub fn replacements(&self) -> &ReplacementRegistry {
        &self.replacements
    }

    pub fn add_field_replacement(&mut self, field: impl Into<String>, pattern: impl Into<String>) {
        self.replacements.add_field_replacement(field, pattern);
    }

    pub fn has_field_replacement(&self, field: &str) -> bool {
        self.replacements.has_field_replacement(field)
    }

    pub fn set_direct_link(&mut self, field: &str, href: &str) {
        self.replacements.set_direct_link(field, href);
    }

    /// Link a field through one of this table's routes
    pub fn set_route_link(
        &mut self,
        field: &str,
        route_name: &str,
        params: &[(&str, &str)],
        query: impl Into<QueryString>,
    ) -> Result<()> {
        self.replacements
            .set_route_link(field, route_name, self.routes.as_ref(), params, query)
    }

    /// Render one field of one row
    ///
    /// Fields with a replacement pattern go through the pattern. Others show
    /// the row's value, escaped unless the field is raw, or nothing when the
    /// row lacks the field.
    pub fn render_cell(&self, field: &str, row: &Row) -> String {
        let record = row.as_source();
        if let Some(html) = self
            .replacements
            .field_replacement(field, record, &self.raw_fields)
        {
            return html;
        }

        match record.get(field) {
            Some(value) if self.is_raw_field(field) => value.render(),
            Some(value) => escape_html(&value.render()),
            None => String::new(),
        }
    }

    /// Render every row across the display fields
    pub fn render_rows(&self) -> Vec<RenderedRow> {
        log::debug!(
            "Rendering {} rows x {} fields",
            self.rows.len(),
            self.display_fields.len()
        );

        self.rows
            .iter()
            .map(|row| RenderedRow {
                cells: self
                    .display_fields
                    .iter()
                    .map(|field| RenderedCell {
                        field: field.clone(),
                        html: self.render_cell(field, row),
                    })
                    .collect(),
            })
            .collect()
    }
}
