//! Table definitions loaded from TOML
//!
//! ```toml
//! display_fields = ["id", "name", "email"]
//! raw_fields = ["name"]
//!
//! [labels]
//! id = "ID"
//!
//! [replacements]
//! email = '<a href="mailto:{email}">{email}</a>'
//!
//! [routes]
//! "user.show" = "users/:id"
//!
//! [[links]]
//! field = "id"
//! route = "user.show"
//! params = { ":id" = "{id}" }
//! query = { tab = "profile" }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::replace::QueryString;
use crate::routes::StaticRoutes;
use crate::table::Table;

/// Top-level table definition
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub display_fields: Vec<String>,
    pub raw_fields: Vec<String>,
    pub labels: BTreeMap<String, String>,
    pub replacements: BTreeMap<String, String>,
    pub routes: BTreeMap<String, String>,
    /// Applied in order, after `replacements`
    pub links: Vec<LinkConfig>,
}

/// A link on a field, either to a fixed `href` or through a named `route`
#[derive(Debug, Clone, Deserialize)]
pub struct LinkConfig {
    pub field: String,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub route: Option<String>,
    /// Substring replacements on the route URI, in file order
    #[serde(default)]
    pub params: toml::Table,
    #[serde(default)]
    pub query: Option<QueryConfig>,
}

/// `query = "a=1&b=2"` or `query = { a = "1", b = "2" }`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum QueryConfig {
    Raw(String),
    Pairs(toml::Table),
}

impl From<&QueryConfig> for QueryString {
    fn from(config: &QueryConfig) -> Self {
        match config {
            QueryConfig::Raw(raw) => QueryString::Raw(raw.clone()),
            QueryConfig::Pairs(pairs) => QueryString::Pairs(
                pairs
                    .iter()
                    .map(|(key, value)| (key.clone(), toml_text(value)))
                    .collect(),
            ),
        }
    }
}

/// Strings without quotes, everything else in TOML notation
fn toml_text(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl TableConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
        log::debug!("Loaded table definition from {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Build a table with no data
    pub fn into_table(self) -> Result<Table> {
        let routes: StaticRoutes = self.routes.into_iter().collect();
        let mut table = Table::with_routes(routes);

        table.set_display_fields(self.display_fields);
        table.set_raw_fields(self.raw_fields);
        table.set_labels(self.labels)?;

        for (field, pattern) in self.replacements {
            table.add_field_replacement(field, pattern);
        }

        for link in &self.links {
            apply_link(&mut table, link)?;
        }

        Ok(table)
    }
}

fn apply_link(table: &mut Table, link: &LinkConfig) -> Result<()> {
    match (&link.href, &link.route) {
        (Some(href), None) => {
            table.set_direct_link(&link.field, href);
            Ok(())
        }
        (None, Some(route)) => {
            let params: Vec<(String, String)> = link
                .params
                .iter()
                .map(|(search, replace)| (search.clone(), toml_text(replace)))
                .collect();
            let params: Vec<(&str, &str)> = params
                .iter()
                .map(|(search, replace)| (search.as_str(), replace.as_str()))
                .collect();
            let query = link.query.as_ref().map(QueryString::from).unwrap_or_default();

            table.set_route_link(&link.field, route, &params, query)
        }
        (Some(_), Some(_)) => Err(Error::Config(format!(
            "link on '{}' sets both href and route",
            link.field
        ))),
        (None, None) => Err(Error::Config(format!(
            "link on '{}' needs an href or a route",
            link.field
        ))),
    }
}
