//! Record-backed table rendering
//!
//! Binds row data to display fields, rewriting each cell through per-field
//! replacement patterns. Patterns use `{field}` / `{field?}` placeholders and
//! can be wrapped in links built from a route table.

pub mod config;
pub mod error;
pub mod escape;
pub mod fields;
pub mod record;
pub mod replace;
pub mod routes;
pub mod table;

pub use config::{LinkConfig, QueryConfig, TableConfig};
pub use error::{Error, Result};
pub use escape::escape_html;
pub use fields::{DaysOfWeek, MultiValueCodec};
pub use record::{Attributes, Row, SourceRecord, Value};
pub use replace::{
    PlaceholderToken, QueryString, ReplacementRegistry, parse_placeholders, resolve,
};
pub use routes::{Route, RouteTable, StaticRoutes};
pub use table::{RenderedCell, RenderedRow, Table, make_label};
