//! Field replacement patterns
//!
//! A pattern is a template such as `<a href="/users/{id}">{name}</a>`
//! registered per display field. At render time every placeholder is
//! resolved against the row being rendered.

mod engine;
mod link;
mod placeholder;
mod query;
mod registry;

pub use engine::resolve;
pub use placeholder::{PlaceholderToken, parse_placeholders};
pub use query::QueryString;
pub use registry::ReplacementRegistry;
