//! Link patterns: anchors wrapped around a field's output

use super::query::QueryString;
use super::registry::ReplacementRegistry;
use crate::error::{Error, Result};
use crate::routes::RouteTable;

impl ReplacementRegistry {
    /// Link a field's value to a fixed href: `<a href="{href}">{field}</a>`
    ///
    /// The href is inserted verbatim. It may itself contain placeholders,
    /// which are resolved at render time like any other pattern text.
    pub fn set_direct_link(&mut self, field: &str, href: &str) {
        let pattern = format!(r#"<a href="{}">{{{}}}</a>"#, href, field);
        self.add_field_replacement(field, pattern);
    }

    /// Link a field through a named route
    ///
    /// Each `(search, replace)` pair in `params` is a plain substring
    /// replacement on the route URI, applied in order. A non-empty `query` is
    /// appended after `?`. If the field already has a pattern, that pattern
    /// becomes the link text, so repeated calls nest links instead of
    /// discarding earlier ones.
    ///
    /// Fails with [`Error::RouteNotFound`] without touching the registry.
    pub fn set_route_link(
        &mut self,
        field: &str,
        route_name: &str,
        routes: &dyn RouteTable,
        params: &[(&str, &str)],
        query: impl Into<QueryString>,
    ) -> Result<()> {
        let Some(route) = routes.lookup(route_name) else {
            log::warn!("Route '{}' not found while linking '{}'", route_name, field);
            return Err(Error::RouteNotFound(route_name.to_string()));
        };

        let mut uri = route.uri.clone();
        for (search, replace) in params {
            uri = uri.replace(search, replace);
        }

        if let Some(query) = query.into().serialize() {
            uri.push('?');
            uri.push_str(&query);
        }

        let link_text = match self.pattern(field) {
            Some(existing) => existing.to_string(),
            None => format!("{{{}}}", field),
        };

        log::debug!("Linking '{}' via route '{}' to /{}", field, route_name, uri);
        self.add_field_replacement(field, format!(r#"<a href="/{}">{}</a>"#, uri, link_text));
        Ok(())
    }
}
