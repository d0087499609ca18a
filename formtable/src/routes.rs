//! Named routes used to build link patterns

use std::collections::HashMap;

/// A named route and its URI template (e.g. `users/:id`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub name: String,
    pub uri: String,
}

impl Route {
    /// Create a route. A leading `/` on the URI is dropped.
    pub fn new(name: impl Into<String>, uri: impl Into<String>) -> Self {
        let uri = uri.into();
        Self {
            name: name.into(),
            uri: uri.trim_start_matches('/').to_string(),
        }
    }
}

/// Lookup of routes by name
pub trait RouteTable {
    fn lookup(&self, name: &str) -> Option<&Route>;
}

/// In-memory route table
#[derive(Debug, Clone, Default)]
pub struct StaticRoutes {
    routes: HashMap<String, Route>,
}

impl StaticRoutes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a route, replacing any existing route of the same name
    pub fn add(&mut self, name: impl Into<String>, uri: impl Into<String>) -> &mut Self {
        let route = Route::new(name, uri);
        self.routes.insert(route.name.clone(), route);
        self
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StaticRoutes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut routes = StaticRoutes::new();
        for (name, uri) in iter {
            routes.add(name, uri);
        }
        routes
    }
}

impl RouteTable for StaticRoutes {
    fn lookup(&self, name: &str) -> Option<&Route> {
        self.routes.get(name)
    }
}
