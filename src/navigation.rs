//! Navigation capability
//!
//! The search form never changes the displayed view itself. It hands a
//! route request to whatever implements [`Navigator`], which it receives at
//! construction.

use std::fmt;

/// Ordered query parameters, rendered in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter (builder style)
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.0.push((key.into(), value.to_string()));
        self
    }

    /// First value stored under `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render as `k=v&k=v`, percent-encoding keys and values
    pub fn to_query_string(&self) -> String {
        self.0
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Options attached to a navigation request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationExtras {
    pub query_params: QueryParams,
}

impl NavigationExtras {
    pub fn with_query_params(query_params: QueryParams) -> Self {
        Self { query_params }
    }
}

/// A resolved client-side location: path plus query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub query: QueryParams,
}

impl Location {
    /// Build a location from route commands.
    ///
    /// The first command is the base path and is used as-is (a leading `/`
    /// is added when missing). Every further command becomes one
    /// percent-encoded path segment.
    pub fn from_commands(commands: &[String], extras: &NavigationExtras) -> Self {
        let mut path = String::new();

        for (i, command) in commands.iter().enumerate() {
            if i == 0 {
                if !command.starts_with('/') {
                    path.push('/');
                }
                path.push_str(command.trim_end_matches('/'));
            } else {
                path.push('/');
                path.push_str(&urlencoding::encode(command));
            }
        }

        if path.is_empty() {
            path.push('/');
        }

        Self {
            path,
            query: extras.query_params.clone(),
        }
    }

    /// Path segments, decoded
    pub fn segments(&self) -> Vec<String> {
        self.path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| {
                urlencoding::decode(s)
                    .map(|d| d.into_owned())
                    .unwrap_or_else(|_| s.to_string())
            })
            .collect()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.query.is_empty() {
            write!(f, "{}", self.path)
        } else {
            write!(f, "{}?{}", self.path, self.query.to_query_string())
        }
    }
}

/// Capability used to change the displayed route without a page reload.
///
/// Callers do not observe the outcome; implementations decide how to
/// report routes they cannot resolve.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator {
    fn navigate(&mut self, commands: &[String], extras: &NavigationExtras);
}

impl<N: Navigator + ?Sized> Navigator for &mut N {
    fn navigate(&mut self, commands: &[String], extras: &NavigationExtras) {
        (**self).navigate(commands, extras);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commands(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn query_params_keep_insertion_order() {
        let params = QueryParams::new().with("page", 1).with("per_page", 10);
        assert_eq!(params.to_query_string(), "page=1&per_page=10");
        assert_eq!(params.get("per_page"), Some("10"));
        assert_eq!(params.get("missing"), None);
    }

    #[test]
    fn location_joins_commands_into_path() {
        let extras = NavigationExtras::with_query_params(QueryParams::new().with("page", 1));
        let location = Location::from_commands(&commands(&["/user", "lk"]), &extras);
        assert_eq!(location.path, "/user/lk");
        assert_eq!(location.to_string(), "/user/lk?page=1");
    }

    #[test]
    fn location_encodes_segments() {
        let location =
            Location::from_commands(&commands(&["user", " lk/x"]), &NavigationExtras::default());
        assert_eq!(location.path, "/user/%20lk%2Fx");
        assert_eq!(location.segments(), vec!["user".to_string(), " lk/x".to_string()]);
    }

    #[test]
    fn empty_commands_resolve_to_root() {
        let location = Location::from_commands(&[], &NavigationExtras::default());
        assert_eq!(location.to_string(), "/");
        assert!(location.segments().is_empty());
    }
}
