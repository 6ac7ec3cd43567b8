//! In-process client-side router
//!
//! Holds the route table, the current location and a history stack. It is
//! the [`Navigator`] the front ends inject into the search form.

use crate::error::{Result, UserSearchError};
use crate::logging;
use crate::navigation::{Location, NavigationExtras, Navigator};

/// Pattern of the landing view holding the search form
pub const HOME_PATTERN: &str = "/";
/// Pattern of the user detail view
pub const USER_DETAIL_PATTERN: &str = "/user/:username";
/// Entries kept in the history stack and in the request log; oldest go first
pub const MAX_RETAINED: usize = 256;

/// A route pattern such as `/user/:username`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pattern: String,
    segments: Vec<String>,
}

impl Route {
    pub fn new(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let segments = pattern
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        Self { pattern, segments }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Match decoded path segments, capturing `:name` parameters
    fn matches(&self, segments: &[String]) -> Option<RouteMatch> {
        if segments.len() != self.segments.len() {
            return None;
        }

        let mut params = Vec::new();
        for (expected, actual) in self.segments.iter().zip(segments) {
            if let Some(name) = expected.strip_prefix(':') {
                params.push((name.to_string(), actual.clone()));
            } else if expected != actual {
                return None;
            }
        }

        Some(RouteMatch {
            pattern: self.pattern.clone(),
            params,
        })
    }
}

/// A location resolved against the route table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub pattern: String,
    pub params: Vec<(String, String)>,
}

impl RouteMatch {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// One navigation request as received, before resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub commands: Vec<String>,
    pub extras: NavigationExtras,
}

/// Client-side router
pub struct Router {
    routes: Vec<Route>,
    current: Location,
    history: Vec<Location>,
    requests: Vec<NavigationRequest>,
    last_error: Option<UserSearchError>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// Router with an empty route table, positioned at `/`
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            current: Location {
                path: "/".to_string(),
                ..Default::default()
            },
            history: Vec::new(),
            requests: Vec::new(),
            last_error: None,
        }
    }

    /// Router with the home and user detail routes registered
    pub fn with_default_routes() -> Self {
        let mut router = Self::new();
        router.add_route(HOME_PATTERN);
        router.add_route(USER_DETAIL_PATTERN);
        router
    }

    pub fn add_route(&mut self, pattern: impl Into<String>) {
        let route = Route::new(pattern);
        if !self.routes.contains(&route) {
            self.routes.push(route);
        }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Resolve a location against the route table (first match wins)
    pub fn resolve(&self, location: &Location) -> Result<RouteMatch> {
        let segments = location.segments();
        self.routes
            .iter()
            .find_map(|route| route.matches(&segments))
            .ok_or_else(|| UserSearchError::NoRouteMatch(location.to_string()))
    }

    pub fn current(&self) -> &Location {
        &self.current
    }

    pub fn current_url(&self) -> String {
        self.current.to_string()
    }

    pub fn current_match(&self) -> Option<RouteMatch> {
        self.resolve(&self.current).ok()
    }

    /// Navigation requests received, oldest first (at most `MAX_RETAINED`)
    pub fn requests(&self) -> &[NavigationRequest] {
        &self.requests
    }

    /// Error from the most recent navigation, if it failed
    pub fn last_error(&self) -> Option<&UserSearchError> {
        self.last_error.as_ref()
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Return to the previous location. Returns false when history is empty.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                logging::debug("ROUTER", &format!("Back to {}", previous));
                self.current = previous;
                self.last_error = None;
                true
            }
            None => false,
        }
    }
}

impl Navigator for Router {
    fn navigate(&mut self, commands: &[String], extras: &NavigationExtras) {
        push_bounded(
            &mut self.requests,
            NavigationRequest {
                commands: commands.to_vec(),
                extras: extras.clone(),
            },
        );

        let location = Location::from_commands(commands, extras);
        match self.resolve(&location) {
            Ok(matched) => {
                logging::info(
                    "ROUTER",
                    &format!("Navigated to {} (route {})", location, matched.pattern),
                );
                let previous = std::mem::replace(&mut self.current, location);
                push_bounded(&mut self.history, previous);
                self.last_error = None;
            }
            Err(e) => {
                logging::warn("ROUTER", &e.to_string());
                self.last_error = Some(e);
            }
        }
    }
}

fn push_bounded<T>(entries: &mut Vec<T>, entry: T) {
    if entries.len() >= MAX_RETAINED {
        entries.remove(0);
    }
    entries.push(entry);
}
