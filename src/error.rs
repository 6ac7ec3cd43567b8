//! Error types for usersearch
//!
//! Infrastructure errors only. Username validation failures never surface
//! here; they are reported through the search form's own state.

use thiserror::Error;

/// Main error type for usersearch operations
#[derive(Error, Debug)]
pub enum UserSearchError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config '{0}': {1}")]
    ConfigParse(String, serde_json::Error),

    #[error("No route matches '{0}'")]
    NoRouteMatch(String),

    #[error("Module '{module}' imports {capability}, which the host does not provide")]
    MissingCapability { module: String, capability: String },

    #[error("Module '{0}' is already registered")]
    DuplicateModule(String),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("GUI error: {0}")]
    Gui(String),
}

/// Result type alias for usersearch operations
pub type Result<T> = std::result::Result<T, UserSearchError>;

impl UserSearchError {
    /// Check if this error is recoverable (the front end can keep running)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, UserSearchError::NoRouteMatch(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_capability_names_module_and_capability() {
        let err = UserSearchError::MissingCapability {
            module: "SearchModule".to_string(),
            capability: "Forms".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Module 'SearchModule' imports Forms, which the host does not provide"
        );
    }

    #[test]
    fn only_route_misses_are_recoverable() {
        assert!(UserSearchError::NoRouteMatch("/nowhere".into()).is_recoverable());
        assert!(!UserSearchError::Terminal("gone".into()).is_recoverable());
    }
}
