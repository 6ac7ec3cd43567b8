//! usersearch - username search form with routed detail view
//!
//! A single form collects a username, validates it, and on success asks the
//! injected navigator for the user detail route with fixed pagination.
//!
//! # Features
//!
//! - **Validation**: rejects empty input and input containing spaces
//! - **Navigation**: `/user/<username>?page=1&per_page=10` through any [`Navigator`]
//! - **Routing**: in-process [`Router`] with route table and history
//! - **Front ends**: terminal UI (ratatui) and native window (egui)
//!
//! # Example
//!
//! ```
//! use usersearch::{Router, SearchModule, SubmitEvent};
//!
//! let mut form = SearchModule.create_component(Router::with_default_routes());
//! form.on_input("lk");
//! form.on_submit(&mut SubmitEvent::new());
//!
//! assert!(!form.is_input_error);
//! assert_eq!(form.navigator().current_url(), "/user/lk?page=1&per_page=10");
//! ```

pub mod config;
pub mod error;
pub mod gui;
pub mod logging;
pub mod module;
pub mod navigation;
pub mod router;
pub mod search;
pub mod tui;

// Re-export main types
pub use config::AppConfig;
pub use error::{Result, UserSearchError};
pub use module::{Capability, FeatureModule, ModuleRegistry, SearchModule};
pub use navigation::{Location, NavigationExtras, Navigator, QueryParams};
pub use router::{NavigationRequest, RouteMatch, Router};
pub use search::{validate_username, InputError, SearchComponent, SubmitEvent};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
