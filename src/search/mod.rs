//! Username search form
//!
//! - `validation`: pure predicates deciding whether a username may be submitted
//! - `component`: form state, two-way binding entry point and submit handler

pub mod component;
pub mod validation;

pub use component::{SearchComponent, SubmitEvent, DETAIL_ROUTE, PAGE, PER_PAGE};
pub use validation::{trim_username, validate_username, InputError};
