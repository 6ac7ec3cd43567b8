//! Feature modules
//!
//! A feature module names the components it exposes and the host
//! capabilities those components rely on. The host registers modules in a
//! [`ModuleRegistry`], which refuses modules whose imports it cannot satisfy.

use crate::error::{Result, UserSearchError};
use crate::logging;
use crate::navigation::Navigator;
use crate::search::SearchComponent;
use std::fmt;

/// Host capability a feature module can import
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Conditional rendering and list directives
    CommonDirectives,
    /// Controlled inputs and form submission
    Forms,
    /// Client-side navigation
    Routing,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::CommonDirectives => write!(f, "CommonDirectives"),
            Capability::Forms => write!(f, "Forms"),
            Capability::Routing => write!(f, "Routing"),
        }
    }
}

pub trait FeatureModule {
    fn name(&self) -> &'static str;

    /// Components this module exposes to the host
    fn declarations(&self) -> &'static [&'static str];

    /// Capabilities the declared components need
    fn imports(&self) -> &'static [Capability];
}

/// Registers the username search form
#[derive(Debug, Default, Clone, Copy)]
pub struct SearchModule;

impl SearchModule {
    /// Build a search form with its navigator injected
    pub fn create_component<N: Navigator>(&self, navigator: N) -> SearchComponent<N> {
        SearchComponent::new(navigator)
    }
}

impl FeatureModule for SearchModule {
    fn name(&self) -> &'static str {
        "SearchModule"
    }

    fn declarations(&self) -> &'static [&'static str] {
        &["SearchComponent"]
    }

    fn imports(&self) -> &'static [Capability] {
        &[Capability::CommonDirectives, Capability::Forms]
    }
}

/// Host-side registry of feature modules
pub struct ModuleRegistry {
    provided: Vec<Capability>,
    modules: Vec<Box<dyn FeatureModule>>,
}

impl ModuleRegistry {
    pub fn new(provided: &[Capability]) -> Self {
        Self {
            provided: provided.to_vec(),
            modules: Vec::new(),
        }
    }

    /// Registry for the bundled front ends, which provide every capability
    pub fn for_host() -> Self {
        Self::new(&[
            Capability::CommonDirectives,
            Capability::Forms,
            Capability::Routing,
        ])
    }

    pub fn register(&mut self, module: Box<dyn FeatureModule>) -> Result<()> {
        if self.modules.iter().any(|m| m.name() == module.name()) {
            return Err(UserSearchError::DuplicateModule(module.name().to_string()));
        }

        if let Some(missing) = module
            .imports()
            .iter()
            .find(|cap| !self.provided.contains(*cap))
        {
            return Err(UserSearchError::MissingCapability {
                module: module.name().to_string(),
                capability: missing.to_string(),
            });
        }

        logging::debug(
            "MODULE",
            &format!(
                "Registered {} declaring [{}]",
                module.name(),
                module.declarations().join(", ")
            ),
        );
        self.modules.push(module);
        Ok(())
    }

    pub fn modules(&self) -> impl Iterator<Item = &dyn FeatureModule> {
        self.modules.iter().map(|m| m.as_ref())
    }

    /// Name of the module declaring `component`
    pub fn declaring_module(&self, component: &str) -> Option<&'static str> {
        self.modules
            .iter()
            .find(|m| m.declarations().iter().any(|d| *d == component))
            .map(|m| m.name())
    }
}
