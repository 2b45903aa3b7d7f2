//! Surface Registry
//!
//! Process-wide table of every widget surface, built once on first access and
//! immutable afterwards.

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::{debug, error, info};

use crate::components::ui;
use crate::error::{Error, Result};
use crate::surface::WidgetSurface;

static REGISTRY: OnceLock<SurfaceRegistry> = OnceLock::new();

/// All widget surfaces published by `components::ui`
#[derive(Debug, Clone)]
pub struct SurfaceRegistry {
    surfaces: Vec<&'static WidgetSurface>,
}

impl SurfaceRegistry {
    /// Create a registry from explicit surfaces
    pub fn new(surfaces: Vec<&'static WidgetSurface>) -> Self {
        Self { surfaces }
    }

    /// The surfaces shipped with this crate
    pub fn builtin() -> Self {
        Self::new(vec![&ui::checkbox::SURFACE, &ui::dialog::SURFACE])
    }

    /// Look up a widget surface by identifier
    pub fn surface(&self, widget: &str) -> Option<&'static WidgetSurface> {
        self.surfaces
            .iter()
            .copied()
            .find(|surface| surface.widget == widget)
    }

    /// Iterate over all surfaces in registration order
    pub fn iter(&self) -> impl Iterator<Item = &'static WidgetSurface> + '_ {
        self.surfaces.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// Validate every surface, then check that domain aliases are unique
    /// across the shared `components::ui` namespace.
    pub fn validate(&self) -> Result<()> {
        let mut aliases: HashMap<String, &'static str> = HashMap::new();

        for surface in &self.surfaces {
            surface.validate()?;

            let alias = surface.domain_alias_name();
            if let Some(first) = aliases.insert(alias.clone(), surface.widget) {
                return Err(Error::DomainAliasCollision {
                    alias,
                    first,
                    second: surface.widget,
                });
            }
            debug!(
                widget = surface.widget,
                alias = %surface.domain_alias_name(),
                parts = surface.parts().count(),
                "Widget surface validated"
            );
        }

        Ok(())
    }
}

/// The process-wide registry, built on first access
pub fn registry() -> &'static SurfaceRegistry {
    REGISTRY.get_or_init(SurfaceRegistry::builtin)
}

/// Build and validate the process-wide registry.
///
/// Meant to run once during startup; later calls re-check the same immutable table.
pub fn init() -> Result<&'static SurfaceRegistry> {
    let registry = registry();
    registry.validate().inspect_err(|e| {
        error!(error = %e, "Widget surface check failed");
    })?;
    info!(widgets = registry.len(), "Widget surfaces ready");
    Ok(registry)
}
