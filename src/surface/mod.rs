//! Widget Surfaces
//!
//! Every aggregation module under `components::ui` declares a [`WidgetSurface`]:
//! an enumerated binding table naming each public export and what it resolves
//! to. Each entry captures the exported item's `TypeId` through a function
//! pointer, so a table entry only compiles while the export it describes
//! resolves, and the table can be checked against the actual bindings.

mod registry;

pub use registry::{SurfaceRegistry, init, registry};

use std::any::TypeId;
use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::helpers::{domain_name, domain_type_name};

/// Structural name of every widget's root part
pub const ROOT: &str = "Root";

/// Where an exported part comes from
#[derive(Debug, Clone, Copy)]
pub enum PartSource {
    /// Re-exported unmodified from the primitive module
    Primitive {
        /// Part name in the primitive module
        part: &'static str,
        /// Identity of the primitive's own part type
        type_id: fn() -> TypeId,
    },
    /// Local styled implementation wrapping primitive parts
    Local {
        /// Primitive parts the local implementation renders
        composes: &'static [&'static str],
    },
    /// Local layout element with no primitive counterpart, meant to be
    /// placed inside another exported part
    Layout {
        /// Exported part it is slotted into
        slot: &'static str,
    },
}

/// What an export binds
#[derive(Debug, Clone, Copy)]
pub enum ExportKind {
    /// A runtime part (component)
    Part(PartSource),
    /// Configuration shape of a part
    Props { describes: &'static str },
    /// Interaction signals emitted by a part
    Events { describes: &'static str },
    /// A second name for another export of the same surface
    Alias { of: &'static str },
}

/// One public name of a widget surface
#[derive(Debug, Clone, Copy)]
pub struct Export {
    pub name: &'static str,
    pub kind: ExportKind,
    type_id: fn() -> TypeId,
    type_name: fn() -> &'static str,
}

impl Export {
    /// A part re-exported unmodified from the primitive module.
    ///
    /// `T` is the exported binding, `P` the primitive part it must be.
    pub const fn primitive<T: 'static, P: 'static>(name: &'static str, part: &'static str) -> Self {
        Self::new::<T>(
            name,
            ExportKind::Part(PartSource::Primitive {
                part,
                type_id: TypeId::of::<P>,
            }),
        )
    }

    /// A local part composing the named primitive parts
    pub const fn local<T: 'static>(name: &'static str, composes: &'static [&'static str]) -> Self {
        Self::new::<T>(name, ExportKind::Part(PartSource::Local { composes }))
    }

    /// A local layout part placed inside `slot`
    pub const fn layout<T: 'static>(name: &'static str, slot: &'static str) -> Self {
        Self::new::<T>(name, ExportKind::Part(PartSource::Layout { slot }))
    }

    /// Props type for the part `describes`
    pub const fn props<T: 'static>(name: &'static str, describes: &'static str) -> Self {
        Self::new::<T>(name, ExportKind::Props { describes })
    }

    /// Events type for the part `describes`
    pub const fn events<T: 'static>(name: &'static str, describes: &'static str) -> Self {
        Self::new::<T>(name, ExportKind::Events { describes })
    }

    /// A second name for the export `of`
    pub const fn alias<T: 'static>(name: &'static str, of: &'static str) -> Self {
        Self::new::<T>(name, ExportKind::Alias { of })
    }

    const fn new<T: 'static>(name: &'static str, kind: ExportKind) -> Self {
        Self {
            name,
            kind,
            type_id: TypeId::of::<T>,
            type_name: std::any::type_name::<T>,
        }
    }

    /// Identity of the bound item
    pub fn type_id(&self) -> TypeId {
        (self.type_id)()
    }

    /// Fully qualified path of the bound item
    pub fn type_name(&self) -> &'static str {
        (self.type_name)()
    }

    /// Whether this export is a runtime part
    pub fn is_part(&self) -> bool {
        matches!(self.kind, ExportKind::Part(_))
    }
}

/// The public contract of one widget family
#[derive(Debug, Clone, Copy)]
pub struct WidgetSurface {
    /// Widget identifier, e.g. `checkbox`
    pub widget: &'static str,
    /// Part names the primitive module provides
    pub primitive_parts: &'static [&'static str],
    pub exports: &'static [Export],
}

impl WidgetSurface {
    /// Look up an export by its public name
    pub fn resolve(&self, name: &str) -> Option<&Export> {
        self.exports.iter().find(|export| export.name == name)
    }

    /// Runtime parts in declaration order
    pub fn parts(&self) -> impl Iterator<Item = &Export> {
        self.exports.iter().filter(|export| export.is_part())
    }

    /// Names of the runtime parts in declaration order
    pub fn part_names(&self) -> Vec<&'static str> {
        self.parts().map(|export| export.name).collect()
    }

    /// Every public name in declaration order
    pub fn export_names(&self) -> Vec<&'static str> {
        self.exports.iter().map(|export| export.name).collect()
    }

    /// The domain alias name this widget's root must carry
    pub fn domain_alias_name(&self) -> String {
        domain_name(self.widget)
    }

    /// The export carrying the domain alias of the root, if declared
    pub fn domain_alias(&self) -> Option<&Export> {
        let expected = self.domain_alias_name();
        self.resolve(&expected)
            .filter(|export| matches!(export.kind, ExportKind::Alias { of } if of == ROOT))
    }

    /// Follow aliases until a non-alias export is reached
    pub fn canonical(&self, name: &str) -> Option<&Export> {
        let mut current = self.resolve(name)?;
        // Bounded by the export count so an alias cycle cannot loop forever
        for _ in 0..self.exports.len() {
            match current.kind {
                ExportKind::Alias { of } => current = self.resolve(of)?,
                _ => return Some(current),
            }
        }
        None
    }

    /// Check the binding table against the naming convention.
    pub fn validate(&self) -> Result<()> {
        let widget = self.widget;

        let mut seen = HashSet::new();
        for export in self.exports {
            if !seen.insert(export.name) {
                return Err(Error::DuplicateExport {
                    widget,
                    name: export.name,
                });
            }
        }

        let mut described = HashSet::new();
        for export in self.exports {
            match export.kind {
                ExportKind::Part(PartSource::Primitive { part, type_id }) => {
                    self.check_primitive_part(export.name, part)?;
                    if export.type_id() != type_id() {
                        return Err(Error::PassthroughMismatch {
                            widget,
                            name: export.name,
                            part,
                        });
                    }
                }
                ExportKind::Part(PartSource::Local { composes }) => {
                    if composes.is_empty() {
                        return Err(Error::OrphanPart {
                            widget,
                            name: export.name,
                        });
                    }
                    for part in composes {
                        self.check_primitive_part(export.name, part)?;
                    }
                }
                ExportKind::Part(PartSource::Layout { slot }) => {
                    if !self.resolve(slot).is_some_and(Export::is_part) || slot == export.name {
                        return Err(Error::OrphanPart {
                            widget,
                            name: export.name,
                        });
                    }
                }
                ExportKind::Props { describes } | ExportKind::Events { describes } => {
                    if !self.resolve(describes).is_some_and(Export::is_part) {
                        return Err(Error::OrphanType {
                            widget,
                            name: export.name,
                            describes,
                        });
                    }

                    let suffix = match export.kind {
                        ExportKind::Events { .. } => "Events",
                        _ => "Props",
                    };
                    // The root's types may drop the part prefix
                    let paired = export.name.strip_suffix(suffix) == Some(describes)
                        || (describes == ROOT && export.name == suffix);
                    if !paired {
                        return Err(Error::MislabelledType {
                            widget,
                            name: export.name,
                            describes,
                        });
                    }
                    if !described.insert((suffix, describes)) {
                        return Err(Error::DuplicateType {
                            widget,
                            name: export.name,
                            describes,
                        });
                    }
                }
                ExportKind::Alias { of } => {
                    let Some(target) = self.resolve(of) else {
                        return Err(Error::UnresolvedExport {
                            widget,
                            name: export.name,
                            target: of,
                        });
                    };
                    if target.type_id() != export.type_id() {
                        return Err(Error::AliasMismatch {
                            widget,
                            name: export.name,
                            target: of,
                        });
                    }
                }
            }
        }

        if !self.resolve(ROOT).is_some_and(Export::is_part) {
            return Err(Error::UnresolvedExport {
                widget,
                name: ROOT,
                target: ROOT,
            });
        }

        if self.domain_alias().is_none() {
            return Err(Error::MissingDomainAlias {
                widget,
                expected: self.domain_alias_name(),
            });
        }

        self.validate_root_types()
    }

    fn check_primitive_part(&self, name: &'static str, part: &'static str) -> Result<()> {
        if self.primitive_parts.contains(&part) {
            Ok(())
        } else {
            Err(Error::UnknownPrimitivePart {
                widget: self.widget,
                name,
                part,
            })
        }
    }

    /// The root's `Props` (and `Events`, if any) need their domain-qualified twins.
    fn validate_root_types(&self) -> Result<()> {
        let widget = self.widget;

        for generic in ["Props", "Events"] {
            let Some(export) = self.resolve(generic) else {
                if generic == "Props" {
                    return Err(Error::UnresolvedExport {
                        widget,
                        name: generic,
                        target: ROOT,
                    });
                }
                continue;
            };

            let root_type = match export.kind {
                ExportKind::Props { describes } | ExportKind::Events { describes } => {
                    describes == ROOT
                }
                _ => false,
            };
            if !root_type {
                return Err(Error::OrphanType {
                    widget,
                    name: generic,
                    describes: ROOT,
                });
            }

            let expected = domain_type_name(widget, generic);
            let qualified = self
                .resolve(&expected)
                .filter(|alias| matches!(alias.kind, ExportKind::Alias { of } if of == generic));
            if qualified.is_none() {
                return Err(Error::MissingDomainType {
                    widget,
                    name: generic,
                    expected,
                });
            }
        }

        Ok(())
    }
}
