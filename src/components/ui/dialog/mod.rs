//! Dialog
//!
//! Public surface of the dialog widget.
//!
//! `Root`, `Trigger`, `Close` and `Portal` are the primitive parts, re-exported
//! unmodified. `Content`, `Overlay`, `Title` and `Description` are themed local
//! parts taking the primitive's props types. `Header` and `Footer` are
//! layout-only and belong inside `Content`.
//!
//! ```no_run
//! use dashboard_ui::components::ui::dialog::{self, Dialog, DialogProps};
//!
//! let props = DialogProps::new()
//!     .open(false)
//!     .on_open_change(|open, _window, _cx| println!("open: {open}"));
//!
//! let _element = Dialog::new(props.clone())
//!     .child(dialog::Trigger::new(dialog::TriggerProps::new("edit-profile", &props)).child("Edit"))
//!     .child(
//!         dialog::Content::new(dialog::ContentProps::new("edit-profile-content", &props))
//!             .child(
//!                 dialog::Header::new()
//!                     .child(dialog::Title::new(dialog::TitleProps::new()).child("Edit profile"))
//!                     .child(
//!                         dialog::Description::new(dialog::DescriptionProps::new())
//!                             .child("Changes apply after saving."),
//!                     ),
//!             )
//!             .child(dialog::Footer::new().child(
//!                 dialog::Close::new(dialog::CloseProps::new("cancel", &props)).child("Cancel"),
//!             )),
//!     );
//! ```
//!
//! Pass-through entries name the primitive's own part type, so a primitive
//! release that drops or renames a re-exported part breaks the build here
//! instead of leaving a dangling export. The entry below binds `Trigger` the
//! way [`SURFACE`] does and compiles against `primitives::dialog`:
//!
//! ```
//! use dashboard_ui::primitives::dialog as primitive;
//! use dashboard_ui::surface::{Export, WidgetSurface};
//!
//! use dashboard_ui::primitives::dialog::Trigger;
//!
//! static SURFACE: WidgetSurface = WidgetSurface {
//!     widget: "dialog",
//!     primitive_parts: primitive::PARTS,
//!     exports: &[Export::primitive::<Trigger, primitive::Trigger>("Trigger", "Trigger")],
//! };
//! assert_eq!(SURFACE.part_names(), vec!["Trigger"]);
//! ```
//!
//! Simulating the upgrade, the same entry written against a part the module
//! does not provide (here `Trigger` renamed to `OpenButton`) is rejected by
//! the compiler:
//!
//! ```compile_fail
//! use dashboard_ui::primitives::dialog as primitive;
//! use dashboard_ui::surface::{Export, WidgetSurface};
//!
//! use dashboard_ui::primitives::dialog::OpenButton as Trigger;
//!
//! static SURFACE: WidgetSurface = WidgetSurface {
//!     widget: "dialog",
//!     primitive_parts: primitive::PARTS,
//!     exports: &[Export::primitive::<Trigger, primitive::OpenButton>("Trigger", "Trigger")],
//! };
//! ```

mod content;
mod description;
mod footer;
mod header;
mod overlay;
mod title;

use crate::primitives::dialog as primitive;
use crate::surface::{Export, WidgetSurface};

pub use primitive::{Close, Portal, Root, Trigger};

pub use content::Content;
pub use description::Description;
pub use footer::Footer;
pub use header::Header;
pub use overlay::Overlay;
pub use title::Title;

pub use primitive::{
    CloseProps, ContentProps, DescriptionProps, OverlayProps, PortalProps, Props, TitleProps,
    TriggerProps,
};
pub use primitive::Props as RootProps;

pub use primitive::Props as DialogProps;
pub use primitive::Root as Dialog;

/// Handler type accepted by `Props::on_open_change`
pub use primitive::OpenChangeHandler;

/// Binding table of the dialog surface
pub static SURFACE: WidgetSurface = WidgetSurface {
    widget: "dialog",
    primitive_parts: primitive::PARTS,
    exports: &[
        Export::primitive::<Root, primitive::Root>("Root", "Root"),
        Export::primitive::<Trigger, primitive::Trigger>("Trigger", "Trigger"),
        Export::primitive::<Close, primitive::Close>("Close", "Close"),
        Export::primitive::<Portal, primitive::Portal>("Portal", "Portal"),
        Export::local::<Content>("Content", &["Portal", "Overlay", "Content", "Close"]),
        Export::local::<Overlay>("Overlay", &["Overlay"]),
        Export::layout::<Header>("Header", "Content"),
        Export::layout::<Footer>("Footer", "Content"),
        Export::local::<Title>("Title", &["Title"]),
        Export::local::<Description>("Description", &["Description"]),
        Export::props::<Props>("Props", "Root"),
        Export::alias::<RootProps>("RootProps", "Props"),
        Export::props::<TriggerProps>("TriggerProps", "Trigger"),
        Export::props::<CloseProps>("CloseProps", "Close"),
        Export::props::<PortalProps>("PortalProps", "Portal"),
        Export::props::<ContentProps>("ContentProps", "Content"),
        Export::props::<OverlayProps>("OverlayProps", "Overlay"),
        Export::props::<TitleProps>("TitleProps", "Title"),
        Export::props::<DescriptionProps>("DescriptionProps", "Description"),
        Export::alias::<Dialog>("Dialog", "Root"),
        Export::alias::<DialogProps>("DialogProps", "Props"),
    ],
};

#[cfg(test)]
mod tests {
    use std::any::TypeId;

    use super::*;
    use crate::surface::{ExportKind, PartSource};

    #[test]
    fn test_exactly_ten_parts() {
        assert_eq!(
            SURFACE.part_names(),
            vec![
                "Root",
                "Trigger",
                "Close",
                "Portal",
                "Content",
                "Overlay",
                "Header",
                "Footer",
                "Title",
                "Description"
            ]
        );
        assert!(SURFACE.validate().is_ok());
    }

    #[test]
    fn test_domain_alias_is_root() {
        assert_eq!(TypeId::of::<Dialog>(), TypeId::of::<Root>());
        assert_eq!(TypeId::of::<DialogProps>(), TypeId::of::<Props>());
        assert_eq!(TypeId::of::<RootProps>(), TypeId::of::<Props>());
        assert_eq!(
            SURFACE.domain_alias().map(|export| export.name),
            Some("Dialog")
        );
    }

    #[test]
    fn test_passthrough_parts_are_primitive_parts() {
        assert_eq!(TypeId::of::<Root>(), TypeId::of::<primitive::Root>());
        assert_eq!(TypeId::of::<Trigger>(), TypeId::of::<primitive::Trigger>());
        assert_eq!(TypeId::of::<Close>(), TypeId::of::<primitive::Close>());
        assert_eq!(TypeId::of::<Portal>(), TypeId::of::<primitive::Portal>());

        let passthrough: Vec<_> = SURFACE
            .parts()
            .filter(|export| {
                matches!(export.kind, ExportKind::Part(PartSource::Primitive { .. }))
            })
            .map(|export| export.name)
            .collect();
        assert_eq!(passthrough, vec!["Root", "Trigger", "Close", "Portal"]);
    }

    #[test]
    fn test_local_parts_take_primitive_props() {
        let dialog = DialogProps::new().open(true);

        let content = Content::new(ContentProps::new("content", &dialog));
        assert!(content.props().dialog.is_open());

        let overlay = Overlay::new(OverlayProps::new("overlay", &dialog).dismissible(false));
        assert!(!overlay.props().dismissible);
    }

    #[test]
    fn test_only_root_types_are_domain_qualified() {
        let qualified: Vec<_> = SURFACE
            .export_names()
            .into_iter()
            .filter(|name| name.starts_with("Dialog"))
            .collect();
        assert_eq!(qualified, vec!["Dialog", "DialogProps"]);
        assert!(SURFACE.resolve("DialogEvents").is_none());
        assert!(SURFACE.resolve("Events").is_none());
    }

    #[test]
    fn test_every_props_type_describes_a_part() {
        for export in SURFACE.exports {
            if let ExportKind::Props { describes } = export.kind {
                assert!(
                    SURFACE.resolve(describes).is_some_and(|part| part.is_part()),
                    "{} describes {}",
                    export.name,
                    describes
                );
                assert!(export.name.starts_with(describes) || describes == "Root");
            }
        }
    }
}
