//! Checkbox
//!
//! Public surface of the checkbox widget. `Root` is the themed local
//! implementation; the props and events types are the primitive's own.
//!
//! | export           | binds                          |
//! |------------------|--------------------------------|
//! | `Root`           | local styled root              |
//! | `Props`          | `primitives::checkbox::Props`  |
//! | `Events`         | `primitives::checkbox::Events` |
//! | `Checkbox`       | `Root`                         |
//! | `CheckboxProps`  | `Props`                        |
//! | `CheckboxEvents` | `Events`                       |

mod root;

use crate::primitives::checkbox as primitive;
use crate::surface::{Export, WidgetSurface};

pub use primitive::{Events, Props};
pub use root::Root;

pub use primitive::{Events as CheckboxEvents, Props as CheckboxProps};
pub use root::Root as Checkbox;

/// Value type carried by `Props` and `Events`
pub use primitive::CheckedState;

/// Binding table of the checkbox surface
pub static SURFACE: WidgetSurface = WidgetSurface {
    widget: "checkbox",
    primitive_parts: primitive::PARTS,
    exports: &[
        Export::local::<Root>("Root", &["Root"]),
        Export::props::<Props>("Props", "Root"),
        Export::events::<Events>("Events", "Root"),
        Export::alias::<Checkbox>("Checkbox", "Root"),
        Export::alias::<CheckboxProps>("CheckboxProps", "Props"),
        Export::alias::<CheckboxEvents>("CheckboxEvents", "Events"),
    ],
};

#[cfg(test)]
mod tests {
    use std::any::TypeId;

    use super::*;

    #[test]
    fn test_domain_alias_is_root() {
        assert_eq!(TypeId::of::<Checkbox>(), TypeId::of::<Root>());
        assert_eq!(
            SURFACE.domain_alias().map(|export| export.type_id()),
            SURFACE.resolve("Root").map(|export| export.type_id())
        );
    }

    #[test]
    fn test_domain_types_mirror_generic_types() {
        fn takes_props(props: Props) -> CheckboxProps {
            props
        }
        fn takes_checkbox_props(props: CheckboxProps) -> Props {
            props
        }

        let props: CheckboxProps = CheckboxProps::new("remember-me").checked(true);
        let props = takes_checkbox_props(takes_props(props));
        assert!(props.checked.is_checked());

        let events: Events = CheckboxEvents::new();
        let events: CheckboxEvents = events;
        assert!(events.is_empty());

        assert_eq!(TypeId::of::<CheckboxProps>(), TypeId::of::<Props>());
        assert_eq!(TypeId::of::<CheckboxEvents>(), TypeId::of::<Events>());
    }

    #[test]
    fn test_types_are_the_primitive_types() {
        assert_eq!(TypeId::of::<Props>(), TypeId::of::<primitive::Props>());
        assert_eq!(TypeId::of::<Events>(), TypeId::of::<primitive::Events>());
        assert_ne!(TypeId::of::<Root>(), TypeId::of::<primitive::Root>());
    }

    #[test]
    fn test_surface_exports() {
        assert!(SURFACE.validate().is_ok());
        assert_eq!(SURFACE.part_names(), vec!["Root"]);
        assert_eq!(
            SURFACE.export_names(),
            vec![
                "Root",
                "Props",
                "Events",
                "Checkbox",
                "CheckboxProps",
                "CheckboxEvents"
            ]
        );
    }
}
