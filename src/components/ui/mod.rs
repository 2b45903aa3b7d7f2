//! UI - Themed Widget Surfaces
//!
//! One module per widget. Each module is the only place that touches
//! `crate::primitives` for that widget and publishes:
//! - the structural part names (`Root`, `Trigger`, `Content`, ...)
//! - the domain alias of the root (`Checkbox`, `Dialog`)
//! - the props/events types, with `<Widget>Props`/`<Widget>Events` for the root
//! - a `SURFACE` binding table listing all of the above

/// Builder surface shared by local parts, matching the primitive parts they
/// stand in for: `child`, `children`, `props` and [`gpui::Styled`].
///
/// Expects `props`, `children` and `style` fields; `new` stays per part.
macro_rules! impl_local_part {
    ($part:ident, $props:ident) => {
        impl $part {
            pub fn child(mut self, child: impl gpui::IntoElement) -> Self {
                self.children
                    .push(gpui::IntoElement::into_any_element(child));
                self
            }

            pub fn children(
                mut self,
                children: impl IntoIterator<Item = impl gpui::IntoElement>,
            ) -> Self {
                self.children
                    .extend(children.into_iter().map(gpui::IntoElement::into_any_element));
                self
            }

            pub fn props(&self) -> &$props {
                &self.props
            }
        }

        impl gpui::Styled for $part {
            fn style(&mut self) -> &mut gpui::StyleRefinement {
                &mut self.style
            }
        }
    };
}

pub mod checkbox;
pub mod dialog;
