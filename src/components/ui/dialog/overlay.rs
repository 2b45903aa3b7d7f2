//! Dialog Overlay
//!
//! Dimmed backdrop over the primitive overlay.

use gpui::{AnyElement, App, IntoElement, Refineable, RenderOnce, StyleRefinement, Styled, Window};

use crate::primitives::dialog::{self as primitive, OverlayProps};
use crate::settings::UiSettings;
use crate::theme::UiColors;

/// Themed backdrop. Accepts the primitive's [`OverlayProps`].
#[derive(IntoElement)]
pub struct Overlay {
    props: OverlayProps,
    children: Vec<AnyElement>,
    style: StyleRefinement,
}

impl Overlay {
    pub fn new(props: OverlayProps) -> Self {
        Self {
            props,
            children: Vec::new(),
            style: StyleRefinement::default(),
        }
    }
}

impl_local_part!(Overlay, OverlayProps);

impl RenderOnce for Overlay {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let opacity = UiSettings::global(cx).dialog.overlay_opacity;

        let mut overlay = primitive::Overlay::new(self.props)
            .bg(UiColors::overlay(opacity))
            .children(self.children);
        overlay.style().refine(&self.style);
        overlay
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::dialog::Props;

    #[test]
    fn test_builds_like_primitive_overlay() {
        let dialog = Props::new().open(true);
        let overlay = Overlay::new(OverlayProps::new("overlay", &dialog).dismissible(false))
            .child("Saving...")
            .children(["Please wait"]);
        assert!(!overlay.props().dismissible);
        assert_eq!(overlay.children.len(), 2);
    }
}
