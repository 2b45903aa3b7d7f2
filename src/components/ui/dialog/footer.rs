//! Dialog Footer
//!
//! Layout-only row for dialog actions, right-aligned. Place it inside `Content`.

use gpui::{
    AnyElement, App, Div, IntoElement, ParentElement, RenderOnce, StyleRefinement, Styled, Window,
    div,
};

/// Action row at the bottom of the dialog content
#[derive(IntoElement)]
pub struct Footer {
    base: Div,
    children: Vec<AnyElement>,
}

impl Footer {
    pub fn new() -> Self {
        Self {
            base: div().flex().flex_row().justify_end().gap_2(),
            children: Vec::new(),
        }
    }

    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }
}

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Styled for Footer {
    fn style(&mut self) -> &mut StyleRefinement {
        self.base.style()
    }
}

impl RenderOnce for Footer {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        self.base.children(self.children)
    }
}
