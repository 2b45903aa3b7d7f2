//! Dialog Header
//!
//! Layout-only column for the title and description. Has no primitive
//! counterpart; place it inside `Content`.

use gpui::{
    AnyElement, App, Div, IntoElement, ParentElement, RenderOnce, StyleRefinement, Styled, Window,
    div,
};

/// Vertical stack at the top of the dialog content
#[derive(IntoElement)]
pub struct Header {
    base: Div,
    children: Vec<AnyElement>,
}

impl Header {
    pub fn new() -> Self {
        Self {
            base: div().flex().flex_col().gap_1(),
            children: Vec::new(),
        }
    }

    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Styled for Header {
    fn style(&mut self) -> &mut StyleRefinement {
        self.base.style()
    }
}

impl RenderOnce for Header {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        self.base.children(self.children)
    }
}
