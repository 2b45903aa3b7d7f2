//! Dialog Description

use gpui::{AnyElement, App, IntoElement, Refineable, RenderOnce, StyleRefinement, Styled, Window, px};

use crate::primitives::dialog::{self as primitive, DescriptionProps};
use crate::theme::{Typography, UiColors};

/// Muted supporting text
#[derive(IntoElement)]
pub struct Description {
    props: DescriptionProps,
    children: Vec<AnyElement>,
    style: StyleRefinement,
}

impl Description {
    pub fn new(props: DescriptionProps) -> Self {
        Self {
            props,
            children: Vec::new(),
            style: StyleRefinement::default(),
        }
    }
}

impl_local_part!(Description, DescriptionProps);

impl RenderOnce for Description {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let mut description = primitive::Description::new(self.props)
            .text_size(px(Typography::TEXT_SM))
            .text_color(UiColors::muted_foreground())
            .children(self.children);
        description.style().refine(&self.style);
        description
    }
}
