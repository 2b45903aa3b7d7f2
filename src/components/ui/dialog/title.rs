//! Dialog Title

use gpui::{
    AnyElement, App, FontWeight, IntoElement, Refineable, RenderOnce, StyleRefinement, Styled,
    Window, px,
};

use crate::primitives::dialog::{self as primitive, TitleProps};
use crate::theme::{Typography, UiColors};

/// Themed heading sized by [`TitleProps::level`]
#[derive(IntoElement)]
pub struct Title {
    props: TitleProps,
    children: Vec<AnyElement>,
    style: StyleRefinement,
}

impl Title {
    pub fn new(props: TitleProps) -> Self {
        Self {
            props,
            children: Vec::new(),
            style: StyleRefinement::default(),
        }
    }
}

impl_local_part!(Title, TitleProps);

impl RenderOnce for Title {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let size = Typography::heading_size(self.props.level);

        let mut title = primitive::Title::new(self.props)
            .text_size(px(size))
            .font_weight(FontWeight::SEMIBOLD)
            .text_color(UiColors::foreground())
            .children(self.children);
        title.style().refine(&self.style);
        title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_like_primitive_title() {
        let title = Title::new(TitleProps::new().level(3))
            .child("Edit profile")
            .children(["(draft)", "(unsaved)"]);
        assert_eq!(title.props().level, 3);
        assert_eq!(title.children.len(), 3);

        let primitive = primitive::Title::new(TitleProps::new().level(3))
            .child("Edit profile")
            .children(["(draft)", "(unsaved)"]);
        assert_eq!(primitive.props().level, title.props().level);
    }
}
