//! Checkbox Root
//!
//! Styled checkbox over the primitive root: a bordered box with a check or
//! minus icon, and an optional trailing label.

use gpui::{
    AnyElement, App, IntoElement, ParentElement, Refineable, RenderOnce, SharedString,
    StyleRefinement, Styled, Window, div, prelude::*, px,
};
use gpui_component::{Icon, IconName};

use crate::primitives::checkbox::{self as primitive, CheckedState, Events, Props};
use crate::settings::UiSettings;
use crate::theme::UiColors;

/// Themed checkbox. Accepts the primitive's [`Props`] and [`Events`].
#[derive(IntoElement)]
pub struct Root {
    props: Props,
    events: Events,
    label: Option<SharedString>,
    children: Vec<AnyElement>,
    style: StyleRefinement,
}

impl Root {
    pub fn new(props: Props) -> Self {
        Self {
            props,
            events: Events::default(),
            label: None,
            children: Vec::new(),
            style: StyleRefinement::default(),
        }
    }

    /// Attach event handlers
    pub fn events(mut self, events: Events) -> Self {
        self.events = events;
        self
    }

    /// Set the trailing label
    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl_local_part!(Root, Props);

fn indicator_icon(state: CheckedState) -> Option<IconName> {
    match state {
        CheckedState::Checked => Some(IconName::Check),
        CheckedState::Indeterminate => Some(IconName::Minus),
        CheckedState::Unchecked => None,
    }
}

impl RenderOnce for Root {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let settings = UiSettings::global(cx);
        let checked = self.props.checked;
        let disabled = self.props.disabled;
        let filled = checked != CheckedState::Unchecked;

        let (box_bg, box_border) = if filled {
            (UiColors::primary(), UiColors::primary())
        } else {
            (UiColors::surface(), UiColors::input_border())
        };
        let size = settings.checkbox.size;

        let mut root = primitive::Root::new(self.props)
            .events(self.events)
            .flex()
            .items_center()
            .gap_2()
            .cursor_pointer()
            .when(disabled, |el| el.opacity(0.5).cursor_not_allowed())
            .child(
                div()
                    .flex_none()
                    .size(px(size))
                    .rounded(px(settings.theme.radius.min(size / 4.0)))
                    .border_1()
                    .border_color(box_border)
                    .bg(box_bg)
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_color(UiColors::primary_foreground())
                    .when_some(indicator_icon(checked), |el, icon| {
                        el.child(Icon::new(icon).size(px(size * 0.75)))
                    }),
            )
            .when_some(self.label, |el, label| {
                el.child(
                    div()
                        .text_sm()
                        .text_color(UiColors::foreground())
                        .child(label),
                )
            })
            .children(self.children);

        root.style().refine(&self.style);
        root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_icon_per_state() {
        assert!(indicator_icon(CheckedState::Unchecked).is_none());
        assert!(matches!(indicator_icon(CheckedState::Checked), Some(IconName::Check)));
        assert!(matches!(
            indicator_icon(CheckedState::Indeterminate),
            Some(IconName::Minus)
        ));
    }

    #[test]
    fn test_accepts_primitive_props() {
        let root = Root::new(Props::new("terms").checked(true)).label("Accept terms");
        assert!(root.props().checked.is_checked());
        assert_eq!(root.label, Some(SharedString::from("Accept terms")));
    }

    #[test]
    fn test_builds_like_primitive_root() {
        let root = Root::new(Props::new("notify").checked(CheckedState::Indeterminate))
            .events(Events::new().on_checked_change(|_, _, _| {}))
            .child("Notify me")
            .children(["by email", "by push"]);
        assert!(root.props().checked.is_indeterminate());
        assert_eq!(root.children.len(), 3);

        let primitive = primitive::Root::new(Props::new("notify"))
            .events(Events::new())
            .child("Notify me")
            .children(["by email", "by push"]);
        assert_eq!(primitive.props().id, root.props().id);
    }
}
