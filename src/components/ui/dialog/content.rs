//! Dialog Content
//!
//! Styled dialog body. Renders the full portal stack for the dialog it belongs
//! to: portal layer, themed overlay, the primitive content panel and a corner
//! close button.

use gpui::{
    AnyElement, App, ElementId, IntoElement, ParentElement, Refineable, RenderOnce,
    StyleRefinement, Styled, Window, div, px,
};
use gpui_component::{Icon, IconName};

use crate::primitives::dialog::{
    self as primitive, CloseProps, ContentProps, OverlayProps, PortalProps,
};
use crate::settings::UiSettings;
use crate::theme::UiColors;

use super::overlay::Overlay;

/// Themed dialog body. Accepts the primitive's [`ContentProps`].
#[derive(IntoElement)]
pub struct Content {
    props: ContentProps,
    children: Vec<AnyElement>,
    show_close_button: Option<bool>,
    style: StyleRefinement,
}

impl Content {
    pub fn new(props: ContentProps) -> Self {
        Self {
            props,
            children: Vec::new(),
            show_close_button: None,
            style: StyleRefinement::default(),
        }
    }

    /// Hide the corner close button regardless of settings
    pub fn hide_close_button(mut self) -> Self {
        self.show_close_button = Some(false);
        self
    }

    /// Whether the corner close button renders under `settings`
    pub fn shows_close_button(&self, settings: &UiSettings) -> bool {
        self.show_close_button
            .unwrap_or(settings.dialog.show_close_button)
    }

    /// Element id of the backdrop, scoped to this content's id
    pub fn overlay_id(&self) -> ElementId {
        ElementId::from((self.props.id.clone(), "overlay"))
    }

    /// Element id of the corner close button, scoped to this content's id
    pub fn close_id(&self) -> ElementId {
        ElementId::from((self.props.id.clone(), "close"))
    }
}

impl_local_part!(Content, ContentProps);

impl RenderOnce for Content {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let settings = UiSettings::global(cx);
        let show_close = self.shows_close_button(&settings);
        let dialog = self.props.dialog.clone();
        let overlay_id = self.overlay_id();
        let close_id = self.close_id();

        let mut panel = primitive::Content::new(self.props)
            .relative()
            .w_full()
            .max_w(px(settings.dialog.content_max_width))
            .m_4()
            .p_6()
            .flex()
            .flex_col()
            .gap_4()
            .bg(UiColors::surface())
            .border_1()
            .border_color(UiColors::border())
            .rounded(px(settings.theme.radius))
            .shadow_lg()
            .children(self.children);

        if show_close {
            panel = panel.child(
                primitive::Close::new(CloseProps::new(close_id, &dialog))
                    .absolute()
                    .top_4()
                    .right_4()
                    .size(px(24.0))
                    .rounded_sm()
                    .flex()
                    .items_center()
                    .justify_center()
                    .cursor_pointer()
                    .opacity(0.7)
                    .child(
                        div()
                            .text_color(UiColors::muted_foreground())
                            .child(Icon::new(IconName::Close).size(px(16.0))),
                    ),
            );
        }
        panel.style().refine(&self.style);

        primitive::Portal::new(PortalProps::new(&dialog))
            .flex()
            .items_center()
            .justify_center()
            .child(Overlay::new(
                OverlayProps::new(overlay_id, &dialog)
                    .dismissible(settings.dialog.dismiss_on_overlay_click),
            ))
            .child(panel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::dialog::Props;

    #[test]
    fn test_close_button_follows_settings() {
        let dialog = Props::new().open(true);
        let mut settings = UiSettings::default();

        let content = Content::new(ContentProps::new("content", &dialog));
        assert!(content.shows_close_button(&settings));

        settings.dialog.show_close_button = false;
        assert!(!content.shows_close_button(&settings));
    }

    #[test]
    fn test_hidden_close_button_overrides_settings() {
        let dialog = Props::new().open(true);
        let settings = UiSettings::default();

        let content = Content::new(ContentProps::new("content", &dialog)).hide_close_button();
        assert!(!content.shows_close_button(&settings));
    }

    #[test]
    fn test_inner_ids_are_scoped_per_content() {
        let dialog = Props::new().open(true);
        let profile = Content::new(ContentProps::new("profile", &dialog));
        let billing = Content::new(ContentProps::new("billing", &dialog));

        assert_ne!(profile.overlay_id(), billing.overlay_id());
        assert_ne!(profile.close_id(), billing.close_id());
        assert_ne!(profile.overlay_id(), profile.close_id());
        assert_eq!(
            profile.overlay_id(),
            ElementId::from((ElementId::from("profile"), "overlay"))
        );
    }

    #[test]
    fn test_builds_like_primitive_content() {
        let dialog = Props::new().open(true);
        let content = Content::new(ContentProps::new("content", &dialog))
            .child("Body")
            .children(["More", "Even more"]);
        assert!(content.props().dialog.is_open());
        assert_eq!(content.children.len(), 3);
    }
}
