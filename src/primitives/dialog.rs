//! Dialog Primitive
//!
//! Unstyled, controlled dialog. The owner holds the `open` flag and receives
//! change requests through `on_open_change`; every part that can change the
//! state carries a clone of the root [`Props`] to send those requests.
//!
//! Parts: `Root`, `Trigger`, `Close`, `Portal`, `Overlay`, `Content`, `Title`,
//! `Description`. `Portal` is expected to sit inside a full-window container;
//! it lays its children over that container while the dialog is open.

use std::fmt;
use std::rc::Rc;

use gpui::{
    AnyElement, App, Div, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    StatefulInteractiveElement, StyleRefinement, Styled, Window, div, prelude::*,
};

/// Names of the parts this module provides
pub const PARTS: &[&str] = &[
    "Root",
    "Trigger",
    "Close",
    "Portal",
    "Overlay",
    "Content",
    "Title",
    "Description",
];

/// Handler for open-state change requests
pub type OpenChangeHandler = Rc<dyn Fn(bool, &mut Window, &mut App) + 'static>;

/// Root configuration: the controlled open state
#[derive(Clone, Default)]
pub struct Props {
    open: bool,
    on_open_change: Option<OpenChangeHandler>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    /// Called with the requested state by `Trigger`, `Close` and `Overlay`
    pub fn on_open_change(mut self, handler: impl Fn(bool, &mut Window, &mut App) + 'static) -> Self {
        self.on_open_change = Some(Rc::new(handler));
        self
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether a request for `open` would reach the owner
    pub fn accepts(&self, open: bool) -> bool {
        open != self.open && self.on_open_change.is_some()
    }

    /// Forward a state change request to the owner.
    ///
    /// Requests that match the current state are dropped. Returns whether the
    /// request was forwarded.
    pub fn request_open(&self, open: bool, window: &mut Window, cx: &mut App) -> bool {
        if !self.accepts(open) {
            return false;
        }
        if let Some(handler) = &self.on_open_change {
            handler(open, window, cx);
        }
        true
    }
}

impl fmt::Debug for Props {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Props")
            .field("open", &self.open)
            .field("on_open_change", &self.on_open_change.is_some())
            .finish()
    }
}

/// Implements the builder surface every dialog part shares.
macro_rules! impl_part {
    ($part:ident, $props:ident) => {
        impl $part {
            pub fn new(props: $props) -> Self {
                Self {
                    base: div(),
                    props,
                    children: Vec::new(),
                }
            }

            pub fn child(mut self, child: impl IntoElement) -> Self {
                self.children.push(child.into_any_element());
                self
            }

            pub fn children(mut self, children: impl IntoIterator<Item = impl IntoElement>) -> Self {
                self.children
                    .extend(children.into_iter().map(IntoElement::into_any_element));
                self
            }

            pub fn props(&self) -> &$props {
                &self.props
            }
        }

        impl Styled for $part {
            fn style(&mut self) -> &mut StyleRefinement {
                self.base.style()
            }
        }
    };
}

/// Scope of one dialog instance
#[derive(IntoElement)]
pub struct Root {
    base: Div,
    props: Props,
    children: Vec<AnyElement>,
}

impl_part!(Root, Props);

impl RenderOnce for Root {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        self.base.children(self.children)
    }
}

/// Trigger configuration
#[derive(Debug, Clone)]
pub struct TriggerProps {
    pub id: ElementId,
    pub dialog: Props,
    pub disabled: bool,
}

impl TriggerProps {
    pub fn new(id: impl Into<ElementId>, dialog: &Props) -> Self {
        Self {
            id: id.into(),
            dialog: dialog.clone(),
            disabled: false,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Requests `open = true` when clicked
#[derive(IntoElement)]
pub struct Trigger {
    base: Div,
    props: TriggerProps,
    children: Vec<AnyElement>,
}

impl_part!(Trigger, TriggerProps);

impl RenderOnce for Trigger {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let TriggerProps {
            id,
            dialog,
            disabled,
        } = self.props;

        self.base
            .id(id)
            .children(self.children)
            .when(!disabled, |el| {
                el.on_click(move |_event, window, cx| {
                    dialog.request_open(true, window, cx);
                })
            })
    }
}

/// Close configuration
#[derive(Debug, Clone)]
pub struct CloseProps {
    pub id: ElementId,
    pub dialog: Props,
}

impl CloseProps {
    pub fn new(id: impl Into<ElementId>, dialog: &Props) -> Self {
        Self {
            id: id.into(),
            dialog: dialog.clone(),
        }
    }
}

/// Requests `open = false` when clicked
#[derive(IntoElement)]
pub struct Close {
    base: Div,
    props: CloseProps,
    children: Vec<AnyElement>,
}

impl_part!(Close, CloseProps);

impl RenderOnce for Close {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let CloseProps { id, dialog } = self.props;

        self.base
            .id(id)
            .children(self.children)
            .on_click(move |_event, window, cx| {
                dialog.request_open(false, window, cx);
            })
    }
}

/// Portal configuration
#[derive(Debug, Clone)]
pub struct PortalProps {
    pub dialog: Props,
}

impl PortalProps {
    pub fn new(dialog: &Props) -> Self {
        Self {
            dialog: dialog.clone(),
        }
    }
}

/// Full-window layer holding the overlay and content; renders nothing while closed
#[derive(IntoElement)]
pub struct Portal {
    base: Div,
    props: PortalProps,
    children: Vec<AnyElement>,
}

impl_part!(Portal, PortalProps);

impl RenderOnce for Portal {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        if !self.props.dialog.is_open() {
            return div().into_any_element();
        }

        self.base
            .absolute()
            .inset_0()
            .children(self.children)
            .into_any_element()
    }
}

/// Overlay configuration
#[derive(Debug, Clone)]
pub struct OverlayProps {
    pub id: ElementId,
    pub dialog: Props,
    /// Clicking the overlay requests `open = false`
    pub dismissible: bool,
}

impl OverlayProps {
    pub fn new(id: impl Into<ElementId>, dialog: &Props) -> Self {
        Self {
            id: id.into(),
            dialog: dialog.clone(),
            dismissible: true,
        }
    }

    pub fn dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = dismissible;
        self
    }
}

/// Backdrop covering the portal layer
#[derive(IntoElement)]
pub struct Overlay {
    base: Div,
    props: OverlayProps,
    children: Vec<AnyElement>,
}

impl_part!(Overlay, OverlayProps);

impl RenderOnce for Overlay {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let OverlayProps {
            id,
            dialog,
            dismissible,
        } = self.props;

        self.base
            .id(id)
            .absolute()
            .inset_0()
            .children(self.children)
            .when(dismissible, |el| {
                el.on_click(move |_event, window, cx| {
                    dialog.request_open(false, window, cx);
                })
            })
    }
}

/// Content configuration
#[derive(Debug, Clone)]
pub struct ContentProps {
    pub id: ElementId,
    pub dialog: Props,
}

impl ContentProps {
    pub fn new(id: impl Into<ElementId>, dialog: &Props) -> Self {
        Self {
            id: id.into(),
            dialog: dialog.clone(),
        }
    }
}

/// Dialog body. Blocks pointer input from reaching the overlay beneath it.
#[derive(IntoElement)]
pub struct Content {
    base: Div,
    props: ContentProps,
    children: Vec<AnyElement>,
}

impl_part!(Content, ContentProps);

impl RenderOnce for Content {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        self.base
            .id(self.props.id)
            .occlude()
            .children(self.children)
    }
}

/// Title configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleProps {
    /// Heading level, 1 (largest) to 6
    pub level: u8,
}

impl TitleProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the heading level, clamped to 1..=6
    pub fn level(mut self, level: u8) -> Self {
        self.level = level.clamp(1, 6);
        self
    }
}

impl Default for TitleProps {
    fn default() -> Self {
        Self { level: 2 }
    }
}

/// Dialog heading
#[derive(IntoElement)]
pub struct Title {
    base: Div,
    props: TitleProps,
    children: Vec<AnyElement>,
}

impl_part!(Title, TitleProps);

impl RenderOnce for Title {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        self.base.children(self.children)
    }
}

/// Description configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DescriptionProps;

impl DescriptionProps {
    pub fn new() -> Self {
        Self
    }
}

/// Supporting text under the title
#[derive(IntoElement)]
pub struct Description {
    base: Div,
    props: DescriptionProps,
    children: Vec<AnyElement>,
}

impl_part!(Description, DescriptionProps);

impl RenderOnce for Description {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        self.base.children(self.children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requests_need_a_handler() {
        let props = Props::new().open(false);
        assert!(!props.accepts(true));
    }

    #[test]
    fn test_requests_matching_state_are_dropped() {
        let closed = Props::new().open(false).on_open_change(|_, _, _| {});
        assert!(closed.accepts(true));
        assert!(!closed.accepts(false));

        let open = closed.clone().open(true);
        assert!(open.accepts(false));
        assert!(!open.accepts(true));
    }

    #[test]
    fn test_parts_share_root_props() {
        let dialog = Props::new().open(true).on_open_change(|_, _, _| {});

        let trigger = TriggerProps::new("open-settings", &dialog);
        let close = CloseProps::new("close-settings", &dialog);
        let overlay = OverlayProps::new("overlay", &dialog);
        let portal = PortalProps::new(&dialog);

        assert!(trigger.dialog.is_open());
        assert!(close.dialog.accepts(false));
        assert!(overlay.dismissible);
        assert!(portal.dialog.is_open());
        assert!(!overlay.dismissible(false).dismissible);
    }

    #[test]
    fn test_title_level_is_clamped() {
        assert_eq!(TitleProps::new().level, 2);
        assert_eq!(TitleProps::new().level(0).level, 1);
        assert_eq!(TitleProps::new().level(9).level, 6);
        assert_eq!(TitleProps::new().level(3).level, 3);
    }

    #[test]
    fn test_props_debug_hides_handler() {
        let props = Props::new().open(true).on_open_change(|_, _, _| {});
        assert_eq!(
            format!("{props:?}"),
            "Props { open: true, on_open_change: true }"
        );
    }

    #[test]
    fn test_parts_keep_props() {
        let dialog = Props::new().open(true);
        let content = Content::new(ContentProps::new("content", &dialog));
        assert!(content.props().dialog.is_open());

        let trigger = Trigger::new(TriggerProps::new("trigger", &dialog).disabled(true));
        assert!(trigger.props().disabled);
    }
}
