//! Checkbox Primitive
//!
//! Unstyled, single-part checkbox. Owns the toggle interaction and nothing else;
//! presentation comes entirely from the caller.

use std::rc::Rc;

use gpui::{
    AnyElement, App, ClickEvent, Div, ElementId, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, StatefulInteractiveElement, StyleRefinement, Styled, Window, div, prelude::*,
};

/// Names of the parts this module provides
pub const PARTS: &[&str] = &["Root"];

/// Checked state of a checkbox
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CheckedState {
    #[default]
    Unchecked,
    Checked,
    /// Mixed state, e.g. a "select all" box over a partial selection
    Indeterminate,
}

impl CheckedState {
    /// Whether the box shows a check mark
    pub fn is_checked(self) -> bool {
        self == CheckedState::Checked
    }

    pub fn is_indeterminate(self) -> bool {
        self == CheckedState::Indeterminate
    }

    /// State after a user toggle. Indeterminate resolves to checked.
    pub fn toggled(self) -> Self {
        match self {
            CheckedState::Checked => CheckedState::Unchecked,
            CheckedState::Unchecked | CheckedState::Indeterminate => CheckedState::Checked,
        }
    }
}

impl From<bool> for CheckedState {
    fn from(checked: bool) -> Self {
        if checked {
            CheckedState::Checked
        } else {
            CheckedState::Unchecked
        }
    }
}

/// Handler for checked-state changes
pub type CheckedChangeHandler = Rc<dyn Fn(CheckedState, &mut Window, &mut App) + 'static>;

/// Handler for raw clicks
pub type ClickHandler = Rc<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

/// Checkbox configuration
#[derive(Debug, Clone)]
pub struct Props {
    pub id: ElementId,
    pub checked: CheckedState,
    pub disabled: bool,
}

impl Props {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            checked: CheckedState::Unchecked,
            disabled: false,
        }
    }

    /// Set the checked state (`bool` or [`CheckedState`])
    pub fn checked(mut self, checked: impl Into<CheckedState>) -> Self {
        self.checked = checked.into();
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Interaction signals emitted by the checkbox
#[derive(Clone, Default)]
pub struct Events {
    on_checked_change: Option<CheckedChangeHandler>,
    on_click: Option<ClickHandler>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called with the requested state when the user toggles the box
    pub fn on_checked_change(
        mut self,
        handler: impl Fn(CheckedState, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_checked_change = Some(Rc::new(handler));
        self
    }

    /// Called for every click before the checked change
    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Rc::new(handler));
        self
    }

    /// Whether any handler is attached
    pub fn is_empty(&self) -> bool {
        self.on_checked_change.is_none() && self.on_click.is_none()
    }
}

/// Root (and only) part of the checkbox
#[derive(IntoElement)]
pub struct Root {
    base: Div,
    props: Props,
    events: Events,
    children: Vec<AnyElement>,
}

impl Root {
    pub fn new(props: Props) -> Self {
        Self {
            base: div(),
            props,
            events: Events::default(),
            children: Vec::new(),
        }
    }

    /// Attach event handlers
    pub fn events(mut self, events: Events) -> Self {
        self.events = events;
        self
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

    pub fn props(&self) -> &Props {
        &self.props
    }
}

impl Styled for Root {
    fn style(&mut self) -> &mut StyleRefinement {
        self.base.style()
    }
}

impl RenderOnce for Root {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let Props {
            id,
            checked,
            disabled,
        } = self.props;
        let Events {
            on_checked_change,
            on_click,
        } = self.events;
        let interactive = !disabled && (on_checked_change.is_some() || on_click.is_some());

        self.base
            .id(id)
            .children(self.children)
            .when(interactive, |el| {
                el.on_click(move |event, window, cx| {
                    if let Some(handler) = &on_click {
                        handler(event, window, cx);
                    }
                    if let Some(handler) = &on_checked_change {
                        handler(checked.toggled(), window, cx);
                    }
                })
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_cycle() {
        assert_eq!(CheckedState::Unchecked.toggled(), CheckedState::Checked);
        assert_eq!(CheckedState::Checked.toggled(), CheckedState::Unchecked);
        assert_eq!(CheckedState::Indeterminate.toggled(), CheckedState::Checked);
    }

    #[test]
    fn test_from_bool() {
        assert_eq!(CheckedState::from(true), CheckedState::Checked);
        assert_eq!(CheckedState::from(false), CheckedState::Unchecked);
        assert!(CheckedState::from(true).is_checked());
        assert!(!CheckedState::Indeterminate.is_checked());
        assert!(CheckedState::Indeterminate.is_indeterminate());
    }

    #[test]
    fn test_props_builder() {
        let props = Props::new("terms")
            .checked(CheckedState::Indeterminate)
            .disabled(true);
        assert_eq!(props.id, ElementId::from("terms"));
        assert_eq!(props.checked, CheckedState::Indeterminate);
        assert!(props.disabled);

        let props = Props::new("terms").checked(true);
        assert_eq!(props.checked, CheckedState::Checked);
        assert!(!props.disabled);
    }

    #[test]
    fn test_events_builder() {
        assert!(Events::new().is_empty());
        let events = Events::new().on_checked_change(|_, _, _| {});
        assert!(!events.is_empty());
    }

    #[test]
    fn test_root_keeps_props() {
        let root = Root::new(Props::new("remember").checked(true));
        assert!(root.props().checked.is_checked());
    }
}
