//! Showcase - Widget Gallery Window
//!
//! Renders every published widget surface through `components::ui` only, bound
//! to local view state.

use gpui::{
    App, Context, Div, FontWeight, IntoElement, ParentElement, Render, SharedString, Styled, Window,
    div, px,
};

use crate::components::ui::checkbox::{Checkbox, CheckboxEvents, CheckboxProps, CheckedState};
use crate::components::ui::dialog::{
    self, CloseProps, ContentProps, DescriptionProps, Dialog, DialogProps, TitleProps,
    TriggerProps,
};
use crate::surface::{self, WidgetSurface};
use crate::theme::UiColors;

/// Showcase view state
pub struct Showcase {
    remember_device: CheckedState,
    share_metrics: CheckedState,
    dialog_open: bool,
}

impl Showcase {
    pub fn new(_window: &mut Window, _cx: &mut Context<Self>) -> Self {
        Self {
            remember_device: CheckedState::Checked,
            share_metrics: CheckedState::Indeterminate,
            dialog_open: false,
        }
    }

    fn set_dialog_open(&mut self, open: bool, cx: &mut Context<Self>) {
        if self.dialog_open != open {
            tracing::debug!(open, "Showcase dialog toggled");
            self.dialog_open = open;
            cx.notify();
        }
    }

    fn render_checkboxes(&self, cx: &mut Context<Self>) -> Div {
        let remember = cx.entity();
        let share = cx.entity();

        div()
            .flex()
            .flex_col()
            .gap_3()
            .child(
                Checkbox::new(CheckboxProps::new("remember-device").checked(self.remember_device))
                    .events(CheckboxEvents::new().on_checked_change(move |state, _window, cx| {
                        remember.update(cx, |this, cx| {
                            this.remember_device = state;
                            cx.notify();
                        });
                    }))
                    .label("Remember this device"),
            )
            .child(
                Checkbox::new(CheckboxProps::new("share-metrics").checked(self.share_metrics))
                    .events(CheckboxEvents::new().on_checked_change(move |state, _window, cx| {
                        share.update(cx, |this, cx| {
                            this.share_metrics = state;
                            cx.notify();
                        });
                    }))
                    .label("Share tunnel metrics"),
            )
            .child(
                Checkbox::new(CheckboxProps::new("locked-option").checked(true).disabled(true))
                    .label("Managed by policy"),
            )
    }

    fn render_dialog_content(&self, props: &DialogProps) -> dialog::Content {
        dialog::Content::new(ContentProps::new("confirm-content", props))
            .child(
                dialog::Header::new()
                    .child(dialog::Title::new(TitleProps::new()).child("Close tunnel?"))
                    .child(
                        dialog::Description::new(DescriptionProps::new())
                            .child("Active connections through this tunnel will be dropped."),
                    ),
            )
            .child(
                dialog::Footer::new()
                    .child(
                        dialog::Close::new(CloseProps::new("confirm-cancel", props))
                            .px_4()
                            .py_2()
                            .rounded_md()
                            .border_1()
                            .border_color(UiColors::border())
                            .text_sm()
                            .cursor_pointer()
                            .child("Cancel"),
                    )
                    .child(
                        dialog::Close::new(CloseProps::new("confirm-accept", props))
                            .px_4()
                            .py_2()
                            .rounded_md()
                            .bg(UiColors::primary())
                            .text_color(UiColors::primary_foreground())
                            .text_sm()
                            .cursor_pointer()
                            .child("Close tunnel"),
                    ),
            )
    }
}

fn render_surface(surface: &WidgetSurface) -> Div {
    let exports: SharedString = surface.export_names().join(", ").into();

    div()
        .flex()
        .flex_col()
        .gap_1()
        .child(
            div()
                .text_sm()
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(UiColors::foreground())
                .child(SharedString::from(surface.domain_alias_name())),
        )
        .child(
            div()
                .text_xs()
                .text_color(UiColors::muted_foreground())
                .child(exports),
        )
}

fn section(title: &'static str) -> Div {
    div().flex().flex_col().gap_3().child(
        div()
            .text_size(px(16.0))
            .font_weight(FontWeight::SEMIBOLD)
            .text_color(UiColors::foreground())
            .child(title),
    )
}

impl Render for Showcase {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let entity = cx.entity();
        let dialog_props =
            DialogProps::new()
                .open(self.dialog_open)
                .on_open_change(move |open, _window, cx: &mut App| {
                    entity.update(cx, |this, cx| this.set_dialog_open(open, cx));
                });

        // Dialog root spans the window so its portal layer covers everything.
        Dialog::new(dialog_props.clone())
            .relative()
            .size_full()
            .bg(UiColors::background())
            .child(
                div()
                    .size_full()
                    .p_6()
                    .flex()
                    .flex_col()
                    .gap_6()
                    .child(section("Checkbox").child(self.render_checkboxes(cx)))
                    .child(
                        section("Dialog").child(
                            dialog::Trigger::new(TriggerProps::new("open-confirm", &dialog_props))
                                .w(px(140.0))
                                .px_4()
                                .py_2()
                                .rounded_md()
                                .bg(UiColors::primary())
                                .text_color(UiColors::primary_foreground())
                                .text_sm()
                                .cursor_pointer()
                                .child("Close tunnel…"),
                        ),
                    )
                    .child(
                        section("Surfaces")
                            .children(surface::registry().iter().map(render_surface)),
                    ),
            )
            .child(self.render_dialog_content(&dialog_props))
    }
}
