//! Primitive Components
//!
//! Headless compound components: interaction and structure only, no styling.
//! Application code does not import these directly; `components::ui` is the
//! only consumer and republishes them under the themed widget surfaces.

pub mod checkbox;
pub mod dialog;
