//! Dashboard UI Library
//!
//! Themed widget surfaces for the tunnel dashboard. Application code imports
//! widgets from [`components::ui`] only; those modules are the single point of
//! contact with the headless parts in [`primitives`].

pub mod app;
pub mod assets;
pub mod components;
pub mod constants;
pub mod error;
pub mod helpers;
pub mod primitives;
pub mod settings;
pub mod surface;
pub mod theme;
