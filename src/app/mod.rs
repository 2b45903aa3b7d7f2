//! Application Layer
//!
//! Showcase binary: app initialization, window management and the gallery view.

pub mod application;
pub mod showcase;
