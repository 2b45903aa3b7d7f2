//! Theme - Palette and Typography
//!
//! Static design tokens used by the local part implementations.

pub mod colors;
pub mod typography;

pub use colors::UiColors;
pub use typography::Typography;
