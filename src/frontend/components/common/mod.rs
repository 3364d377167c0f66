//! Common reusable components.

pub mod button;
pub mod progressbar;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use progressbar::ProgressBar;
