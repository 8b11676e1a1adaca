pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{assign_form, error_alert, notice_alert, spot_card};
pub use layouts::desktop::desktop_layout;
