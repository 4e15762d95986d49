pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{contact_panel, error_page, showcase_section, ScrollProjection};
pub use pages::{home_page, HomeVm};
