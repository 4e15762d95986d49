pub mod about;
pub mod contact;
pub mod error;
pub mod featured;
pub mod footer;
pub mod header;
pub mod hero;
pub mod icons;
pub mod showcase;

pub use about::about_section;
pub use contact::{contact_panel, contact_section};
pub use error::error_page;
pub use featured::featured_section;
pub use footer::footer;
pub use header::site_header;
pub use hero::hero_section;
pub use showcase::{showcase_section, ScrollProjection};
