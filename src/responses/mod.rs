pub mod assets;
pub mod errors;
pub mod html;

pub use crate::errors::ResultResp;
pub use errors::error_to_response;

pub use assets::{css_response, text_response};
pub use html::{html_response, redirect_response};
