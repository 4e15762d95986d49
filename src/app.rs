use crate::catalog::{Catalog, CatalogError};
use crate::config::Config;
use crate::templates::ScrollProjection;

/// Everything a request handler may read. Immutable once built, shared by
/// all server workers.
#[derive(Debug)]
pub struct App {
    pub catalog: Catalog,
    pub projection: ScrollProjection,
    pub htmx_src: String,
}

impl App {
    pub fn new(config: &Config) -> Result<Self, CatalogError> {
        Ok(Self {
            catalog: Catalog::embedded()?,
            projection: ScrollProjection::new(config.card_width),
            htmx_src: config.htmx_src.clone(),
        })
    }
}
