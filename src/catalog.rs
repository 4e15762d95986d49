// src/catalog.rs
//
// Static listing data, embedded at compile time and parsed once at startup.

use crate::domain::carousel::ListingSource;
use crate::domain::listing::{FeaturedProperty, Listing, ListingCategory};
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

const EMBEDDED_LISTINGS: &str = include_str!("../data/listings.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog JSON is invalid: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("showcase category '{0}' has no listings")]
    EmptyCategory(ListingCategory),

    #[error("showcase category '{category}' repeats listing id {id}")]
    DuplicateId { category: ListingCategory, id: u32 },

    #[error("featured list is empty")]
    NoFeatured,
}

#[derive(Debug, Deserialize)]
struct Showcase {
    buy: Vec<Listing>,
    rent: Vec<Listing>,
    sold: Vec<Listing>,
}

#[derive(Debug, Deserialize)]
struct RawCatalog {
    featured: Vec<FeaturedProperty>,
    showcase: Showcase,
}

/// Read-only for the lifetime of the process.
#[derive(Debug)]
pub struct Catalog {
    featured: Vec<FeaturedProperty>,
    showcase: Showcase,
}

impl Catalog {
    /// The listings shipped with the binary.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_LISTINGS)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = serde_json::from_str(json)?;

        if raw.featured.is_empty() {
            return Err(CatalogError::NoFeatured);
        }

        let catalog = Catalog {
            featured: raw.featured,
            showcase: raw.showcase,
        };

        for category in ListingCategory::ALL {
            let listings = catalog.listings(category);
            if listings.is_empty() {
                return Err(CatalogError::EmptyCategory(category));
            }
            let mut seen = HashSet::new();
            for listing in listings {
                if !seen.insert(listing.id) {
                    return Err(CatalogError::DuplicateId {
                        category,
                        id: listing.id,
                    });
                }
            }
        }

        tracing::debug!(
            featured = catalog.featured.len(),
            buy = catalog.showcase.buy.len(),
            rent = catalog.showcase.rent.len(),
            sold = catalog.showcase.sold.len(),
            "catalog loaded"
        );

        Ok(catalog)
    }

    pub fn featured(&self) -> &[FeaturedProperty] {
        &self.featured
    }
}

impl ListingSource for Catalog {
    fn listings(&self, category: ListingCategory) -> &[Listing] {
        match category {
            ListingCategory::Buy => &self.showcase.buy,
            ListingCategory::Rent => &self.showcase.rent,
            ListingCategory::Sold => &self.showcase.sold,
        }
    }
}
