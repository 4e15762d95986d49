// src/domain/listing.rs
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Which showcase collection is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingCategory {
    #[default]
    Buy,
    Rent,
    Sold,
}

impl ListingCategory {
    pub const ALL: [ListingCategory; 3] = [Self::Buy, Self::Rent, Self::Sold];

    /// Lowercase key used in query strings and the catalog file.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Rent => "rent",
            Self::Sold => "sold",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Buy => "Buy",
            Self::Rent => "Rent",
            Self::Sold => "Sold",
        }
    }
}

impl fmt::Display for ListingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListingCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "buy" => Ok(Self::Buy),
            "rent" => Ok(Self::Rent),
            "sold" => Ok(Self::Sold),
            other => Err(format!("unknown listing category '{other}'")),
        }
    }
}

/// A showcase card. Loaded once at startup, never mutated.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Listing {
    pub id: u32,
    #[serde(rename = "image")]
    pub image_url: String,
    #[serde(rename = "location")]
    pub location_label: String,
    #[serde(rename = "sqft")]
    pub area_sq_ft: u32,
    #[serde(rename = "beds")]
    pub bedroom_count: u8,
    #[serde(rename = "baths")]
    pub bathroom_count: u8,
}

/// A property in the "Discover Your Perfect Property Match" grid.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FeaturedProperty {
    pub id: u32,
    #[serde(rename = "image")]
    pub image_url: String,
    pub price_usd: u64,
    pub address: String,
    pub city: String,
    #[serde(rename = "state")]
    pub state_label: String,
    #[serde(rename = "sqft")]
    pub area_sq_ft: u32,
    #[serde(rename = "beds")]
    pub bedroom_count: u8,
    #[serde(rename = "baths")]
    pub bathroom_count: u8,
    #[serde(default)]
    pub featured: bool,
}

impl FeaturedProperty {
    pub fn display_price(&self) -> String {
        format!("${}", format_thousands(self.price_usd))
    }
}

/// `3126` -> `"3,126"`
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
