//! Read-only catalog records: portfolio items and the providers behind them.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Closed set of service categories a portfolio item can belong to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum ServiceCategory {
    Hair,
    Nails,
    Mua,
    Lashes,
    Brows,
    Skincare,
    Barber,
}

impl ServiceCategory {
    /// Every category, in suggestion-table order.
    pub const ALL: [ServiceCategory; 7] = [
        ServiceCategory::Hair,
        ServiceCategory::Nails,
        ServiceCategory::Mua,
        ServiceCategory::Lashes,
        ServiceCategory::Brows,
        ServiceCategory::Skincare,
        ServiceCategory::Barber,
    ];

    /// Tag as persisted, e.g. `HAIR`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceCategory::Hair => "HAIR",
            ServiceCategory::Nails => "NAILS",
            ServiceCategory::Mua => "MUA",
            ServiceCategory::Lashes => "LASHES",
            ServiceCategory::Brows => "BROWS",
            ServiceCategory::Skincare => "SKINCARE",
            ServiceCategory::Barber => "BARBER",
        }
    }
}

impl FromStr for ServiceCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Invalid service category: {s}"))
    }
}

/// One example of a provider's past work.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    pub id: String,
    pub provider_id: String,
    pub caption: String,
    pub category: ServiceCategory,
    /// Width over height, used by grid layouts
    pub aspect_ratio: f32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Starting price in whole currency units
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<u32>,
}

/// A service provider as known to the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProviderProfile {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}
