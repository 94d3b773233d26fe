//! Immutable catalog of providers and their portfolio items.

use crate::models::{PortfolioItem, ProviderProfile};

mod bundled;

/// Static collection of portfolio items tagged with their providers.
#[derive(Debug, Clone, Default)]
pub struct PortfolioCatalog {
    providers: Vec<ProviderProfile>,
    items: Vec<PortfolioItem>,
}

impl PortfolioCatalog {
    /// Builds a catalog from explicit records.
    pub fn new(providers: Vec<ProviderProfile>, items: Vec<PortfolioItem>) -> Self {
        Self { providers, items }
    }

    /// The catalog shipped with the application.
    pub fn bundled() -> Self {
        Self::new(bundled::providers(), bundled::portfolio_items())
    }

    /// All items in catalog order.
    pub fn items(&self) -> &[PortfolioItem] {
        &self.items
    }

    /// All providers in catalog order.
    pub fn providers(&self) -> &[ProviderProfile] {
        &self.providers
    }

    /// Looks up a portfolio item by id.
    pub fn item(&self, id: &str) -> Option<&PortfolioItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Looks up a provider by id.
    pub fn provider(&self, id: &str) -> Option<&ProviderProfile> {
        self.providers.iter().find(|p| p.id == id)
    }

    /// Items published by one provider, in catalog order.
    pub fn items_by_provider(&self, provider_id: &str) -> Vec<&PortfolioItem> {
        self.items
            .iter()
            .filter(|item| item.provider_id == provider_id)
            .collect()
    }

    /// Resolves the provider behind an item. Dangling provider ids resolve
    /// to `None`.
    pub fn provider_for_item(&self, item: &PortfolioItem) -> Option<&ProviderProfile> {
        self.provider(&item.provider_id)
    }
}
