//! Browsable feed over the portfolio catalog.
//!
//! The feed is every catalog item in one sequence, shuffled with a seed
//! derived from the calendar date. The first shuffle is cached for the life
//! of the [`Feed`]; a long-running process keeps the same order across
//! midnight until it is restarted.

use std::{fmt, sync::Arc, sync::OnceLock};

use jiff::{civil::Date, Zoned};

use crate::{
    catalog::PortfolioCatalog,
    models::{PortfolioItem, ServiceCategory},
};

const LCG_MULTIPLIER: u64 = 9301;
const LCG_INCREMENT: u64 = 49297;
const LCG_MODULUS: u64 = 233_280;

/// Seed for a calendar date: `year * 10000 + month * 100 + day`.
///
/// ```rust
/// use glam_core::feed::date_seed;
/// use jiff::civil::date;
///
/// assert_eq!(date_seed(date(2026, 7, 4)), 20260704);
/// ```
pub fn date_seed(date: Date) -> u64 {
    let year = u64::try_from(date.year()).unwrap_or(0);
    let month = u64::try_from(date.month()).unwrap_or(0);
    let day = u64::try_from(date.day()).unwrap_or(0);
    year * 10_000 + month * 100 + day
}

/// Fisher–Yates shuffle driven by the linear congruential sequence
/// `state = (state * 9301 + 49297) mod 233280`.
///
/// Walks from the last index down to 1, picking
/// `j = floor(state / 233280 * (i + 1))` at each step. Any seed is accepted;
/// it is reduced modulo 233280 first. The input is left untouched.
pub fn shuffle_with_seed<T: Clone>(items: &[T], seed: u64) -> Vec<T> {
    let mut shuffled = items.to_vec();
    let mut state = seed % LCG_MODULUS;

    for i in (1..shuffled.len()).rev() {
        state = (state * LCG_MULTIPLIER + LCG_INCREMENT) % LCG_MODULUS;
        let ratio = state as f64 / LCG_MODULUS as f64;
        let j = (ratio * (i + 1) as f64).floor() as usize;
        shuffled.swap(i, j);
    }

    shuffled
}

fn today() -> Date {
    Zoned::now().date()
}

/// Date-seeded, process-stable view over a catalog.
pub struct Feed {
    catalog: Arc<PortfolioCatalog>,
    clock: Box<dyn Fn() -> Date + Send + Sync>,
    cache: OnceLock<Vec<PortfolioItem>>,
}

impl fmt::Debug for Feed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Feed")
            .field("cached", &self.cache.get().is_some())
            .finish_non_exhaustive()
    }
}

impl Feed {
    /// Feed seeded from today's date in the system time zone.
    pub fn new(catalog: Arc<PortfolioCatalog>) -> Self {
        Self::with_clock(catalog, today)
    }

    /// Feed seeded from a custom date source. The source is consulted once,
    /// on first access.
    pub fn with_clock<F>(catalog: Arc<PortfolioCatalog>, clock: F) -> Self
    where
        F: Fn() -> Date + Send + Sync + 'static,
    {
        Self {
            catalog,
            clock: Box::new(clock),
            cache: OnceLock::new(),
        }
    }

    /// Every catalog item in today's order.
    pub fn all_items(&self) -> &[PortfolioItem] {
        self.cache.get_or_init(|| {
            let seed = date_seed((self.clock)());
            log::debug!("Shuffling {} portfolio items with seed {seed}", self.catalog.items().len());
            shuffle_with_seed(self.catalog.items(), seed)
        })
    }

    /// Items in one category, in feed order.
    pub fn by_category(&self, category: ServiceCategory) -> Vec<&PortfolioItem> {
        self.all_items()
            .iter()
            .filter(|item| item.category == category)
            .collect()
    }

    /// Items from one provider, in feed order.
    pub fn by_provider(&self, provider_id: &str) -> Vec<&PortfolioItem> {
        self.all_items()
            .iter()
            .filter(|item| item.provider_id == provider_id)
            .collect()
    }

    /// Case-insensitive substring search over caption, tags, provider name
    /// and category. A blank query returns the whole feed.
    pub fn search(&self, query: &str) -> Vec<&PortfolioItem> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.all_items().iter().collect();
        }

        self.all_items()
            .iter()
            .filter(|item| self.matches(item, &needle))
            .collect()
    }

    /// Looks up an item by id.
    pub fn get(&self, id: &str) -> Option<&PortfolioItem> {
        self.all_items().iter().find(|item| item.id == id)
    }

    /// Catalog backing this feed.
    pub fn catalog(&self) -> &PortfolioCatalog {
        &self.catalog
    }

    fn matches(&self, item: &PortfolioItem, needle: &str) -> bool {
        if item.caption.to_lowercase().contains(needle)
            || item.category.as_str().to_lowercase().contains(needle)
            || item.tags.iter().any(|t| t.to_lowercase().contains(needle))
        {
            return true;
        }
        self.catalog
            .provider_for_item(item)
            .is_some_and(|p| p.name.to_lowercase().contains(needle))
    }
}
