//! Catalog data bundled with the application.

use crate::models::{PortfolioItem, ProviderProfile, ServiceCategory};

fn provider(id: &str, name: &str, location: &str) -> ProviderProfile {
    ProviderProfile {
        id: id.to_string(),
        name: name.to_string(),
        location: Some(location.to_string()),
    }
}

#[allow(clippy::too_many_arguments)]
fn item(
    id: &str,
    provider_id: &str,
    caption: &str,
    category: ServiceCategory,
    aspect_ratio: f32,
    tags: &[&str],
    price: u32,
) -> PortfolioItem {
    PortfolioItem {
        id: id.to_string(),
        provider_id: provider_id.to_string(),
        caption: caption.to_string(),
        category,
        aspect_ratio,
        tags: tags.iter().map(|t| (*t).to_string()).collect(),
        price: Some(price),
    }
}

pub(super) fn providers() -> Vec<ProviderProfile> {
    vec![
        provider("prov-amara", "Amara Styles", "Atlanta, GA"),
        provider("prov-lumi", "Lumi Lash Studio", "Houston, TX"),
        provider("prov-glowbar", "The Glow Bar", "Brooklyn, NY"),
        provider("prov-tips", "Tips & Toes Co.", "Chicago, IL"),
        provider("prov-fade", "Fade Theory", "Oakland, CA"),
        provider("prov-arch", "Arch Society", "Miami, FL"),
    ]
}

pub(super) fn portfolio_items() -> Vec<PortfolioItem> {
    use ServiceCategory::*;

    vec![
        item(
            "pf-001",
            "prov-amara",
            "Knotless braids, mid-back",
            Hair,
            0.75,
            &["braids", "protective"],
            220,
        ),
        item(
            "pf-002",
            "prov-amara",
            "Silk press with trim",
            Hair,
            0.8,
            &["silk press"],
            95,
        ),
        item(
            "pf-003",
            "prov-amara",
            "Bridal updo with pearls",
            Hair,
            1.0,
            &["bridal", "updo"],
            180,
        ),
        item(
            "pf-004",
            "prov-lumi",
            "Volume lash set",
            Lashes,
            1.0,
            &["volume", "lash extensions"],
            150,
        ),
        item(
            "pf-005",
            "prov-lumi",
            "Classic lash fill",
            Lashes,
            0.8,
            &["fill"],
            75,
        ),
        item(
            "pf-006",
            "prov-lumi",
            "Lash lift and tint",
            Lashes,
            1.25,
            &["lift", "tint"],
            85,
        ),
        item(
            "pf-007",
            "prov-glowbar",
            "Bridal glam — soft smokey eye",
            Mua,
            0.8,
            &["bridal", "smokey"],
            250,
        ),
        item(
            "pf-008",
            "prov-glowbar",
            "Natural beat for photos",
            Mua,
            1.0,
            &["natural", "photoshoot"],
            120,
        ),
        item(
            "pf-009",
            "prov-glowbar",
            "Hydrating facial",
            Skincare,
            1.0,
            &["facial", "glow"],
            110,
        ),
        item(
            "pf-010",
            "prov-tips",
            "Chrome french tips",
            Nails,
            0.75,
            &["chrome", "french"],
            65,
        ),
        item(
            "pf-011",
            "prov-tips",
            "Gel pedicure, nude set",
            Nails,
            1.0,
            &["gel", "pedi"],
            55,
        ),
        item(
            "pf-012",
            "prov-tips",
            "Acrylic almond set with art",
            Nails,
            0.8,
            &["acrylic", "nail art"],
            80,
        ),
        item(
            "pf-013",
            "prov-fade",
            "Skin fade with line up",
            Barber,
            1.0,
            &["fade"],
            45,
        ),
        item(
            "pf-014",
            "prov-fade",
            "Beard sculpt and hot towel",
            Barber,
            0.8,
            &["beard"],
            40,
        ),
        item(
            "pf-015",
            "prov-arch",
            "Brow lamination",
            Brows,
            1.0,
            &["lamination"],
            70,
        ),
        item(
            "pf-016",
            "prov-arch",
            "Microblading touch-up",
            Brows,
            0.75,
            &["microblading"],
            150,
        ),
        item(
            "pf-017",
            "prov-amara",
            "Two-strand twists on locs",
            Hair,
            0.8,
            &["locs", "twists"],
            130,
        ),
        item(
            "pf-018",
            "prov-glowbar",
            "Soft glam with lashes",
            Mua,
            1.25,
            &["soft glam"],
            160,
        ),
    ]
}
