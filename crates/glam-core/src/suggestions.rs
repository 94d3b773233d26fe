//! "You might also need" checklist suggestions.
//!
//! Each service category has a keyword set and a fixed list of prep items.
//! A task's service name is matched against every category; each matching
//! category contributes its items once per pass, and anything already on
//! the event's checklist (compared case-insensitively) is dropped.

use std::collections::HashSet;

use crate::models::{ChecklistItem, PlanEvent, ServiceCategory};

struct SuggestionRule {
    category: ServiceCategory,
    /// Substrings tested in addition to the category name itself
    keywords: &'static [&'static str],
    items: &'static [&'static str],
}

impl SuggestionRule {
    fn matches(&self, service_name: &str) -> bool {
        service_name.contains(&self.category.as_str().to_lowercase())
            || self.keywords.iter().any(|k| service_name.contains(k))
    }
}

static RULES: [SuggestionRule; 7] = [
    SuggestionRule {
        category: ServiceCategory::Hair,
        keywords: &["braid", "twist", "loc", "cornrow", "silk press", "wig", "updo", "weave"],
        items: &["Satin bonnet", "Wide-tooth comb", "Edge control", "Bobby pins"],
    },
    SuggestionRule {
        category: ServiceCategory::Nails,
        keywords: &["nail", "mani", "pedi", "gel", "acrylic", "french tip"],
        items: &["Cuticle oil", "Nail file", "Open-toe sandals"],
    },
    SuggestionRule {
        category: ServiceCategory::Mua,
        keywords: &["makeup", "glam", "beat", "smokey", "contour"],
        items: &["Setting spray", "Makeup wipes", "Blotting papers", "Mirror"],
    },
    SuggestionRule {
        category: ServiceCategory::Lashes,
        keywords: &["lash"],
        items: &["Lash glue", "Spoolie", "Mirror"],
    },
    SuggestionRule {
        category: ServiceCategory::Brows,
        keywords: &["brow", "microblad", "lamination"],
        items: &["Brow gel", "Spoolie", "Tweezers"],
    },
    SuggestionRule {
        category: ServiceCategory::Skincare,
        keywords: &["facial", "skin", "peel", "glow"],
        items: &["Gentle cleanser", "SPF 50 sunscreen", "Hydrating mask"],
    },
    SuggestionRule {
        category: ServiceCategory::Barber,
        keywords: &["fade", "beard", "line up", "lineup", "shave", "taper"],
        items: &["Beard oil", "Durag", "Travel clippers"],
    },
];

/// Categories whose keywords appear in `service_name`, in table order.
pub fn matched_categories(service_name: &str) -> Vec<ServiceCategory> {
    let lowered = service_name.to_lowercase();
    RULES
        .iter()
        .filter(|rule| rule.matches(&lowered))
        .map(|rule| rule.category)
        .collect()
}

/// Derives checklist items the event's tasks call for that are not already
/// on its checklist.
///
/// Every suggestion gets a fresh id, `completed: false` and the category it
/// came from. The order is deterministic: tasks in event order, categories
/// in table order, items in table order, first occurrence wins.
pub fn suggest_checklist_items(event: &PlanEvent) -> Vec<ChecklistItem> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut candidates = Vec::new();

    for task in &event.tasks {
        let service_name = task.service_name.to_lowercase();
        for rule in RULES.iter().filter(|rule| rule.matches(&service_name)) {
            for &text in rule.items {
                if seen.insert(text) {
                    candidates.push(ChecklistItem::new(text, Some(rule.category)));
                }
            }
        }
    }

    let existing: HashSet<String> = event
        .checklist
        .iter()
        .map(|item| item.text.to_lowercase())
        .collect();

    candidates.retain(|item| !existing.contains(&item.text.to_lowercase()));
    candidates
}
