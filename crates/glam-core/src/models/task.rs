//! Plan task model definition and related functionality.

use std::cmp::Ordering;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{new_id, PortfolioItem, ProviderProfile, TaskStatus};

/// One service linked to a catalog portfolio item.
///
/// `service_name`, `provider_name` and `provider_id` are copied at creation
/// time and are not kept in sync with the catalog afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanTask {
    /// Unique identifier within the parent event
    pub id: String,

    /// Catalog entry this task was created from (may no longer resolve)
    pub portfolio_item_id: String,

    /// Display text copied from the portfolio item's caption
    pub service_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<String>,

    /// Appointment date once one is set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<Date>,

    pub status: TaskStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl PlanTask {
    /// Creates a `planned` task from a portfolio item and its resolved
    /// provider, if any.
    pub fn from_portfolio_item(item: &PortfolioItem, provider: Option<&ProviderProfile>) -> Self {
        Self {
            id: new_id(),
            portfolio_item_id: item.id.clone(),
            service_name: item.caption.clone(),
            provider_name: provider.map(|p| p.name.clone()),
            provider_id: provider.map(|p| p.id.clone()),
            scheduled_date: None,
            status: TaskStatus::Planned,
            notes: None,
        }
    }
}

/// Sorts tasks by scheduled date, earliest first, with unscheduled tasks
/// last. The sort is stable so unscheduled tasks keep their insertion order.
pub fn sort_tasks_by_schedule(tasks: &mut [PlanTask]) {
    tasks.sort_by(|a, b| match (a.scheduled_date, b.scheduled_date) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}
