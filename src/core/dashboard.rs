//! Dashboard summary of a user's inventory.
//!
//! [`summarize`] is a pure function over already-loaded items so it can be
//! tested without a database; [`load_dashboard`] is the async wrapper used by
//! the bot.

use crate::{
    core::{
        expiry::{ExpiryStatus, compute_status},
        inventory,
    },
    entities::food_item,
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

/// How many items each dashboard list shows
pub const DASHBOARD_LIST_LIMIT: usize = 5;

/// Counts and short lists describing an inventory on a given day
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    /// All items
    pub total_items: usize,
    /// Items past their expiry date
    pub expired: usize,
    /// Items expiring today
    pub expires_today: usize,
    /// Items expiring tomorrow
    pub expires_tomorrow: usize,
    /// Items expiring within a week, today included
    pub this_week: usize,
    /// Items that expire today or are in the expiring-soon band
    pub expiring_soon: usize,
    /// Most urgent non-expired items, earliest expiry first
    pub expiring_items: Vec<food_item::Model>,
    /// Expired items, earliest expiry first
    pub expired_items: Vec<food_item::Model>,
    /// Most recently logged items, newest first
    pub recent_items: Vec<food_item::Model>,
}

/// Summarises `items` as of `today`.
#[must_use]
pub fn summarize(items: &[food_item::Model], today: NaiveDate) -> DashboardSummary {
    let mut expiring_items = Vec::new();
    let mut expired_items = Vec::new();
    let mut expires_today = 0;
    let mut expires_tomorrow = 0;
    let mut this_week = 0;

    for item in items {
        let info = compute_status(item.expiry_date, today);

        match info.status {
            ExpiryStatus::Expired => expired_items.push(item.clone()),
            status if status.is_urgent() => expiring_items.push(item.clone()),
            _ => {}
        }
        if info.status == ExpiryStatus::ExpiresToday {
            expires_today += 1;
        }
        if info.days_remaining == 1 {
            expires_tomorrow += 1;
        }
        if (0..=7).contains(&info.days_remaining) {
            this_week += 1;
        }
    }

    let expired = expired_items.len();
    let expiring_soon = expiring_items.len();

    expiring_items.sort_by_key(|item| item.expiry_date);
    expiring_items.truncate(DASHBOARD_LIST_LIMIT);
    expired_items.sort_by_key(|item| item.expiry_date);
    expired_items.truncate(DASHBOARD_LIST_LIMIT);

    let mut recent_items = items.to_vec();
    recent_items.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    recent_items.truncate(DASHBOARD_LIST_LIMIT);

    DashboardSummary {
        total_items: items.len(),
        expired,
        expires_today,
        expires_tomorrow,
        this_week,
        expiring_soon,
        expiring_items,
        expired_items,
        recent_items,
    }
}

/// Loads `user_id`'s items and summarises them as of `today`.
///
/// # Errors
/// Returns an error if the items can't be loaded.
pub async fn load_dashboard(
    db: &DatabaseConnection,
    user_id: &str,
    today: NaiveDate,
) -> Result<DashboardSummary> {
    let items = inventory::get_all_food_items(db, user_id).await?;
    Ok(summarize(&items, today))
}
