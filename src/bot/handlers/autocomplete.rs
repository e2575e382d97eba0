//! Autocomplete handlers for Discord slash command parameters.

use crate::{
    bot::BotData,
    core::inventory,
    entities::FoodCategory,
    errors::Error,
};

/// Suggests food categories matching the partial input.
pub async fn autocomplete_category(
    _ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    let partial_lower = partial.to_lowercase();

    FoodCategory::ALL
        .iter()
        .filter(|cat| {
            cat.as_str().contains(&partial_lower) || cat.label().to_lowercase().contains(&partial_lower)
        })
        .map(|cat| cat.as_str().to_string())
        .collect()
}

/// Suggests names of the caller's own items matching the partial input.
///
/// Returns at most 25 names (Discord's autocomplete limit), sorted and
/// de-duplicated.
pub async fn autocomplete_item_name(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    let db = &ctx.data().database;
    let user_id = ctx.author().id.to_string();

    let Ok(items) = inventory::get_all_food_items(db, &user_id).await else {
        return Vec::new();
    };

    let partial_lower = partial.to_lowercase();
    let mut matching: Vec<String> = items
        .into_iter()
        .map(|item| item.name)
        .filter(|name| name.to_lowercase().contains(&partial_lower))
        .collect();

    matching.sort();
    matching.dedup();
    matching.truncate(25);
    matching
}
