//! Food item Discord commands - `/item add`, `list`, `edit` and `delete`.
//!
//! All commands act on the caller's own items only.

use crate::{bot::format, errors::Error};
use chrono::NaiveDate;

/// Message for errors caused by the user's input, `None` for internal failures.
fn input_error_message(error: &Error, today: NaiveDate) -> Option<String> {
    match error {
        Error::InvalidDate { input } => Some(format!(
            "{}: '{input}' is not a valid date. Use the format `YYYY-MM-DD`, e.g. `2024-03-20`.",
            format::format_expiry_input(input, today)
        )),
        Error::InvalidQuantity { .. } => {
            Some("❌ Quantity must be a positive number.".to_string())
        }
        Error::InvalidCategory { input } => Some(format!(
            "❌ '{input}' is not a known category. Pick one from the suggestions."
        )),
        Error::ItemNotFound { id } => Some(format!(
            "❌ You don't have an item with ID `{id}`. Use `/item list` to see your items."
        )),
        Error::Config { message } => Some(format!("❌ {message}.")),
        _ => None,
    }
}

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use super::input_error_message;
    use crate::{
        bot::{
            BotData,
            format::{self, EMBED_DESCRIPTION_LIMIT},
            handlers::autocomplete,
        },
        core::{
            expiry,
            inventory::{self, FoodItemChanges, ItemFilter, NewFoodItem},
        },
        entities::{FoodCategory, food_item},
        errors::{Error, Result},
    };
    use poise::serenity_prelude as serenity;

    async fn reply_or_propagate(
        ctx: poise::Context<'_, BotData, Error>,
        error: Error,
    ) -> Result<()> {
        let today = chrono::Local::now().date_naive();
        if let Some(message) = input_error_message(&error, today) {
            ctx.say(message).await?;
            Ok(())
        } else {
            ctx.say("❌ Something went wrong. Please try again later.")
                .await?;
            Err(error)
        }
    }

    fn parse_category(input: Option<&str>) -> Result<Option<FoodCategory>> {
        input.map(str::parse::<FoodCategory>).transpose()
    }

    fn parse_expiry(input: Option<&str>) -> Result<Option<chrono::NaiveDate>> {
        input.map(expiry::parse_expiry_date).transpose()
    }

    fn describe_item(item: &food_item::Model) -> String {
        let today = chrono::Local::now().date_naive();
        format::format_item_line(item, today)
    }

    /// Parent command for managing the food items in your inventory.
    #[poise::command(
        slash_command,
        subcommands("item_add", "item_list", "item_edit", "item_delete")
    )]
    pub async fn item(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "Food item command. Available subcommands:\n\
            `/item add` - Log a new food item\n\
            `/item list` - List your food items\n\
            `/item edit` - Change an item\n\
            `/item delete` - Remove an item";

        ctx.say(help_text).await?;
        Ok(())
    }

    /// Logs a new food item.
    ///
    /// When no expiry date is given, one is suggested from the configured shelf life.
    #[poise::command(slash_command, rename = "add")]
    pub async fn item_add(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "What the item is (e.g., 'Milk')"] name: String,
        #[description = "Food category"]
        #[autocomplete = "autocomplete::autocomplete_category"]
        category: String,
        #[description = "How much you have. Defaults to 1."] quantity: Option<f64>,
        #[description = "Unit for the quantity (e.g., 'liters'). Defaults to 'pieces'."]
        unit: Option<String>,
        #[description = "Expiry date as YYYY-MM-DD. Defaults to a week from today."]
        expiry: Option<String>,
    ) -> Result<()> {
        let user_id = ctx.author().id.to_string();
        let data = ctx.data();

        let category = match category.parse::<FoodCategory>() {
            Ok(category) => category,
            Err(e) => return reply_or_propagate(ctx, e).await,
        };
        let expiry_date = match parse_expiry(expiry.as_deref()) {
            Ok(Some(date)) => date,
            Ok(None) => inventory::default_expiry_date(
                chrono::Local::now().date_naive(),
                data.config.inventory.default_shelf_days,
            ),
            Err(e) => return reply_or_propagate(ctx, e).await,
        };

        let new_item = NewFoodItem {
            name,
            category,
            quantity: quantity.unwrap_or(1.0),
            unit: unit.unwrap_or_default(),
            expiry_date,
        };

        match inventory::create_food_item(&data.database, &user_id, new_item).await {
            Ok(created) => {
                ctx.say(format!("✅ Added {}", describe_item(&created)))
                    .await?;
                Ok(())
            }
            Err(e) => reply_or_propagate(ctx, e).await,
        }
    }

    /// Lists your food items, soonest expiry first.
    #[poise::command(slash_command, rename = "list")]
    pub async fn item_list(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Only show this category"]
        #[autocomplete = "autocomplete::autocomplete_category"]
        category: Option<String>,
        #[description = "Only show items whose name contains this text"]
        #[autocomplete = "autocomplete::autocomplete_item_name"]
        search: Option<String>,
    ) -> Result<()> {
        let user_id = ctx.author().id.to_string();
        let db = &ctx.data().database;

        let category = match parse_category(category.as_deref()) {
            Ok(category) => category,
            Err(e) => return reply_or_propagate(ctx, e).await,
        };
        let filter = ItemFilter { category, search };

        let items = inventory::list_food_items(db, &user_id, &filter).await?;

        if items.is_empty() {
            let message = if filter == ItemFilter::default() {
                "Your inventory is empty. Use `/item add` to log some food!"
            } else {
                "No items match that filter."
            };
            ctx.say(message).await?;
            return Ok(());
        }

        let lines: Vec<String> = items.iter().map(describe_item).collect();

        let list_embed = serenity::CreateEmbed::default()
            .title("**Your Food Items**")
            .description(format::join_lines_within(&lines, EMBED_DESCRIPTION_LIMIT))
            .color(0x002E_CC71)
            .footer(serenity::CreateEmbedFooter::new(format!(
                "PantryBuddy | {} items",
                items.len()
            )));

        ctx.send(poise::CreateReply::default().embed(list_embed))
            .await?;
        Ok(())
    }

    /// Changes one of your food items. Only the options you give are updated.
    #[poise::command(slash_command, rename = "edit")]
    pub async fn item_edit(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "ID of the item (shown in `/item list`)"] id: i64,
        #[description = "New name"] name: Option<String>,
        #[description = "New category"]
        #[autocomplete = "autocomplete::autocomplete_category"]
        category: Option<String>,
        #[description = "New quantity"] quantity: Option<f64>,
        #[description = "New unit"] unit: Option<String>,
        #[description = "New expiry date as YYYY-MM-DD"] expiry: Option<String>,
    ) -> Result<()> {
        let user_id = ctx.author().id.to_string();
        let db = &ctx.data().database;

        let category = match parse_category(category.as_deref()) {
            Ok(category) => category,
            Err(e) => return reply_or_propagate(ctx, e).await,
        };
        let expiry_date = match parse_expiry(expiry.as_deref()) {
            Ok(date) => date,
            Err(e) => return reply_or_propagate(ctx, e).await,
        };

        let changes = FoodItemChanges {
            name,
            category,
            quantity,
            unit,
            expiry_date,
        };
        if changes == FoodItemChanges::default() {
            ctx.say("Nothing to change. Give at least one option to update.")
                .await?;
            return Ok(());
        }

        match inventory::update_food_item(db, &user_id, id, changes).await {
            Ok(updated) => {
                ctx.say(format!("✏️ Updated {}", describe_item(&updated)))
                    .await?;
                Ok(())
            }
            Err(e) => reply_or_propagate(ctx, e).await,
        }
    }

    /// Removes one of your food items.
    #[poise::command(slash_command, rename = "delete")]
    pub async fn item_delete(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "ID of the item (shown in `/item list`)"] id: i64,
    ) -> Result<()> {
        let user_id = ctx.author().id.to_string();
        let db = &ctx.data().database;

        match inventory::delete_food_item(db, &user_id, id).await {
            Ok(deleted) => {
                ctx.say(format!("🗑️ Deleted **{}**.", deleted.name))
                    .await?;
                Ok(())
            }
            Err(e) => reply_or_propagate(ctx, e).await,
        }
    }
}

// Re-export all commands
pub use inner::*;
