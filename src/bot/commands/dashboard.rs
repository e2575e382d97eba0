//! Dashboard Discord command - an at-a-glance view of the caller's inventory.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{
            BotData,
            format::{self, EMBED_FIELD_LIMIT},
        },
        core::dashboard::load_dashboard,
        entities::food_item,
        errors::{Error, Result},
    };
    use chrono::NaiveDate;
    use poise::serenity_prelude as serenity;

    fn item_lines(items: &[food_item::Model], today: NaiveDate) -> String {
        if items.is_empty() {
            return "Nothing here.".to_string();
        }
        let lines: Vec<String> = items
            .iter()
            .map(|item| format::format_item_line(item, today))
            .collect();
        format::join_lines_within(&lines, EMBED_FIELD_LIMIT)
    }

    /// Shows expiry counts, the most urgent items, and your latest additions.
    #[poise::command(slash_command)]
    pub async fn dashboard(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let user_id = ctx.author().id.to_string();
        let db = &ctx.data().database;
        let today = chrono::Local::now().date_naive();

        let summary = load_dashboard(db, &user_id, today).await?;

        if summary.total_items == 0 {
            ctx.say("Your inventory is empty. Use `/item add` to log some food!")
                .await?;
            return Ok(());
        }

        let counts = format!(
            "📦 **{}** items in total\n\
             ❌ **{}** expired\n\
             🔥 **{}** expire today\n\
             ⏰ **{}** expire tomorrow\n\
             📅 **{}** expire within a week\n\
             ⚠️ **{}** need attention soon",
            summary.total_items,
            summary.expired,
            summary.expires_today,
            summary.expires_tomorrow,
            summary.this_week,
            summary.expiring_soon,
        );

        let embed_fields = vec![
            (
                "Use These First".to_string(),
                item_lines(&summary.expiring_items, today),
                false,
            ),
            (
                "Expired".to_string(),
                item_lines(&summary.expired_items, today),
                false,
            ),
            (
                "Recently Added".to_string(),
                item_lines(&summary.recent_items, today),
                false,
            ),
        ];

        let color = if summary.expired > 0 {
            0x00E7_4C3C
        } else if summary.expiring_soon > 0 {
            0x00F3_9C12
        } else {
            0x002E_CC71
        };

        let dashboard_embed = serenity::CreateEmbed::default()
            .title("**Kitchen Dashboard**")
            .description(counts)
            .color(color)
            .fields(embed_fields)
            .footer(serenity::CreateEmbedFooter::new(format!(
                "PantryBuddy | As of {}",
                today.format("%Y-%m-%d")
            )));

        ctx.send(poise::CreateReply::default().embed(dashboard_embed))
            .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
