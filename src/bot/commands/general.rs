//! General Discord commands - ping, help, and other utility commands.
//! This module contains simple commands that don't require database operations
//! and provide basic bot functionality and user assistance.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        errors::{Error, Result},
    };

    /// Responds with "Pong!" to test bot connectivity.
    #[poise::command(slash_command, prefix_command)]
    pub async fn ping(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.say("Pong!").await?;
        Ok(())
    }

    /// Displays help information about available commands.
    #[poise::command(slash_command, prefix_command)]
    pub async fn help(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "**PantryBuddy Help**\n\
        Keep track of what's in your kitchen, see what's about to expire, and find something to cook.\n\n\
        **Inventory Commands**\n\
        • `/item add <name> <category> [quantity] [unit] [expiry]` - Logs a food item. Expiry is `YYYY-MM-DD`.\n\
        • `/item list [category] [search]` - Lists your items, soonest expiry first.\n\
        • `/item edit <id> [name] [category] [quantity] [unit] [expiry]` - Changes an item.\n\
        • `/item delete <id>` - Removes an item.\n\
        • `/dashboard` - Shows expiry counts, urgent items, and recent additions.\n\n\
        **Recipe Commands**\n\
        • `/recipes` - Suggests recipes ranked by how many ingredients you already have.\n\
        • `/recipe_detail <name>` - Shows ingredients and steps for a suggested recipe.\n\n\
        **Utility Commands**\n\
        • `/ping` - Checks if the bot is responsive.\n\
        • `/help` - Shows this help message.";

        ctx.say(help_text).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
