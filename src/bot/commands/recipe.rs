//! Recipe Discord commands - `/recipes` and `/recipe_detail`.
//!
//! Both commands build the candidate list the same way: the caller's
//! ingredients are looked up through the recipe service (or the cache), with
//! the built-in recipes standing in when the service can't help.

use crate::{
    bot::format::{self, EMBED_FIELD_LIMIT, EMBED_TITLE_LIMIT},
    core::matcher::MatchResult,
};

/// Share of the `/recipes` embed given to the "Based on" description
const DESCRIPTION_BUDGET: usize = 1000;

/// Embed field for one ranked suggestion.
fn suggestion_field(result: &MatchResult<'_>) -> (String, String, bool) {
    let recipe = result.recipe;
    let name = format::truncate(
        &format!(
            "{} {} ({}%)",
            result.feasibility.emoji(),
            recipe.name,
            result.match_percentage
        ),
        EMBED_TITLE_LIMIT,
    );

    let mut lines = vec![format!(
        "**{}** feasibility: {}",
        result.feasibility,
        result.feasibility.hint()
    )];
    if !result.matched_ingredients.is_empty() {
        lines.push(format!("✅ Have: {}", result.matched_ingredients.join(", ")));
    }
    if !result.missing_ingredients.is_empty() {
        lines.push(format!("🛒 Need: {}", result.missing_ingredients.join(", ")));
    }
    lines.push(format!(
        "⏱️ {} min · 🍽️ {} servings · {}",
        recipe.cooking_minutes, recipe.servings, recipe.category
    ));
    if let Some(url) = &recipe.source_url {
        lines.push(format!("🔗 {url}"));
    }

    (name, format::truncate(&lines.join("\n"), EMBED_FIELD_LIMIT), false)
}

/// Fields for the top `limit` suggestions, stopping before their combined
/// name and value text would exceed `budget` characters.
fn suggestion_fields(
    ranked: &[MatchResult<'_>],
    limit: usize,
    budget: usize,
) -> Vec<(String, String, bool)> {
    let mut remaining = budget;
    let mut fields = Vec::new();
    for result in ranked.iter().take(limit) {
        let field = suggestion_field(result);
        let size = field.0.chars().count() + field.1.chars().count();
        if size > remaining {
            break;
        }
        remaining -= size;
        fields.push(field);
    }
    fields
}

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use super::{DESCRIPTION_BUDGET, suggestion_fields};
    use crate::{
        bot::{
            BotData,
            format::{
                self, EMBED_DESCRIPTION_LIMIT, EMBED_FIELD_LIMIT, EMBED_TITLE_LIMIT,
                EMBED_TOTAL_LIMIT,
            },
        },
        core::{
            inventory,
            matcher::{self, normalize_ingredient},
            recipe::Recipe,
            recipes::fetch_candidates,
        },
        errors::{Error, Result},
    };
    use poise::serenity_prelude as serenity;
    use std::collections::HashSet;

    /// Discord allows at most 25 fields per embed
    const MAX_EMBED_FIELDS: usize = 25;

    /// The caller's ingredient names and the candidate recipes for them.
    /// `None` when the caller has no items.
    async fn load_candidates(
        ctx: poise::Context<'_, BotData, Error>,
    ) -> Result<Option<(Vec<String>, Vec<Recipe>)>> {
        let user_id = ctx.author().id.to_string();
        let data = ctx.data();

        let items = inventory::get_all_food_items(&data.database, &user_id).await?;
        if items.is_empty() {
            return Ok(None);
        }

        let ingredients = inventory::ingredient_names(&items);
        let candidates = fetch_candidates(
            &data.database,
            data.recipe_client.as_ref(),
            &ingredients,
            &data.config.recipes,
            chrono::Utc::now().naive_utc(),
        )
        .await;

        Ok(Some((ingredients, candidates)))
    }

    /// Suggests recipes ranked by how many of their ingredients you already have.
    #[poise::command(slash_command)]
    pub async fn recipes(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.defer().await?;

        let Some((ingredients, candidates)) = load_candidates(ctx).await? else {
            ctx.say("You don't have any food items yet. Use `/item add` to log some, then try again!")
                .await?;
            return Ok(());
        };

        let limit = ctx
            .data()
            .config
            .recipes
            .suggestion_limit
            .clamp(1, MAX_EMBED_FIELDS);
        let mut sources: Vec<String> = Vec::new();
        for recipe in &candidates {
            let source = recipe.source.to_string();
            if !sources.contains(&source) {
                sources.push(source);
            }
        }

        let title = "**Recipe Suggestions**";
        let description = format::truncate(
            &format!("Based on: {}", ingredients.join(", ")),
            DESCRIPTION_BUDGET,
        );
        let footer = format!(
            "PantryBuddy | Recipes from {} | Use /recipe_detail for steps",
            sources.join(", ")
        );
        let budget = EMBED_TOTAL_LIMIT
            .saturating_sub(title.chars().count())
            .saturating_sub(description.chars().count())
            .saturating_sub(footer.chars().count());

        let ranked = matcher::suggest_recipes(&ingredients, &candidates);
        let embed_fields = suggestion_fields(&ranked, limit, budget);

        let recipes_embed = serenity::CreateEmbed::default()
            .title(title)
            .description(description)
            .color(0x009B_59B6)
            .fields(embed_fields)
            .footer(serenity::CreateEmbedFooter::new(footer));

        ctx.send(poise::CreateReply::default().embed(recipes_embed))
            .await?;
        Ok(())
    }

    /// Shows the ingredients and step-by-step instructions for a suggested recipe.
    #[poise::command(slash_command)]
    pub async fn recipe_detail(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Name (or part of the name) of a recipe from /recipes"] name: String,
    ) -> Result<()> {
        ctx.defer().await?;

        let Some((ingredients, candidates)) = load_candidates(ctx).await? else {
            ctx.say("You don't have any food items yet. Use `/item add` to log some, then try again!")
                .await?;
            return Ok(());
        };

        let wanted = normalize_ingredient(&name);
        let Some(recipe) = candidates
            .iter()
            .find(|r| normalize_ingredient(&r.name) == wanted)
            .or_else(|| {
                candidates
                    .iter()
                    .find(|r| normalize_ingredient(&r.name).contains(&wanted))
            })
        else {
            ctx.say(format!(
                "❌ No suggested recipe matches '{name}'. Use `/recipes` to see what's available."
            ))
            .await?;
            return Ok(());
        };

        let on_hand: HashSet<String> = ingredients.iter().map(|i| normalize_ingredient(i)).collect();
        let ingredient_lines: Vec<String> = recipe
            .ingredients
            .iter()
            .map(|ingredient| {
                let mark = if on_hand.contains(&normalize_ingredient(ingredient)) {
                    "✅"
                } else {
                    "🛒"
                };
                format!("{mark} {ingredient}")
            })
            .collect();

        let step_lines: Vec<String> = recipe
            .instruction_steps()
            .iter()
            .enumerate()
            .map(|(i, step)| format!("{}. {step}", i + 1))
            .collect();
        let steps = if step_lines.is_empty() {
            "No instructions available.".to_string()
        } else {
            format::join_lines_within(&step_lines, EMBED_DESCRIPTION_LIMIT)
        };

        let mut detail_embed = serenity::CreateEmbed::default()
            .title(format::truncate(&format!("**{}**", recipe.name), EMBED_TITLE_LIMIT))
            .description(steps)
            .color(0x009B_59B6)
            .field(
                "Ingredients",
                format::join_lines_within(&ingredient_lines, EMBED_FIELD_LIMIT),
                false,
            )
            .field(
                "Details",
                format!(
                    "⏱️ {} min · 🍽️ {} servings · {}",
                    recipe.cooking_minutes, recipe.servings, recipe.category
                ),
                false,
            )
            .footer(serenity::CreateEmbedFooter::new(format!(
                "PantryBuddy | Recipe from {}",
                recipe.source
            )));
        if let Some(url) = &recipe.source_url {
            detail_embed = detail_embed.url(url);
        }

        ctx.send(poise::CreateReply::default().embed(detail_embed))
            .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
