//! Recipe matching.
//!
//! Scores each candidate recipe by the share of its ingredients found in the
//! user's inventory and ranks the candidates. Ingredient names are compared
//! case-insensitively after trimming and collapsing whitespace; there is no
//! fuzzy or synonym matching. Empty inventories are valid and score 0%.

use crate::core::recipe::Recipe;
use std::{collections::HashSet, fmt};

/// Lowest percentage rated [`Feasibility::High`]
pub const HIGH_FEASIBILITY_PERCENT: u8 = 70;
/// Lowest percentage rated [`Feasibility::Medium`]
pub const MEDIUM_FEASIBILITY_PERCENT: u8 = 40;

/// Coarse rating of how cookable a recipe is right now
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feasibility {
    /// 70% or more of the ingredients on hand
    High,
    /// 40% to 69%
    Medium,
    /// Below 40%
    Low,
}

impl Feasibility {
    /// Rates a match percentage.
    #[must_use]
    pub const fn from_percentage(match_percentage: u8) -> Self {
        if match_percentage >= HIGH_FEASIBILITY_PERCENT {
            Self::High
        } else if match_percentage >= MEDIUM_FEASIBILITY_PERCENT {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// One-line hint shown next to the recipe
    #[must_use]
    pub const fn hint(self) -> &'static str {
        match self {
            Self::High => "You have most ingredients!",
            Self::Medium => "You have many ingredients",
            Self::Low => "You need several ingredients",
        }
    }

    /// Traffic-light icon
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::High => "🟢",
            Self::Medium => "🟡",
            Self::Low => "🔴",
        }
    }
}

impl fmt::Display for Feasibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => f.write_str("High"),
            Self::Medium => f.write_str("Medium"),
            Self::Low => f.write_str("Low"),
        }
    }
}

/// Score of one recipe against the inventory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult<'a> {
    /// The scored recipe
    pub recipe: &'a Recipe,
    /// Share of the recipe's ingredients on hand, 0-100
    pub match_percentage: u8,
    /// Rating derived from `match_percentage`
    pub feasibility: Feasibility,
    /// Recipe ingredients found in the inventory
    pub matched_ingredients: Vec<&'a str>,
    /// Recipe ingredients not found in the inventory
    pub missing_ingredients: Vec<&'a str>,
}

/// Normalises an ingredient name for comparison: lowercase, trimmed, with
/// runs of whitespace collapsed to a single space.
#[must_use]
pub fn normalize_ingredient(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// `matched / total * 100`, rounded half up. Zero when `total` is zero.
#[must_use]
pub fn match_percentage(matched: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let rounded = (matched.min(total) * 200 + total) / (total * 2);
    u8::try_from(rounded).unwrap_or(100)
}

/// Scores a single recipe against an already-normalised inventory.
#[must_use]
pub fn score_recipe<'a>(inventory: &HashSet<String>, recipe: &'a Recipe) -> MatchResult<'a> {
    let (matched_ingredients, missing_ingredients): (Vec<&str>, Vec<&str>) = recipe
        .ingredients
        .iter()
        .map(String::as_str)
        .partition(|ingredient| inventory.contains(&normalize_ingredient(ingredient)));

    let match_percentage = match_percentage(matched_ingredients.len(), recipe.ingredients.len());

    MatchResult {
        recipe,
        match_percentage,
        feasibility: Feasibility::from_percentage(match_percentage),
        matched_ingredients,
        missing_ingredients,
    }
}

/// Scores every candidate and ranks them by match percentage, highest first.
///
/// Recipes with equal scores keep their input order. Neither input is mutated.
#[must_use]
pub fn suggest_recipes<'a, S: AsRef<str>>(
    inventory: &[S],
    candidates: &'a [Recipe],
) -> Vec<MatchResult<'a>> {
    let inventory: HashSet<String> = inventory
        .iter()
        .map(|name| normalize_ingredient(name.as_ref()))
        .filter(|name| !name.is_empty())
        .collect();

    let mut results: Vec<MatchResult<'a>> = candidates
        .iter()
        .map(|recipe| score_recipe(&inventory, recipe))
        .collect();

    // sort_by is stable, so ties keep input order
    results.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::recipe::RecipeSource;

    fn recipe(name: &str, ingredients: &[&str]) -> Recipe {
        Recipe {
            id: name.to_lowercase().replace(' ', "_"),
            name: name.to_string(),
            ingredients: ingredients.iter().map(ToString::to_string).collect(),
            instructions: String::new(),
            category: "Main Course".to_string(),
            cooking_minutes: 30,
            servings: 2,
            source_url: None,
            source: RecipeSource::ExternalApi,
        }
    }

    #[test]
    fn test_tomato_rice_scores_fifty_percent() {
        let inventory = ["rice", "onion", "tomato"];
        let candidates = [recipe("Tomato Rice", &["rice", "tomato", "salt", "oil"])];

        let results = suggest_recipes(&inventory, &candidates);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].match_percentage, 50);
        assert_eq!(results[0].feasibility, Feasibility::Medium);
        assert_eq!(results[0].matched_ingredients, vec!["rice", "tomato"]);
        assert_eq!(results[0].missing_ingredients, vec!["salt", "oil"]);
    }

    #[test]
    fn test_matching_ignores_case_and_whitespace() {
        let inventory = ["  Basmati   RICE ", "Onion"];
        let candidates = [recipe("Pulao", &["basmati rice", " onion"])];

        let results = suggest_recipes(&inventory, &candidates);
        assert_eq!(results[0].match_percentage, 100);
        assert_eq!(results[0].feasibility, Feasibility::High);
    }

    #[test]
    fn test_no_fuzzy_matching() {
        let inventory = ["tomato"];
        let candidates = [recipe("Salad", &["tomatoes"])];

        let results = suggest_recipes(&inventory, &candidates);
        assert_eq!(results[0].match_percentage, 0);
    }

    #[test]
    fn test_ranking_is_descending_and_stable() {
        let inventory = ["egg", "milk"];
        let candidates = [
            recipe("A", &["flour", "sugar"]),
            recipe("B", &["egg", "flour"]),
            recipe("C", &["egg", "milk"]),
            recipe("D", &["milk", "sugar"]),
            recipe("E", &["butter"]),
        ];

        let results = suggest_recipes(&inventory, &candidates);
        let names: Vec<&str> = results.iter().map(|r| r.recipe.name.as_str()).collect();
        assert_eq!(names, vec!["C", "B", "D", "A", "E"]);

        for pair in results.windows(2) {
            assert!(pair[0].match_percentage >= pair[1].match_percentage);
        }
    }

    #[test]
    fn test_empty_inventory_scores_zero() {
        let inventory: [&str; 0] = [];
        let candidates = [recipe("A", &["egg"]), recipe("B", &["milk", "egg"])];

        let results = suggest_recipes(&inventory, &candidates);
        assert!(results.iter().all(|r| r.match_percentage == 0));
        assert!(results.iter().all(|r| r.feasibility == Feasibility::Low));
        assert_eq!(results[0].recipe.name, "A");
    }

    #[test]
    fn test_recipe_without_ingredients_scores_zero() {
        let inventory = ["egg"];
        let candidates = [recipe("Water", &[])];

        let results = suggest_recipes(&inventory, &candidates);
        assert_eq!(results[0].match_percentage, 0);
    }

    #[test]
    fn test_empty_candidates() {
        let candidates: [Recipe; 0] = [];
        assert!(suggest_recipes(&["egg"], &candidates).is_empty());
    }

    #[test]
    fn test_is_idempotent_and_does_not_mutate() {
        let inventory = vec!["rice".to_string(), "onion".to_string()];
        let candidates = vec![
            recipe("Fried Rice", &["rice", "egg", "onion"]),
            recipe("Onion Soup", &["onion", "butter"]),
        ];
        let before = candidates.clone();

        let first = suggest_recipes(&inventory, &candidates);
        let second = suggest_recipes(&inventory, &candidates);

        assert_eq!(first, second);
        assert_eq!(candidates, before);
    }

    #[test]
    fn test_match_percentage_rounding_and_bounds() {
        assert_eq!(match_percentage(1, 3), 33);
        assert_eq!(match_percentage(2, 3), 67);
        assert_eq!(match_percentage(1, 8), 13); // 12.5 rounds up
        assert_eq!(match_percentage(0, 5), 0);
        assert_eq!(match_percentage(5, 5), 100);
        assert_eq!(match_percentage(0, 0), 0);

        for total in 1..=20 {
            for matched in 0..=total {
                assert!(match_percentage(matched, total) <= 100);
            }
        }
    }

    #[test]
    fn test_feasibility_cutoffs() {
        assert_eq!(Feasibility::from_percentage(100), Feasibility::High);
        assert_eq!(Feasibility::from_percentage(70), Feasibility::High);
        assert_eq!(Feasibility::from_percentage(69), Feasibility::Medium);
        assert_eq!(Feasibility::from_percentage(40), Feasibility::Medium);
        assert_eq!(Feasibility::from_percentage(39), Feasibility::Low);
        assert_eq!(Feasibility::from_percentage(0), Feasibility::Low);
    }

    #[test]
    fn test_normalize_ingredient() {
        assert_eq!(normalize_ingredient("  Green\tChili  "), "green chili");
        assert_eq!(normalize_ingredient("   "), "");
    }
}
