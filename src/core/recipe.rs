//! Recipe value types shared by the matcher, the fallback list, the cache and
//! the recipe API client.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a recipe came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeSource {
    /// Returned by the external recipe service
    ExternalApi,
    /// Taken from the built-in fallback list
    Fallback,
}

impl fmt::Display for RecipeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExternalApi => f.write_str("Spoonacular"),
            Self::Fallback => f.write_str("PantryBuddy classics"),
        }
    }
}

/// A recipe candidate. Immutable once fetched or loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Identifier, unique within its source
    pub id: String,
    /// Display name
    pub name: String,
    /// Required ingredient names, in recipe order
    pub ingredients: Vec<String>,
    /// Preparation instructions
    pub instructions: String,
    /// Dish category (e.g., "Main Course")
    pub category: String,
    /// Total cooking time in minutes
    pub cooking_minutes: u32,
    /// Number of servings
    pub servings: u32,
    /// Link to the full recipe, when the source provides one
    pub source_url: Option<String>,
    /// Where the recipe came from
    pub source: RecipeSource,
}

impl Recipe {
    /// Splits the instructions into numbered steps.
    ///
    /// Steps are separated by `". "`; leading "1." style numbering is dropped.
    #[must_use]
    pub fn instruction_steps(&self) -> Vec<String> {
        self.instructions
            .split(". ")
            .map(|step| {
                let step = step.trim();
                let after_number = step.trim_start_matches(|c: char| c.is_ascii_digit());
                let step = match after_number.strip_prefix('.') {
                    Some(rest) => rest,
                    None if after_number.is_empty() => after_number,
                    None => step,
                };
                step.trim().trim_end_matches('.').to_string()
            })
            .filter(|step| !step.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instruction_steps() {
        let recipe = Recipe {
            id: "r1".to_string(),
            name: "Test".to_string(),
            ingredients: vec![],
            instructions: "1. Wash the rice. 2. Boil water. 3. Cook for 10 minutes.".to_string(),
            category: "Main Course".to_string(),
            cooking_minutes: 20,
            servings: 2,
            source_url: None,
            source: RecipeSource::Fallback,
        };

        assert_eq!(
            recipe.instruction_steps(),
            vec!["Wash the rice", "Boil water", "Cook for 10 minutes"]
        );

        let unnumbered = Recipe {
            instructions: "2 cups of water go in first. Stir".to_string(),
            ..recipe
        };
        assert_eq!(
            unnumbered.instruction_steps(),
            vec!["2 cups of water go in first", "Stir"]
        );
    }
}
