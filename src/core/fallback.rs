//! Built-in fallback recipes.
//!
//! Used whenever the external recipe service is unavailable, not configured,
//! or returns nothing. The list is compiled into the binary.

use crate::core::recipe::{Recipe, RecipeSource};

struct FallbackRecipe {
    id: &'static str,
    name: &'static str,
    category: &'static str,
    ingredients: &'static [&'static str],
    instructions: &'static str,
    cooking_minutes: u32,
    servings: u32,
}

const FALLBACK_RECIPES: &[FallbackRecipe] = &[
    FallbackRecipe {
        id: "fallback_1",
        name: "Vegetable Pulao",
        category: "Main Course",
        ingredients: &[
            "basmati rice",
            "mixed vegetables",
            "onion",
            "ginger garlic paste",
            "garam masala",
            "cumin seeds",
            "ghee",
            "salt",
        ],
        instructions: "1. Wash and soak rice for 30 minutes. 2. Heat ghee in a pressure cooker. \
            3. Add cumin seeds and sliced onion. 4. Add chopped vegetables and sauté. \
            5. Add rice, water, garam masala and salt. 6. Pressure cook for 2 whistles.",
        cooking_minutes: 30,
        servings: 4,
    },
    FallbackRecipe {
        id: "fallback_2",
        name: "Chana Masala",
        category: "Main Course",
        ingredients: &[
            "chickpeas",
            "onion",
            "tomato",
            "ginger garlic paste",
            "chana masala powder",
            "turmeric",
            "coriander powder",
            "oil",
        ],
        instructions: "1. Soak chickpeas overnight. 2. Pressure cook until soft. \
            3. Heat oil in a pan. 4. Add onion and ginger garlic paste. \
            5. Add tomato and spices. 6. Add cooked chickpeas and simmer.",
        cooking_minutes: 45,
        servings: 4,
    },
    FallbackRecipe {
        id: "fallback_3",
        name: "Tomato Rice",
        category: "Main Course",
        ingredients: &["rice", "tomato", "onion", "mustard seeds", "salt", "oil"],
        instructions: "1. Cook the rice and let it cool. 2. Heat oil and splutter mustard seeds. \
            3. Fry onion until golden. 4. Add chopped tomato and salt and cook to a pulp. \
            5. Fold in the rice.",
        cooking_minutes: 25,
        servings: 3,
    },
    FallbackRecipe {
        id: "fallback_4",
        name: "Masala Omelette",
        category: "Breakfast",
        ingredients: &["egg", "onion", "tomato", "green chili", "salt", "oil"],
        instructions: "1. Beat the eggs with salt. 2. Stir in chopped onion, tomato and green chili. \
            3. Heat oil in a pan. 4. Pour in the eggs and cook both sides.",
        cooking_minutes: 10,
        servings: 1,
    },
    FallbackRecipe {
        id: "fallback_5",
        name: "Dal Tadka",
        category: "Main Course",
        ingredients: &[
            "lentils",
            "onion",
            "tomato",
            "garlic",
            "cumin seeds",
            "turmeric",
            "ghee",
            "salt",
        ],
        instructions: "1. Pressure cook lentils with turmeric and salt. \
            2. Heat ghee and add cumin seeds and garlic. 3. Add onion and tomato and cook down. \
            4. Pour the tempering over the dal and simmer.",
        cooking_minutes: 35,
        servings: 4,
    },
    FallbackRecipe {
        id: "fallback_6",
        name: "Aloo Gobi",
        category: "Side Dish",
        ingredients: &[
            "potato",
            "cauliflower",
            "onion",
            "turmeric",
            "cumin seeds",
            "coriander leaves",
            "oil",
            "salt",
        ],
        instructions: "1. Cut potato and cauliflower into florets and cubes. \
            2. Heat oil and add cumin seeds. 3. Add onion and turmeric. \
            4. Add vegetables and salt, cover and cook until tender. \
            5. Garnish with coriander leaves.",
        cooking_minutes: 30,
        servings: 3,
    },
    FallbackRecipe {
        id: "fallback_7",
        name: "Palak Paneer",
        category: "Main Course",
        ingredients: &[
            "spinach",
            "paneer",
            "onion",
            "garlic",
            "cream",
            "garam masala",
            "butter",
            "salt",
        ],
        instructions: "1. Blanch spinach and blend to a puree. 2. Melt butter and fry onion and garlic. \
            3. Add the puree, garam masala and salt. 4. Add cubed paneer and simmer. \
            5. Finish with cream.",
        cooking_minutes: 30,
        servings: 3,
    },
    FallbackRecipe {
        id: "fallback_8",
        name: "Sweet Lassi",
        category: "Beverage",
        ingredients: &["yogurt", "milk", "sugar", "cardamom"],
        instructions: "1. Whisk yogurt until smooth. 2. Add milk, sugar and cardamom. \
            3. Blend until frothy and serve chilled.",
        cooking_minutes: 5,
        servings: 2,
    },
];

/// Returns the full fallback list, every recipe tagged [`RecipeSource::Fallback`].
#[must_use]
pub fn fallback_recipes() -> Vec<Recipe> {
    FALLBACK_RECIPES
        .iter()
        .map(|r| Recipe {
            id: r.id.to_string(),
            name: r.name.to_string(),
            ingredients: r.ingredients.iter().map(ToString::to_string).collect(),
            instructions: r.instructions.to_string(),
            category: r.category.to_string(),
            cooking_minutes: r.cooking_minutes,
            servings: r.servings,
            source_url: None,
            source: RecipeSource::Fallback,
        })
        .collect()
}
