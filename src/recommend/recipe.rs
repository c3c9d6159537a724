//! Recipe records as delivered by the data-loading layer.

use crate::text::normalize::RawIngredients;
use serde::{Deserialize, Serialize};

/// One recipe of the corpus.
///
/// Every field is required when deserializing; a table missing one of them
/// cannot be fitted.
///
/// # Examples
///
/// ```
/// use cocinar::recommend::Recipe;
///
/// let recipe = Recipe::new(1, "Pizza", &["cheese", "tomato", "dough"][..])
///     .with_attributes(25.0, 3.0, 4.0);
/// assert_eq!(recipe.n_ingredients, 3.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique id within the corpus.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Ingredient list, native or string-encoded.
    pub ingredients: RawIngredients,
    /// Preparation time in minutes.
    pub minutes: f64,
    /// Number of ingredients.
    pub n_ingredients: f64,
    /// Number of steps.
    pub n_steps: f64,
}

impl Recipe {
    /// Create a recipe with all numeric attributes set to zero.
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>, ingredients: impl Into<RawIngredients>) -> Self {
        Self {
            id,
            name: name.into(),
            ingredients: ingredients.into(),
            minutes: 0.0,
            n_ingredients: 0.0,
            n_steps: 0.0,
        }
    }

    /// Set preparation time, ingredient count and step count.
    #[must_use]
    pub fn with_attributes(mut self, minutes: f64, n_ingredients: f64, n_steps: f64) -> Self {
        self.minutes = minutes;
        self.n_ingredients = n_ingredients;
        self.n_steps = n_steps;
        self
    }

    /// Numeric attributes in scaler column order.
    #[must_use]
    pub fn attributes(&self) -> [f64; 3] {
        [self.minutes, self.n_ingredients, self.n_steps]
    }
}
