//! Populating the update form from a previously fetched recipe.

use super::payload::FormPayload;
use crate::models::Recipe;

impl FormPayload {
    /// Initial form state for editing `recipe`. Missing fields already
    /// carry their defaults on the record (empty string, zero, false,
    /// empty list), so hydration never fails.
    pub fn from_recipe(recipe: &Recipe) -> Self {
        let mut payload = Self::new();
        payload.replace_with(recipe);
        payload
    }

    /// Fully replace the form state with `recipe`'s fields. Runs again
    /// on every refetch; last write wins, nothing is merged.
    pub fn replace_with(&mut self, recipe: &Recipe) {
        self.clear();
        self.set_text("title", recipe.title.as_str());
        self.set_text("description", recipe.description.as_str());
        self.set_number("cookingTime", f64::from(recipe.cooking_time));
        self.set_flag("isPremium", recipe.is_premium);
        self.set_flag("isPublished", recipe.is_published);
        self.set_rows("ingredients", &recipe.ingredients);
    }
}
