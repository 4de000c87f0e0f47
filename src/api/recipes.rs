//! Recipe operations and typed fetches.

use super::client::ApiClient;
use super::Operation;
use crate::models::Recipe;
use crate::submit::TransportError;
use reqwest::Method;

const MY_RECIPES_ROUTE: &str = "/user/profile/my-recipes";

pub fn create_recipe() -> Operation {
    Operation {
        name: "create recipe",
        method: Method::POST,
        path: "/recipes".into(),
        success_message: "Recipe created successfully",
        redirect: Some(MY_RECIPES_ROUTE),
    }
}

pub fn update_recipe(recipe_id: &str) -> Operation {
    Operation {
        name: "update recipe",
        method: Method::PUT,
        path: format!("/recipes/{}", recipe_id),
        success_message: "Recipe updated successfully",
        redirect: Some(MY_RECIPES_ROUTE),
    }
}

pub fn delete_recipe(recipe_id: &str) -> Operation {
    Operation {
        name: "delete recipe",
        method: Method::DELETE,
        path: format!("/recipes/{}", recipe_id),
        success_message: "Recipe deleted successfully",
        redirect: None,
    }
}

impl ApiClient {
    /// Fetch one recipe, e.g. as the hydration source for the update form.
    pub async fn recipe(&self, recipe_id: &str) -> Result<Recipe, TransportError> {
        let value = self.get_json(&format!("/recipes/{}", recipe_id)).await?;
        serde_json::from_value(value).map_err(|e| TransportError::Decode(e.to_string()))
    }

    /// Fetch all recipes owned by a user.
    pub async fn recipes_by_user(&self, user_id: &str) -> Result<Vec<Recipe>, TransportError> {
        let value = self.get_json(&format!("/recipes/user/{}", user_id)).await?;
        serde_json::from_value(value).map_err(|e| TransportError::Decode(e.to_string()))
    }
}
