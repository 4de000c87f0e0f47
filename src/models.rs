//! Wire records returned by the recipe service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One editable ingredient row, as the service stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct IngredientRow {
    pub value: String,
}

impl IngredientRow {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// A recipe as fetched from the service. Absent fields fall back to
/// defaults so a partially filled record still hydrates a form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub description: String,
    pub cooking_time: u32,
    pub is_premium: bool,
    pub is_published: bool,
    pub ingredients: Vec<IngredientRow>,
    pub image_urls: Vec<String>,
    pub author: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}
