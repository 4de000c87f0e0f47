//! Structured field data collected from a form before transport encoding.

use super::{FormError, FormResult};
use crate::models::IngredientRow;
use serde_json::{json, Map, Value};

/// One validated form field value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Flag(bool),
    /// Repeated sub-records already flattened to plain strings
    /// (ingredient rows lose their `{value}` wrapper here).
    Items(Vec<String>),
}

impl FieldValue {
    fn to_json(&self) -> Value {
        match self {
            FieldValue::Text(s) => json!(s),
            // Whole numbers serialize without a fraction (15, not 15.0).
            // Only safe when the value survives the i64 round-trip;
            // larger magnitudes would saturate and change the value.
            FieldValue::Number(n) if (*n as i64) as f64 == *n => json!(*n as i64),
            FieldValue::Number(n) => json!(n),
            FieldValue::Flag(b) => json!(b),
            FieldValue::Items(items) => json!(items),
        }
    }
}

/// Ordered mapping of field name → value. The field set is defined by
/// the caller per form; nothing here is recipe-specific.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormPayload {
    fields: Vec<(String, FieldValue)>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any existing value under the same name
    /// while keeping its position.
    pub fn set(&mut self, name: impl Into<String>, value: FieldValue) {
        let name = name.into();
        if let Some(slot) = self.fields.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.fields.push((name, value));
        }
    }

    pub fn set_text(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.set(name, FieldValue::Text(value.into()));
    }

    pub fn set_number(&mut self, name: impl Into<String>, value: f64) {
        self.set(name, FieldValue::Number(value));
    }

    /// Coerce raw text input (e.g. a cooking-time field) to a number.
    pub fn set_number_text(&mut self, name: impl Into<String>, raw: &str) -> FormResult<()> {
        let name = name.into();
        let value: f64 = raw.trim().parse().map_err(|_| FormError::NotANumber {
            field: name.clone(),
            raw: raw.to_string(),
        })?;
        self.set(name, FieldValue::Number(value));
        Ok(())
    }

    pub fn set_flag(&mut self, name: impl Into<String>, value: bool) {
        self.set(name, FieldValue::Flag(value));
    }

    /// Remap per-row editing records to a flat string array.
    pub fn set_rows(&mut self, name: impl Into<String>, rows: &[IngredientRow]) {
        let items = rows.iter().map(|row| row.value.clone()).collect();
        self.set(name, FieldValue::Items(items));
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn clear(&mut self) {
        self.fields.clear();
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// JSON object view of the payload, serialized once at assembly.
    pub fn to_json(&self) -> Value {
        let mut map = Map::with_capacity(self.fields.len());
        for (name, value) in &self.fields {
            map.insert(name.clone(), value.to_json());
        }
        Value::Object(map)
    }
}
