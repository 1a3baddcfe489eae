use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid catalog JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Recipe at position {index} has an empty title")]
    EmptyTitle { index: usize },

    #[error("Duplicate recipe title: {title}")]
    DuplicateTitle { title: String },

    #[error("Recipe '{title}' has a negative or non-finite {field}")]
    InvalidNutrition { title: String, field: &'static str },

    #[error("Recipe '{title}' ingredient '{name}' has a negative or non-finite quantity")]
    InvalidIngredientQty { title: String, name: String },
}

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("Inventory item {id} has an empty name")]
    EmptyName { id: Uuid },

    #[error("Inventory item '{name}' has a negative quantity: {qty}")]
    NegativeQty { name: String, qty: f64 },

    #[error("Inventory item '{name}' has a non-finite quantity")]
    NonFiniteQty { name: String },
}
