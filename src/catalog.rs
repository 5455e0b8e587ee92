use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// A single catalog entry. Immutable after load; `id` is unique and stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Product {
    /// The text a query is matched against: name, description and category
    /// joined with spaces. Normalization happens at the filter, not here.
    pub fn searchable_text(&self) -> String {
        match &self.category {
            Some(category) => format!("{} {} {}", self.name, self.description, category),
            None => format!("{} {}", self.name, self.description),
        }
    }

    /// Price rendered with two decimals, as shown on cards and in JSON-LD.
    pub fn formatted_price(&self) -> String {
        format!("{:.2}", self.price)
    }
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    ReadError(std::io::Error),
    #[error("Failed to parse catalog file: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// The built-in demo catalog. Insertion order is display order.
pub fn default_catalog() -> Vec<Product> {
    let items = [
        (1, "Auriculares Wave", 59.9, "Auriculares inalámbricos con cancelación de ruido."),
        (2, "Teclado Luna", 89.0, "Teclado mecánico compacto con switches rojos."),
        (3, "Mouse Orion", 39.5, "Mouse ergonómico de alta precisión."),
        (4, "Monitor Eclipse", 199.99, "Monitor 24\" Full HD con tecnología IPS."),
        (5, "Altavoces Nova", 79.49, "Sistema de altavoces 2.1 con sonido envolvente."),
    ];
    items
        .into_iter()
        .map(|(id, name, price, description)| Product {
            id,
            name: name.to_string(),
            price,
            description: description.to_string(),
            category: None,
        })
        .collect()
}

/// Load a catalog from a JSON file (an array of products). Missing optional
/// fields default; an unreadable or malformed file is a startup error.
pub fn load_catalog(path: &Path) -> Result<Vec<Product>, CatalogError> {
    let raw = fs::read_to_string(path).map_err(CatalogError::ReadError)?;
    let products: Vec<Product> = serde_json::from_str(&raw)?;
    info!(count = products.len(), path = %path.display(), "catalog loaded");
    Ok(products)
}
