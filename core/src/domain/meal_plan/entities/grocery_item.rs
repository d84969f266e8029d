use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Currency suffix the catalog prices are expressed in.
pub const CURRENCY: &str = "kr";

/// One product of a plan's shopping list.
///
/// Every field except the name may be absent from the model output and stays
/// `None` in that case, so "not reported" never reads as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GroceryItem {
    pub name: String,
    pub price: Option<f64>,
    pub quantity: Option<Amount>,
    pub unit: Option<String>,
    pub nutrition: Nutrition,
    pub volume: Option<String>,
    pub brand: Option<String>,
    pub link: Option<String>,
}

/// Macro-nutrients per 100g of product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Nutrition {
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
    pub calories: Option<f64>,
}

/// A quantity as the model wrote it: a bare number (`2`) or free text (`"1 st"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Text(String),
}

impl GroceryItem {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: None,
            quantity: None,
            unit: None,
            nutrition: Nutrition::default(),
            volume: None,
            brand: None,
            link: None,
        }
    }
}

impl Nutrition {
    pub fn is_reported(&self) -> bool {
        self.protein.is_some() || self.carbs.is_some() || self.fat.is_some() || self.calories.is_some()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Number(value) => write!(f, "{}", format_number(*value)),
            Amount::Text(text) => f.write_str(text),
        }
    }
}

/// Formats a number the way the planner UI prints it: `15`, `0.5`, `149.9`.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

pub fn format_price(value: f64) -> String {
    format!("{} {}", format_number(value), CURRENCY)
}
