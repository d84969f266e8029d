use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::grocery_item::CURRENCY;

pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred.";

/// The model declined to produce a plan (budget too low, not enough data...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorPayload {
    pub message: String,
    pub budget_increase: Option<f64>,
}

impl ErrorPayload {
    pub fn new(message: Option<String>, budget_increase: Option<f64>) -> Self {
        Self {
            message: message.unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string()),
            budget_increase,
        }
    }

    pub fn suggestion(&self) -> Option<String> {
        self.budget_increase.filter(|delta| *delta > 0.0).map(|delta| {
            format!("Increase your budget by {delta:.2} {CURRENCY} to meet your goal.")
        })
    }
}
