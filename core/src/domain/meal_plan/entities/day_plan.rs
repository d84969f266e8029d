use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Meals for one day, in the order the model listed them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DayPlan {
    pub day: String,
    pub slots: Vec<MealSlot>,
}

/// A labelled meal slot. The label is kept exactly as given (`meal1`, `lunch`, `snack`...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MealSlot {
    pub label: String,
    pub description: String,
}

impl MealSlot {
    pub fn new(label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: description.into(),
        }
    }

    /// Human readable label: `meal1` -> `Meal 1`, `evening_snack` -> `Evening snack`.
    pub fn display_label(&self) -> String {
        let label = self.label.trim();
        let digits_at = label
            .char_indices()
            .rev()
            .take_while(|(_, c)| c.is_ascii_digit())
            .last()
            .map(|(idx, _)| idx);

        let words = match digits_at {
            Some(idx) if idx > 0 && label[..idx].chars().all(char::is_alphabetic) => {
                format!("{} {}", &label[..idx], &label[idx..])
            }
            _ => label.replace('_', " "),
        };

        let mut chars = words.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}
