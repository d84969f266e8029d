use serde::Serialize;
use utoipa::ToSchema;

use super::{day_plan::DayPlan, grocery_item::GroceryItem};

/// The single representation every recognized response shape is normalized into.
///
/// Empty collections and blank notes are stored as `None`. A plan must carry at
/// least one of items, day plans or notes, which [`CanonicalPlan::new`] enforces.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CanonicalPlan {
    items: Option<Vec<GroceryItem>>,
    days: Option<Vec<DayPlan>>,
    notes: Option<String>,
    declared_total: Option<DeclaredTotal>,
}

/// A total as declared by the model. It is displayed as-is and never recomputed from items.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DeclaredTotal {
    pub kind: TotalKind,
    pub amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TotalKind {
    Total,
    Estimated,
}

impl CanonicalPlan {
    pub fn new(
        items: Option<Vec<GroceryItem>>,
        days: Option<Vec<DayPlan>>,
        notes: Option<String>,
        declared_total: Option<DeclaredTotal>,
    ) -> Option<Self> {
        let items = items.filter(|items| !items.is_empty());
        let days = days.filter(|days| !days.is_empty());
        let notes = notes.filter(|notes| !notes.trim().is_empty());

        if items.is_none() && days.is_none() && notes.is_none() {
            return None;
        }

        Some(Self {
            items,
            days,
            notes,
            declared_total,
        })
    }

    pub fn items(&self) -> Option<&[GroceryItem]> {
        self.items.as_deref()
    }

    pub fn days(&self) -> Option<&[DayPlan]> {
        self.days.as_deref()
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn declared_total(&self) -> Option<&DeclaredTotal> {
        self.declared_total.as_ref()
    }
}

impl TotalKind {
    pub fn label(&self) -> &'static str {
        match self {
            TotalKind::Total => "Total Price",
            TotalKind::Estimated => "Estimated Total Cost",
        }
    }
}
