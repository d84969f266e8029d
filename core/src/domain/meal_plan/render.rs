use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::meal_plan::{
    entities::{CanonicalPlan, ErrorPayload},
    extractor::extract,
    normalizer::{Normalized, normalize},
    registry::classify,
    value_objects::{Diagnostic, ExtractionResult, ShapeTag},
};

pub const UNRECOGNIZED_SUMMARY: &str =
    "The AI returned valid JSON, but its structure is not recognized.";

/// What the UI should draw for an answer.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum PresentationMode {
    Structured(StructuredView),
    Error(ErrorView),
    Debug(DebugView),
    RawText(RawTextView),
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct StructuredView {
    pub shape: ShapeTag,
    pub layout: StructuredLayout,
    pub title: String,
    pub plan: CanonicalPlan,
}

/// Which sections of a structured plan are populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum StructuredLayout {
    GroceryList,
    MealPlan,
    Combined,
    NotesOnly,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ErrorView {
    pub title: String,
    pub message: String,
    pub budget_increase: Option<f64>,
    pub suggestion: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DebugView {
    pub summary: String,
    pub raw: Value,
    pub pretty: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RawTextView {
    pub markdown: String,
}

/// A rendered answer together with the non-fatal conditions met on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation {
    pub shape: Option<ShapeTag>,
    pub mode: PresentationMode,
    pub diagnostics: Vec<Diagnostic>,
}

/// Maps a raw model answer to a presentation mode. Never fails.
pub fn render_response(raw: &str) -> PresentationMode {
    reconcile(raw).mode
}

/// Runs the whole pipeline: extraction, classification, normalization and dispatch.
pub fn reconcile(raw: &str) -> Reconciliation {
    let value = match extract(raw) {
        Ok(ExtractionResult::DirectJson(value)) => value,
        Ok(ExtractionResult::FencedJson(value)) => {
            tracing::debug!("answer JSON recovered from a markdown fence");
            value
        }
        Ok(ExtractionResult::PlainText(text)) => {
            tracing::debug!("no usable JSON in answer, rendering it as text");
            return Reconciliation {
                shape: None,
                mode: PresentationMode::RawText(RawTextView { markdown: text }),
                diagnostics: vec![Diagnostic::MalformedJsonIgnored],
            };
        }
        Err(e) => {
            tracing::debug!("answer is blank: {}", e);
            return Reconciliation {
                shape: None,
                mode: error_view(ErrorPayload::new(Some(e.to_string()), None)),
                diagnostics: Vec::new(),
            };
        }
    };

    let tag = classify(&value);
    tracing::debug!(shape = ?tag, "answer classified");

    let mut diagnostics = Vec::new();
    let normalized = normalize(tag, &value);
    match (&normalized, tag) {
        (Normalized::Unrecognized(_), ShapeTag::Unrecognized) => {
            tracing::warn!("answer JSON matches no known shape");
            diagnostics.push(Diagnostic::UnrecognizedShape);
        }
        (Normalized::Unrecognized(_), shape) => {
            diagnostics.push(Diagnostic::IncompletePlan { shape });
        }
        _ => {}
    }

    let shape = match normalized {
        Normalized::Unrecognized(_) => ShapeTag::Unrecognized,
        _ => tag,
    };

    Reconciliation {
        shape: Some(shape),
        mode: dispatch(shape, normalized),
        diagnostics,
    }
}

/// Picks the presentation mode for a normalized answer.
pub fn dispatch(shape: ShapeTag, normalized: Normalized) -> PresentationMode {
    match normalized {
        Normalized::Plan(plan) => structured_view(shape, plan),
        Normalized::Error(payload) => error_view(payload),
        Normalized::Unrecognized(raw) => debug_view(raw),
    }
}

fn structured_view(shape: ShapeTag, plan: CanonicalPlan) -> PresentationMode {
    let layout = match (plan.items().is_some(), plan.days().is_some()) {
        (true, true) => StructuredLayout::Combined,
        (true, false) => StructuredLayout::GroceryList,
        (false, true) => StructuredLayout::MealPlan,
        (false, false) => StructuredLayout::NotesOnly,
    };

    PresentationMode::Structured(StructuredView {
        shape,
        layout,
        title: layout.title().to_string(),
        plan,
    })
}

fn error_view(payload: ErrorPayload) -> PresentationMode {
    let suggestion = payload.suggestion();
    PresentationMode::Error(ErrorView {
        title: "Unable to Generate Plan".to_string(),
        message: payload.message,
        budget_increase: payload.budget_increase,
        suggestion,
    })
}

fn debug_view(raw: Value) -> PresentationMode {
    let pretty = serde_json::to_string_pretty(&raw).unwrap_or_else(|_| raw.to_string());
    PresentationMode::Debug(DebugView {
        summary: UNRECOGNIZED_SUMMARY.to_string(),
        raw,
        pretty,
    })
}

impl StructuredLayout {
    pub fn title(&self) -> &'static str {
        match self {
            StructuredLayout::GroceryList => "Your Grocery List",
            StructuredLayout::MealPlan | StructuredLayout::Combined => "Your Weekly Meal Plan",
            StructuredLayout::NotesOnly => "Your Plan",
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::{common::entities::app_errors::CoreError, meal_plan::entities::TotalKind};

    #[test]
    fn test_scenario_simple_grocery_list() {
        let raw = r#"{"grocery_list":[{"name":"Milk","price":15,"quantity":1,"unit":"l"}],"total_price":15}"#;
        let reconciliation = reconcile(raw);

        assert_eq!(reconciliation.shape, Some(ShapeTag::SimpleGroceryList));
        let PresentationMode::Structured(view) = reconciliation.mode else {
            panic!("expected a structured view");
        };
        assert_eq!(view.layout, StructuredLayout::GroceryList);
        let total = view.plan.declared_total().unwrap();
        assert_eq!(total.kind, TotalKind::Total);
        assert_eq!(total.amount, 15.0);
    }

    #[test]
    fn test_scenario_fenced_current_meal_plan() {
        let inner = json!({
            "meal_plan": {
                "grocery_list": [{"item": "Eggs", "price": 40}],
                "daily_meals": {"Monday": {"meal1": "Omelette", "meal2": "Salad", "snack": "Nuts"}}
            }
        });
        let fenced = format!("Here is your plan:\n```json\n{}\n```", inner);

        assert_eq!(render_response(&fenced), render_response(&inner.to_string()));
        let PresentationMode::Structured(view) = render_response(&fenced) else {
            panic!("expected a structured view");
        };
        assert_eq!(view.shape, ShapeTag::CurrentMealPlan);
        assert_eq!(view.layout, StructuredLayout::Combined);
    }

    #[test]
    fn test_scenario_prose_is_raw_text() {
        let raw = "Sure! Here's a plan: eat more vegetables.";
        let reconciliation = reconcile(raw);
        assert_eq!(
            reconciliation.mode,
            PresentationMode::RawText(RawTextView {
                markdown: raw.to_string()
            })
        );
        assert_eq!(reconciliation.diagnostics, vec![Diagnostic::MalformedJsonIgnored]);
    }

    #[test]
    fn test_scenario_budget_error() {
        let raw = r#"{"success": false, "message": "Budget too low", "budgetIncrease": 23.5}"#;
        let PresentationMode::Error(view) = render_response(raw) else {
            panic!("expected an error view");
        };
        assert_eq!(view.message, "Budget too low");
        assert!(view.suggestion.unwrap().contains("23.50"));
    }

    #[test]
    fn test_scenario_unrecognized_debug_view() {
        let reconciliation = reconcile(r#"{"foo": "bar"}"#);
        assert_eq!(reconciliation.shape, Some(ShapeTag::Unrecognized));
        assert_eq!(reconciliation.diagnostics, vec![Diagnostic::UnrecognizedShape]);
        let PresentationMode::Debug(view) = reconciliation.mode else {
            panic!("expected a debug view");
        };
        assert_eq!(view.raw.to_string(), r#"{"foo":"bar"}"#);
        assert!(view.pretty.contains("\"foo\": \"bar\""));
    }

    #[test]
    fn test_blank_answer_renders_error() {
        let PresentationMode::Error(view) = render_response("   ") else {
            panic!("expected an error view");
        };
        assert_eq!(view.message, CoreError::EmptyResponse.to_string());
    }

    #[test]
    fn test_incomplete_plan_is_reported() {
        let reconciliation = reconcile(r#"{"meal_plan": {"daily_meals": {}}}"#);
        assert!(matches!(reconciliation.mode, PresentationMode::Debug(_)));
        assert_eq!(
            reconciliation.diagnostics,
            vec![Diagnostic::IncompletePlan {
                shape: ShapeTag::CurrentMealPlan
            }]
        );
    }

    #[test]
    fn test_layouts() {
        let meals_only = r#"{"meal_plan": {"daily_meals": {"Monday": {"meal1": "Soup"}}}}"#;
        let notes_only = r#"{"meal_plan": {"grocery_list": [], "notes": "Eat well"}}"#;

        let PresentationMode::Structured(view) = render_response(meals_only) else {
            panic!("expected a structured view");
        };
        assert_eq!(view.layout, StructuredLayout::MealPlan);

        let PresentationMode::Structured(view) = render_response(notes_only) else {
            panic!("expected a structured view");
        };
        assert_eq!(view.layout, StructuredLayout::NotesOnly);
        assert_eq!(view.title, "Your Plan");
    }

    #[test]
    fn test_mode_serialization_is_tagged() {
        let value = serde_json::to_value(render_response("plain words")).unwrap();
        assert_eq!(value["mode"], "raw_text");
        assert_eq!(value["markdown"], "plain words");
    }
}
