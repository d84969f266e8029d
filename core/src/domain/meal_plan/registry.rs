use serde_json::{Map, Value};

use crate::domain::meal_plan::{
    normalizer::{self, Normalized},
    value_objects::ShapeTag,
};

type JsonObject = Map<String, Value>;

/// A recognized response shape: how to spot it and how to turn it into the canonical model.
pub struct ShapeEntry {
    pub tag: ShapeTag,
    pub recognizes: fn(&JsonObject) -> bool,
    /// Returns `None` when the object matches the shape but holds nothing displayable.
    pub normalize: fn(&JsonObject) -> Option<Normalized>,
}

/// Registered shapes in priority order; the first recognizer that matches wins.
///
/// Shapes overlap structurally (both meal plan shapes carry a top-level `meal_plan`
/// object), so the current meal plan must be tested before the legacy one. New shapes
/// are appended at the end.
pub static SHAPE_REGISTRY: [ShapeEntry; 4] = [
    ShapeEntry {
        tag: ShapeTag::SimpleGroceryList,
        recognizes: is_simple_grocery_list,
        normalize: normalizer::simple_grocery_list,
    },
    ShapeEntry {
        tag: ShapeTag::CurrentMealPlan,
        recognizes: is_current_meal_plan,
        normalize: normalizer::current_meal_plan,
    },
    ShapeEntry {
        tag: ShapeTag::LegacyMealPlan,
        recognizes: is_legacy_meal_plan,
        normalize: normalizer::legacy_meal_plan,
    },
    ShapeEntry {
        tag: ShapeTag::ErrorMessage,
        recognizes: is_error_message,
        normalize: normalizer::error_message,
    },
];

/// Names the shape of a parsed answer. Anything that is not a JSON object is unrecognized.
pub fn classify(value: &Value) -> ShapeTag {
    value
        .as_object()
        .and_then(|object| {
            SHAPE_REGISTRY
                .iter()
                .find(|entry| (entry.recognizes)(object))
        })
        .map(|entry| entry.tag)
        .unwrap_or(ShapeTag::Unrecognized)
}

pub fn entry_for(tag: ShapeTag) -> Option<&'static ShapeEntry> {
    SHAPE_REGISTRY.iter().find(|entry| entry.tag == tag)
}

fn nested_meal_plan(object: &JsonObject) -> Option<&JsonObject> {
    object.get("meal_plan").and_then(Value::as_object)
}

fn is_simple_grocery_list(object: &JsonObject) -> bool {
    object.get("grocery_list").is_some_and(Value::is_array)
        && object.get("total_price").is_some_and(Value::is_number)
}

fn is_current_meal_plan(object: &JsonObject) -> bool {
    nested_meal_plan(object).is_some_and(|plan| {
        plan.get("grocery_list").is_some_and(Value::is_array)
            || plan.get("daily_meals").is_some_and(Value::is_object)
    })
}

// The legacy plan is told apart from the current one only by the missing nested
// `grocery_list` key.
fn is_legacy_meal_plan(object: &JsonObject) -> bool {
    nested_meal_plan(object).is_some_and(|plan| !plan.contains_key("grocery_list"))
}

fn is_error_message(object: &JsonObject) -> bool {
    let declined = object.get("success").and_then(Value::as_bool) == Some(false);
    let bare_message = object.get("message").is_some_and(Value::is_string)
        && !object.contains_key("grocery_list")
        && !object.contains_key("meal_plan");

    declined || bare_message
}
