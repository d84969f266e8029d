use serde_json::{Map, Value};

use crate::domain::meal_plan::{
    entities::{
        Amount, CanonicalPlan, DayPlan, DeclaredTotal, ErrorPayload, GroceryItem, MealSlot,
        Nutrition, TotalKind,
    },
    registry::entry_for,
    value_objects::ShapeTag,
};

type JsonObject = Map<String, Value>;

const UNNAMED_ITEM: &str = "Unnamed item";
const LEGACY_SLOTS: [&str; 3] = ["lunch", "dinner", "snack"];

/// What a classified answer normalizes into.
#[derive(Debug, Clone, PartialEq)]
pub enum Normalized {
    Plan(CanonicalPlan),
    Error(ErrorPayload),
    /// Passed through untouched for the debug view.
    Unrecognized(Value),
}

/// Converts a classified answer into the canonical model.
///
/// A recognized object that holds nothing displayable falls back to `Unrecognized`.
pub fn normalize(tag: ShapeTag, value: &Value) -> Normalized {
    let normalized = entry_for(tag).zip(value.as_object()).and_then(|(entry, object)| {
        let normalized = (entry.normalize)(object);
        if normalized.is_none() {
            tracing::warn!(shape = ?tag, "recognized answer has no items, day plans or notes");
        }
        normalized
    });

    normalized.unwrap_or_else(|| Normalized::Unrecognized(value.clone()))
}

pub(crate) fn simple_grocery_list(object: &JsonObject) -> Option<Normalized> {
    let items = object
        .get("grocery_list")
        .and_then(Value::as_array)
        .map(|list| grocery_items(list, basic_item));
    let total = number_field(object, "total_price").map(|amount| DeclaredTotal {
        kind: TotalKind::Total,
        amount,
    });

    CanonicalPlan::new(items, None, text_field(object, "message"), total).map(Normalized::Plan)
}

pub(crate) fn current_meal_plan(object: &JsonObject) -> Option<Normalized> {
    let plan = object.get("meal_plan").and_then(Value::as_object)?;

    let items = plan
        .get("grocery_list")
        .and_then(Value::as_array)
        .map(|list| grocery_items(list, detailed_item));
    let days = plan
        .get("daily_meals")
        .and_then(Value::as_object)
        .map(|days| day_plans(days, slots_in_given_order));

    CanonicalPlan::new(items, days, text_field(plan, "notes"), None).map(Normalized::Plan)
}

pub(crate) fn legacy_meal_plan(object: &JsonObject) -> Option<Normalized> {
    let plan = object.get("meal_plan").and_then(Value::as_object)?;

    let items = object
        .get("grocery_list")
        .and_then(Value::as_array)
        .map(|list| grocery_items(list, basic_item));
    let days = day_plans(plan, legacy_slots);
    let total = number_field(object, "total_estimated_cost").map(|amount| DeclaredTotal {
        kind: TotalKind::Estimated,
        amount,
    });

    CanonicalPlan::new(items, Some(days), text_field(object, "message"), total)
        .map(Normalized::Plan)
}

pub(crate) fn error_message(object: &JsonObject) -> Option<Normalized> {
    let budget_increase =
        number_field(object, "budgetIncrease").or_else(|| number_field(object, "budget_increase"));

    Some(Normalized::Error(ErrorPayload::new(
        text_field(object, "message"),
        budget_increase,
    )))
}

fn grocery_items(list: &[Value], read: fn(&JsonObject) -> GroceryItem) -> Vec<GroceryItem> {
    list.iter()
        .filter_map(|entry| match entry.as_object() {
            Some(object) => Some(read(object)),
            None => {
                tracing::debug!("skipping grocery entry that is not an object: {}", entry);
                None
            }
        })
        .collect()
}

/// Name, price, quantity and unit. Nutrition is never read for these shapes.
fn basic_item(object: &JsonObject) -> GroceryItem {
    GroceryItem {
        price: number_field(object, "price"),
        quantity: amount_field(object, "quantity"),
        unit: verbatim_field(object, "unit"),
        ..GroceryItem::named(item_name(object))
    }
}

fn detailed_item(object: &JsonObject) -> GroceryItem {
    GroceryItem {
        nutrition: Nutrition {
            protein: number_field(object, "protein"),
            carbs: number_field(object, "carbs"),
            fat: number_field(object, "fat"),
            calories: number_field(object, "calories").or_else(|| number_field(object, "kcal")),
        },
        volume: text_field(object, "volume"),
        brand: text_field(object, "brand"),
        link: text_field(object, "link"),
        ..basic_item(object)
    }
}

fn item_name(object: &JsonObject) -> String {
    text_field(object, "name")
        .or_else(|| text_field(object, "item"))
        .unwrap_or_else(|| UNNAMED_ITEM.to_string())
}

fn day_plans(days: &JsonObject, slots: fn(&JsonObject) -> Vec<MealSlot>) -> Vec<DayPlan> {
    days.iter()
        .filter_map(|(day, meals)| match meals.as_object() {
            Some(meals) => Some(DayPlan {
                day: day.clone(),
                slots: slots(meals),
            }),
            None => {
                tracing::debug!(day = %day, "skipping day whose meals are not an object");
                None
            }
        })
        .collect()
}

fn slots_in_given_order(meals: &JsonObject) -> Vec<MealSlot> {
    meals
        .iter()
        .filter_map(|(label, description)| {
            describe(description).map(|description| MealSlot::new(label.clone(), description))
        })
        .collect()
}

/// Lunch, dinner and snack first, then anything else the model added.
fn legacy_slots(meals: &JsonObject) -> Vec<MealSlot> {
    let known = LEGACY_SLOTS.iter().filter_map(|label| {
        meals
            .get(*label)
            .and_then(describe)
            .map(|description| MealSlot::new(*label, description))
    });
    let extra = meals
        .iter()
        .filter(|(label, _)| !LEGACY_SLOTS.contains(&label.as_str()))
        .filter_map(|(label, description)| {
            describe(description).map(|description| MealSlot::new(label.clone(), description))
        });

    known.chain(extra).collect()
}

fn describe(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) if text.trim().is_empty() => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

fn text_field(object: &JsonObject, key: &str) -> Option<String> {
    match object.get(key)? {
        Value::String(text) if !text.trim().is_empty() => Some(text.trim().to_string()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// Like [`text_field`] but keeps non-blank strings exactly as given.
fn verbatim_field(object: &JsonObject, key: &str) -> Option<String> {
    match object.get(key)? {
        Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn number_field(object: &JsonObject, key: &str) -> Option<f64> {
    match object.get(key)? {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

fn amount_field(object: &JsonObject, key: &str) -> Option<Amount> {
    match object.get(key)? {
        Value::Number(number) => number.as_f64().map(Amount::Number),
        Value::String(text) if !text.trim().is_empty() => Some(Amount::Text(text.clone())),
        _ => None,
    }
}
