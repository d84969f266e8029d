use crate::domain::meal_plan::{
    entities::{CURRENCY, CanonicalPlan, GroceryItem, Nutrition, format_number, format_price},
    render::{DebugView, ErrorView, PresentationMode, RawTextView, StructuredLayout, StructuredView},
    value_objects::ExportedText,
};

/// Renders the active presentation mode as a downloadable text file.
pub fn export(mode: &PresentationMode) -> ExportedText {
    ExportedText {
        file_name: export_file_name(mode),
        content: export_as_text(mode),
    }
}

pub fn export_file_name(mode: &PresentationMode) -> &'static str {
    match mode {
        PresentationMode::Structured(view) => match view.layout {
            StructuredLayout::GroceryList => "your-grocery-list.txt",
            StructuredLayout::MealPlan | StructuredLayout::Combined => "your-meal-plan.txt",
            StructuredLayout::NotesOnly => "your-plan.txt",
        },
        PresentationMode::Error(_) => "export-error.txt",
        PresentationMode::Debug(_) => "unrecognized-response.txt",
        PresentationMode::RawText(_) => "ai-response.txt",
    }
}

/// Writes every populated field of the mode exactly once, in canonical field order.
pub fn export_as_text(mode: &PresentationMode) -> String {
    let mut lines = Vec::new();

    match mode {
        PresentationMode::Structured(view) => structured_lines(view, &mut lines),
        PresentationMode::Error(view) => error_lines(view, &mut lines),
        PresentationMode::Debug(view) => debug_lines(view, &mut lines),
        PresentationMode::RawText(view) => raw_text_lines(view, &mut lines),
    }

    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}

fn heading(title: &str, lines: &mut Vec<String>) {
    lines.push(title.to_string());
    lines.push("=".repeat(title.chars().count()));
    lines.push(String::new());
}

fn structured_lines(view: &StructuredView, lines: &mut Vec<String>) {
    let title = match view.layout {
        StructuredLayout::GroceryList => "🛒 Your AI-Generated Grocery List",
        StructuredLayout::MealPlan | StructuredLayout::Combined => {
            "🗓️ Your AI-Generated Weekly Meal Plan"
        }
        StructuredLayout::NotesOnly => "📝 Your AI-Generated Plan",
    };
    heading(title, lines);
    plan_lines(&view.plan, lines);
}

fn plan_lines(plan: &CanonicalPlan, lines: &mut Vec<String>) {
    if let Some(items) = plan.items() {
        lines.push("🛒 Grocery List:".to_string());
        for item in items {
            item_lines(item, lines);
            lines.push(String::new());
        }
    }

    if let Some(days) = plan.days() {
        lines.push("🍽️ Daily Meal Ideas:".to_string());
        for day in days {
            lines.push(String::new());
            lines.push(format!("{}:", day.day));
            for slot in &day.slots {
                lines.push(format!("  {}: {}", slot.display_label(), slot.description));
            }
        }
        lines.push(String::new());
    }

    if let Some(notes) = plan.notes() {
        lines.push("📝 Notes:".to_string());
        lines.push(notes.to_string());
        lines.push(String::new());
    }

    if let Some(total) = plan.declared_total() {
        lines.push("📊 Totals:".to_string());
        lines.push(format!("{}: {}", total.kind.label(), format_price(total.amount)));
    }
}

fn item_lines(item: &GroceryItem, lines: &mut Vec<String>) {
    lines.push(format!("• {}", item.name));

    if let Some(price) = item.price {
        lines.push(format!("   Price: {}", format_price(price)));
    }

    match (&item.quantity, &item.unit) {
        (Some(quantity), Some(unit)) => lines.push(format!("   Quantity: {quantity} x {unit}")),
        (Some(quantity), None) => lines.push(format!("   Quantity: {quantity}")),
        (None, Some(unit)) => lines.push(format!("   Unit: {unit}")),
        (None, None) => {}
    }

    if let Some(nutrition) = nutrition_line(&item.nutrition) {
        lines.push(format!("   Nutrition (per 100g): {nutrition}"));
    }

    if let Some(volume) = &item.volume {
        lines.push(format!("   Typical Volume: {volume}"));
    }
    if let Some(brand) = &item.brand {
        lines.push(format!("   Brand: {brand}"));
    }
    if let Some(link) = &item.link {
        lines.push(format!("   Link: {link}"));
    }
}

fn nutrition_line(nutrition: &Nutrition) -> Option<String> {
    let parts: Vec<String> = [
        ("Protein", nutrition.protein, "g"),
        ("Carbs", nutrition.carbs, "g"),
        ("Fat", nutrition.fat, "g"),
        ("Calories", nutrition.calories, " kcal"),
    ]
    .into_iter()
    .filter_map(|(label, value, unit)| value.map(|v| format!("{label} {}{unit}", format_number(v))))
    .collect();

    (!parts.is_empty()).then(|| parts.join(", "))
}

fn error_lines(view: &ErrorView, lines: &mut Vec<String>) {
    heading(&format!("⚠️ {}", view.title), lines);
    lines.push(view.message.clone());
    // A positive delta is written through the suggestion.
    match (&view.suggestion, view.budget_increase) {
        (Some(suggestion), _) => {
            lines.push(String::new());
            lines.push(format!("💡 Suggestion: {suggestion}"));
        }
        (None, Some(delta)) => {
            lines.push(String::new());
            lines.push(format!("Budget increase: {delta:.2} {CURRENCY}"));
        }
        (None, None) => {}
    }
}

fn debug_lines(view: &DebugView, lines: &mut Vec<String>) {
    heading("Unknown Response Structure", lines);
    lines.push(view.summary.clone());
    lines.push(String::new());
    lines.push(view.pretty.clone());
}

fn raw_text_lines(view: &RawTextView, lines: &mut Vec<String>) {
    heading("AI Response (Text)", lines);
    lines.push(view.markdown.clone());
}
