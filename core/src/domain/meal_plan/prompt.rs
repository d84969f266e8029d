use serde_json::json;

const PLANNER_ROLE: &str = "\
You are a grocery shopping assistant for a single supermarket. A file search tool gives you \
that store's product catalog with prices, package sizes and nutrition facts per 100g.

- Take product names, prices and nutrition values from the catalog only; never make them up.
- Build lists from everyday, minimally processed food people actually cook with.
- Respect the budget, diet goals and intake targets the user mentions. Some users want two \
meals and a snack per day, others three meals; plan the day the way they asked.
- If the budget cannot cover the request, answer as closely as possible and tell the user \
how much more they would need.
- If the request cannot be understood, answer with a JSON object whose `message` explains \
what information is missing.
- Always answer with JSON and nothing else.";

const SHAPE_GUIDANCE: &str = "\
For a plain weekly shopping list fill `grocery_list` and leave `daily_meals` empty. For a \
meal plan fill both. Put budget remarks in `notes`.";

/// Example of the answer shape the planner asks for.
pub fn meal_plan_example() -> serde_json::Value {
    json!({
        "meal_plan": {
            "grocery_list": [
                {
                    "item": "Chicken Breast",
                    "price": 149,
                    "protein": 21,
                    "carbs": 0.5,
                    "fat": 2,
                    "volume": "900g",
                    "unit": "kr/st",
                    "brand": "Garant",
                    "link": "https://example.com/products/chicken-breast"
                },
                {
                    "item": "Eggs",
                    "price": 40,
                    "protein": 13,
                    "carbs": 0,
                    "fat": 5,
                    "volume": "12 st",
                    "unit": "kr/st"
                }
            ],
            "daily_meals": {
                "Monday": {
                    "meal1": "Grilled chicken breast with vegetables",
                    "meal2": "Egg salad",
                    "snack": "Handful of nuts"
                }
            },
            "notes": "Buy the chicken on sale to stay within the weekly budget."
        }
    })
}

/// Instructions sent with every completion request unless overridden by configuration.
pub fn default_planner_instructions() -> String {
    let example = serde_json::to_string_pretty(&meal_plan_example()).unwrap_or_default();
    format!("{PLANNER_ROLE}\n\nAnswer with JSON of this structure:\n```json\n{example}\n```\n\n{SHAPE_GUIDANCE}")
}
