use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::meal_plan::render::PresentationMode;

/// Outcome of pulling JSON out of a raw answer.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionResult {
    /// The whole trimmed answer parsed as JSON.
    DirectJson(Value),
    /// The first markdown code fence parsed as JSON.
    FencedJson(Value),
    /// Neither parsed; the answer is prose.
    PlainText(String),
}

/// Response shapes the model has been instructed to produce over time,
/// listed in registry priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ShapeTag {
    SimpleGroceryList,
    CurrentMealPlan,
    LegacyMealPlan,
    ErrorMessage,
    Unrecognized,
}

/// Non-fatal conditions met while reconciling an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// No parsable JSON was found; the answer is shown as text.
    MalformedJsonIgnored,
    /// JSON matched no registered shape.
    UnrecognizedShape,
    /// JSON matched a shape but held nothing to display.
    IncompletePlan { shape: ShapeTag },
}

#[derive(Debug, Clone)]
pub struct AskPlannerInput {
    pub question: String,
}

/// Text produced by the completion service together with the catalog files it cited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Completion {
    pub text: String,
    pub citations: Vec<FileCitation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FileCitation {
    pub file_id: String,
    pub filename: Option<String>,
    pub index: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PlannerAnswer {
    pub request_id: Uuid,
    pub answer: String,
    pub citations: Vec<FileCitation>,
    pub presentation: PresentationMode,
    pub diagnostics: Vec<Diagnostic>,
}

/// A plain-text rendition of an answer, ready to be offered as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedText {
    pub file_name: &'static str,
    pub content: String,
}
