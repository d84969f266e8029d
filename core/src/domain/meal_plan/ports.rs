use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    meal_plan::{
        render::Reconciliation,
        value_objects::{AskPlannerInput, Completion, ExportedText, PlannerAnswer},
    },
};

/// Hosted completion service with retrieval over the product catalog.
#[cfg_attr(test, mockall::automock)]
pub trait CompletionClient: Send + Sync {
    fn complete(
        &self,
        prompt: String,
        catalog_id: String,
    ) -> impl Future<Output = Result<Completion, CoreError>> + Send;
}

/// Service trait for the grocery planner
pub trait PlannerService: Send + Sync {
    /// Forwards a request to the completion service and renders its answer.
    fn ask(
        &self,
        input: AskPlannerInput,
    ) -> impl Future<Output = Result<PlannerAnswer, CoreError>> + Send;

    /// Re-renders an answer the client already holds.
    fn render(&self, answer: &str) -> Reconciliation;

    fn export(&self, answer: &str) -> ExportedText;
}
