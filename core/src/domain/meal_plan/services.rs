use crate::domain::{
    common::{entities::app_errors::CoreError, generate_uuid_v7, services::Service},
    meal_plan::{
        export::export,
        ports::{CompletionClient, PlannerService},
        render::{Reconciliation, reconcile},
        value_objects::{AskPlannerInput, ExportedText, PlannerAnswer},
    },
};

impl<LLM> PlannerService for Service<LLM>
where
    LLM: CompletionClient,
{
    async fn ask(&self, input: AskPlannerInput) -> Result<PlannerAnswer, CoreError> {
        let question = input.question.trim();
        if question.is_empty() {
            return Err(CoreError::EmptyRequest);
        }

        let request_id = generate_uuid_v7();
        tracing::info!(%request_id, "forwarding planner request to the completion service");

        let completion = self
            .completion_client
            .complete(question.to_string(), self.catalog.vector_store_id.clone())
            .await
            .map_err(|e| {
                tracing::error!(%request_id, "completion request failed: {}", e);
                match e {
                    CoreError::UpstreamFailure(_) => e,
                    other => CoreError::UpstreamFailure(other.to_string()),
                }
            })?;

        let Reconciliation {
            shape,
            mode,
            diagnostics,
        } = reconcile(&completion.text);
        tracing::info!(%request_id, shape = ?shape, "planner answer rendered");

        Ok(PlannerAnswer {
            request_id,
            answer: completion.text,
            citations: completion.citations,
            presentation: mode,
            diagnostics,
        })
    }

    fn render(&self, answer: &str) -> Reconciliation {
        reconcile(answer)
    }

    fn export(&self, answer: &str) -> ExportedText {
        export(&reconcile(answer).mode)
    }
}
