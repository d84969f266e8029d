use crate::{
    domain::{
        common::{GroceryPlannerConfig, entities::app_errors::CoreError, services::Service},
        meal_plan::prompt::default_planner_instructions,
    },
    infrastructure::llm::OpenAIResponsesClient,
};

pub type GroceryPlannerService = Service<OpenAIResponsesClient>;

pub fn create_service(config: GroceryPlannerConfig) -> Result<GroceryPlannerService, CoreError> {
    if config.llm.openai_api_key.trim().is_empty() {
        return Err(CoreError::InvalidConfiguration(
            "an OpenAI API key is required".to_string(),
        ));
    }
    if config.catalog.vector_store_id.trim().is_empty() {
        return Err(CoreError::InvalidConfiguration(
            "a catalog vector store id is required".to_string(),
        ));
    }

    let instructions = config
        .llm
        .instructions
        .filter(|instructions| !instructions.trim().is_empty())
        .unwrap_or_else(default_planner_instructions);

    let completion_client = OpenAIResponsesClient::new(
        config.llm.openai_api_key,
        config.llm.openai_model,
        config.llm.openai_base_url,
        instructions,
        config.catalog.max_num_results,
    );

    tracing::debug!(
        vector_store_id = %config.catalog.vector_store_id,
        "grocery planner service created"
    );

    Ok(Service::new(completion_client, config.catalog))
}
