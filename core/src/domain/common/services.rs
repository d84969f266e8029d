use crate::domain::{common::CatalogConfig, meal_plan::ports::CompletionClient};

/// Entry point of the domain: every service port is implemented on this type.
#[derive(Clone)]
pub struct Service<LLM>
where
    LLM: CompletionClient,
{
    pub(crate) completion_client: LLM,
    pub(crate) catalog: CatalogConfig,
}

impl<LLM> Service<LLM>
where
    LLM: CompletionClient,
{
    pub fn new(completion_client: LLM, catalog: CatalogConfig) -> Self {
        Self {
            completion_client,
            catalog,
        }
    }
}
