use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct GroceryPlannerConfig {
    pub llm: LLMConfig,
    pub catalog: CatalogConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub openai_api_key: String,
    pub openai_model: String,
    pub openai_base_url: String,
    /// Planner instructions sent with every completion. `None` uses the built-in template.
    pub instructions: Option<String>,
}

/// Product catalog the completion service retrieves from.
#[derive(Clone, Debug)]
pub struct CatalogConfig {
    pub vector_store_id: String,
    pub max_num_results: Option<u32>,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}
