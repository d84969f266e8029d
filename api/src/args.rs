use std::path::PathBuf;

use clap::Parser;
use grocery_planner_core::domain::common::{CatalogConfig, GroceryPlannerConfig, LLMConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "grocery-planner", version, about = "Grocery and meal planning API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub catalog: CatalogArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long = "openai-api-key", env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: String,

    #[arg(long = "openai-model", env = "OPENAI_MODEL", default_value = "gpt-4o")]
    pub openai_model: String,

    #[arg(
        long = "openai-base-url",
        env = "OPENAI_BASE_URL",
        default_value = "https://api.openai.com/v1"
    )]
    pub openai_base_url: String,

    /// File replacing the built-in planner instructions
    #[arg(long = "instructions-file", env = "PLANNER_INSTRUCTIONS_FILE")]
    pub instructions_file: Option<PathBuf>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct CatalogArgs {
    /// Vector store holding the product catalog
    #[arg(long = "vector-store-id", env = "VECTOR_STORE_ID")]
    pub vector_store_id: String,

    #[arg(long = "max-num-results", env = "FILE_SEARCH_MAX_RESULTS")]
    pub max_num_results: Option<u32>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for GroceryPlannerConfig {
    fn from(args: Args) -> Self {
        Self {
            llm: LLMConfig {
                openai_api_key: args.llm.openai_api_key,
                openai_model: args.llm.openai_model,
                openai_base_url: args.llm.openai_base_url,
                instructions: None,
            },
            catalog: CatalogConfig {
                vector_store_id: args.catalog.vector_store_id,
                max_num_results: args.catalog.max_num_results,
            },
        }
    }
}
