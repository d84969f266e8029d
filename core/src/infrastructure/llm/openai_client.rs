use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::entities::app_errors::CoreError,
    meal_plan::{
        ports::CompletionClient,
        value_objects::{Completion, FileCitation},
    },
};

#[derive(Debug, Clone)]
pub struct OpenAIResponsesClient {
    api_key: String,
    model_name: String,
    base_url: String,
    instructions: String,
    max_num_results: Option<u32>,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ResponsesRequest {
    model: String,
    input: String,
    instructions: String,
    tools: Vec<Tool>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Tool {
    FileSearch {
        vector_store_ids: Vec<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max_num_results: Option<u32>,
    },
}

#[derive(Debug, Deserialize)]
struct ResponsesResponse {
    #[serde(default)]
    output: Vec<OutputItem>,
    #[serde(default)]
    error: Option<ResponseError>,
}

#[derive(Debug, Deserialize)]
struct ResponseError {
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum OutputItem {
    Message {
        #[serde(default)]
        content: Vec<ContentPart>,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    OutputText {
        text: String,
        #[serde(default)]
        annotations: Vec<Annotation>,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Annotation {
    FileCitation {
        file_id: String,
        #[serde(default)]
        filename: Option<String>,
        #[serde(default)]
        index: Option<u32>,
    },
    #[serde(other)]
    Other,
}

impl OpenAIResponsesClient {
    pub fn new(
        api_key: String,
        model_name: String,
        base_url: String,
        instructions: String,
        max_num_results: Option<u32>,
    ) -> Self {
        Self {
            api_key,
            model_name,
            base_url: base_url.trim_end_matches('/').to_string(),
            instructions,
            max_num_results,
            client: Client::new(),
        }
    }

    async fn call_responses_api(&self, request: ResponsesRequest) -> Result<Completion, CoreError> {
        let url = format!("{}/responses", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("OpenAI request failed: {}", e);
                CoreError::UpstreamFailure(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("OpenAI API error: {} - {}", status, error_text);
            return Err(CoreError::UpstreamFailure(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let body: ResponsesResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse OpenAI response: {}", e);
            CoreError::UpstreamFailure(format!("Failed to parse LLM response: {}", e))
        })?;

        into_completion(body)
    }
}

/// Joins the text of every message output, the same text the vendor SDKs expose as `output_text`.
fn into_completion(body: ResponsesResponse) -> Result<Completion, CoreError> {
    if let Some(error) = body.error {
        tracing::error!("OpenAI response reported an error: {}", error.message);
        return Err(CoreError::UpstreamFailure(error.message));
    }

    let mut completion = Completion::default();
    let parts = body.output.into_iter().flat_map(|item| match item {
        OutputItem::Message { content } => content,
        OutputItem::Other => Vec::new(),
    });

    for part in parts {
        if let ContentPart::OutputText { text, annotations } = part {
            completion.text.push_str(&text);
            completion
                .citations
                .extend(annotations.into_iter().filter_map(|annotation| match annotation {
                    Annotation::FileCitation {
                        file_id,
                        filename,
                        index,
                    } => Some(FileCitation {
                        file_id,
                        filename,
                        index,
                    }),
                    Annotation::Other => None,
                }));
        }
    }

    Ok(completion)
}

impl CompletionClient for OpenAIResponsesClient {
    async fn complete(&self, prompt: String, catalog_id: String) -> Result<Completion, CoreError> {
        let request = ResponsesRequest {
            model: self.model_name.clone(),
            input: prompt,
            instructions: self.instructions.clone(),
            tools: vec![Tool::FileSearch {
                vector_store_ids: vec![catalog_id],
                max_num_results: self.max_num_results,
            }],
        };

        self.call_responses_api(request).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn parse(value: serde_json::Value) -> Result<Completion, CoreError> {
        into_completion(serde_json::from_value(value).unwrap())
    }

    #[test]
    fn test_request_carries_file_search_tool() {
        let request = ResponsesRequest {
            model: "gpt-4o".to_string(),
            input: "weekly list".to_string(),
            instructions: "answer in JSON".to_string(),
            tools: vec![Tool::FileSearch {
                vector_store_ids: vec!["vs_1".to_string()],
                max_num_results: None,
            }],
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "model": "gpt-4o",
                "input": "weekly list",
                "instructions": "answer in JSON",
                "tools": [{"type": "file_search", "vector_store_ids": ["vs_1"]}]
            })
        );
    }

    #[test]
    fn test_output_text_and_citations() {
        let completion = parse(json!({
            "id": "resp_1",
            "status": "completed",
            "output": [
                {"type": "file_search_call", "id": "fs_1", "status": "completed"},
                {
                    "type": "message",
                    "role": "assistant",
                    "content": [
                        {
                            "type": "output_text",
                            "text": "{\"grocery_list\": [],",
                            "annotations": [
                                {"type": "file_citation", "file_id": "file_1", "filename": "catalog.json", "index": 12},
                                {"type": "url_citation", "url": "https://example.com"}
                            ]
                        },
                        {"type": "output_text", "text": " \"total_price\": 0}"},
                        {"type": "refusal", "refusal": "no"}
                    ]
                }
            ]
        }))
        .unwrap();

        assert_eq!(completion.text, "{\"grocery_list\": [], \"total_price\": 0}");
        assert_eq!(
            completion.citations,
            vec![FileCitation {
                file_id: "file_1".to_string(),
                filename: Some("catalog.json".to_string()),
                index: Some(12),
            }]
        );
    }

    #[test]
    fn test_missing_output_is_empty_text() {
        let completion = parse(json!({"id": "resp_2"})).unwrap();
        assert_eq!(completion, Completion::default());
    }

    #[test]
    fn test_reported_error_is_upstream_failure() {
        let result = parse(json!({"output": [], "error": {"code": "server_error", "message": "boom"}}));
        assert_eq!(result, Err(CoreError::UpstreamFailure("boom".to_string())));
    }
}
