use super::handlers::{
    ask_planner::{__path_ask_planner, ask_planner},
    export_answer::{__path_export_answer, export_answer},
    render_answer::{__path_render_answer, render_answer},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(ask_planner, render_answer, export_answer))]
pub struct PlannerApiDoc;

pub fn planner_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/planner/ask", state.args.server.root_path),
            post(ask_planner),
        )
        .route(
            &format!("{}/planner/render", state.args.server.root_path),
            post(render_answer),
        )
        .route(
            &format!("{}/planner/export", state.args.server.root_path),
            post(export_answer),
        )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use axum_test::TestServer;
    use clap::Parser;
    use grocery_planner_core::{
        application::create_service, domain::common::GroceryPlannerConfig,
    };
    use serde_json::{Value, json};

    use crate::{
        application::http::server::{app_state::AppState, http_server::router},
        args::Args,
    };

    // Nothing listens on the discard port, so asks fail fast as upstream errors.
    fn test_server() -> TestServer {
        let args = Args::try_parse_from([
            "grocery-planner",
            "--openai-api-key",
            "sk-test",
            "--openai-base-url",
            "http://127.0.0.1:9",
            "--vector-store-id",
            "vs_test",
        ])
        .unwrap();

        let service = create_service(GroceryPlannerConfig::from(args.clone())).unwrap();
        let state = AppState::new(Arc::new(args), service);

        TestServer::new(router(state).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_render_grocery_list() {
        let server = test_server();
        let answer = "Here you go:\n```json\n{\"grocery_list\":[{\"name\":\"Milk\",\"price\":15,\"quantity\":1,\"unit\":\"l\"}],\"total_price\":15}\n```";

        let response = server
            .post("/planner/render")
            .json(&json!({ "answer": answer }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["shape"], "simple_grocery_list");
        assert_eq!(body["presentation"]["mode"], "structured");
        assert_eq!(body["diagnostics"], json!([]));
    }

    #[tokio::test]
    async fn test_render_prose_falls_back_to_text() {
        let server = test_server();

        let response = server
            .post("/planner/render")
            .json(&json!({ "answer": "Buy oats and bananas." }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["shape"], Value::Null);
        assert_eq!(body["presentation"]["mode"], "raw_text");
        assert_eq!(body["diagnostics"][0]["kind"], "malformed_json_ignored");
    }

    #[tokio::test]
    async fn test_render_error_shape() {
        let server = test_server();
        let answer = json!({
            "success": false,
            "message": "Budget too low",
            "budgetIncrease": 120.5
        })
        .to_string();

        let response = server
            .post("/planner/render")
            .json(&json!({ "answer": answer }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["shape"], "error_message");
        assert_eq!(body["presentation"]["mode"], "error");
        assert_eq!(body["presentation"]["message"], "Budget too low");
    }

    #[tokio::test]
    async fn test_export_sets_attachment_headers() {
        let server = test_server();
        let answer = r#"{"grocery_list":[{"name":"Milk","price":15}],"total_price":15}"#;

        let response = server
            .post("/planner/export")
            .json(&json!({ "answer": answer }))
            .await;

        response.assert_status_ok();
        assert_eq!(
            response.header("content-disposition"),
            "attachment; filename=\"your-grocery-list.txt\""
        );
        assert!(
            response
                .header("content-type")
                .to_str()
                .unwrap()
                .starts_with("text/plain")
        );
        assert!(response.text().contains("Milk"));
    }

    #[tokio::test]
    async fn test_export_prose() {
        let server = test_server();

        let response = server
            .post("/planner/export")
            .json(&json!({ "answer": "Just eat more greens." }))
            .await;

        response.assert_status_ok();
        assert_eq!(
            response.header("content-disposition"),
            "attachment; filename=\"ai-response.txt\""
        );
        assert!(response.text().contains("Just eat more greens."));
    }

    #[tokio::test]
    async fn test_blank_question_is_bad_request() {
        let server = test_server();

        let response = server
            .post("/planner/ask")
            .json(&json!({ "question": "   " }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["message"], "Please enter your request.");
        assert_eq!(body["code"], "E_BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_malformed_body_is_unprocessable() {
        let server = test_server();

        let response = server
            .post("/planner/render")
            .json(&json!({ "text": "missing answer field" }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_bad_gateway() {
        let server = test_server();

        let response = server
            .post("/planner/ask")
            .json(&json!({ "question": "A week of dinners under 400 kr" }))
            .await;

        response.assert_status(StatusCode::BAD_GATEWAY);
        let body: Value = response.json();
        assert_eq!(body["code"], "E_UPSTREAM_FAILURE");
    }

    #[tokio::test]
    async fn test_health() {
        let server = test_server();

        let response = server.get("/health").await;

        response.assert_status_ok();
        response.assert_json(&json!({ "status": "ok" }));
    }
}
