use axum::{
    extract::State,
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::IntoResponse,
};

use crate::application::http::{
    planner::validators::AnswerRequest,
    server::{
        api_entities::api_error::{ApiError, ValidateJson},
        app_state::AppState,
    },
};
use grocery_planner_core::domain::meal_plan::PlannerService;

#[utoipa::path(
    post,
    path = "/export",
    tag = "planner",
    summary = "Export a planner answer as text",
    description = "Returns a plain-text rendition of the answer as a file attachment",
    responses(
        (status = 200, content_type = "text/plain", body = String)
    ),
    request_body = AnswerRequest
)]
pub async fn export_answer(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnswerRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let exported = state.service.export(&payload.answer);
    tracing::debug!(file_name = exported.file_name, "answer exported");

    Ok((
        [
            (CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", exported.file_name),
            ),
        ],
        exported.content,
    ))
}
