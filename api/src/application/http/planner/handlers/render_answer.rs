use axum::extract::State;

use crate::application::http::{
    planner::validators::AnswerRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};
use grocery_planner_core::domain::meal_plan::{
    Diagnostic, PlannerService, ShapeTag, render::PresentationMode,
};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, PartialEq, Serialize, ToSchema)]
pub struct RenderAnswerResponse {
    /// Shape the answer was classified as, absent when no JSON was found.
    pub shape: Option<ShapeTag>,
    pub presentation: PresentationMode,
    pub diagnostics: Vec<Diagnostic>,
}

#[utoipa::path(
    post,
    path = "/render",
    tag = "planner",
    summary = "Render a planner answer",
    description = "Classifies a raw answer and returns how it should be presented. Never fails on the answer's content",
    responses(
        (status = 200, body = RenderAnswerResponse)
    ),
    request_body = AnswerRequest
)]
pub async fn render_answer(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnswerRequest>,
) -> Result<Response<RenderAnswerResponse>, ApiError> {
    let reconciliation = state.service.render(&payload.answer);

    Ok(Response::OK(RenderAnswerResponse {
        shape: reconciliation.shape,
        presentation: reconciliation.mode,
        diagnostics: reconciliation.diagnostics,
    }))
}
