use axum::extract::State;

use crate::application::http::{
    planner::validators::AskPlannerRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};
use grocery_planner_core::domain::meal_plan::{AskPlannerInput, PlannerAnswer, PlannerService};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, PartialEq, Serialize, ToSchema)]
pub struct AskPlannerResponse {
    pub data: PlannerAnswer,
}

#[utoipa::path(
    post,
    path = "/ask",
    tag = "planner",
    summary = "Ask the grocery planner",
    description = "Forwards the request to the completion service, searching the product catalog, and returns the answer with its presentation",
    responses(
        (status = 200, body = AskPlannerResponse),
        (status = 400, body = ApiErrorResponse, description = "Blank or oversized request"),
        (status = 502, body = ApiErrorResponse, description = "Completion service failed")
    ),
    request_body = AskPlannerRequest
)]
pub async fn ask_planner(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AskPlannerRequest>,
) -> Result<Response<AskPlannerResponse>, ApiError> {
    let answer = state
        .service
        .ask(AskPlannerInput {
            question: payload.question,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AskPlannerResponse { data: answer }))
}
