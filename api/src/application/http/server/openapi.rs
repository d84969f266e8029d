use crate::application::http::{
    health::__path_health, planner::router::PlannerApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Grocery Planner API",
        description = "Turns grocery and meal planning requests into priced plans from the product catalog"
    ),
    paths(health),
    nest(
        (path = "/planner", api = PlannerApiDoc),
    )
)]
pub struct ApiDoc;
