use std::sync::Arc;

use grocery_planner_core::application::GroceryPlannerService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: GroceryPlannerService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: GroceryPlannerService) -> Self {
        Self { args, service }
    }
}
