pub mod ask_planner;
pub mod export_answer;
pub mod render_answer;
