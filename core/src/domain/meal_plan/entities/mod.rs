pub mod canonical_plan;
pub mod day_plan;
pub mod error_payload;
pub mod grocery_item;

pub use canonical_plan::*;
pub use day_plan::*;
pub use error_payload::*;
pub use grocery_item::*;
