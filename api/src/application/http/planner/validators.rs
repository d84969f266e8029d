use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct AskPlannerRequest {
    #[validate(
        custom(function = "not_blank"),
        length(max = 5000, message = "question must be at most 5000 characters")
    )]
    pub question: String,
}

/// An answer previously returned by `/planner/ask`, sent back for rendering or export.
#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct AnswerRequest {
    pub answer: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("Please enter your request.".into()));
    }
    Ok(())
}
