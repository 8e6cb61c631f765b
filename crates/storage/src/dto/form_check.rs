use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateFormCheckRequest {
    #[validate(length(min = 1, max = 512, message = "Video key is required"))]
    pub video_key: String,
}
