use serde::Serialize;

use crate::domain::review::Review;
use crate::domain::stats::Stats;
use crate::services::widget::WidgetConfig;

/// `{"error": "..."}` body used by every failing endpoint.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}

/// Response body of `GET /api/reviews`.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewsResponse {
    pub reviews: Vec<Review>,
    pub stats: Stats,
}

/// Response body of `GET /api/widget`.
#[derive(Debug, Clone, Serialize)]
pub struct WidgetResponse {
    pub widget: WidgetConfig,
    pub stats: Stats,
}
