//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound
            | Self::UserNotFound
            | Self::QrNotRecognized
            | Self::RestaurantNotFound
            | Self::OfferNotFound
            | Self::SliderNotFound => StatusCode::NOT_FOUND,

            // 500 Internal Server Error
            Self::InternalError | Self::DatabaseError | Self::ConfigError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            // 400 Bad Request (default for validation/business errors).
            // Duplicate registrations stay 400 rather than 409: the admin and
            // registration dashboards key their error toasts on 400 bodies.
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
