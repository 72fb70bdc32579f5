pub mod handlers;

use serde::Serialize;
use utoipa::ToSchema;

/// Error payload returned by the shared fallback handler.
///
/// Registered in OpenAPI components so domain docs can reference it.
///
/// ```json
/// {
///   "error": "NotFound",
///   "message": "The requested resource was not found"
/// }
/// ```
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Stable identifier for programmatic handling
    pub error: String,
    /// Text for humans
    pub message: String,
    /// Extra structure when one message is not enough
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
