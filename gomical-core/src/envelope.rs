//! The `{ success, data, error, ... }` wrapper both APIs speak.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
// Field-level `#[serde(default)]` on `data` would otherwise make the
// derive demand `T: Default`; `Option::<T>::default()` never needs it.
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
/// Uniform wire envelope around every API payload.
///
/// When `success` is false, `data` is absent and `error` carries a
/// message. The remaining fields are endpoint-specific extras: `found`
/// and `query` for reverse search, `today` for the today listing,
/// `total` for admin list views.
pub struct ApiResponse<T> {
    /// Whether the server handled the request.
    pub success: bool,
    /// Payload, present on success for endpoints that return one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Server-reported error message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Informational message, e.g. the no-results text for a search.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Total record count on admin list endpoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    /// Whether a reverse search matched anything.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub found: Option<bool>,
    /// The search query, echoed back.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Server-resolved weekday label on the today endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub today: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Synthesize the uniform failure shape from a local error.
    #[must_use]
    pub fn failure<S: Into<String>>(error: S) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            message: None,
            total: None,
            found: None,
            query: None,
            today: None,
        }
    }
}
