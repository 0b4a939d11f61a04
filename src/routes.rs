//! Route handlers: defines the `/api/email/send` endpoint.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::email::EmailState;

/// JSON payload for `/api/email/send`.
///
/// `toEmail` and `templateId` default to empty strings when absent so that a
/// missing field is rejected by the sender's validation, not by
/// deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailRequest {
    #[serde(default)]
    pub to_email: String,
    /// Informational only; not forwarded to the provider.
    #[serde(default)]
    pub to_name: String,
    /// Identifies a provider-side dynamic template.
    #[serde(default)]
    pub template_id: String,
    /// Arbitrary substitution tree, flattened before dispatch.
    #[serde(default)]
    pub template_data: Option<Value>,
}

/// Build the application router.
pub fn router(state: Arc<EmailState>) -> Router {
    Router::new()
        .route("/api/email/send", post(send_email))
        .with_state(state)
}

/// POST `/api/email/send`
/// - JSON `null` body: 400 with plain text "Request cannot be null"
/// - Sender success: 200 `{"success":true,"message":..}`
/// - Sender failure: 500 `{"success":false,"message":..,"error":..}`
///
/// Every reachable path produces a response; the sender folds its own
/// failures into the result, so nothing propagates past this handler.
pub async fn send_email(
    State(state): State<Arc<EmailState>>,
    Json(payload): Json<Option<SendEmailRequest>>,
) -> Response {
    let rid = request_id();

    let Some(request) = payload else {
        warn!(%rid, "Null request received");
        return (StatusCode::BAD_REQUEST, "Request cannot be null").into_response();
    };

    info!(
        %rid,
        "Received request to send email to {} ({})", request.to_email, request.to_name
    );

    let result = state.send_templated(&request).await;

    if result.is_success {
        info!(%rid, "Email sent successfully to {}", request.to_email);
        (
            StatusCode::OK,
            Json(serde_json::json!({
                "success": true,
                "message": result.message,
            })),
        )
            .into_response()
    } else {
        warn!(%rid, "Failed to send email: {:?}", result.error_details);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({
                "success": false,
                "message": result.message,
                "error": result.error_details,
            })),
        )
            .into_response()
    }
}

/// Generate a compact pseudo request id (12 chars, URL-safe) for log correlation.
fn request_id() -> String {
    use rand::{distr::Alphanumeric, rng, Rng};
    rng()
        .sample_iter(&Alphanumeric)
        .take(12)
        .map(char::from)
        .collect()
}
