// handlers/public/pages.rs - static informational pages
//
// The original site rendered fixed templates for these; the API serves the
// equivalent page descriptors as JSON.

use serde_json::{json, Value};

use crate::middleware::ApiResponse;

/// Redirect target after a form submission
pub const FORM_SUCCESS_PATH: &str = "/form-success";

fn page(name: &str, title: &str) -> ApiResponse<Value> {
    ApiResponse::success(json!({ "page": name, "title": title }))
}

/// GET /about
pub async fn about_get() -> ApiResponse<Value> {
    page("about", "About")
}

/// GET /event
pub async fn event_get() -> ApiResponse<Value> {
    page("event", "Event")
}

/// GET /resource
pub async fn resource_get() -> ApiResponse<Value> {
    page("resource", "Resource")
}

/// GET /form-success - confirmation page after a submission
pub async fn form_success_get() -> ApiResponse<Value> {
    ApiResponse::success(json!({
        "page": "form-success",
        "title": "Submission received",
        "message": "Your submission has been received.",
    }))
}
