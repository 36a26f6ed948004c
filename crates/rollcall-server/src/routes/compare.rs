//! Attendance comparison route

use axum::{Json, Router, routing::post};
use rollcall::{absentees, normalize};
use tracing::debug;

use crate::AppState;
use crate::models::{CompareRequest, CompareResponse};

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(compare))
}

/// Normalize both free-form lists and report the expected entries missing
/// from the actual list.
async fn compare(Json(request): Json<CompareRequest>) -> Json<CompareResponse> {
    let expected = normalize(&request.expected);
    let actual = normalize(&request.actual);
    let absentees = absentees(&expected, &actual);

    debug!(
        expected = expected.len(),
        actual = actual.len(),
        absent = absentees.len(),
        "compared attendance lists"
    );

    Json(CompareResponse {
        expected,
        actual,
        absentees,
    })
}
