//! Service banner listing the available routes.

use axum::Json;
use serde::Serialize;

/// Every route the API exposes, in documentation order.
pub const ROUTES: [&str; 6] = [
    "POST /student",
    "POST /tutor",
    "GET /students",
    "GET /tutors",
    "PUT /student/{id}",
    "PUT /tutor/{id}",
];

/// Body of `GET /`.
#[derive(Serialize)]
pub struct IndexBody {
    pub message: &'static str,
    pub routes: &'static [&'static str],
}

/// `GET /`
pub async fn index() -> Json<IndexBody> {
    Json(IndexBody {
        message: "Student & Tutor API running",
        routes: &ROUTES,
    })
}
