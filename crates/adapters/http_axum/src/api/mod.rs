//! JSON API handler modules.

pub mod index;
#[allow(clippy::missing_errors_doc)]
pub mod records;

use axum::routing::{get, post, put};
use axum::{Extension, Router};

use roster_app::ports::CollectionStore;
use roster_domain::record::RecordKind;

use crate::state::AppState;

/// Build the API router.
///
/// Student and tutor routes share one set of handlers; each route carries its
/// [`RecordKind`] as a request extension.
pub fn routes<S>() -> Router<AppState<S>>
where
    S: CollectionStore + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(index::index))
        // Students
        .route(
            "/student",
            post(records::create::<S>).layer(Extension(RecordKind::Student)),
        )
        .route(
            "/students",
            get(records::list::<S>).layer(Extension(RecordKind::Student)),
        )
        .route(
            "/student/{id}",
            put(records::update::<S>).layer(Extension(RecordKind::Student)),
        )
        // Tutors
        .route(
            "/tutor",
            post(records::create::<S>).layer(Extension(RecordKind::Tutor)),
        )
        .route(
            "/tutors",
            get(records::list::<S>).layer(Extension(RecordKind::Tutor)),
        )
        .route(
            "/tutor/{id}",
            put(records::update::<S>).layer(Extension(RecordKind::Tutor)),
        )
}
