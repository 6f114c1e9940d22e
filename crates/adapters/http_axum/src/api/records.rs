//! JSON handlers for student and tutor records.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

use roster_app::ports::CollectionStore;
use roster_domain::error::{RosterError, ValidationError};
use roster_domain::id::RecordId;
use roster_domain::record::{Entry, NewRecord, RecordKind, RecordPatch};
use roster_domain::serde_ext::double_option;

use crate::error::ApiError;
use crate::provenance::ClientProvenance;
use crate::state::AppState;

/// Request body for creating a record.
///
/// Required fields are optional here so a missing one is reported by name
/// instead of as a generic decode failure.
#[derive(Deserialize)]
pub struct CreateRecordRequest {
    pub name: Option<String>,
    pub mobile_no: Option<String>,
    pub email: Option<String>,
    pub course: Option<String>,
    pub subject: Option<String>,

    pub qualification: Option<String>,
    pub experience: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub preferred_mode: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub language: Option<Option<String>>,

    pub country: Option<String>,
    pub city: Option<String>,
    pub timezone: Option<String>,
}

impl CreateRecordRequest {
    fn into_new_record(self) -> Result<NewRecord, ValidationError> {
        let mut builder = NewRecord::builder()
            .qualification(self.qualification)
            .experience(self.experience)
            .country(self.country)
            .city(self.city)
            .timezone(self.timezone);
        if let Some(name) = self.name {
            builder = builder.name(name);
        }
        if let Some(mobile_no) = self.mobile_no {
            builder = builder.mobile_no(mobile_no);
        }
        if let Some(email) = self.email {
            builder = builder.email(email);
        }
        if let Some(course) = self.course {
            builder = builder.course(course);
        }
        if let Some(subject) = self.subject {
            builder = builder.subject(subject);
        }
        if let Some(preferred_mode) = self.preferred_mode {
            builder = builder.preferred_mode(preferred_mode);
        }
        if let Some(language) = self.language {
            builder = builder.language(language);
        }
        builder.build()
    }
}

/// A single record with a human-readable outcome.
#[derive(Serialize)]
pub struct RecordEnvelope {
    pub message: String,
    pub data: Entry,
}

/// A whole collection.
#[derive(Serialize)]
pub struct CollectionBody {
    pub count: usize,
    pub data: Vec<Entry>,
}

/// Possible responses from the list endpoints.
pub enum ListResponse {
    Ok(Json<CollectionBody>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoints.
pub enum CreateResponse {
    Created(Json<RecordEnvelope>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the update endpoints.
pub enum UpdateResponse {
    Ok(Json<RecordEnvelope>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /students`, `GET /tutors`
pub async fn list<S>(
    State(state): State<AppState<S>>,
    Extension(kind): Extension<RecordKind>,
) -> Result<ListResponse, ApiError>
where
    S: CollectionStore + Send + Sync + 'static,
{
    let entries = state.record_service.list_records(kind).await?;
    Ok(ListResponse::Ok(Json(CollectionBody {
        count: entries.len(),
        data: entries,
    })))
}

/// `POST /student`, `POST /tutor`
pub async fn create<S>(
    State(state): State<AppState<S>>,
    Extension(kind): Extension<RecordKind>,
    ClientProvenance(provenance): ClientProvenance,
    payload: Result<Json<CreateRecordRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    S: CollectionStore + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let input = req.into_new_record().map_err(RosterError::from)?;
    let record = state
        .record_service
        .create_record(kind, input, provenance)
        .await?;
    Ok(CreateResponse::Created(Json(RecordEnvelope {
        message: format!("{} created", kind.label()),
        data: Entry::from(record),
    })))
}

/// `PUT /student/:id`, `PUT /tutor/:id`
pub async fn update<S>(
    State(state): State<AppState<S>>,
    Extension(kind): Extension<RecordKind>,
    Path(id): Path<String>,
    payload: Result<Json<RecordPatch>, JsonRejection>,
) -> Result<UpdateResponse, ApiError>
where
    S: CollectionStore + Send + Sync + 'static,
{
    let Json(patch) = payload?;
    let entry = state
        .record_service
        .update_record(kind, &RecordId::from(id), patch)
        .await?;
    Ok(UpdateResponse::Ok(Json(RecordEnvelope {
        message: format!("{} updated", kind.label()),
        data: entry,
    })))
}
