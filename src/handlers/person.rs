use axum::{
    extract::{OriginalUri, Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};

use crate::error::ApiError;
use crate::person::{Person, PersonFilter, Upserted};
use crate::routes::AppState;

/// GET /person - full unfiltered listing
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Person>>, ApiError> {
    Ok(Json(state.persons.list().await?))
}

/// GET /person/filter?name=&likesChocolate=&maxResults=
///
/// Query parameters map one-to-one onto the filter; a parameter that is not
/// in the query string stays absent. A non-numeric or negative maxResults
/// never reaches the service, axum's Query extractor rejects it as a 400.
pub async fn find(
    State(state): State<AppState>,
    Query(filter): Query<PersonFilter>,
) -> Result<Json<Vec<Person>>, ApiError> {
    Ok(Json(state.persons.find(&filter).await?))
}

/// GET /person/:id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Person>, ApiError> {
    Ok(Json(state.persons.get(id).await?))
}

/// POST /person - create, 201 with a Location header keyed by the new id
pub async fn create(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Json(person): Json<Person>,
) -> Result<Response, ApiError> {
    let created = state.persons.create(person).await?;
    let location = format!("{}/{}", uri.path().trim_end_matches('/'), created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    )
        .into_response())
}

/// PUT /person/:id - replace when present (204), create when absent (201)
pub async fn upsert(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    OriginalUri(uri): OriginalUri,
    Json(person): Json<Person>,
) -> Result<Response, ApiError> {
    match state.persons.upsert(id, person).await? {
        Upserted::Created(created) => Ok((
            StatusCode::CREATED,
            [(header::LOCATION, uri.path().to_string())],
            Json(created),
        )
            .into_response()),
        Upserted::Replaced => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

/// DELETE /person/:id - 204 on success, 404 when the id was never there
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.persons.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
