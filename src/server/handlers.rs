//! Student endpoint handlers
//!
//! Each handler extracts its parameters, invokes the store adapter, and wraps
//! the result in the `{message, <result-key>}` envelope. Failures convert
//! through `RosterError`, which picks the status code per error kind.

use crate::core::error::{RosterError, StudentError};
use crate::core::store::StudentStore;
use crate::core::student::{NewStudent, StudentPatch};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use serde_json::{Value, json};
use std::sync::Arc;

/// Shared router state. Holds the record-store adapter, supplied at process
/// startup.
#[derive(Clone)]
pub struct AppState {
    pub students: Arc<dyn StudentStore>,
}

pub async fn create_student(
    State(state): State<AppState>,
    payload: Result<Json<NewStudent>, JsonRejection>,
) -> Result<impl IntoResponse, RosterError> {
    let Json(new) = payload.map_err(|rejection| StudentError::InvalidPayload {
        message: rejection.body_text(),
    })?;

    let student = state.students.create(new).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Student has been created successfully",
            "newStudent": student,
        })),
    ))
}

pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, RosterError> {
    let student = state.students.get(&id).await?;

    Ok(Json(json!({
        "message": "Student found successfully",
        "existingStudent": student,
    })))
}

pub async fn list_students(State(state): State<AppState>) -> Result<Json<Value>, RosterError> {
    let students = state.students.list().await?;

    Ok(Json(json!({
        "message": "All students data found successfully",
        "studentData": students,
    })))
}

pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<StudentPatch>,
) -> Result<Json<Value>, RosterError> {
    let student = state.students.update(&id, patch).await?;

    Ok(Json(json!({
        "message": "Student has been successfully updated",
        "existingStudent": student,
    })))
}

pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, RosterError> {
    let student = state.students.delete(&id).await?;

    Ok(Json(json!({
        "message": "Student deleted successfully",
        "deleteStudent": student,
    })))
}

/// Health check endpoint handler.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "roster"
    }))
}
