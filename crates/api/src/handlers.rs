//! API Handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use registrar_core::CourseDraft;
use registrar_utils::{optional_text, require_capacity, require_text};
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

type ApiResult<T> = Result<T, ApiError>;

// ============ Request Types ============

#[derive(Deserialize)]
pub struct CreateStudentRequest {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Deserialize)]
pub struct CreateInstructorRequest {
    #[serde(default)]
    pub name: String,
}

/// Body for both course create and update
#[derive(Deserialize)]
pub struct CourseRequest {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub capacity: i64,
    pub instructor_id: Option<String>,
}

impl CourseRequest {
    fn into_draft(self) -> ApiResult<CourseDraft> {
        let mut draft = CourseDraft::new(
            require_text("code", &self.code)?,
            require_text("title", &self.title)?,
            require_capacity("capacity", self.capacity)?,
        );
        draft.instructor_id = optional_text(self.instructor_id.as_deref());
        Ok(draft)
    }
}

#[derive(Deserialize)]
pub struct EnrollRequest {
    #[serde(default)]
    pub student_id: String,
    #[serde(default)]
    pub course_id: String,
}

// ============ Handlers ============

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().timestamp()
    }))
}

pub async fn list_students(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store.list_students())
}

pub async fn create_student(
    State(state): State<AppState>,
    payload: Result<Json<CreateStudentRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(payload) = payload?;
    let full_name = require_text("full_name", &payload.full_name)?;
    let email = require_text("email", &payload.email)?;

    let student = state.store.create_student(full_name, email);
    Ok((StatusCode::CREATED, Json(student)))
}

pub async fn list_instructors(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store.list_instructors())
}

pub async fn create_instructor(
    State(state): State<AppState>,
    payload: Result<Json<CreateInstructorRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(payload) = payload?;
    let name = require_text("name", &payload.name)?;

    let instructor = state.store.create_instructor(name);
    Ok((StatusCode::CREATED, Json(instructor)))
}

pub async fn get_instructor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    state
        .store
        .get_instructor(id.trim())
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("instructor not found: {}", id.trim())))
}

pub async fn list_courses(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store.list_courses())
}

pub async fn create_course(
    State(state): State<AppState>,
    payload: Result<Json<CourseRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(payload) = payload?;
    let course = state.store.create_course(payload.into_draft()?);
    Ok((StatusCode::CREATED, Json(course)))
}

pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    state
        .store
        .get_course(id.trim())
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("course not found: {}", id.trim())))
}

pub async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<CourseRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(payload) = payload?;
    let course = state.store.update_course(id.trim(), payload.into_draft()?)?;
    Ok(Json(course))
}

pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    state.store.delete_course(id.trim())?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_enrollments(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store.list_enrollments())
}

pub async fn enroll(
    State(state): State<AppState>,
    payload: Result<Json<EnrollRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(payload) = payload?;
    let student_id = require_text("student_id", &payload.student_id)?;
    let course_id = require_text("course_id", &payload.course_id)?;

    let enrollment = state.engine.enroll(&student_id, &course_id)?;
    Ok((StatusCode::CREATED, Json(enrollment)))
}

pub async fn list_audit(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.audit.list())
}
