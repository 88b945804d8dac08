// src/handlers/attendance.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::{
        access::{CanMarkAttendance, CanTrackAttendance, RequireAction},
        auth::AuthenticatedUser,
    },
    models::attendance::AttendanceRecord,
};

// POST /api/attendance — o funcionário marca presença
#[utoipa::path(
    post,
    path = "/api/attendance",
    tag = "Attendance",
    responses(
        (status = 201, description = "Presença registrada", body = AttendanceRecord),
        (status = 403, description = "Papel da sessão não marca presença"),
        (status = 409, description = "Sessão sem empresa associada"),
        (status = 429, description = "Janela de 24h ainda aberta")
    ),
    security(("api_jwt" = []))
)]
pub async fn mark_attendance(
    State(app_state): State<AppState>,
    _gate: RequireAction<CanMarkAttendance>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let record = app_state.attendance_service.mark(&user).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

// GET /api/attendance — o empregador acompanha a presença da empresa
#[utoipa::path(
    get,
    path = "/api/attendance",
    tag = "Attendance",
    responses(
        (status = 200, description = "Marcações da empresa, mais recentes primeiro", body = Vec<AttendanceRecord>),
        (status = 403, description = "Papel da sessão não acompanha presença"),
        (status = 409, description = "Sessão sem empresa associada")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_attendance(
    State(app_state): State<AppState>,
    _gate: RequireAction<CanTrackAttendance>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<Json<Vec<AttendanceRecord>>, AppError> {
    let records = app_state.attendance_service.list_for_employer(&user).await?;
    Ok(Json(records))
}
