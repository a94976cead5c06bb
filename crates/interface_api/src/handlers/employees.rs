//! Employee handlers

use axum::{
    extract::{Path, State},
    http::{header, HeaderName, StatusCode},
    Json,
};
use domain_employee::{EmployeeDraft, AGGREGATE_THRESHOLD};

use crate::{AppState, error::ApiError, extractors::ValidJson};
use crate::dto::employee::*;

/// Lists all employees
pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<EmployeeResponse>>, ApiError> {
    let employees = state.employees.list().await?;
    Ok(Json(employees.into_iter().map(EmployeeResponse::from).collect()))
}

/// Gets an employee by ID
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    let employee = state.employees.get(id).await?;
    Ok(Json(employee.into()))
}

/// Creates an employee
///
/// Responds `201 Created` with the location of the new record.
pub async fn create_employee(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<EmployeeRequest>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<EmployeeResponse>), ApiError> {
    let employee = state.employees.create(EmployeeDraft::from(request)).await?;
    let location = format!("/api/employees/{}", employee.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(employee.into()),
    ))
}

/// Updates an employee; the path id wins over any id in the body
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidJson(request): ValidJson<EmployeeRequest>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    let employee = state.employees.update(id, EmployeeDraft::from(request)).await?;
    Ok(Json(employee.into()))
}

/// Deletes an employee
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.employees.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Applies the name-prefix increments to every employee
pub async fn increment_values(
    State(state): State<AppState>,
) -> Result<Json<IncrementResponse>, ApiError> {
    let summary = state.employees.increment_values().await?;
    Ok(Json(summary.into()))
}

/// Per-letter totals for names starting with A, B or C above the threshold
pub async fn aggregate_abc_values(
    State(state): State<AppState>,
) -> Result<Json<AggregateResponse>, ApiError> {
    let groups = state.employees.aggregate_abc_values().await?;
    Ok(Json(AggregateResponse::new(groups, AGGREGATE_THRESHOLD)))
}
