use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use common::types::MessageBody;
use service::appointment::domain::{Appointment, AppointmentInput};
use service::coerce::nonzero_int;

use super::AppState;
use crate::errors::ApiError;

#[derive(Serialize, Debug)]
pub struct CreatedAppointment {
    pub message: &'static str,
    pub id: i32,
}

#[derive(Serialize, Debug)]
pub struct AppointmentList {
    pub appointments: Vec<Appointment>,
}

/// `?usuario_id=N`; blank or non-numeric values list everything.
#[derive(Deserialize, Debug, Default)]
pub struct ListQuery {
    pub usuario_id: Option<String>,
}

pub async fn create(
    State(services): State<AppState>,
    payload: Result<Json<AppointmentInput>, JsonRejection>,
) -> Result<Json<CreatedAppointment>, ApiError> {
    let Json(input) = payload?;
    let created = services.appointments.create(input).await?;
    Ok(Json(CreatedAppointment { message: "Appointment created", id: created.id }))
}

pub async fn list(
    State(services): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<AppointmentList>, ApiError> {
    let owner = nonzero_int(query.usuario_id.map(serde_json::Value::String).as_ref());
    let appointments = services.appointments.list(owner).await?;
    Ok(Json(AppointmentList { appointments }))
}

pub async fn delete(
    State(services): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<MessageBody>, ApiError> {
    let Path(id) = id?;
    services.appointments.delete(id).await?;
    Ok(Json(MessageBody::new("Appointment deleted")))
}
