use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use common::types::MessageBody;
use service::loyalty::domain::AdjustInput;

use super::AppState;
use crate::errors::ApiError;

#[derive(Serialize, Debug)]
pub struct Adjusted {
    pub message: &'static str,
    pub usuario_id: i32,
    pub pontos: i32,
}

pub async fn adjust(
    State(services): State<AppState>,
    payload: Result<Json<AdjustInput>, JsonRejection>,
) -> Result<Json<Adjusted>, ApiError> {
    let Json(input) = payload?;
    let account = services.loyalty.adjust(input).await?;
    Ok(Json(Adjusted { message: "Points adjusted", usuario_id: account.usuario_id, pontos: account.pontos }))
}

pub async fn cancel(
    State(services): State<AppState>,
    user_id: Result<Path<i32>, PathRejection>,
) -> Result<Json<MessageBody>, ApiError> {
    let Path(user_id) = user_id?;
    services.loyalty.cancel(user_id).await?;
    Ok(Json(MessageBody::new("Loyalty card cancelled")))
}
