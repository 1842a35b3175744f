use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use service::profile::domain::{ProfileInput, ProfileLoginInput, ProfileView};

use super::AppState;
use crate::errors::ApiError;

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreatedProfile {
    pub message: &'static str,
    pub usuario_id: i32,
    pub usuario_nome: String,
}

/// `{ "usuario": { ... } }`
#[derive(Serialize, Debug)]
pub struct ProfileEnvelope {
    pub usuario: ProfileView,
}

pub async fn create_profile(
    State(services): State<AppState>,
    payload: Result<Json<ProfileInput>, JsonRejection>,
) -> Result<Json<CreatedProfile>, ApiError> {
    let Json(input) = payload?;
    let (usuario_id, usuario_nome) = services.profiles.create_profile(input).await?;
    Ok(Json(CreatedProfile { message: "Profile created", usuario_id, usuario_nome }))
}

pub async fn get_profile(
    State(services): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<ProfileEnvelope>, ApiError> {
    let Path(id) = id?;
    let usuario = services.profiles.get_profile(id).await?;
    Ok(Json(ProfileEnvelope { usuario }))
}

pub async fn login_by_name(
    State(services): State<AppState>,
    payload: Result<Json<ProfileLoginInput>, JsonRejection>,
) -> Result<Json<ProfileEnvelope>, ApiError> {
    let Json(input) = payload?;
    let usuario = services.profiles.login_by_name(input).await?;
    Ok(Json(ProfileEnvelope { usuario }))
}
