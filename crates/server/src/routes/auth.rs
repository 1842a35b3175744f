use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Serialize;

use service::auth::domain::{LoginInput, SignupInput};

use super::AppState;
use crate::errors::ApiError;

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UserIdOutput {
    pub message: &'static str,
    pub user_id: i32,
}

pub async fn signup(
    State(services): State<AppState>,
    payload: Result<Json<SignupInput>, JsonRejection>,
) -> Result<Json<UserIdOutput>, ApiError> {
    let Json(input) = payload?;
    let user_id = services.auth.signup(input).await?;
    Ok(Json(UserIdOutput { message: "User registered", user_id }))
}

pub async fn login(
    State(services): State<AppState>,
    payload: Result<Json<LoginInput>, JsonRejection>,
) -> Result<Json<UserIdOutput>, ApiError> {
    let Json(input) = payload?;
    let user_id = services.auth.login(input).await?;
    Ok(Json(UserIdOutput { message: "Login successful", user_id }))
}
