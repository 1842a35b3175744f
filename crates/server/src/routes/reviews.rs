use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Serialize;

use service::review::domain::{Review, ReviewInput};

use super::AppState;
use crate::errors::ApiError;

#[derive(Serialize, Debug)]
pub struct ReviewList {
    pub reviews: Vec<Review>,
}

#[derive(Serialize, Debug)]
pub struct CreatedReview {
    pub message: &'static str,
    pub id: i32,
}

pub async fn list(State(services): State<AppState>) -> Result<Json<ReviewList>, ApiError> {
    let reviews = services.reviews.list().await?;
    Ok(Json(ReviewList { reviews }))
}

pub async fn create(
    State(services): State<AppState>,
    payload: Result<Json<ReviewInput>, JsonRejection>,
) -> Result<Json<CreatedReview>, ApiError> {
    let Json(input) = payload?;
    let review = services.reviews.create(input).await?;
    Ok(Json(CreatedReview { message: "Review submitted", id: review.id }))
}
