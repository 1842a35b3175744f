use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument};

use super::domain::{NewReview, Review, ReviewInput, ANONYMOUS};
use crate::coerce::{int_or_zero, non_blank, required_text};
use crate::errors::ServiceError;
use crate::storage::RecordStore;

pub struct ReviewService {
    reviews: Arc<dyn RecordStore<Review>>,
}

impl ReviewService {
    pub fn new(reviews: Arc<dyn RecordStore<Review>>) -> Self { Self { reviews } }

    #[instrument(skip(self, input), fields(author = ?input.author_name))]
    pub async fn create(&self, input: ReviewInput) -> Result<Review, ServiceError> {
        let content = required_text(input.content, "content")?;
        let draft = NewReview {
            author_name: non_blank(input.author_name).unwrap_or_else(|| ANONYMOUS.to_string()),
            content,
            rating: int_or_zero(input.rating.as_ref()),
            created_at: Utc::now(),
        };
        let review = self.reviews.create(draft).await?;
        info!(review_id = review.id, rating = review.rating, "review_created");
        Ok(review)
    }

    /// Newest first.
    pub async fn list(&self) -> Result<Vec<Review>, ServiceError> { self.reviews.list(None).await }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;

    use super::*;
    use crate::test_support::both_storages;

    fn review(author: Option<&str>, content: &str, rating: serde_json::Value) -> ReviewInput {
        ReviewInput { author_name: author.map(str::to_string), content: Some(content.into()), rating: Some(rating) }
    }

    #[tokio::test]
    async fn newest_first_with_defaults() -> Result<(), anyhow::Error> {
        for (storage, dir) in both_storages().await? {
            let svc = ReviewService::new(storage.reviews.clone());
            let first = svc.create(review(None, "ótimo", json!("5"))).await?;
            // DATETIME columns may truncate to seconds
            tokio::time::sleep(Duration::from_millis(1100)).await;
            let second = svc.create(review(Some("Bia"), "bom", json!("abc"))).await?;

            assert_eq!(first.author_name, ANONYMOUS);
            assert_eq!(first.rating, 5);
            assert_eq!(second.rating, 0);

            let listed = svc.list().await?;
            assert_eq!(listed.iter().map(|r| r.id).collect::<Vec<_>>(), vec![second.id, first.id]);
            let _ = tokio::fs::remove_dir_all(&dir).await;
        }
        Ok(())
    }

    #[tokio::test]
    async fn empty_content_is_rejected() -> Result<(), anyhow::Error> {
        for (storage, dir) in both_storages().await? {
            let svc = ReviewService::new(storage.reviews.clone());
            assert!(matches!(svc.create(review(Some("Ana"), "  ", json!(5))).await, Err(ServiceError::Validation(_))));
            assert!(svc.list().await?.is_empty());
            let _ = tokio::fs::remove_dir_all(&dir).await;
        }
        Ok(())
    }

    #[tokio::test]
    async fn fractional_rating_is_rounded() -> Result<(), anyhow::Error> {
        for (storage, dir) in both_storages().await? {
            let svc = ReviewService::new(storage.reviews.clone());
            assert_eq!(svc.create(review(None, "ok", json!(4.6))).await?.rating, 5);
            assert_eq!(svc.create(review(None, "ok", json!(true))).await?.rating, 1);
            let _ = tokio::fs::remove_dir_all(&dir).await;
        }
        Ok(())
    }

    #[tokio::test]
    async fn stored_review_without_rating_lists_as_zero() -> Result<(), anyhow::Error> {
        let dir = crate::test_support::temp_data_dir();
        let storage = crate::storage::Storage::file(&dir).await?;
        tokio::fs::write(
            dir.join("reviews.json"),
            r#"[{"id": 1, "author_name": "Ana", "content": "antigo", "created_at": "2023-01-01T12:00:00Z"}]"#,
        )
        .await?;
        let svc = ReviewService::new(storage.reviews.clone());
        let listed = svc.list().await?;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].rating, 0);

        let created = svc.create(review(None, "novo", json!(3))).await?;
        assert_eq!(created.id, 2);
        assert_eq!(svc.list().await?[0].id, 2);
        let _ = tokio::fs::remove_dir_all(&dir).await;
        Ok(())
    }
}
