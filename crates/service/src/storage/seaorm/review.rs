use async_trait::async_trait;
use models::review;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use super::map_db_err;
use crate::errors::ServiceError;
use crate::review::domain::{NewReview, Review, ANONYMOUS};
use crate::storage::{sort_records, Record, RecordStore};

pub struct SeaOrmReviewStore {
    pub db: DatabaseConnection,
}

impl From<review::Model> for Review {
    fn from(m: review::Model) -> Self {
        let author_name = m
            .author_name
            .filter(|a| !a.trim().is_empty())
            .unwrap_or_else(|| ANONYMOUS.to_string());
        Self { id: m.id, author_name, content: m.content, rating: m.rating, created_at: m.created_at }
    }
}

#[async_trait]
impl RecordStore<Review> for SeaOrmReviewStore {
    async fn create(&self, draft: NewReview) -> Result<Review, ServiceError> {
        let created = review::ActiveModel {
            author_name: Set(Some(draft.author_name)),
            content: Set(draft.content),
            rating: Set(draft.rating),
            created_at: Set(draft.created_at),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| map_db_err(e, Review::ENTITY))?;
        Ok(created.into())
    }

    async fn list(&self, _filter: Option<&()>) -> Result<Vec<Review>, ServiceError> {
        let rows = review::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| map_db_err(e, Review::ENTITY))?;
        let mut reviews: Vec<Review> = rows.into_iter().map(Into::into).collect();
        sort_records(&mut reviews);
        Ok(reviews)
    }

    async fn get(&self, id: i32) -> Result<Option<Review>, ServiceError> {
        let row = review::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| map_db_err(e, Review::ENTITY))?;
        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let res = review::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| map_db_err(e, Review::ENTITY))?;
        Ok(res.rows_affected > 0)
    }

    async fn update(&self, record: Review) -> Result<Review, ServiceError> {
        review::Entity::update_many()
            .set(review::ActiveModel {
                author_name: Set(Some(record.author_name.clone())),
                content: Set(record.content.clone()),
                rating: Set(record.rating),
                created_at: Set(record.created_at),
                ..Default::default()
            })
            .filter(review::Column::Id.eq(record.id))
            .exec(&self.db)
            .await
            .map_err(|e| map_db_err(e, Review::ENTITY))?;
        self.get(record.id).await?.ok_or_else(|| ServiceError::not_found(Review::ENTITY))
    }
}
