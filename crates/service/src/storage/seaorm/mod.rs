//! sea-orm backed record stores, one per entity.
//!
//! Each operation is a single statement against the pool; results are mapped
//! into the service record types and sorted with [`super::sort_records`].

use sea_orm::{DbErr, SqlErr};

use crate::errors::ServiceError;

mod appointment;
mod loyalty;
mod profile;
mod review;
mod user;

pub use appointment::SeaOrmAppointmentStore;
pub use loyalty::SeaOrmLoyaltyStore;
pub use profile::SeaOrmProfileStore;
pub use review::SeaOrmReviewStore;
pub use user::SeaOrmUserStore;

pub(crate) fn map_db_err(err: DbErr, entity: &str) -> ServiceError {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
        return ServiceError::Conflict(format!("{entity} already exists ({detail})"));
    }
    match err {
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => ServiceError::not_found(entity),
        other => ServiceError::Storage(other.to_string()),
    }
}
