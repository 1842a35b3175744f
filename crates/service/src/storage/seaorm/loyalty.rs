use async_trait::async_trait;
use models::fidelidade;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use super::map_db_err;
use crate::errors::ServiceError;
use crate::loyalty::domain::{AccountOwner, LoyaltyAccount, LoyaltyStatus, NewLoyaltyAccount};
use crate::storage::{sort_records, Record, RecordStore};

pub struct SeaOrmLoyaltyStore {
    pub db: DatabaseConnection,
}

impl From<fidelidade::Model> for LoyaltyAccount {
    fn from(m: fidelidade::Model) -> Self {
        Self {
            id: m.id,
            usuario_id: m.usuario_id.unwrap_or_default(),
            pontos: m.pontos,
            status: LoyaltyStatus::parse(&m.status),
        }
    }
}

#[async_trait]
impl RecordStore<LoyaltyAccount> for SeaOrmLoyaltyStore {
    async fn create(&self, draft: NewLoyaltyAccount) -> Result<LoyaltyAccount, ServiceError> {
        let created = fidelidade::ActiveModel {
            usuario_id: Set(Some(draft.usuario_id)),
            pontos: Set(draft.pontos),
            status: Set(draft.status.as_str().to_string()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| map_db_err(e, LoyaltyAccount::ENTITY))?;
        Ok(created.into())
    }

    async fn list(&self, filter: Option<&AccountOwner>) -> Result<Vec<LoyaltyAccount>, ServiceError> {
        let mut query = fidelidade::Entity::find();
        if let Some(AccountOwner(owner)) = filter {
            query = query.filter(fidelidade::Column::UsuarioId.eq(*owner));
        }
        let rows = query.all(&self.db).await.map_err(|e| map_db_err(e, LoyaltyAccount::ENTITY))?;
        let mut accounts: Vec<LoyaltyAccount> = rows.into_iter().map(Into::into).collect();
        sort_records(&mut accounts);
        Ok(accounts)
    }

    async fn get(&self, id: i32) -> Result<Option<LoyaltyAccount>, ServiceError> {
        let row = fidelidade::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| map_db_err(e, LoyaltyAccount::ENTITY))?;
        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let res = fidelidade::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| map_db_err(e, LoyaltyAccount::ENTITY))?;
        Ok(res.rows_affected > 0)
    }

    async fn update(&self, record: LoyaltyAccount) -> Result<LoyaltyAccount, ServiceError> {
        fidelidade::Entity::update_many()
            .set(fidelidade::ActiveModel {
                usuario_id: Set(Some(record.usuario_id)),
                pontos: Set(record.pontos),
                status: Set(record.status.as_str().to_string()),
                ..Default::default()
            })
            .filter(fidelidade::Column::Id.eq(record.id))
            .exec(&self.db)
            .await
            .map_err(|e| map_db_err(e, LoyaltyAccount::ENTITY))?;
        self.get(record.id).await?.ok_or_else(|| ServiceError::not_found(LoyaltyAccount::ENTITY))
    }
}
