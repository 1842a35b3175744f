use async_trait::async_trait;
use models::perfil;
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use super::map_db_err;
use crate::errors::ServiceError;
use crate::profile::domain::{NewProfile, Profile, ProfileFilter};
use crate::storage::{sort_records, Record, RecordStore};

pub struct SeaOrmProfileStore {
    pub db: DatabaseConnection,
}

impl From<perfil::Model> for Profile {
    fn from(m: perfil::Model) -> Self {
        Self {
            id: m.id,
            nome: m.nome,
            telefone: m.telefone,
            nascimento: Some(m.nascimento),
            senha: m.senha,
            created_at: m.created_at,
        }
    }
}

#[async_trait]
impl RecordStore<Profile> for SeaOrmProfileStore {
    async fn create(&self, draft: NewProfile) -> Result<Profile, ServiceError> {
        let created = perfil::ActiveModel {
            nome: Set(draft.nome),
            telefone: Set(draft.telefone),
            nascimento: Set(draft.nascimento),
            senha: Set(draft.senha),
            created_at: Set(draft.created_at),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| map_db_err(e, Profile::ENTITY))?;
        Ok(created.into())
    }

    async fn list(&self, filter: Option<&ProfileFilter>) -> Result<Vec<Profile>, ServiceError> {
        let mut query = perfil::Entity::find();
        if let Some(f) = filter {
            query = query.filter(perfil::Column::Nome.eq(f.nome.as_str()));
        }
        let rows = query.all(&self.db).await.map_err(|e| map_db_err(e, Profile::ENTITY))?;
        let mut profiles: Vec<Profile> = rows.into_iter().map(Into::into).collect();
        sort_records(&mut profiles);
        Ok(profiles)
    }

    async fn get(&self, id: i32) -> Result<Option<Profile>, ServiceError> {
        let row = perfil::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| map_db_err(e, Profile::ENTITY))?;
        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let res = perfil::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| map_db_err(e, Profile::ENTITY))?;
        Ok(res.rows_affected > 0)
    }

    async fn update(&self, record: Profile) -> Result<Profile, ServiceError> {
        perfil::Entity::update_many()
            .set(perfil::ActiveModel {
                nome: Set(record.nome.clone()),
                telefone: Set(record.telefone.clone()),
                nascimento: record.nascimento.map_or(NotSet, Set),
                senha: Set(record.senha.clone()),
                created_at: Set(record.created_at),
                ..Default::default()
            })
            .filter(perfil::Column::Id.eq(record.id))
            .exec(&self.db)
            .await
            .map_err(|e| map_db_err(e, Profile::ENTITY))?;
        self.get(record.id).await?.ok_or_else(|| ServiceError::not_found(Profile::ENTITY))
    }
}
