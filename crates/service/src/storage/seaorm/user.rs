use async_trait::async_trait;
use models::usuario;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use super::map_db_err;
use crate::auth::domain::{NewUser, User, UserFilter};
use crate::errors::ServiceError;
use crate::storage::{sort_records, Record, RecordStore};

pub struct SeaOrmUserStore {
    pub db: DatabaseConnection,
}

impl From<usuario::Model> for User {
    fn from(m: usuario::Model) -> Self {
        Self { id: m.id, name: m.name, email: m.email, password: m.password, phone: m.phone }
    }
}

#[async_trait]
impl RecordStore<User> for SeaOrmUserStore {
    async fn create(&self, draft: NewUser) -> Result<User, ServiceError> {
        let created = usuario::ActiveModel {
            name: Set(draft.name),
            email: Set(draft.email),
            password: Set(draft.password),
            phone: Set(draft.phone),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| map_db_err(e, User::ENTITY))?;
        Ok(created.into())
    }

    async fn list(&self, filter: Option<&UserFilter>) -> Result<Vec<User>, ServiceError> {
        let query = match filter {
            Some(UserFilter::Email(email)) => usuario::Entity::find().filter(usuario::Column::Email.eq(email.as_str())),
            None => usuario::Entity::find(),
        };
        let rows = query.all(&self.db).await.map_err(|e| map_db_err(e, User::ENTITY))?;
        let mut users: Vec<User> = rows.into_iter().map(Into::into).collect();
        sort_records(&mut users);
        Ok(users)
    }

    async fn get(&self, id: i32) -> Result<Option<User>, ServiceError> {
        let row = usuario::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| map_db_err(e, User::ENTITY))?;
        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let res = usuario::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| map_db_err(e, User::ENTITY))?;
        Ok(res.rows_affected > 0)
    }

    async fn update(&self, record: User) -> Result<User, ServiceError> {
        usuario::Entity::update_many()
            .set(usuario::ActiveModel {
                name: Set(record.name.clone()),
                email: Set(record.email.clone()),
                password: Set(record.password.clone()),
                phone: Set(record.phone.clone()),
                ..Default::default()
            })
            .filter(usuario::Column::Id.eq(record.id))
            .exec(&self.db)
            .await
            .map_err(|e| map_db_err(e, User::ENTITY))?;
        self.get(record.id).await?.ok_or_else(|| ServiceError::not_found(User::ENTITY))
    }
}
