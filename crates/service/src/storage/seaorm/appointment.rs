use async_trait::async_trait;
use models::agendamento;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use super::map_db_err;
use crate::appointment::domain::{Appointment, NewAppointment, OwnerFilter};
use crate::errors::ServiceError;
use crate::storage::{sort_records, Record, RecordStore};

pub struct SeaOrmAppointmentStore {
    pub db: DatabaseConnection,
}

impl From<agendamento::Model> for Appointment {
    fn from(m: agendamento::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            age: m.age,
            phone: m.phone.unwrap_or_default(),
            service: m.service.unwrap_or_default(),
            data_agendamento: m.data_agendamento,
            hora: m.hora,
            observacoes: m.observacoes,
            usuario_id: m.usuario_id,
        }
    }
}

fn active_model(a: NewAppointment) -> agendamento::ActiveModel {
    agendamento::ActiveModel {
        name: Set(a.name),
        age: Set(a.age),
        phone: Set(Some(a.phone)),
        service: Set(Some(a.service)),
        data_agendamento: Set(a.data_agendamento),
        hora: Set(a.hora),
        observacoes: Set(a.observacoes),
        usuario_id: Set(a.usuario_id),
        ..Default::default()
    }
}

#[async_trait]
impl RecordStore<Appointment> for SeaOrmAppointmentStore {
    async fn create(&self, draft: NewAppointment) -> Result<Appointment, ServiceError> {
        let created = active_model(draft)
            .insert(&self.db)
            .await
            .map_err(|e| map_db_err(e, Appointment::ENTITY))?;
        Ok(created.into())
    }

    async fn list(&self, filter: Option<&OwnerFilter>) -> Result<Vec<Appointment>, ServiceError> {
        let mut query = agendamento::Entity::find();
        if let Some(OwnerFilter(owner)) = filter {
            query = query.filter(agendamento::Column::UsuarioId.eq(*owner));
        }
        let rows = query.all(&self.db).await.map_err(|e| map_db_err(e, Appointment::ENTITY))?;
        let mut appointments: Vec<Appointment> = rows.into_iter().map(Into::into).collect();
        sort_records(&mut appointments);
        Ok(appointments)
    }

    async fn get(&self, id: i32) -> Result<Option<Appointment>, ServiceError> {
        let row = agendamento::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| map_db_err(e, Appointment::ENTITY))?;
        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let res = agendamento::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| map_db_err(e, Appointment::ENTITY))?;
        Ok(res.rows_affected > 0)
    }

    async fn update(&self, record: Appointment) -> Result<Appointment, ServiceError> {
        let id = record.id;
        let changes = active_model(NewAppointment {
            name: record.name,
            age: record.age,
            phone: record.phone,
            service: record.service,
            data_agendamento: record.data_agendamento,
            hora: record.hora,
            observacoes: record.observacoes,
            usuario_id: record.usuario_id,
        });
        agendamento::Entity::update_many()
            .set(changes)
            .filter(agendamento::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| map_db_err(e, Appointment::ENTITY))?;
        self.get(id).await?.ok_or_else(|| ServiceError::not_found(Appointment::ENTITY))
    }
}
