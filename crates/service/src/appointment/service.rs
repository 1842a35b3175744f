use std::sync::Arc;

use tracing::{info, instrument};

use super::domain::{Appointment, AppointmentInput, NewAppointment, OwnerFilter};
use crate::coerce::{non_blank, nonzero_int, parse_date, parse_time, required_text};
use crate::errors::ServiceError;
use crate::storage::RecordStore;

pub struct AppointmentService {
    appointments: Arc<dyn RecordStore<Appointment>>,
}

impl AppointmentService {
    pub fn new(appointments: Arc<dyn RecordStore<Appointment>>) -> Self { Self { appointments } }

    /// Book an appointment and return the stored record.
    ///
    /// Name, service and date are required. Age is dropped when blank, zero
    /// or not a number; phone defaults to an empty string.
    ///
    /// # Examples
    /// ```
    /// use service::appointment::{AppointmentService, domain::{Appointment, AppointmentInput}};
    /// use service::storage::JsonFileStore;
    /// let path = std::env::temp_dir().join(format!("agendamentos_{}.json", uuid::Uuid::new_v4()));
    /// let svc = AppointmentService::new(JsonFileStore::<Appointment>::open(&path));
    /// let input = AppointmentInput {
    ///     name: Some("Ana".into()),
    ///     service: Some("corte".into()),
    ///     date: Some("2024-05-01".into()),
    ///     time: Some("14:30".into()),
    ///     ..Default::default()
    /// };
    /// let created = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert_eq!(created.id, 1);
    /// assert_eq!(created.phone, "");
    /// ```
    #[instrument(skip(self, input), fields(service = ?input.service, date = ?input.date))]
    pub async fn create(&self, input: AppointmentInput) -> Result<Appointment, ServiceError> {
        let name = required_text(input.name, "name")?;
        let service = required_text(input.service, "service")?;
        let date = parse_date(&required_text(input.date, "date")?)?;
        let time = non_blank(input.time).map(|t| parse_time(&t)).transpose()?;

        let draft = NewAppointment {
            name,
            age: nonzero_int(input.age.as_ref()),
            phone: non_blank(input.phone).unwrap_or_default(),
            service,
            data_agendamento: Some(date),
            hora: time,
            observacoes: non_blank(input.observacoes),
            usuario_id: nonzero_int(input.usuario_id.as_ref()),
        };
        let created = self.appointments.create(draft).await?;
        info!(appointment_id = created.id, usuario_id = ?created.usuario_id, "appointment_created");
        Ok(created)
    }

    /// All appointments, or only those of `owner`, by date then time.
    pub async fn list(&self, owner: Option<i32>) -> Result<Vec<Appointment>, ServiceError> {
        let filter = owner.map(OwnerFilter);
        self.appointments.list(filter.as_ref()).await
    }

    /// Remove an appointment. Deleting an unknown id succeeds.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let existed = self.appointments.delete(id).await?;
        info!(appointment_id = id, existed, "appointment_deleted");
        Ok(())
    }
}
