use std::cmp::Ordering;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::serde_ext::{lenient_opt_date, lenient_opt_i32, null_as_default, opt_time};
use crate::storage::Record;

/// Booking form as submitted. Numbers may arrive as strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppointmentInput {
    pub name: Option<String>,
    pub age: Option<Value>,
    pub phone: Option<String>,
    pub service: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    #[serde(alias = "notes")]
    pub observacoes: Option<String>,
    pub usuario_id: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_opt_i32")]
    pub age: Option<i32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub service: String,
    #[serde(default, deserialize_with = "lenient_opt_date")]
    pub data_agendamento: Option<NaiveDate>,
    #[serde(default, with = "opt_time")]
    pub hora: Option<NaiveTime>,
    #[serde(default)]
    pub observacoes: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_i32")]
    pub usuario_id: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub name: String,
    pub age: Option<i32>,
    pub phone: String,
    pub service: String,
    pub data_agendamento: Option<NaiveDate>,
    pub hora: Option<NaiveTime>,
    pub observacoes: Option<String>,
    pub usuario_id: Option<i32>,
}

/// Appointments belonging to one user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnerFilter(pub i32);

impl Record for Appointment {
    type Draft = NewAppointment;
    type Filter = OwnerFilter;
    const FILE_NAME: &'static str = "agendamentos.json";
    const ENTITY: &'static str = "appointment";

    fn id(&self) -> i32 { self.id }

    fn from_draft(id: i32, d: NewAppointment) -> Self {
        Self {
            id,
            name: d.name,
            age: d.age,
            phone: d.phone,
            service: d.service,
            data_agendamento: d.data_agendamento,
            hora: d.hora,
            observacoes: d.observacoes,
            usuario_id: d.usuario_id,
        }
    }

    fn matches(&self, filter: &OwnerFilter) -> bool { self.usuario_id == Some(filter.0) }

    // Undated and untimed entries come first (None < Some).
    fn order(a: &Self, b: &Self) -> Ordering {
        a.data_agendamento
            .cmp(&b.data_agendamento)
            .then(a.hora.cmp(&b.hora))
            .then(a.id.cmp(&b.id))
    }
}
