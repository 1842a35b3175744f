use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::serde_ext::lenient_i32;
use crate::storage::Record;

/// Points adjustment. The user is identified by id or by email.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdjustInput {
    pub usuario_id: Option<Value>,
    pub email: Option<String>,
    pub points: Option<Value>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoyaltyStatus {
    #[default]
    #[serde(rename = "ativo", alias = "active")]
    Active,
    #[serde(rename = "cancelado", alias = "cancelled")]
    Cancelled,
}

impl LoyaltyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoyaltyStatus::Active => models::fidelidade::STATUS_ACTIVE,
            LoyaltyStatus::Cancelled => models::fidelidade::STATUS_CANCELLED,
        }
    }

    /// Unknown stored values read as active.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "cancelado" | "cancelled" => LoyaltyStatus::Cancelled,
            _ => LoyaltyStatus::Active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoyaltyAccount {
    pub id: i32,
    #[serde(default, deserialize_with = "lenient_i32")]
    pub usuario_id: i32,
    #[serde(default, deserialize_with = "lenient_i32")]
    pub pontos: i32,
    #[serde(default)]
    pub status: LoyaltyStatus,
}

#[derive(Debug, Clone)]
pub struct NewLoyaltyAccount {
    pub usuario_id: i32,
    pub pontos: i32,
    pub status: LoyaltyStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountOwner(pub i32);

impl Record for LoyaltyAccount {
    type Draft = NewLoyaltyAccount;
    type Filter = AccountOwner;
    const FILE_NAME: &'static str = "fidelidades.json";
    const ENTITY: &'static str = "loyalty account";

    fn id(&self) -> i32 { self.id }

    fn from_draft(id: i32, d: NewLoyaltyAccount) -> Self {
        Self { id, usuario_id: d.usuario_id, pontos: d.pontos, status: d.status }
    }

    fn matches(&self, filter: &AccountOwner) -> bool { self.usuario_id == filter.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_stored_words() -> Result<(), serde_json::Error> {
        let a: LoyaltyAccount = serde_json::from_str(r#"{"id": 1, "usuario_id": "3", "pontos": 10, "status": "cancelled"}"#)?;
        assert_eq!(a.status, LoyaltyStatus::Cancelled);
        assert_eq!(a.usuario_id, 3);
        assert_eq!(serde_json::to_value(&a)?["status"], "cancelado");
        assert_eq!(LoyaltyStatus::parse("ativo"), LoyaltyStatus::Active);
        Ok(())
    }
}
