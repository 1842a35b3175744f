use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::serde_ext::{lenient_opt_date, null_as_default};
use crate::storage::Record;

/// Profile registration input (`nascimento` as `YYYY-MM-DD`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileInput {
    pub nome: Option<String>,
    pub telefone: Option<String>,
    pub nascimento: Option<String>,
    pub senha: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileLoginInput {
    pub nome: Option<String>,
    #[serde(alias = "password")]
    pub senha: Option<String>,
}

/// Simplified customer profile, stored apart from [`crate::auth::domain::User`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredProfile")]
pub struct Profile {
    pub id: i32,
    pub nome: String,
    pub telefone: String,
    pub nascimento: Option<NaiveDate>,
    pub senha: String,
    pub created_at: DateTime<Utc>,
}

/// On-disk shape. Older files carry the hash under `password`.
#[derive(Deserialize)]
struct StoredProfile {
    id: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    nome: String,
    #[serde(default, deserialize_with = "null_as_default")]
    telefone: String,
    #[serde(default, deserialize_with = "lenient_opt_date")]
    nascimento: Option<NaiveDate>,
    #[serde(default)]
    senha: Option<String>,
    #[serde(default)]
    password: Option<String>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
}

impl From<StoredProfile> for Profile {
    fn from(s: StoredProfile) -> Self {
        let senha = [s.senha, s.password]
            .into_iter()
            .flatten()
            .find(|h| !h.is_empty())
            .unwrap_or_default();
        Self {
            id: s.id,
            nome: s.nome,
            telefone: s.telefone,
            nascimento: s.nascimento,
            senha,
            created_at: s.created_at.unwrap_or_default(),
        }
    }
}

/// Public view returned by profile lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileView {
    pub id: i32,
    pub nome: String,
    pub telefone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nascimento: Option<NaiveDate>,
}

#[derive(Debug, Clone)]
pub struct NewProfile {
    pub nome: String,
    pub telefone: String,
    pub nascimento: NaiveDate,
    pub senha: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileFilter {
    pub nome: String,
}

impl Record for Profile {
    type Draft = NewProfile;
    type Filter = ProfileFilter;
    const FILE_NAME: &'static str = "usuarios.json";
    const ENTITY: &'static str = "profile";

    fn id(&self) -> i32 { self.id }

    fn from_draft(id: i32, d: NewProfile) -> Self {
        Self { id, nome: d.nome, telefone: d.telefone, nascimento: Some(d.nascimento), senha: d.senha, created_at: d.created_at }
    }

    fn matches(&self, filter: &ProfileFilter) -> bool { self.nome == filter.nome }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_password_key_is_read() -> Result<(), serde_json::Error> {
        let p: Profile = serde_json::from_str(
            r#"{"id": 1, "nome": "Ana", "telefone": "11", "nascimento": "1990-02-03", "password": "$argon2id$x"}"#,
        )?;
        assert_eq!(p.senha, "$argon2id$x");
        assert_eq!(p.created_at, DateTime::<Utc>::default());

        let p: Profile = serde_json::from_str(
            r#"{"id": 2, "nome": "Bia", "telefone": null, "nascimento": "1990-02-03", "senha": "", "password": "h2"}"#,
        )?;
        assert_eq!(p.senha, "h2");
        assert_eq!(p.telefone, "");
        Ok(())
    }

    #[test]
    fn unreadable_birth_date_is_dropped() -> Result<(), serde_json::Error> {
        let p: Profile = serde_json::from_str(r#"{"id": 4, "nome": "Caio", "nascimento": "03/02/1990", "senha": "h"}"#)?;
        assert_eq!(p.nascimento, None);
        assert_eq!(p.nome, "Caio");
        Ok(())
    }

    #[test]
    fn written_with_senha_key() -> Result<(), serde_json::Error> {
        let p = Profile::from_draft(
            3,
            NewProfile {
                nome: "Ana".into(),
                telefone: "11".into(),
                nascimento: NaiveDate::from_ymd_opt(1990, 2, 3).unwrap(),
                senha: "h".into(),
                created_at: Utc::now(),
            },
        );
        let json = serde_json::to_value(&p)?;
        assert_eq!(json["senha"], "h");
        assert_eq!(json["nascimento"], "1990-02-03");
        assert!(json.get("password").is_none());
        Ok(())
    }
}
