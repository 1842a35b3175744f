use serde::{Deserialize, Serialize};

use crate::coerce::normalize_email;
use crate::storage::Record;

/// Signup input
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignupInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone: Option<String>,
}

/// Login input; `senha` is accepted for the password.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginInput {
    pub email: Option<String>,
    #[serde(alias = "senha")]
    pub password: Option<String>,
}

/// Registered customer. `password` is the PHC-encoded hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// User fields before an id is assigned.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: Option<String>,
    pub password: String,
    pub phone: Option<String>,
}

/// Lookup by email. Rows written before emails were normalised still match
/// regardless of case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserFilter {
    Email(String),
}

impl Record for User {
    type Draft = NewUser;
    type Filter = UserFilter;
    const FILE_NAME: &'static str = "users.json";
    const ENTITY: &'static str = "user";

    fn id(&self) -> i32 { self.id }

    fn from_draft(id: i32, d: NewUser) -> Self {
        Self { id, name: d.name, email: d.email, password: d.password, phone: d.phone }
    }

    fn matches(&self, filter: &UserFilter) -> bool {
        match filter {
            UserFilter::Email(email) => self.email.as_deref().map(normalize_email).as_deref() == Some(email.as_str()),
        }
    }

    fn conflicts_with(&self, draft: &NewUser) -> bool {
        match (&self.email, &draft.email) {
            (Some(mine), Some(theirs)) => normalize_email(mine) == normalize_email(theirs),
            _ => false,
        }
    }
}
