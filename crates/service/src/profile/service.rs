use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument};

use super::domain::{NewProfile, Profile, ProfileFilter, ProfileInput, ProfileLoginInput, ProfileView};
use crate::auth::PasswordHasher;
use crate::coerce::{parse_date, required_text};
use crate::errors::ServiceError;
use crate::storage::RecordStore;

/// Name-based registration used by the simplified signup page.
pub struct ProfileService {
    profiles: Arc<dyn RecordStore<Profile>>,
    hasher: PasswordHasher,
}

impl ProfileService {
    pub fn new(profiles: Arc<dyn RecordStore<Profile>>, hasher: PasswordHasher) -> Self { Self { profiles, hasher } }

    /// Returns the new profile's id and name.
    #[instrument(skip(self, input), fields(nome = ?input.nome))]
    pub async fn create_profile(&self, input: ProfileInput) -> Result<(i32, String), ServiceError> {
        let nome = required_text(input.nome, "nome")?;
        let telefone = required_text(input.telefone, "telefone")?;
        let nascimento = parse_date(&required_text(input.nascimento, "nascimento")?)?;
        let senha = required_text(input.senha, "senha")?;

        let draft = NewProfile { nome, telefone, nascimento, senha: self.hasher.hash(&senha)?, created_at: Utc::now() };
        let profile = self.profiles.create(draft).await?;
        info!(profile_id = profile.id, "profile_created");
        Ok((profile.id, profile.nome))
    }

    pub async fn get_profile(&self, id: i32) -> Result<ProfileView, ServiceError> {
        let p = self.profiles.get(id).await?.ok_or_else(|| ServiceError::not_found("profile"))?;
        Ok(ProfileView { id: p.id, nome: p.nome, telefone: p.telefone, nascimento: p.nascimento })
    }

    #[instrument(skip(self, input), fields(nome = ?input.nome))]
    pub async fn login_by_name(&self, input: ProfileLoginInput) -> Result<ProfileView, ServiceError> {
        let nome = required_text(input.nome, "nome")?;
        let senha = required_text(input.senha, "senha")?;

        let profile = self
            .profiles
            .list(Some(&ProfileFilter { nome }))
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| ServiceError::not_found("profile"))?;
        if !self.hasher.verify(&senha, &profile.senha) {
            return Err(ServiceError::Unauthorized);
        }
        Ok(ProfileView { id: profile.id, nome: profile.nome, telefone: profile.telefone, nascimento: None })
    }
}
