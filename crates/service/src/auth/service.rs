use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::domain::{LoginInput, NewUser, SignupInput, User, UserFilter};
use super::password::PasswordHasher;
use crate::coerce::{non_blank, normalize_email, required_text};
use crate::errors::ServiceError;
use crate::storage::RecordStore;

/// Email/password accounts, independent of the storage backend.
pub struct AuthService {
    users: Arc<dyn RecordStore<User>>,
    hasher: PasswordHasher,
}

impl AuthService {
    pub fn new(users: Arc<dyn RecordStore<User>>, hasher: PasswordHasher) -> Self { Self { users, hasher } }

    /// Register a user with a hashed password and return its id.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{AuthService, PasswordHasher, domain::{SignupInput, User}};
    /// use service::storage::JsonFileStore;
    /// let path = std::env::temp_dir().join(format!("users_{}.json", uuid::Uuid::new_v4()));
    /// let svc = AuthService::new(JsonFileStore::<User>::open(&path), PasswordHasher::with_cost(8, 1, 1).unwrap());
    /// let input = SignupInput { name: Some("Ana".into()), email: Some("ana@example.com".into()), password: Some("s3cret".into()), phone: None };
    /// let id = tokio_test::block_on(svc.signup(input)).unwrap();
    /// assert_eq!(id, 1);
    /// ```
    #[instrument(skip(self, input), fields(email = ?input.email))]
    pub async fn signup(&self, input: SignupInput) -> Result<i32, ServiceError> {
        let name = required_text(input.name, "name")?;
        let email = normalize_email(&required_text(input.email, "email")?);
        let password = required_text(input.password, "password")?;

        let existing = self.users.list(Some(&UserFilter::Email(email.clone()))).await?;
        if !existing.is_empty() {
            debug!("email already registered");
            return Err(email_taken());
        }

        let hash = self.hasher.hash(&password)?;
        let draft = NewUser { name, email: Some(email), password: hash, phone: non_blank(input.phone) };
        let user = self.users.create(draft).await.map_err(|e| match e {
            ServiceError::Conflict(_) => email_taken(),
            other => other,
        })?;
        info!(user_id = user.id, "user_registered");
        Ok(user.id)
    }

    /// Check credentials and return the user id.
    #[instrument(skip(self, input), fields(email = ?input.email))]
    pub async fn login(&self, input: LoginInput) -> Result<i32, ServiceError> {
        let email = normalize_email(&required_text(input.email, "email")?);
        let password = required_text(input.password, "password")?;

        let user = self
            .users
            .list(Some(&UserFilter::Email(email)))
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| ServiceError::not_found("user"))?;

        if !self.hasher.verify(&password, &user.password) {
            return Err(ServiceError::Unauthorized);
        }
        info!(user_id = user.id, "user_logged_in");
        Ok(user.id)
    }
}

fn email_taken() -> ServiceError { ServiceError::Conflict("email may already be registered".into()) }
