use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use super::domain::{AccountOwner, AdjustInput, LoyaltyAccount, LoyaltyStatus, NewLoyaltyAccount};
use crate::auth::domain::{User, UserFilter};
use crate::coerce::{int_or_zero, non_blank, nonzero_int, normalize_email};
use crate::errors::ServiceError;
use crate::storage::RecordStore;

/// Loyalty points per user.
pub struct LoyaltyService {
    accounts: Arc<dyn RecordStore<LoyaltyAccount>>,
    users: Arc<dyn RecordStore<User>>,
    fallback_users: Option<Arc<dyn RecordStore<User>>>,
}

impl LoyaltyService {
    /// `fallback_users` is searched by email when `users` has no match.
    pub fn new(
        accounts: Arc<dyn RecordStore<LoyaltyAccount>>,
        users: Arc<dyn RecordStore<User>>,
        fallback_users: Option<Arc<dyn RecordStore<User>>>,
    ) -> Self {
        Self { accounts, users, fallback_users }
    }

    /// Add points to a user's account, opening it on first use.
    ///
    /// A cancelled account still accrues points and stays cancelled.
    #[instrument(skip(self, input), fields(usuario_id = ?input.usuario_id, email = ?input.email))]
    pub async fn adjust(&self, input: AdjustInput) -> Result<LoyaltyAccount, ServiceError> {
        let direct_id = nonzero_int(input.usuario_id.as_ref());
        let email = non_blank(input.email).map(|e| normalize_email(&e));
        let points = int_or_zero(input.points.as_ref());

        let user_id = match (direct_id, email) {
            (Some(id), _) => id,
            (None, Some(email)) => self.resolve_email(&email).await?,
            (None, None) => return Err(ServiceError::Validation("usuario_id or email is required".into())),
        };

        let existing = self.accounts.list(Some(&AccountOwner(user_id))).await?.into_iter().next();
        let account = match existing {
            Some(mut account) => {
                account.pontos = account
                    .pontos
                    .checked_add(points)
                    .ok_or_else(|| ServiceError::Validation("points balance out of range".into()))?;
                self.accounts.update(account).await?
            }
            None => {
                self.accounts
                    .create(NewLoyaltyAccount { usuario_id: user_id, pontos: points, status: LoyaltyStatus::Active })
                    .await?
            }
        };
        info!(usuario_id = user_id, points, balance = account.pontos, "loyalty_adjusted");
        Ok(account)
    }

    /// Cancel every account of `user_id`. No account is not an error.
    #[instrument(skip(self))]
    pub async fn cancel(&self, user_id: i32) -> Result<(), ServiceError> {
        let accounts = self.accounts.list(Some(&AccountOwner(user_id))).await?;
        if accounts.is_empty() {
            debug!("no loyalty account to cancel");
        }
        for mut account in accounts.into_iter().filter(|a| a.status == LoyaltyStatus::Active) {
            account.status = LoyaltyStatus::Cancelled;
            self.accounts.update(account).await?;
        }
        info!(usuario_id = user_id, "loyalty_cancelled");
        Ok(())
    }

    async fn resolve_email(&self, email: &str) -> Result<i32, ServiceError> {
        let filter = UserFilter::Email(email.to_string());
        if let Some(user) = self.users.list(Some(&filter)).await?.into_iter().next() {
            return Ok(user.id);
        }
        if let Some(fallback) = &self.fallback_users {
            match fallback.list(Some(&filter)).await {
                Ok(found) => {
                    if let Some(user) = found.into_iter().next() {
                        debug!(user_id = user.id, "email resolved from user file");
                        return Ok(user.id);
                    }
                }
                Err(e) => warn!(error = %e, "secondary user lookup failed"),
            }
        }
        Err(ServiceError::not_found("user"))
    }
}
