use crate::appointment::AppointmentService;
use crate::auth::{AuthService, PasswordHasher};
use crate::loyalty::LoyaltyService;
use crate::profile::ProfileService;
use crate::review::ReviewService;
use crate::storage::{Storage, StorageMode};

/// Every service wired to one storage backend; shared by the HTTP layer.
pub struct AppServices {
    pub mode: StorageMode,
    pub auth: AuthService,
    pub profiles: ProfileService,
    pub appointments: AppointmentService,
    pub reviews: ReviewService,
    pub loyalty: LoyaltyService,
}

impl AppServices {
    pub fn new(storage: &Storage, hasher: PasswordHasher) -> Self {
        Self {
            mode: storage.mode,
            auth: AuthService::new(storage.users.clone(), hasher.clone()),
            profiles: ProfileService::new(storage.profiles.clone(), hasher),
            appointments: AppointmentService::new(storage.appointments.clone()),
            reviews: ReviewService::new(storage.reviews.clone()),
            loyalty: LoyaltyService::new(storage.loyalty.clone(), storage.users.clone(), storage.legacy_users.clone()),
        }
    }
}
