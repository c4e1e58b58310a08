use anyhow::anyhow;
use gradebook_core::{AppError, hash_password};
use gradebook_db::{StoreError, UserStore};
use gradebook_models::{CreateUserDto, User};
use tracing::{info, instrument};

pub const USERNAME_TAKEN: &str = "Username already registered";

pub struct UserService;

impl UserService {
    /// Registers a user with a freshly hashed password.
    ///
    /// The existence check up front skips the bcrypt work for obvious
    /// duplicates. The store still enforces uniqueness if two registrations
    /// for the same name race past it.
    #[instrument(skip_all, fields(username = %dto.username, role = %dto.role))]
    pub async fn create_user(users: &dyn UserStore, dto: CreateUserDto) -> Result<User, AppError> {
        let existing = users
            .find_by_username(&dto.username)
            .await
            .map_err(AppError::database)?;

        if existing.is_some() {
            return Err(AppError::bad_request(anyhow!(USERNAME_TAKEN)));
        }

        let hashed_password = hash_password(&dto.password)?;

        let user = users
            .create(&dto.username, &hashed_password, dto.role)
            .await
            .map_err(|e| match e {
                StoreError::DuplicateUsername(_) => AppError::bad_request(anyhow!(USERNAME_TAKEN)),
                other => AppError::database(other),
            })?;

        info!(user_id = user.id, "User created");
        Ok(user)
    }
}
