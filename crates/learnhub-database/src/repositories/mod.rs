//! Credential store trait and its implementations.

pub mod memory;
pub mod user;

use async_trait::async_trait;
use uuid::Uuid;

use learnhub_core::result::AppResult;
use learnhub_entity::user::{CreateUser, User, UserRole};

pub use memory::MemoryUserStore;
pub use user::UserRepository;

/// Persistence for user records.
///
/// Implementations must make [`UserStore::create`] atomic with respect to
/// the `(email, role)` uniqueness rule: of two concurrent creates for the
/// same pair, exactly one succeeds and the other fails with
/// `ErrorKind::Conflict`.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug + 'static {
    /// Point lookup by the `(email, role)` pair.
    async fn find_by_email_and_role(&self, email: &str, role: UserRole)
    -> AppResult<Option<User>>;

    /// Point lookup by identifier.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Insert a new user, failing with a conflict if the pair is taken.
    async fn create(&self, data: CreateUser) -> AppResult<User>;
}

/// Message used for every duplicate `(email, role)` rejection.
pub const DUPLICATE_ACCOUNT_MESSAGE: &str = "Email already registered for this role";
