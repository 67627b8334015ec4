use async_trait::async_trait;
use uuid::Uuid;

use super::entities::{Account, Session};
use super::errors::AuthError;
use super::value_objects::{AccountIdentity, Password, PasswordHash};

/// Repository trait for account persistence operations
#[async_trait]
pub trait AccountRepository: Send + Sync {
  /// Creates a new account. A `(role, identity)` collision surfaces as a
  /// duplicate-key repository error; the unique constraint, not the caller's
  /// pre-check, is the correctness mechanism.
  async fn create(&self, account: Account) -> Result<Account, AuthError>;

  /// Finds an account by its unique identifier
  async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, AuthError>;

  /// Finds an account by its role-scoped natural key
  async fn find_by_identity(&self, identity: &AccountIdentity)
  -> Result<Option<Account>, AuthError>;
}

/// Repository trait for session persistence operations
#[async_trait]
pub trait SessionRepository: Send + Sync {
  /// Creates a new session in the repository
  async fn create(&self, session: Session) -> Result<Session, AuthError>;

  /// Finds a session by its token hash
  async fn find_by_token_hash(&self, token_hash: &str) -> Result<Option<Session>, AuthError>;

  /// Deletes a session. Deleting an already-absent session is not an error;
  /// the caller observes either a live session or no session, never a
  /// half-destroyed one.
  async fn delete(&self, session_id: Uuid) -> Result<(), AuthError>;
}

/// Service trait for password hashing operations
#[async_trait]
pub trait PasswordHasher: Send + Sync {
  /// Hashes a plain text password with a fresh random salt
  async fn hash(&self, password: &Password) -> Result<PasswordHash, AuthError>;

  /// Verifies a plain text password against a hashed password. Callers check
  /// account existence first; this is never used as an existence probe.
  async fn verify(&self, password: &Password, hash: &PasswordHash) -> Result<bool, AuthError>;
}
