use thiserror::Error;

/// Main authentication error type
#[derive(Debug, Error)]
pub enum AuthError {
  /// Unknown identity or wrong password. One variant on purpose: callers
  /// cannot tell which, so account enumeration is not possible.
  #[error("Wrong credentials.")]
  CredentialMismatch,

  /// The identity's uniqueness constraint collided. Recoverable; the user
  /// can pick another identity and resubmit.
  #[error("Username already taken.")]
  DuplicateIdentity,

  #[error("Invalid or expired session")]
  InvalidSession,

  /// A session row could not be destroyed on logout.
  #[error("Failed to destroy session: {0}")]
  SessionDestroy(String),

  #[error("{0}")]
  Validation(#[from] ValidationError),

  #[error("Storage error: {0}")]
  Storage(#[from] RepositoryError),

  #[error("Hash error: {0}")]
  Hash(#[from] HashError),
}

/// Repository-related errors
#[derive(Debug, Error)]
pub enum RepositoryError {
  #[error("Database connection failed: {0}")]
  ConnectionFailed(String),

  #[error("Query execution failed: {0}")]
  QueryFailed(String),

  #[error("Record not found")]
  NotFound,

  #[error("Duplicate key violation: {0}")]
  DuplicateKey(String),

  #[error("Database error: {0}")]
  DatabaseError(String),
}

/// Password hashing and verification errors
#[derive(Debug, Error)]
pub enum HashError {
  #[error("Failed to hash password: {0}")]
  HashingFailed(String),

  #[error("Failed to verify password: {0}")]
  VerificationFailed(String),

  #[error("Invalid hash format")]
  InvalidFormat,
}

/// Credential-policy violations, reported inline in the originating form.
/// Message text is the user-facing copy.
#[derive(Debug, Error)]
pub enum ValidationError {
  #[error("Please provide your email.")]
  MissingEmail,

  #[error("Please provide your username.")]
  MissingUsername,

  #[error("Please provide a valid email.")]
  InvalidEmail(String),

  #[error("Your password needs to be at least 8 characters long.")]
  PasswordTooShort,

  #[error(
    "Password needs to have at least 8 chars and must contain at least one number, one lowercase and one uppercase letter."
  )]
  PasswordComposition,

  #[error("Please choose a valid account type.")]
  InvalidUserType,
}

// Automatic conversions from external error types

impl From<sqlx::Error> for RepositoryError {
  fn from(error: sqlx::Error) -> Self {
    match error {
      sqlx::Error::RowNotFound => RepositoryError::NotFound,
      sqlx::Error::Database(db_err) => {
        if db_err.is_unique_violation() {
          RepositoryError::DuplicateKey(db_err.message().to_string())
        } else {
          RepositoryError::DatabaseError(db_err.message().to_string())
        }
      }
      sqlx::Error::PoolTimedOut => RepositoryError::ConnectionFailed("Pool timed out".to_string()),
      sqlx::Error::PoolClosed => RepositoryError::ConnectionFailed("Pool closed".to_string()),
      _ => RepositoryError::QueryFailed(error.to_string()),
    }
  }
}

impl From<sqlx::Error> for AuthError {
  fn from(error: sqlx::Error) -> Self {
    AuthError::Storage(RepositoryError::from(error))
  }
}
