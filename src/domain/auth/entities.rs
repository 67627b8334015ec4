use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value_objects::{AccountIdentity, AccountRole, PasswordHash, TokenHash, UserType};

/// Account entity: a persisted identity with role-specific fields and a
/// hashed password. Identity is immutable after creation; there is no
/// delete flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
  /// Unique identifier for the account
  pub id: Uuid,
  /// Role the account was created under
  pub role: AccountRole,
  /// The role's natural key (email or username), unique within the role
  pub identity: String,
  /// Name shown in views
  pub display_name: String,
  /// Contact email, where it is not already the identity
  pub email: Option<String>,
  /// Generic-user sub-role, present only for `AccountRole::User`
  pub user_type: Option<UserType>,
  /// Hashed password using Argon2; the plaintext is never stored
  pub password_hash: String,
  /// Timestamp when the account was created
  pub created_at: DateTime<Utc>,
  /// Timestamp when the account was last updated
  pub updated_at: DateTime<Utc>,
}

impl Account {
  /// Creates a new account from a resolved identity and a hashed password.
  pub fn new(
    identity: AccountIdentity,
    display_name: String,
    email: Option<String>,
    user_type: Option<UserType>,
    password_hash: PasswordHash,
  ) -> Self {
    let now = Utc::now();
    Self {
      id: Uuid::new_v4(),
      role: identity.role(),
      identity: identity.into_key(),
      display_name,
      email,
      user_type,
      password_hash: password_hash.into_inner(),
      created_at: now,
      updated_at: now,
    }
  }

  /// Creates an account from database fields (for reconstruction)
  #[allow(clippy::too_many_arguments)]
  pub fn from_db(
    id: Uuid,
    role: AccountRole,
    identity: String,
    display_name: String,
    email: Option<String>,
    user_type: Option<UserType>,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
  ) -> Self {
    Self {
      id,
      role,
      identity,
      display_name,
      email,
      user_type,
      password_hash,
      created_at,
      updated_at,
    }
  }
}

/// Minimal non-sensitive projection of an authenticated account, attached to
/// the request by the logged-in gate. Holds just enough to identify the
/// account and pick views; notably no password hash and no contact fields.
#[derive(Debug, Clone, Serialize)]
pub struct CurrentAccount {
  pub id: Uuid,
  pub role: AccountRole,
  pub display_name: String,
  pub user_type: Option<UserType>,
}

impl From<&Account> for CurrentAccount {
  fn from(account: &Account) -> Self {
    Self {
      id: account.id,
      role: account.role,
      display_name: account.display_name.clone(),
      user_type: account.user_type,
    }
  }
}

impl CurrentAccount {
  /// Path of this account's home view.
  pub fn home_path(&self) -> &'static str {
    self.role.home_path()
  }
}

/// Session entity: the server-side record of an authenticated account for
/// one client, keyed by the hash of the cookie-carried token. Exists only
/// after a successful credential check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
  /// Unique identifier for the session
  pub id: Uuid,
  /// The authenticated account
  pub account_id: Uuid,
  /// SHA-256 hash of the client's session token
  pub token_hash: String,
  /// Timestamp when the session expires
  pub expires_at: DateTime<Utc>,
  /// Timestamp when the session was created
  pub created_at: DateTime<Utc>,
}

impl Session {
  /// Creates a session lasting `duration` from now.
  pub fn with_duration(account_id: Uuid, token_hash: TokenHash, duration: Duration) -> Self {
    let now = Utc::now();
    Self {
      id: Uuid::new_v4(),
      account_id,
      token_hash: token_hash.into_inner(),
      expires_at: now + duration,
      created_at: now,
    }
  }

  /// Creates a session from database fields (for reconstruction)
  pub fn from_db(
    id: Uuid,
    account_id: Uuid,
    token_hash: String,
    expires_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
  ) -> Self {
    Self {
      id,
      account_id,
      token_hash,
      expires_at,
      created_at,
    }
  }

  /// Checks if the session has expired
  pub fn is_expired(&self) -> bool {
    self.expires_at <= Utc::now()
  }
}
