use chrono::Duration;
use std::sync::Arc;

use super::entities::{Account, CurrentAccount, Session};
use super::errors::{AuthError, RepositoryError};
use super::ports::{AccountRepository, PasswordHasher, SessionRepository};
use super::value_objects::{AccountIdentity, Password, PasswordHash, SessionToken, UserType};

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
  /// Lifetime of a session, in seconds
  pub session_ttl_seconds: i64,
}

impl Default for AuthServiceConfig {
  fn default() -> Self {
    Self {
      session_ttl_seconds: 24 * 60 * 60,
    }
  }
}

/// Validated input for creating an account. Callers resolve the identity and
/// run the password policy before this struct can exist.
#[derive(Debug)]
pub struct NewAccount {
  pub identity: AccountIdentity,
  pub display_name: String,
  pub email: Option<String>,
  pub user_type: Option<UserType>,
  pub password: Password,
}

/// Authentication service implementing signup, login, logout and session
/// validation. This is the only component that moves a request between the
/// Anonymous and Authenticated states.
pub struct AuthService {
  accounts: Arc<dyn AccountRepository>,
  sessions: Arc<dyn SessionRepository>,
  password_hasher: Arc<dyn PasswordHasher>,
  config: AuthServiceConfig,
}

impl AuthService {
  pub fn new(
    accounts: Arc<dyn AccountRepository>,
    sessions: Arc<dyn SessionRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    config: AuthServiceConfig,
  ) -> Self {
    Self {
      accounts,
      sessions,
      password_hasher,
      config,
    }
  }

  /// Session lifetime applied to every new session. The cookie layer reads
  /// this too, so the cookie and the stored expiry cannot drift apart.
  pub fn session_ttl_seconds(&self) -> i64 {
    self.config.session_ttl_seconds
  }

  /// Creates an account and opens a session for it.
  ///
  /// The steps are strictly sequential: pre-check uniqueness, hash, persist,
  /// open session. The pre-check is an optimization only; two concurrent
  /// signups with the same identity can both pass it, and the loser of the
  /// race surfaces `DuplicateIdentity` from the storage constraint.
  ///
  /// # Errors
  /// Returns `AuthError::DuplicateIdentity` if the identity is taken.
  pub async fn sign_up(&self, new: NewAccount) -> Result<(Account, SessionToken), AuthError> {
    if self
      .accounts
      .find_by_identity(&new.identity)
      .await?
      .is_some()
    {
      return Err(AuthError::DuplicateIdentity);
    }

    let password_hash = self.password_hasher.hash(&new.password).await?;

    let account = Account::new(
      new.identity,
      new.display_name,
      new.email,
      new.user_type,
      password_hash,
    );

    let created = match self.accounts.create(account).await {
      Ok(account) => account,
      Err(AuthError::Storage(RepositoryError::DuplicateKey(_))) => {
        return Err(AuthError::DuplicateIdentity);
      }
      Err(e) => return Err(e),
    };

    tracing::info!(account_id = %created.id, role = %created.role, "account created");

    let token = self.open_session(&created).await?;
    Ok((created, token))
  }

  /// Verifies credentials and opens a session.
  ///
  /// # Errors
  /// Returns `AuthError::CredentialMismatch` for an unknown identity and for
  /// a wrong password alike; the two are deliberately indistinguishable.
  pub async fn log_in(
    &self,
    identity: AccountIdentity,
    password: Password,
  ) -> Result<(Account, SessionToken), AuthError> {
    let account = self
      .accounts
      .find_by_identity(&identity)
      .await?
      .ok_or(AuthError::CredentialMismatch)?;

    let stored = PasswordHash::from_hash(account.password_hash.clone());
    let is_match = self.password_hasher.verify(&password, &stored).await?;
    if !is_match {
      return Err(AuthError::CredentialMismatch);
    }

    tracing::info!(account_id = %account.id, role = %account.role, "login successful");

    let token = self.open_session(&account).await?;
    Ok((account, token))
  }

  /// Destroys the session behind `token`.
  ///
  /// # Errors
  /// Returns `AuthError::InvalidSession` if no such session exists and
  /// `AuthError::SessionDestroy` if the store fails to delete it.
  pub async fn log_out(&self, token: SessionToken) -> Result<(), AuthError> {
    let token_hash = token.hash();

    let session = self
      .sessions
      .find_by_token_hash(token_hash.as_str())
      .await?
      .ok_or(AuthError::InvalidSession)?;

    self
      .sessions
      .delete(session.id)
      .await
      .map_err(|e| AuthError::SessionDestroy(e.to_string()))?;

    tracing::info!(account_id = %session.account_id, "session destroyed");
    Ok(())
  }

  /// Resolves a session token to the authenticated account's minimal
  /// projection. Expired sessions are reaped and rejected.
  ///
  /// # Errors
  /// Returns `AuthError::InvalidSession` for unknown or expired tokens.
  pub async fn validate_session(&self, token: SessionToken) -> Result<CurrentAccount, AuthError> {
    let token_hash = token.hash();

    let session = self
      .sessions
      .find_by_token_hash(token_hash.as_str())
      .await?
      .ok_or(AuthError::InvalidSession)?;

    if session.is_expired() {
      self.sessions.delete(session.id).await?;
      return Err(AuthError::InvalidSession);
    }

    let account = self
      .accounts
      .find_by_id(session.account_id)
      .await?
      .ok_or(AuthError::InvalidSession)?;

    Ok(CurrentAccount::from(&account))
  }

  async fn open_session(&self, account: &Account) -> Result<SessionToken, AuthError> {
    let token = SessionToken::generate();
    let session = Session::with_duration(
      account.id,
      token.hash(),
      Duration::seconds(self.config.session_ttl_seconds),
    );
    self.sessions.create(session).await?;
    Ok(token)
  }
}
