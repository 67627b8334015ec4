//! In-memory port implementations shared by service and middleware tests.

use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use uuid::Uuid;

use super::entities::{Account, Session};
use super::errors::{AuthError, RepositoryError};
use super::ports::{AccountRepository, PasswordHasher, SessionRepository};
use super::value_objects::{AccountIdentity, Password, PasswordHash};

/// Account store backed by a `Vec` behind a mutex, with `(role, identity)`
/// uniqueness enforced the way the database constraint would.
#[derive(Default)]
pub struct InMemoryAccounts {
  accounts: Mutex<Vec<Account>>,
  fail_next_create: AtomicBool,
}

impl InMemoryAccounts {
  /// Makes the next `create` fail with a duplicate-key error regardless of
  /// contents, simulating the loser of a concurrent-signup race.
  pub fn fail_next_create_with_duplicate(&self) {
    self.fail_next_create.store(true, Ordering::SeqCst);
  }
}

#[async_trait]
impl AccountRepository for InMemoryAccounts {
  async fn create(&self, account: Account) -> Result<Account, AuthError> {
    if self.fail_next_create.swap(false, Ordering::SeqCst) {
      return Err(AuthError::Storage(RepositoryError::DuplicateKey(
        "accounts_role_identity_key".to_string(),
      )));
    }

    let mut accounts = self.accounts.lock().unwrap();
    if accounts
      .iter()
      .any(|a| a.role == account.role && a.identity == account.identity)
    {
      return Err(AuthError::Storage(RepositoryError::DuplicateKey(
        "accounts_role_identity_key".to_string(),
      )));
    }
    accounts.push(account.clone());
    Ok(account)
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, AuthError> {
    let accounts = self.accounts.lock().unwrap();
    Ok(accounts.iter().find(|a| a.id == id).cloned())
  }

  async fn find_by_identity(
    &self,
    identity: &AccountIdentity,
  ) -> Result<Option<Account>, AuthError> {
    let accounts = self.accounts.lock().unwrap();
    Ok(
      accounts
        .iter()
        .find(|a| a.role == identity.role() && a.identity == identity.key())
        .cloned(),
    )
  }
}

/// Session store backed by a `Vec` behind a mutex.
#[derive(Default)]
pub struct InMemorySessions {
  sessions: Mutex<Vec<Session>>,
}

impl InMemorySessions {
  pub fn len(&self) -> usize {
    self.sessions.lock().unwrap().len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

#[async_trait]
impl SessionRepository for InMemorySessions {
  async fn create(&self, session: Session) -> Result<Session, AuthError> {
    self.sessions.lock().unwrap().push(session.clone());
    Ok(session)
  }

  async fn find_by_token_hash(&self, token_hash: &str) -> Result<Option<Session>, AuthError> {
    let sessions = self.sessions.lock().unwrap();
    Ok(sessions.iter().find(|s| s.token_hash == token_hash).cloned())
  }

  async fn delete(&self, session_id: Uuid) -> Result<(), AuthError> {
    self.sessions.lock().unwrap().retain(|s| s.id != session_id);
    Ok(())
  }
}

/// Reversible stand-in for the Argon2 hasher so tests stay fast. Still never
/// stores the plaintext itself.
pub struct PlainHasher;

#[async_trait]
impl PasswordHasher for PlainHasher {
  async fn hash(&self, password: &Password) -> Result<PasswordHash, AuthError> {
    Ok(PasswordHash::from_hash(format!(
      "plain${}",
      password.as_str()
    )))
  }

  async fn verify(&self, password: &Password, hash: &PasswordHash) -> Result<bool, AuthError> {
    Ok(hash.as_str() == format!("plain${}", password.as_str()))
  }
}
