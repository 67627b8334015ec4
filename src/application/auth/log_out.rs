use std::sync::Arc;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::AuthService;
use crate::domain::auth::value_objects::SessionToken;

/// Use case for destroying the current session
pub struct LogOutUseCase {
  auth_service: Arc<AuthService>,
}

impl LogOutUseCase {
  pub fn new(auth_service: Arc<AuthService>) -> Self {
    Self { auth_service }
  }

  /// Destroys the session behind the cookie-carried token.
  ///
  /// # Errors
  /// `AuthError::InvalidSession` for malformed or unknown tokens,
  /// `AuthError::SessionDestroy` when the store fails to delete the row.
  pub async fn execute(&self, session_token: String) -> Result<(), AuthError> {
    let token = SessionToken::from_string(session_token).map_err(|_| AuthError::InvalidSession)?;
    self.auth_service.log_out(token).await
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::auth::services::AuthServiceConfig;
  use crate::domain::auth::test_support::{InMemoryAccounts, InMemorySessions, PlainHasher};

  #[tokio::test]
  async fn test_malformed_token_is_invalid_session() {
    let use_case = LogOutUseCase::new(Arc::new(AuthService::new(
      Arc::new(InMemoryAccounts::default()),
      Arc::new(InMemorySessions::default()),
      Arc::new(PlainHasher),
      AuthServiceConfig::default(),
    )));

    let result = use_case.execute("not-a-token".to_string()).await;
    assert!(matches!(result, Err(AuthError::InvalidSession)));
  }
}
