use std::sync::Arc;
use uuid::Uuid;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::AuthService;
use crate::domain::auth::value_objects::{AccountIdentity, AccountRole, Password};

/// Command for logging in: the role decides which identity key the raw
/// string is resolved as.
#[derive(Debug, Clone)]
pub struct LogInCommand {
  pub role: AccountRole,
  /// Email for developers and employers, username for generic users
  pub identity: String,
  pub password: String,
}

/// Response after successful login
#[derive(Debug, Clone)]
pub struct LogInResponse {
  pub account_id: Uuid,
  pub display_name: String,
  /// Raw session token, to be set as the session cookie
  pub session_token: String,
  /// Session lifetime, so the cookie's max age matches the stored expiry
  pub session_ttl_seconds: i64,
  /// Where the fresh session should land
  pub home_path: &'static str,
}

/// Use case for the login flows of all three roles
pub struct LogInUseCase {
  auth_service: Arc<AuthService>,
}

impl LogInUseCase {
  pub fn new(auth_service: Arc<AuthService>) -> Self {
    Self { auth_service }
  }

  /// Resolves the identity, verifies the credentials and opens a session.
  ///
  /// # Errors
  /// `AuthError::Validation` when the identity field is missing,
  /// `AuthError::CredentialMismatch` for unknown identity or wrong password.
  pub async fn execute(&self, command: LogInCommand) -> Result<LogInResponse, AuthError> {
    let identity = match command.role {
      AccountRole::Developer => AccountIdentity::developer(&command.identity)?,
      AccountRole::Employer => AccountIdentity::employer(&command.identity)?,
      AccountRole::User => AccountIdentity::user(&command.identity)?,
    };

    // The signup policy does not apply here; any guess is just compared
    let password = Password::unchecked(command.password);

    let (account, token) = self.auth_service.log_in(identity, password).await?;

    Ok(LogInResponse {
      account_id: account.id,
      display_name: account.display_name,
      session_token: token.into_inner(),
      session_ttl_seconds: self.auth_service.session_ttl_seconds(),
      home_path: account.role.home_path(),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::application::auth::sign_up::{SignUpCommand, SignUpUseCase};
  use crate::domain::auth::errors::ValidationError;
  use crate::domain::auth::services::AuthServiceConfig;
  use crate::domain::auth::test_support::{InMemoryAccounts, InMemorySessions, PlainHasher};

  fn auth_service() -> Arc<AuthService> {
    Arc::new(AuthService::new(
      Arc::new(InMemoryAccounts::default()),
      Arc::new(InMemorySessions::default()),
      Arc::new(PlainHasher),
      AuthServiceConfig::default(),
    ))
  }

  #[tokio::test]
  async fn test_log_in_after_signup() {
    let service = auth_service();
    SignUpUseCase::new(service.clone())
      .execute(SignUpCommand::Employer {
        firstname: "Grace".to_string(),
        lastname: "Hopper".to_string(),
        email: "grace@corp.com".to_string(),
        password: "Abcdefg1".to_string(),
      })
      .await
      .unwrap();

    let response = LogInUseCase::new(service)
      .execute(LogInCommand {
        role: AccountRole::Employer,
        identity: "grace@corp.com".to_string(),
        password: "Abcdefg1".to_string(),
      })
      .await
      .unwrap();

    assert_eq!(response.home_path, "/employer/dashboard");
  }

  #[tokio::test]
  async fn test_missing_identity_is_a_validation_error() {
    let result = LogInUseCase::new(auth_service())
      .execute(LogInCommand {
        role: AccountRole::User,
        identity: String::new(),
        password: "Abcdefg1".to_string(),
      })
      .await;

    assert!(matches!(
      result,
      Err(AuthError::Validation(ValidationError::MissingUsername))
    ));
  }

  #[tokio::test]
  async fn test_policy_violating_guess_is_a_mismatch() {
    let service = auth_service();
    SignUpUseCase::new(service.clone())
      .execute(SignUpCommand::User {
        username: "jdoe".to_string(),
        email: "jdoe@example.com".to_string(),
        user_type: "developer".to_string(),
        password: "Abcdefg1".to_string(),
      })
      .await
      .unwrap();

    // "abc" would never pass the signup policy; at login it is still just a
    // wrong credential
    let result = LogInUseCase::new(service)
      .execute(LogInCommand {
        role: AccountRole::User,
        identity: "jdoe".to_string(),
        password: "abc".to_string(),
      })
      .await;

    assert!(matches!(result, Err(AuthError::CredentialMismatch)));
  }
}
