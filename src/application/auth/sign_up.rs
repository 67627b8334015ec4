use std::sync::Arc;
use uuid::Uuid;

use crate::domain::auth::errors::{AuthError, ValidationError};
use crate::domain::auth::services::{AuthService, NewAccount};
use crate::domain::auth::value_objects::{AccountIdentity, AccountRole, Password, UserType};

/// Command for creating an account, one variant per signup form.
#[derive(Debug, Clone)]
pub enum SignUpCommand {
  Developer {
    firstname: String,
    lastname: String,
    email: String,
    password: String,
  },
  Employer {
    firstname: String,
    lastname: String,
    email: String,
    password: String,
  },
  User {
    username: String,
    email: String,
    user_type: String,
    password: String,
  },
}

/// Response after successful signup
#[derive(Debug, Clone)]
pub struct SignUpResponse {
  pub account_id: Uuid,
  pub role: AccountRole,
  pub display_name: String,
  /// Raw session token, to be set as the session cookie
  pub session_token: String,
  /// Session lifetime, so the cookie's max age matches the stored expiry
  pub session_ttl_seconds: i64,
  /// Where the fresh session should land
  pub home_path: &'static str,
}

/// Use case for the signup flows of all three roles
pub struct SignUpUseCase {
  auth_service: Arc<AuthService>,
}

impl SignUpUseCase {
  pub fn new(auth_service: Arc<AuthService>) -> Self {
    Self { auth_service }
  }

  /// Runs the credential policy, resolves the role's identity key, creates
  /// the account and opens its first session.
  ///
  /// # Errors
  /// `AuthError::Validation` for policy violations, `AuthError::DuplicateIdentity`
  /// when the identity is taken.
  pub async fn execute(&self, command: SignUpCommand) -> Result<SignUpResponse, AuthError> {
    let new_account = match command {
      // Field presence is checked first, then the password policy. Identity
      // shape comes last: a weak password is reported as such even when the
      // email is malformed.
      SignUpCommand::Developer {
        firstname,
        lastname,
        email,
        password,
      } => {
        if email.is_empty() {
          return Err(ValidationError::MissingEmail.into());
        }
        let password = Password::new(password)?;
        NewAccount {
          identity: AccountIdentity::developer(&email)?,
          display_name: format!("{} {}", firstname, lastname),
          email: Some(email),
          user_type: None,
          password,
        }
      }
      SignUpCommand::Employer {
        firstname,
        lastname,
        email,
        password,
      } => {
        if email.is_empty() {
          return Err(ValidationError::MissingEmail.into());
        }
        let password = Password::new(password)?;
        NewAccount {
          identity: AccountIdentity::employer(&email)?,
          display_name: format!("{} {}", firstname, lastname),
          email: Some(email),
          user_type: None,
          password,
        }
      }
      SignUpCommand::User {
        username,
        email,
        user_type,
        password,
      } => {
        let identity = AccountIdentity::user(&username)?;
        if email.is_empty() {
          return Err(ValidationError::MissingEmail.into());
        }
        let password = Password::new(password)?;
        let user_type = UserType::parse(&user_type).ok_or(ValidationError::InvalidUserType)?;
        NewAccount {
          identity,
          display_name: username,
          email: Some(email),
          user_type: Some(user_type),
          password,
        }
      }
    };

    let (account, token) = self.auth_service.sign_up(new_account).await?;

    Ok(SignUpResponse {
      account_id: account.id,
      role: account.role,
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
  use crate::domain::auth::services::AuthServiceConfig;
  use crate::domain::auth::test_support::{InMemoryAccounts, InMemorySessions, PlainHasher};

  fn use_case() -> SignUpUseCase {
    SignUpUseCase::new(Arc::new(AuthService::new(
      Arc::new(InMemoryAccounts::default()),
      Arc::new(InMemorySessions::default()),
      Arc::new(PlainHasher),
      AuthServiceConfig::default(),
    )))
  }

  #[tokio::test]
  async fn test_developer_signup() {
    let response = use_case()
      .execute(SignUpCommand::Developer {
        firstname: "Ada".to_string(),
        lastname: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        password: "Abcdefg1".to_string(),
      })
      .await
      .unwrap();

    assert_eq!(response.role, AccountRole::Developer);
    assert_eq!(response.display_name, "Ada Lovelace");
    assert_eq!(response.home_path, "/developer/home");
    assert_eq!(response.session_token.len(), 64);
  }

  #[tokio::test]
  async fn test_policy_runs_before_storage() {
    // Weak password is rejected regardless of identity validity
    let result = use_case()
      .execute(SignUpCommand::Developer {
        firstname: "Ada".to_string(),
        lastname: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        password: "short".to_string(),
      })
      .await;

    assert!(matches!(
      result,
      Err(AuthError::Validation(ValidationError::PasswordTooShort))
    ));
  }

  #[tokio::test]
  async fn test_short_password_reported_regardless_of_email_shape() {
    let uc = use_case();

    let result = uc
      .execute(SignUpCommand::Developer {
        firstname: "Ada".to_string(),
        lastname: "Lovelace".to_string(),
        email: "not-an-email".to_string(),
        password: "short".to_string(),
      })
      .await;
    assert!(matches!(
      result,
      Err(AuthError::Validation(ValidationError::PasswordTooShort))
    ));

    let result = uc
      .execute(SignUpCommand::Employer {
        firstname: "Grace".to_string(),
        lastname: "Hopper".to_string(),
        email: "not-an-email".to_string(),
        password: "short".to_string(),
      })
      .await;
    assert!(matches!(
      result,
      Err(AuthError::Validation(ValidationError::PasswordTooShort))
    ));
  }

  #[tokio::test]
  async fn test_malformed_email_rejected_once_password_passes() {
    let result = use_case()
      .execute(SignUpCommand::Developer {
        firstname: "Ada".to_string(),
        lastname: "Lovelace".to_string(),
        email: "not-an-email".to_string(),
        password: "Abcdefg1".to_string(),
      })
      .await;

    assert!(matches!(
      result,
      Err(AuthError::Validation(ValidationError::InvalidEmail(_)))
    ));
  }

  #[tokio::test]
  async fn test_user_signup_requires_email_and_type() {
    let uc = use_case();

    let result = uc
      .execute(SignUpCommand::User {
        username: "jdoe".to_string(),
        email: String::new(),
        user_type: "developer".to_string(),
        password: "Abcdefg1".to_string(),
      })
      .await;
    assert!(matches!(
      result,
      Err(AuthError::Validation(ValidationError::MissingEmail))
    ));

    let result = uc
      .execute(SignUpCommand::User {
        username: "jdoe".to_string(),
        email: "jdoe@example.com".to_string(),
        user_type: "wizard".to_string(),
        password: "Abcdefg1".to_string(),
      })
      .await;
    assert!(matches!(
      result,
      Err(AuthError::Validation(ValidationError::InvalidUserType))
    ));
  }
}
