use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::errors::ValidationError;

// ============================================================================
// AccountRole
// ============================================================================

/// The role an account was created under. Each role has its own signup and
/// login flow and its own natural identity key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountRole {
  Developer,
  Employer,
  User,
}

impl AccountRole {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Developer => "developer",
      Self::Employer => "employer",
      Self::User => "user",
    }
  }

  pub fn parse(raw: &str) -> Option<Self> {
    match raw {
      "developer" => Some(Self::Developer),
      "employer" => Some(Self::Employer),
      "user" => Some(Self::User),
      _ => None,
    }
  }

  /// Path of the role's home view, used for post-login redirects.
  pub fn home_path(&self) -> &'static str {
    match self {
      Self::Developer => "/developer/home",
      Self::Employer => "/employer/dashboard",
      Self::User => "/users/home",
    }
  }

  /// Path of the role's login form, used by the logged-in gate.
  pub fn login_path(&self) -> &'static str {
    match self {
      Self::Developer => "/developer/login",
      Self::Employer => "/employer/login",
      Self::User => "/users/login",
    }
  }
}

impl fmt::Display for AccountRole {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

// ============================================================================
// UserType (generic-account sub-role)
// ============================================================================

/// Sub-role a generic user picks at signup. It only selects which home view
/// is rendered; it carries no authorization weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
  Developer,
  Employer,
}

impl UserType {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Developer => "developer",
      Self::Employer => "employer",
    }
  }

  pub fn parse(raw: &str) -> Option<Self> {
    match raw.to_ascii_lowercase().as_str() {
      "developer" => Some(Self::Developer),
      "employer" => Some(Self::Employer),
      _ => None,
    }
  }
}

impl fmt::Display for UserType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

// ============================================================================
// AccountIdentity Value Object
// ============================================================================

/// The one natural key an account is looked up by. Each role has exactly one
/// identity shape, decided here rather than scattered through handlers:
/// developers and employers are keyed by email, generic users by username.
///
/// The raw input is kept exactly as submitted; no trimming or case folding is
/// performed before the uniqueness check or storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountIdentity {
  role: AccountRole,
  key: String,
}

impl AccountIdentity {
  /// Developer identity, keyed by email.
  pub fn developer(email: impl Into<String>) -> Result<Self, ValidationError> {
    Self::email_keyed(AccountRole::Developer, email.into())
  }

  /// Employer identity, keyed by email.
  pub fn employer(email: impl Into<String>) -> Result<Self, ValidationError> {
    Self::email_keyed(AccountRole::Employer, email.into())
  }

  /// Generic-user identity, keyed by username.
  pub fn user(username: impl Into<String>) -> Result<Self, ValidationError> {
    let username = username.into();
    if username.is_empty() {
      return Err(ValidationError::MissingUsername);
    }
    Ok(Self {
      role: AccountRole::User,
      key: username,
    })
  }

  fn email_keyed(role: AccountRole, email: String) -> Result<Self, ValidationError> {
    if email.is_empty() {
      return Err(ValidationError::MissingEmail);
    }
    if !validator::ValidateEmail::validate_email(&email) {
      return Err(ValidationError::InvalidEmail(email));
    }
    Ok(Self { role, key: email })
  }

  pub fn role(&self) -> AccountRole {
    self.role
  }

  /// The key exactly as the client submitted it.
  pub fn key(&self) -> &str {
    &self.key
  }

  pub fn into_key(self) -> String {
    self.key
  }
}

impl fmt::Display for AccountIdentity {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}:{}", self.role, self.key)
  }
}

// ============================================================================
// Password Value Object (Plain Password - Never Stored)
// ============================================================================

/// A plaintext password that has passed the credential policy. Construction
/// is the policy check: minimum length plus a single conjunctive composition
/// predicate (digit AND lowercase AND uppercase AND length >= 8). The input
/// is checked and hashed exactly as submitted.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Password(String);

impl Password {
  const MIN_LENGTH: usize = 8;

  pub fn new(password: impl Into<String>) -> Result<Self, ValidationError> {
    let password = password.into();

    if password.len() < Self::MIN_LENGTH {
      return Err(ValidationError::PasswordTooShort);
    }

    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    if !(has_digit && has_lower && has_upper && password.len() >= Self::MIN_LENGTH) {
      return Err(ValidationError::PasswordComposition);
    }

    Ok(Self(password))
  }

  /// Wraps a login attempt's password without running the signup policy.
  /// The policy gates account creation only; at login the candidate is
  /// simply compared against the stored hash, so a policy-violating guess
  /// fails as a credential mismatch rather than a validation error.
  pub fn unchecked(password: impl Into<String>) -> Self {
    Self(password.into())
  }

  /// Returns the password as a string slice (use with caution)
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

// Implement Debug without exposing the password
impl fmt::Debug for Password {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("Password(***)")
  }
}

// Implement Display without exposing the password
impl fmt::Display for Password {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("***")
  }
}

// ============================================================================
// PasswordHash Value Object (Argon2id Hash)
// ============================================================================

/// An opaque salted one-way hash of a password, the only password-derived
/// value that is ever persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordHash(String);

impl PasswordHash {
  /// Creates a PasswordHash from an existing PHC-format hash string.
  pub fn from_hash(hash: impl Into<String>) -> Self {
    Self(hash.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn into_inner(self) -> String {
    self.0
  }
}

// ============================================================================
// SessionToken Value Object (Random Secure Token)
// ============================================================================

/// The opaque token issued to the client in the session cookie. Only its
/// SHA-256 hash is stored server-side.
#[derive(Clone)]
pub struct SessionToken(String);

impl SessionToken {
  const TOKEN_LENGTH: usize = 32; // 32 bytes = 256 bits

  /// Generates a new random session token
  pub fn generate() -> Self {
    use rand::RngCore;

    let mut bytes = [0u8; Self::TOKEN_LENGTH];
    rand::rngs::OsRng.fill_bytes(&mut bytes);

    Self(hex::encode(bytes))
  }

  /// Creates a SessionToken from a cookie value.
  pub fn from_string(token: impl Into<String>) -> Result<Self, InvalidToken> {
    let token = token.into();

    if token.len() != Self::TOKEN_LENGTH * 2 {
      return Err(InvalidToken);
    }
    if !token.chars().all(|c| c.is_ascii_hexdigit()) {
      return Err(InvalidToken);
    }

    Ok(Self(token))
  }

  /// Creates the hash of this token that is stored server-side.
  pub fn hash(&self) -> TokenHash {
    use sha2::{Digest, Sha256};

    let mut hasher = Sha256::new();
    hasher.update(self.0.as_bytes());

    TokenHash(hex::encode(hasher.finalize()))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn into_inner(self) -> String {
    self.0
  }
}

// Implement Debug without exposing the token
impl fmt::Debug for SessionToken {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("SessionToken(***)")
  }
}

/// A cookie value that is not a 64-character hex token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidToken;

// ============================================================================
// TokenHash Value Object (SHA-256 Hash of Token)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenHash(String);

impl TokenHash {
  pub fn from_hash(hash: impl Into<String>) -> Self {
    Self(hash.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn into_inner(self) -> String {
    self.0
  }
}

impl fmt::Display for TokenHash {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_identity_key_per_role() {
    let dev = AccountIdentity::developer("dev@example.com").unwrap();
    assert_eq!(dev.role(), AccountRole::Developer);
    assert_eq!(dev.key(), "dev@example.com");

    let emp = AccountIdentity::employer("hr@corp.com").unwrap();
    assert_eq!(emp.role(), AccountRole::Employer);

    let user = AccountIdentity::user("jdoe").unwrap();
    assert_eq!(user.role(), AccountRole::User);
    assert_eq!(user.key(), "jdoe");
  }

  #[test]
  fn test_identity_missing_field() {
    assert!(matches!(
      AccountIdentity::developer(""),
      Err(ValidationError::MissingEmail)
    ));
    assert!(matches!(
      AccountIdentity::employer(""),
      Err(ValidationError::MissingEmail)
    ));
    assert!(matches!(
      AccountIdentity::user(""),
      Err(ValidationError::MissingUsername)
    ));
  }

  #[test]
  fn test_identity_email_shape() {
    assert!(AccountIdentity::developer("not-an-email").is_err());
    assert!(AccountIdentity::employer("@example.com").is_err());
  }

  #[test]
  fn test_identity_is_not_normalized() {
    let id = AccountIdentity::developer("Dev@Example.COM").unwrap();
    assert_eq!(id.key(), "Dev@Example.COM");
  }

  #[test]
  fn test_password_length_policy() {
    assert!(matches!(
      Password::new("Ab1"),
      Err(ValidationError::PasswordTooShort)
    ));
    // Seven characters, otherwise well-composed
    assert!(matches!(
      Password::new("Abcde12"),
      Err(ValidationError::PasswordTooShort)
    ));
  }

  #[test]
  fn test_password_composition_policy() {
    // Long enough but missing a digit
    assert!(matches!(
      Password::new("Abcdefgh"),
      Err(ValidationError::PasswordComposition)
    ));
    // Missing an uppercase letter
    assert!(matches!(
      Password::new("abcdefg1"),
      Err(ValidationError::PasswordComposition)
    ));
    // Missing a lowercase letter
    assert!(matches!(
      Password::new("ABCDEFG1"),
      Err(ValidationError::PasswordComposition)
    ));
    // All classes present
    assert!(Password::new("Abcdefg1").is_ok());
  }

  #[test]
  fn test_password_is_not_trimmed() {
    let password = Password::new(" Abcdefg1 ").unwrap();
    assert_eq!(password.as_str(), " Abcdefg1 ");
  }

  #[test]
  fn test_session_token_generation() {
    let token1 = SessionToken::generate();
    let token2 = SessionToken::generate();

    assert_ne!(token1.as_str(), token2.as_str());
    assert_eq!(token1.as_str().len(), 64);
  }

  #[test]
  fn test_session_token_round_trip() {
    let token = SessionToken::generate();
    let parsed = SessionToken::from_string(token.as_str()).unwrap();
    assert_eq!(parsed.hash(), token.hash());
  }

  #[test]
  fn test_session_token_rejects_malformed_input() {
    assert!(SessionToken::from_string("short").is_err());
    assert!(SessionToken::from_string("z".repeat(64)).is_err());
  }

  #[test]
  fn test_token_hash_is_stable() {
    let token = SessionToken::generate();
    assert_eq!(token.hash(), token.hash());

    let other = SessionToken::generate();
    assert_ne!(token.hash(), other.hash());
  }
}
