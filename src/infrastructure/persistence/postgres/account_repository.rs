use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::auth::{
  entities::Account,
  errors::{AuthError, RepositoryError},
  ports::AccountRepository,
  value_objects::{AccountIdentity, AccountRole, UserType},
};

/// PostgreSQL implementation of the AccountRepository trait
pub struct PostgresAccountRepository {
  pool: PgPool,
}

impl PostgresAccountRepository {
  /// Creates a new instance of PostgresAccountRepository
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

/// Database row structure for the accounts table
#[derive(Debug, sqlx::FromRow)]
struct AccountRow {
  id: Uuid,
  role: String,
  identity: String,
  display_name: String,
  email: Option<String>,
  user_type: Option<String>,
  password_hash: String,
  created_at: DateTime<Utc>,
  updated_at: DateTime<Utc>,
}

impl TryFrom<AccountRow> for Account {
  type Error = AuthError;

  fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
    // Both columns are CHECK-constrained, so a parse failure means the row
    // was written outside the application
    let role = AccountRole::parse(&row.role).ok_or_else(|| {
      AuthError::Storage(RepositoryError::DatabaseError(format!(
        "unknown account role: {}",
        row.role
      )))
    })?;
    let user_type = match row.user_type {
      Some(raw) => Some(UserType::parse(&raw).ok_or_else(|| {
        AuthError::Storage(RepositoryError::DatabaseError(format!(
          "unknown user type: {}",
          raw
        )))
      })?),
      None => None,
    };

    Ok(Account::from_db(
      row.id,
      role,
      row.identity,
      row.display_name,
      row.email,
      user_type,
      row.password_hash,
      row.created_at,
      row.updated_at,
    ))
  }
}

const ACCOUNT_COLUMNS: &str = r#"
    id,
    role,
    identity,
    display_name,
    email,
    user_type,
    password_hash,
    created_at,
    updated_at
"#;

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
  async fn create(&self, account: Account) -> Result<Account, AuthError> {
    let result = sqlx::query_as::<_, AccountRow>(&format!(
      r#"
            INSERT INTO accounts (
                id,
                role,
                identity,
                display_name,
                email,
                user_type,
                password_hash,
                created_at,
                updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {ACCOUNT_COLUMNS}
            "#
    ))
    .bind(account.id)
    .bind(account.role.as_str())
    .bind(&account.identity)
    .bind(&account.display_name)
    .bind(&account.email)
    .bind(account.user_type.map(|t| t.as_str()))
    .bind(&account.password_hash)
    .bind(account.created_at)
    .bind(account.updated_at)
    .fetch_one(&self.pool)
    .await?;

    result.try_into()
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, AuthError> {
    let result = sqlx::query_as::<_, AccountRow>(&format!(
      r#"
            SELECT {ACCOUNT_COLUMNS}
            FROM accounts
            WHERE id = $1
            "#
    ))
    .bind(id)
    .fetch_optional(&self.pool)
    .await?;

    result.map(Account::try_from).transpose()
  }

  async fn find_by_identity(
    &self,
    identity: &AccountIdentity,
  ) -> Result<Option<Account>, AuthError> {
    let result = sqlx::query_as::<_, AccountRow>(&format!(
      r#"
            SELECT {ACCOUNT_COLUMNS}
            FROM accounts
            WHERE role = $1 AND identity = $2
            "#
    ))
    .bind(identity.role().as_str())
    .bind(identity.key())
    .fetch_optional(&self.pool)
    .await?;

    result.map(Account::try_from).transpose()
  }
}
