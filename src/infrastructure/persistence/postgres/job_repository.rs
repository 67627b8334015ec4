use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::job::{
  entities::{Applicant, Job, JobFields},
  errors::JobError,
  ports::JobRepository,
};

/// PostgreSQL implementation of the JobRepository trait
pub struct PostgresJobRepository {
  pool: PgPool,
}

impl PostgresJobRepository {
  /// Creates a new instance of PostgresJobRepository
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

/// Database row structure for the jobs table
#[derive(Debug, sqlx::FromRow)]
struct JobRow {
  id: Uuid,
  employer_id: Uuid,
  title: String,
  company: String,
  salary: String,
  description: String,
  location: String,
  created_at: DateTime<Utc>,
  updated_at: DateTime<Utc>,
}

impl From<JobRow> for Job {
  fn from(row: JobRow) -> Self {
    Job::from_db(
      row.id,
      row.employer_id,
      row.title,
      row.company,
      row.salary,
      row.description,
      row.location,
      row.created_at,
      row.updated_at,
    )
  }
}

/// Database row structure for the applicants view
#[derive(Debug, sqlx::FromRow)]
struct ApplicantRow {
  account_id: Uuid,
  display_name: String,
  email: Option<String>,
  applied_at: DateTime<Utc>,
}

impl From<ApplicantRow> for Applicant {
  fn from(row: ApplicantRow) -> Self {
    Applicant {
      account_id: row.account_id,
      display_name: row.display_name,
      email: row.email,
      applied_at: row.applied_at,
    }
  }
}

const JOB_COLUMNS: &str = r#"
    id,
    employer_id,
    title,
    company,
    salary,
    description,
    location,
    created_at,
    updated_at
"#;

#[async_trait]
impl JobRepository for PostgresJobRepository {
  async fn create(&self, job: Job) -> Result<Job, JobError> {
    let result = sqlx::query_as::<_, JobRow>(&format!(
      r#"
            INSERT INTO jobs (
                id,
                employer_id,
                title,
                company,
                salary,
                description,
                location,
                created_at,
                updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {JOB_COLUMNS}
            "#
    ))
    .bind(job.id)
    .bind(job.employer_id)
    .bind(&job.title)
    .bind(&job.company)
    .bind(&job.salary)
    .bind(&job.description)
    .bind(&job.location)
    .bind(job.created_at)
    .bind(job.updated_at)
    .fetch_one(&self.pool)
    .await?;

    Ok(result.into())
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>, JobError> {
    let result = sqlx::query_as::<_, JobRow>(&format!(
      r#"
            SELECT {JOB_COLUMNS}
            FROM jobs
            WHERE id = $1
            "#
    ))
    .bind(id)
    .fetch_optional(&self.pool)
    .await?;

    Ok(result.map(Into::into))
  }

  async fn find_by_employer(&self, employer_id: Uuid) -> Result<Vec<Job>, JobError> {
    let rows = sqlx::query_as::<_, JobRow>(&format!(
      r#"
            SELECT {JOB_COLUMNS}
            FROM jobs
            WHERE employer_id = $1
            ORDER BY created_at DESC
            "#
    ))
    .bind(employer_id)
    .fetch_all(&self.pool)
    .await?;

    Ok(rows.into_iter().map(Into::into).collect())
  }

  async fn find_all(&self) -> Result<Vec<Job>, JobError> {
    let rows = sqlx::query_as::<_, JobRow>(&format!(
      r#"
            SELECT {JOB_COLUMNS}
            FROM jobs
            ORDER BY created_at DESC
            "#
    ))
    .fetch_all(&self.pool)
    .await?;

    Ok(rows.into_iter().map(Into::into).collect())
  }

  async fn update(&self, id: Uuid, fields: JobFields) -> Result<Job, JobError> {
    let result = sqlx::query_as::<_, JobRow>(&format!(
      r#"
            UPDATE jobs
            SET
                title = $2,
                company = $3,
                salary = $4,
                description = $5,
                location = $6,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {JOB_COLUMNS}
            "#
    ))
    .bind(id)
    .bind(&fields.title)
    .bind(&fields.company)
    .bind(&fields.salary)
    .bind(&fields.description)
    .bind(&fields.location)
    .fetch_optional(&self.pool)
    .await?;

    result.map(Into::into).ok_or(JobError::NotFound)
  }

  async fn add_applicant(&self, job_id: Uuid, account_id: Uuid) -> Result<(), JobError> {
    // The composite primary key makes reapplying a no-op
    sqlx::query(
      r#"
            INSERT INTO job_applicants (job_id, account_id, applied_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (job_id, account_id) DO NOTHING
            "#,
    )
    .bind(job_id)
    .bind(account_id)
    .execute(&self.pool)
    .await?;

    Ok(())
  }

  async fn applicants(&self, job_id: Uuid) -> Result<Vec<Applicant>, JobError> {
    let rows = sqlx::query_as::<_, ApplicantRow>(
      r#"
            SELECT
                a.id AS account_id,
                a.display_name,
                a.email,
                ja.applied_at
            FROM job_applicants ja
            JOIN accounts a ON a.id = ja.account_id
            WHERE ja.job_id = $1
            ORDER BY ja.applied_at ASC
            "#,
    )
    .bind(job_id)
    .fetch_all(&self.pool)
    .await?;

    Ok(rows.into_iter().map(Into::into).collect())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::auth::entities::Account;
  use crate::domain::auth::ports::AccountRepository;
  use crate::domain::auth::value_objects::{AccountIdentity, PasswordHash};
  use crate::infrastructure::persistence::postgres::PostgresAccountRepository;
  use crate::infrastructure::persistence::postgres::test_util::setup_test_db;

  async fn employer_id(pool: &PgPool, email: &str) -> Uuid {
    let repo = PostgresAccountRepository::new(pool.clone());
    let account = Account::new(
      AccountIdentity::employer(email).unwrap(),
      "Test Employer".to_string(),
      Some(email.to_string()),
      None,
      PasswordHash::from_hash("$argon2id$stub"),
    );
    repo.create(account).await.unwrap().id
  }

  async fn developer_id(pool: &PgPool, email: &str) -> Uuid {
    let repo = PostgresAccountRepository::new(pool.clone());
    let account = Account::new(
      AccountIdentity::developer(email).unwrap(),
      "Test Developer".to_string(),
      Some(email.to_string()),
      None,
      PasswordHash::from_hash("$argon2id$stub"),
    );
    repo.create(account).await.unwrap().id
  }

  fn fields(title: &str) -> JobFields {
    JobFields {
      title: title.to_string(),
      company: "Acme".to_string(),
      salary: "60000".to_string(),
      description: "Build things".to_string(),
      location: "Berlin".to_string(),
    }
  }

  #[tokio::test]
  async fn test_create_and_list_by_employer() {
    let (pool, _container) = setup_test_db().await;
    let repo = PostgresJobRepository::new(pool.clone());
    let owner = employer_id(&pool, "owner@corp.com").await;
    let other = employer_id(&pool, "other@corp.com").await;

    repo.create(Job::new(owner, fields("Rust Engineer"))).await.unwrap();
    repo.create(Job::new(other, fields("Go Engineer"))).await.unwrap();

    let jobs = repo.find_by_employer(owner).await.unwrap();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].title, "Rust Engineer");

    let board = repo.find_all().await.unwrap();
    assert_eq!(board.len(), 2);
  }

  #[tokio::test]
  async fn test_update_replaces_fields() {
    let (pool, _container) = setup_test_db().await;
    let repo = PostgresJobRepository::new(pool.clone());
    let owner = employer_id(&pool, "owner@corp.com").await;

    let job = repo.create(Job::new(owner, fields("Old Title"))).await.unwrap();

    let updated = repo
      .update(
        job.id,
        JobFields {
          title: "New Title".to_string(),
          company: "New Corp".to_string(),
          salary: "70000".to_string(),
          description: "New description".to_string(),
          location: "Remote".to_string(),
        },
      )
      .await
      .unwrap();

    assert_eq!(updated.title, "New Title");
    assert_eq!(updated.company, "New Corp");
    assert_eq!(updated.employer_id, owner);
  }

  #[tokio::test]
  async fn test_update_missing_job_is_not_found() {
    let (pool, _container) = setup_test_db().await;
    let repo = PostgresJobRepository::new(pool);

    let result = repo.update(Uuid::new_v4(), fields("Ghost")).await;
    assert!(matches!(result, Err(JobError::NotFound)));
  }

  #[tokio::test]
  async fn test_apply_is_idempotent() {
    let (pool, _container) = setup_test_db().await;
    let repo = PostgresJobRepository::new(pool.clone());
    let owner = employer_id(&pool, "owner@corp.com").await;
    let dev = developer_id(&pool, "dev@example.com").await;

    let job = repo.create(Job::new(owner, fields("Rust Engineer"))).await.unwrap();

    repo.add_applicant(job.id, dev).await.unwrap();
    repo.add_applicant(job.id, dev).await.unwrap();

    let applicants = repo.applicants(job.id).await.unwrap();
    assert_eq!(applicants.len(), 1);
    assert_eq!(applicants[0].account_id, dev);
    assert_eq!(applicants[0].display_name, "Test Developer");
  }

  #[tokio::test]
  async fn test_applicants_ordered_by_application_time() {
    let (pool, _container) = setup_test_db().await;
    let repo = PostgresJobRepository::new(pool.clone());
    let owner = employer_id(&pool, "owner@corp.com").await;
    let first = developer_id(&pool, "first@example.com").await;
    let second = developer_id(&pool, "second@example.com").await;

    let job = repo.create(Job::new(owner, fields("Rust Engineer"))).await.unwrap();
    repo.add_applicant(job.id, first).await.unwrap();
    repo.add_applicant(job.id, second).await.unwrap();

    let applicants = repo.applicants(job.id).await.unwrap();
    assert_eq!(applicants.len(), 2);
    assert_eq!(applicants[0].account_id, first);
    assert_eq!(applicants[1].account_id, second);
  }
}
