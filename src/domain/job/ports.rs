use async_trait::async_trait;
use uuid::Uuid;

use super::entities::{Applicant, Job, JobFields};
use super::errors::JobError;

/// Repository trait for job persistence operations
#[async_trait]
pub trait JobRepository: Send + Sync {
  /// Creates a new job post with its owner reference
  async fn create(&self, job: Job) -> Result<Job, JobError>;

  /// Finds a job by its unique identifier
  async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>, JobError>;

  /// All jobs owned by an employer, newest first
  async fn find_by_employer(&self, employer_id: Uuid) -> Result<Vec<Job>, JobError>;

  /// All jobs on the board, newest first
  async fn find_all(&self) -> Result<Vec<Job>, JobError>;

  /// Replaces the editable fields of a job; last writer wins.
  async fn update(&self, id: Uuid, fields: JobFields) -> Result<Job, JobError>;

  /// Records an application. Idempotent: applying twice leaves one row, with
  /// the `(job, account)` pair as the de-duplication key.
  async fn add_applicant(&self, job_id: Uuid, account_id: Uuid) -> Result<(), JobError>;

  /// The applicants relation expanded for the applicants view
  async fn applicants(&self, job_id: Uuid) -> Result<Vec<Applicant>, JobError>;
}
