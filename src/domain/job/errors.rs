use thiserror::Error;

use crate::domain::auth::errors::RepositoryError;

/// Job-posting error type
#[derive(Debug, Error)]
pub enum JobError {
  #[error("Job post not found")]
  NotFound,

  /// The acting account is not the job's owner. Every job-mutating and
  /// job-inspecting operation verifies ownership; failure is an
  /// authorization error, never a silent success.
  #[error("You do not own this job post")]
  NotOwner,

  #[error("Only employer accounts can manage job posts")]
  NotAnEmployer,

  #[error("Only developer accounts can apply to job posts")]
  NotADeveloper,

  #[error("Storage error: {0}")]
  Storage(#[from] RepositoryError),
}

impl From<sqlx::Error> for JobError {
  fn from(error: sqlx::Error) -> Self {
    JobError::Storage(RepositoryError::from(error))
  }
}
