use std::sync::Arc;
use uuid::Uuid;

use crate::domain::auth::entities::CurrentAccount;
use crate::domain::auth::value_objects::AccountRole;

use super::entities::{Applicant, Job, JobFields};
use super::errors::JobError;
use super::ports::JobRepository;

/// Job-posting service. All operations take the acting session's account
/// projection and enforce role and ownership before touching storage.
pub struct JobService {
  jobs: Arc<dyn JobRepository>,
}

impl JobService {
  pub fn new(jobs: Arc<dyn JobRepository>) -> Self {
    Self { jobs }
  }

  /// Creates a job post owned by the acting employer.
  ///
  /// # Errors
  /// Returns `JobError::NotAnEmployer` for non-employer accounts.
  pub async fn create_job(
    &self,
    actor: &CurrentAccount,
    fields: JobFields,
  ) -> Result<Job, JobError> {
    self.require_employer(actor)?;

    let job = Job::new(actor.id, fields);
    let created = self.jobs.create(job).await?;

    tracing::info!(job_id = %created.id, employer_id = %actor.id, "job post created");
    Ok(created)
  }

  /// All job posts owned by the acting employer, for the jobs listing view.
  pub async fn list_own_jobs(&self, actor: &CurrentAccount) -> Result<Vec<Job>, JobError> {
    self.require_employer(actor)?;
    self.jobs.find_by_employer(actor.id).await
  }

  /// Loads a job for its owner's edit form.
  ///
  /// # Errors
  /// Returns `JobError::NotOwner` if the acting account does not own the job.
  pub async fn job_for_owner(&self, actor: &CurrentAccount, id: Uuid) -> Result<Job, JobError> {
    self.require_employer(actor)?;
    self.owned_job(actor, id).await
  }

  /// Replaces a job's editable fields. Ownership is verified first; there is
  /// no optimistic concurrency control, so the last writer wins.
  pub async fn update_job(
    &self,
    actor: &CurrentAccount,
    id: Uuid,
    fields: JobFields,
  ) -> Result<Job, JobError> {
    self.require_employer(actor)?;
    self.owned_job(actor, id).await?;
    self.jobs.update(id, fields).await
  }

  /// The applicants of one of the acting employer's jobs.
  pub async fn applicants(
    &self,
    actor: &CurrentAccount,
    id: Uuid,
  ) -> Result<(Job, Vec<Applicant>), JobError> {
    self.require_employer(actor)?;
    let job = self.owned_job(actor, id).await?;
    let applicants = self.jobs.applicants(id).await?;
    Ok((job, applicants))
  }

  /// The whole board, for developers browsing jobs.
  pub async fn browse_jobs(&self, actor: &CurrentAccount) -> Result<Vec<Job>, JobError> {
    self.require_developer(actor)?;
    self.jobs.find_all().await
  }

  /// Records the acting developer as an applicant. Applying twice is a no-op.
  pub async fn apply(&self, actor: &CurrentAccount, job_id: Uuid) -> Result<(), JobError> {
    self.require_developer(actor)?;

    // Confirm the job exists so a dangling id is a 404, not a silent insert
    self
      .jobs
      .find_by_id(job_id)
      .await?
      .ok_or(JobError::NotFound)?;

    self.jobs.add_applicant(job_id, actor.id).await?;
    tracing::info!(job_id = %job_id, account_id = %actor.id, "application recorded");
    Ok(())
  }

  async fn owned_job(&self, actor: &CurrentAccount, id: Uuid) -> Result<Job, JobError> {
    let job = self.jobs.find_by_id(id).await?.ok_or(JobError::NotFound)?;
    if job.employer_id != actor.id {
      return Err(JobError::NotOwner);
    }
    Ok(job)
  }

  fn require_employer(&self, actor: &CurrentAccount) -> Result<(), JobError> {
    if actor.role != AccountRole::Employer {
      return Err(JobError::NotAnEmployer);
    }
    Ok(())
  }

  fn require_developer(&self, actor: &CurrentAccount) -> Result<(), JobError> {
    if actor.role != AccountRole::Developer {
      return Err(JobError::NotADeveloper);
    }
    Ok(())
  }
}
