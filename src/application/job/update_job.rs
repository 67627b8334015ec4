use std::sync::Arc;
use uuid::Uuid;

use crate::domain::auth::entities::CurrentAccount;
use crate::domain::job::entities::{Job, JobFields};
use crate::domain::job::errors::JobError;
use crate::domain::job::services::JobService;

/// Command for replacing a job post's editable fields
#[derive(Debug, Clone)]
pub struct UpdateJobCommand {
  pub job_id: Uuid,
  pub title: String,
  pub company: String,
  pub salary: String,
  pub description: String,
  pub location: String,
}

/// Use case for editing a job post. Ownership is verified by the domain
/// service; a non-owner gets an authorization error, not a silent write.
pub struct UpdateJobUseCase {
  job_service: Arc<JobService>,
}

impl UpdateJobUseCase {
  pub fn new(job_service: Arc<JobService>) -> Self {
    Self { job_service }
  }

  /// Loads a job for its owner's edit form.
  pub async fn load(&self, actor: &CurrentAccount, job_id: Uuid) -> Result<Job, JobError> {
    self.job_service.job_for_owner(actor, job_id).await
  }

  pub async fn execute(
    &self,
    actor: &CurrentAccount,
    command: UpdateJobCommand,
  ) -> Result<Job, JobError> {
    let fields = JobFields {
      title: command.title,
      company: command.company,
      salary: command.salary,
      description: command.description,
      location: command.location,
    };

    self
      .job_service
      .update_job(actor, command.job_id, fields)
      .await
  }
}
