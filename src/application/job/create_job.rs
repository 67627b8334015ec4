use std::sync::Arc;

use crate::domain::auth::entities::CurrentAccount;
use crate::domain::job::entities::{Job, JobFields};
use crate::domain::job::errors::JobError;
use crate::domain::job::services::JobService;

/// Command for creating a job post
#[derive(Debug, Clone)]
pub struct CreateJobCommand {
  pub title: String,
  pub company: String,
  pub salary: String,
  pub description: String,
  pub location: String,
}

/// Use case for creating a job post owned by the acting employer
pub struct CreateJobUseCase {
  job_service: Arc<JobService>,
}

impl CreateJobUseCase {
  pub fn new(job_service: Arc<JobService>) -> Self {
    Self { job_service }
  }

  pub async fn execute(
    &self,
    actor: &CurrentAccount,
    command: CreateJobCommand,
  ) -> Result<Job, JobError> {
    let fields = JobFields {
      title: command.title,
      company: command.company,
      salary: command.salary,
      description: command.description,
      location: command.location,
    };

    self.job_service.create_job(actor, fields).await
  }
}
