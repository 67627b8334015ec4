use std::sync::Arc;
use uuid::Uuid;

use crate::domain::auth::entities::CurrentAccount;
use crate::domain::job::entities::{Applicant, Job};
use crate::domain::job::errors::JobError;
use crate::domain::job::services::JobService;

/// Use case for the applicants view of one of the acting employer's jobs
pub struct JobApplicantsUseCase {
  job_service: Arc<JobService>,
}

impl JobApplicantsUseCase {
  pub fn new(job_service: Arc<JobService>) -> Self {
    Self { job_service }
  }

  pub async fn execute(
    &self,
    actor: &CurrentAccount,
    job_id: Uuid,
  ) -> Result<(Job, Vec<Applicant>), JobError> {
    self.job_service.applicants(actor, job_id).await
  }
}
