use std::sync::Arc;

use crate::domain::auth::entities::CurrentAccount;
use crate::domain::job::entities::Job;
use crate::domain::job::errors::JobError;
use crate::domain::job::services::JobService;

/// Use case for the employer's own job listing view
pub struct ListJobsUseCase {
  job_service: Arc<JobService>,
}

impl ListJobsUseCase {
  pub fn new(job_service: Arc<JobService>) -> Self {
    Self { job_service }
  }

  pub async fn execute(&self, actor: &CurrentAccount) -> Result<Vec<Job>, JobError> {
    self.job_service.list_own_jobs(actor).await
  }
}
