use std::sync::Arc;

use crate::domain::auth::entities::CurrentAccount;
use crate::domain::job::entities::Job;
use crate::domain::job::errors::JobError;
use crate::domain::job::services::JobService;

/// Use case for the developer-facing job board listing
pub struct BrowseJobsUseCase {
  job_service: Arc<JobService>,
}

impl BrowseJobsUseCase {
  pub fn new(job_service: Arc<JobService>) -> Self {
    Self { job_service }
  }

  pub async fn execute(&self, actor: &CurrentAccount) -> Result<Vec<Job>, JobError> {
    self.job_service.browse_jobs(actor).await
  }
}
