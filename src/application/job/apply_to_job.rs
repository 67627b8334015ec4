use std::sync::Arc;
use uuid::Uuid;

use crate::domain::auth::entities::CurrentAccount;
use crate::domain::job::errors::JobError;
use crate::domain::job::services::JobService;

/// Use case for a developer applying to a job post. Applying to the same
/// post twice is a no-op.
pub struct ApplyToJobUseCase {
  job_service: Arc<JobService>,
}

impl ApplyToJobUseCase {
  pub fn new(job_service: Arc<JobService>) -> Self {
    Self { job_service }
  }

  pub async fn execute(&self, actor: &CurrentAccount, job_id: Uuid) -> Result<(), JobError> {
    self.job_service.apply(actor, job_id).await
  }
}
