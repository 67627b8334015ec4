pub mod apply_to_job;
pub mod browse_jobs;
pub mod create_job;
pub mod job_applicants;
pub mod list_jobs;
pub mod update_job;

pub use apply_to_job::ApplyToJobUseCase;
pub use browse_jobs::BrowseJobsUseCase;
pub use create_job::{CreateJobCommand, CreateJobUseCase};
pub use job_applicants::JobApplicantsUseCase;
pub use list_jobs::ListJobsUseCase;
pub use update_job::{UpdateJobCommand, UpdateJobUseCase};
