pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;

pub use entities::{Applicant, Job, JobFields};
pub use errors::JobError;
pub use ports::JobRepository;
pub use services::JobService;
