use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Job posting entity, owned by exactly one employer account. Ownership is a
/// foreign key set at creation, so a created job is atomically visible under
/// its owner; there is no separate link step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
  /// Unique identifier for the job
  pub id: Uuid,
  /// The owning employer account
  pub employer_id: Uuid,
  pub title: String,
  pub company: String,
  pub salary: String,
  pub description: String,
  pub location: String,
  /// Timestamp when the job was created
  pub created_at: DateTime<Utc>,
  /// Timestamp when the job was last updated
  pub updated_at: DateTime<Utc>,
}

/// The editable fields of a job posting. Updates replace all of them;
/// last writer wins.
#[derive(Debug, Clone)]
pub struct JobFields {
  pub title: String,
  pub company: String,
  pub salary: String,
  pub description: String,
  pub location: String,
}

impl Job {
  pub fn new(employer_id: Uuid, fields: JobFields) -> Self {
    let now = Utc::now();
    Self {
      id: Uuid::new_v4(),
      employer_id,
      title: fields.title,
      company: fields.company,
      salary: fields.salary,
      description: fields.description,
      location: fields.location,
      created_at: now,
      updated_at: now,
    }
  }

  /// Creates a job from database fields (for reconstruction)
  #[allow(clippy::too_many_arguments)]
  pub fn from_db(
    id: Uuid,
    employer_id: Uuid,
    title: String,
    company: String,
    salary: String,
    description: String,
    location: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
  ) -> Self {
    Self {
      id,
      employer_id,
      title,
      company,
      salary,
      description,
      location,
      created_at,
      updated_at,
    }
  }
}

/// An account that applied to a job: the applicants relation expanded with
/// the fields the applicants view needs, nothing sensitive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Applicant {
  pub account_id: Uuid,
  pub display_name: String,
  pub email: Option<String>,
  pub applied_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_job_creation_sets_owner() {
    let employer_id = Uuid::new_v4();
    let job = Job::new(
      employer_id,
      JobFields {
        title: "Backend Engineer".to_string(),
        company: "Acme".to_string(),
        salary: "90k".to_string(),
        description: "Build things".to_string(),
        location: "Remote".to_string(),
      },
    );

    assert_eq!(job.employer_id, employer_id);
    assert_eq!(job.title, "Backend Engineer");
  }
}
