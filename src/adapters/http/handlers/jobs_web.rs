use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::adapters::http::errors::PageError;
use crate::adapters::http::handlers::current_account;
use crate::adapters::http::templates::TemplateEngine;
use crate::application::job::{
  ApplyToJobUseCase, BrowseJobsUseCase, CreateJobCommand, CreateJobUseCase, JobApplicantsUseCase,
  ListJobsUseCase, UpdateJobCommand, UpdateJobUseCase,
};

/// Job form fields, shared by the create and edit forms
#[derive(Deserialize)]
pub struct JobForm {
  #[serde(rename = "jobTitle")]
  title: String,
  company: String,
  salary: String,
  description: String,
  location: String,
}

fn redirect_to(location: &str) -> HttpResponse {
  HttpResponse::Found()
    .insert_header(("Location", location.to_string()))
    .finish()
}

// ============================================================================
// Employer: job management
// ============================================================================

/// Render the empty job-post form
pub async fn job_post_page(
  templates: web::Data<TemplateEngine>,
  req: HttpRequest,
) -> Result<HttpResponse, PageError> {
  let account = current_account(&req)?;

  let mut context = tera::Context::new();
  context.insert("account", &account);

  let html = templates.render("employer/job_post.html.tera", &context)?;
  Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

/// Handle job-post form submission
pub async fn create_job_submit(
  form: web::Form<JobForm>,
  use_case: web::Data<Arc<CreateJobUseCase>>,
  req: HttpRequest,
) -> Result<HttpResponse, PageError> {
  let account = current_account(&req)?;
  let form = form.into_inner();

  let command = CreateJobCommand {
    title: form.title,
    company: form.company,
    salary: form.salary,
    description: form.description,
    location: form.location,
  };

  use_case.execute(&account, command).await?;
  Ok(redirect_to("/employer/jobs"))
}

/// Render the employer's own job posts
pub async fn jobs_page(
  templates: web::Data<TemplateEngine>,
  use_case: web::Data<Arc<ListJobsUseCase>>,
  req: HttpRequest,
) -> Result<HttpResponse, PageError> {
  let account = current_account(&req)?;
  let jobs = use_case.execute(&account).await?;

  let mut context = tera::Context::new();
  context.insert("account", &account);
  context.insert("jobs", &jobs);

  let html = templates.render("employer/jobs.html.tera", &context)?;
  Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

/// Render the edit form for one of the employer's job posts
pub async fn edit_job_page(
  path: web::Path<Uuid>,
  templates: web::Data<TemplateEngine>,
  use_case: web::Data<Arc<UpdateJobUseCase>>,
  req: HttpRequest,
) -> Result<HttpResponse, PageError> {
  let account = current_account(&req)?;
  let job = use_case.load(&account, path.into_inner()).await?;

  let mut context = tera::Context::new();
  context.insert("account", &account);
  context.insert("job", &job);

  let html = templates.render("employer/job_edit.html.tera", &context)?;
  Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

/// Handle edit form submission
pub async fn edit_job_submit(
  path: web::Path<Uuid>,
  form: web::Form<JobForm>,
  use_case: web::Data<Arc<UpdateJobUseCase>>,
  req: HttpRequest,
) -> Result<HttpResponse, PageError> {
  let account = current_account(&req)?;
  let form = form.into_inner();

  let command = UpdateJobCommand {
    job_id: path.into_inner(),
    title: form.title,
    company: form.company,
    salary: form.salary,
    description: form.description,
    location: form.location,
  };

  use_case.execute(&account, command).await?;
  Ok(redirect_to("/employer/jobs"))
}

/// Render the applicants of one of the employer's job posts
pub async fn job_applicants_page(
  path: web::Path<Uuid>,
  templates: web::Data<TemplateEngine>,
  use_case: web::Data<Arc<JobApplicantsUseCase>>,
  req: HttpRequest,
) -> Result<HttpResponse, PageError> {
  let account = current_account(&req)?;
  let (job, applicants) = use_case.execute(&account, path.into_inner()).await?;

  let mut context = tera::Context::new();
  context.insert("account", &account);
  context.insert("job", &job);
  context.insert("applicants", &applicants);

  let html = templates.render("employer/job_applicants.html.tera", &context)?;
  Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

// ============================================================================
// Developer: job board
// ============================================================================

/// Render the board of all job posts
pub async fn browse_jobs_page(
  templates: web::Data<TemplateEngine>,
  use_case: web::Data<Arc<BrowseJobsUseCase>>,
  req: HttpRequest,
) -> Result<HttpResponse, PageError> {
  let account = current_account(&req)?;
  let jobs = use_case.execute(&account).await?;

  let mut context = tera::Context::new();
  context.insert("account", &account);
  context.insert("jobs", &jobs);

  let html = templates.render("developer/jobs.html.tera", &context)?;
  Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

/// Record an application. Reapplying is a no-op, so the redirect is the
/// same either way.
pub async fn apply_submit(
  path: web::Path<Uuid>,
  use_case: web::Data<Arc<ApplyToJobUseCase>>,
  req: HttpRequest,
) -> Result<HttpResponse, PageError> {
  let account = current_account(&req)?;
  use_case.execute(&account, path.into_inner()).await?;
  Ok(redirect_to("/developer/jobs"))
}
