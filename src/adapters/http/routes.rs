use actix_web::web;
use std::sync::Arc;

use crate::application::auth::{LogInUseCase, LogOutUseCase, SignUpUseCase};
use crate::application::job::{
  ApplyToJobUseCase, BrowseJobsUseCase, CreateJobUseCase, JobApplicantsUseCase, ListJobsUseCase,
  UpdateJobUseCase,
};
use crate::domain::auth::services::AuthService;
use crate::domain::auth::value_objects::AccountRole;

use super::handlers::{auth_web, jobs_web, pages};
use super::middleware::{RequireLogin, RequireLogout};
use super::templates::TemplateEngine;

/// Everything the web routes need, wired together in main
pub struct WebRouteDependencies {
  pub templates: TemplateEngine,
  pub auth_service: Arc<AuthService>,
  pub sign_up: Arc<SignUpUseCase>,
  pub log_in: Arc<LogInUseCase>,
  pub log_out: Arc<LogOutUseCase>,
  pub create_job: Arc<CreateJobUseCase>,
  pub list_jobs: Arc<ListJobsUseCase>,
  pub update_job: Arc<UpdateJobUseCase>,
  pub job_applicants: Arc<JobApplicantsUseCase>,
  pub browse_jobs: Arc<BrowseJobsUseCase>,
  pub apply_to_job: Arc<ApplyToJobUseCase>,
}

/// Configure all web UI routes
///
/// Mounts three role-prefixed areas next to the public landing page:
///
/// - `/developer` - signup, login, home, the job board and applications
/// - `/employer` - signup, login, dashboard and job-post management
/// - `/users` - signup, login and the sub-role home
///
/// Signup and login pages are gated for guests only; everything behind a
/// role's area requires a session of exactly that role. Gates sit on the
/// individual resources so one scope can mix both.
pub fn configure_web_routes(cfg: &mut web::ServiceConfig, deps: WebRouteDependencies) {
  let auth = deps.auth_service;

  cfg
    .app_data(web::Data::new(deps.templates))
    .app_data(web::Data::new(deps.sign_up))
    .app_data(web::Data::new(deps.log_in))
    .app_data(web::Data::new(deps.log_out))
    .app_data(web::Data::new(deps.create_job))
    .app_data(web::Data::new(deps.list_jobs))
    .app_data(web::Data::new(deps.update_job))
    .app_data(web::Data::new(deps.job_applicants))
    .app_data(web::Data::new(deps.browse_jobs))
    .app_data(web::Data::new(deps.apply_to_job));

  // Public routes
  cfg
    .route("/", web::get().to(pages::index))
    .route("/health", web::get().to(health_check));

  cfg.service(
    web::scope("/developer")
      .service(
        web::resource("/signup")
          .wrap(RequireLogout::new(auth.clone()))
          .route(web::get().to(pages::developer_signup_page))
          .route(web::post().to(auth_web::developer_signup_submit)),
      )
      .service(
        web::resource("/login")
          .wrap(RequireLogout::new(auth.clone()))
          .route(web::get().to(pages::developer_login_page))
          .route(web::post().to(auth_web::developer_login_submit)),
      )
      .service(
        web::resource("/home")
          .wrap(RequireLogin::new(auth.clone(), AccountRole::Developer))
          .route(web::get().to(pages::developer_home_page)),
      )
      .service(
        web::resource("/jobs")
          .wrap(RequireLogin::new(auth.clone(), AccountRole::Developer))
          .route(web::get().to(jobs_web::browse_jobs_page)),
      )
      .service(
        web::resource("/jobs/{id}/apply")
          .wrap(RequireLogin::new(auth.clone(), AccountRole::Developer))
          .route(web::post().to(jobs_web::apply_submit)),
      )
      .service(
        web::resource("/logout")
          .wrap(RequireLogin::new(auth.clone(), AccountRole::Developer))
          .route(web::post().to(auth_web::logout)),
      ),
  );

  // Literal paths are registered before the {id} patterns
  cfg.service(
    web::scope("/employer")
      .service(
        web::resource("/signup")
          .wrap(RequireLogout::new(auth.clone()))
          .route(web::get().to(pages::employer_signup_page))
          .route(web::post().to(auth_web::employer_signup_submit)),
      )
      .service(
        web::resource("/login")
          .wrap(RequireLogout::new(auth.clone()))
          .route(web::get().to(pages::employer_login_page))
          .route(web::post().to(auth_web::employer_login_submit)),
      )
      .service(
        web::resource("/dashboard")
          .wrap(RequireLogin::new(auth.clone(), AccountRole::Employer))
          .route(web::get().to(pages::employer_dashboard_page)),
      )
      .service(
        web::resource("/createJobPost")
          .wrap(RequireLogin::new(auth.clone(), AccountRole::Employer))
          .route(web::get().to(jobs_web::job_post_page))
          .route(web::post().to(jobs_web::create_job_submit)),
      )
      .service(
        web::resource("/jobs")
          .wrap(RequireLogin::new(auth.clone(), AccountRole::Employer))
          .route(web::get().to(jobs_web::jobs_page)),
      )
      .service(
        web::resource("/logout")
          .wrap(RequireLogin::new(auth.clone(), AccountRole::Employer))
          .route(web::post().to(auth_web::logout)),
      )
      .service(
        web::resource("/{id}/edit")
          .wrap(RequireLogin::new(auth.clone(), AccountRole::Employer))
          .route(web::get().to(jobs_web::edit_job_page))
          .route(web::post().to(jobs_web::edit_job_submit)),
      )
      .service(
        web::resource("/{id}/applicants")
          .wrap(RequireLogin::new(auth.clone(), AccountRole::Employer))
          .route(web::get().to(jobs_web::job_applicants_page)),
      ),
  );

  cfg.service(
    web::scope("/users")
      .service(
        web::resource("/signup")
          .wrap(RequireLogout::new(auth.clone()))
          .route(web::get().to(pages::users_signup_page))
          .route(web::post().to(auth_web::users_signup_submit)),
      )
      .service(
        web::resource("/login")
          .wrap(RequireLogout::new(auth.clone()))
          .route(web::get().to(pages::users_login_page))
          .route(web::post().to(auth_web::users_login_submit)),
      )
      .service(
        web::resource("/home")
          .wrap(RequireLogin::new(auth.clone(), AccountRole::User))
          .route(web::get().to(pages::users_home_page)),
      )
      .service(
        web::resource("/logout")
          .wrap(RequireLogin::new(auth, AccountRole::User))
          .route(web::post().to(auth_web::logout)),
      ),
  );
}

async fn health_check() -> &'static str {
  "OK"
}
