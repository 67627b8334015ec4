use actix_web::{HttpRequest, HttpResponse, web};

use crate::adapters::http::errors::PageError;
use crate::adapters::http::handlers::current_account;
use crate::adapters::http::templates::TemplateEngine;
use crate::domain::auth::value_objects::UserType;

fn render_page(templates: &TemplateEngine, template: &str) -> Result<HttpResponse, PageError> {
  let html = templates.render(template, &tera::Context::new())?;
  Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

/// Landing page with links to the three signup and login flows
pub async fn index(templates: web::Data<TemplateEngine>) -> Result<HttpResponse, PageError> {
  render_page(&templates, "index.html.tera")
}

// ============================================================================
// Developer pages
// ============================================================================

pub async fn developer_signup_page(
  templates: web::Data<TemplateEngine>,
) -> Result<HttpResponse, PageError> {
  render_page(&templates, "developer/signup.html.tera")
}

pub async fn developer_login_page(
  templates: web::Data<TemplateEngine>,
) -> Result<HttpResponse, PageError> {
  render_page(&templates, "developer/login.html.tera")
}

pub async fn developer_home_page(
  templates: web::Data<TemplateEngine>,
  req: HttpRequest,
) -> Result<HttpResponse, PageError> {
  let account = current_account(&req)?;

  let mut context = tera::Context::new();
  context.insert("account", &account);

  let html = templates.render("developer/home.html.tera", &context)?;
  Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

// ============================================================================
// Employer pages
// ============================================================================

pub async fn employer_signup_page(
  templates: web::Data<TemplateEngine>,
) -> Result<HttpResponse, PageError> {
  render_page(&templates, "employer/signup.html.tera")
}

pub async fn employer_login_page(
  templates: web::Data<TemplateEngine>,
) -> Result<HttpResponse, PageError> {
  render_page(&templates, "employer/login.html.tera")
}

pub async fn employer_dashboard_page(
  templates: web::Data<TemplateEngine>,
  req: HttpRequest,
) -> Result<HttpResponse, PageError> {
  let account = current_account(&req)?;

  let mut context = tera::Context::new();
  context.insert("account", &account);

  let html = templates.render("employer/dashboard.html.tera", &context)?;
  Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

// ============================================================================
// Generic-user pages
// ============================================================================

pub async fn users_signup_page(
  templates: web::Data<TemplateEngine>,
) -> Result<HttpResponse, PageError> {
  render_page(&templates, "users/signup.html.tera")
}

pub async fn users_login_page(
  templates: web::Data<TemplateEngine>,
) -> Result<HttpResponse, PageError> {
  render_page(&templates, "users/login.html.tera")
}

/// A generic user's home depends on the sub-role picked at signup
pub async fn users_home_page(
  templates: web::Data<TemplateEngine>,
  req: HttpRequest,
) -> Result<HttpResponse, PageError> {
  let account = current_account(&req)?;

  let template = match account.user_type {
    Some(UserType::Developer) => "users/developer_home.html.tera",
    Some(UserType::Employer) => "users/employer_home.html.tera",
    // Accounts of the generic role always carry a sub-role
    None => return Err(PageError::Internal("account without user type".to_string())),
  };

  let mut context = tera::Context::new();
  context.insert("account", &account);

  let html = templates.render(template, &context)?;
  Ok(HttpResponse::Ok().content_type("text/html").body(html))
}
