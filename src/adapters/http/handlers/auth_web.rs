use actix_web::{HttpRequest, HttpResponse, cookie::Cookie, cookie::SameSite, web};
use serde::Deserialize;
use std::sync::Arc;

use crate::adapters::http::templates::TemplateEngine;
use crate::application::auth::{
  LogInCommand, LogInUseCase, LogOutUseCase, SignUpCommand, SignUpUseCase,
};
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::value_objects::AccountRole;

/// Cookie that carries the raw session token. The server only ever stores
/// its hash, and the cookie lives exactly as long as the session it names.
fn session_cookie(token: String, max_age_seconds: i64) -> Cookie<'static> {
  Cookie::build("session_token", token)
    .path("/")
    .http_only(true)
    .same_site(SameSite::Lax)
    .max_age(actix_web::cookie::time::Duration::seconds(max_age_seconds))
    .finish()
}

fn expired_session_cookie() -> Cookie<'static> {
  Cookie::build("session_token", "")
    .path("/")
    .http_only(true)
    .same_site(SameSite::Lax)
    .max_age(actix_web::cookie::time::Duration::seconds(0))
    .finish()
}

/// Re-render the originating form with the failure.
///
/// Recoverable failures keep their message and a 400; anything else is
/// logged and rendered as a generic 500.
fn render_form_error(
  templates: &TemplateEngine,
  template: &str,
  error: &AuthError,
  fill: &[(&str, &str)],
) -> Result<HttpResponse, actix_web::Error> {
  let (mut builder, message) = match error {
    AuthError::CredentialMismatch | AuthError::DuplicateIdentity | AuthError::Validation(_) => {
      (HttpResponse::BadRequest(), error.to_string())
    }
    _ => {
      tracing::error!("auth form submission failed: {}", error);
      (
        HttpResponse::InternalServerError(),
        "Something went wrong. Please try again later.".to_string(),
      )
    }
  };

  let mut context = tera::Context::new();
  context.insert("error_message", &message);
  for (key, value) in fill {
    context.insert(*key, value);
  }

  let html = templates
    .render(template, &context)
    .map_err(actix_web::error::ErrorInternalServerError)?;

  Ok(builder.content_type("text/html").body(html))
}

// ============================================================================
// Developer auth
// ============================================================================

#[derive(Deserialize)]
pub struct DeveloperSignUpForm {
  firstname: String,
  lastname: String,
  email: String,
  password: String,
}

pub async fn developer_signup_submit(
  form: web::Form<DeveloperSignUpForm>,
  use_case: web::Data<Arc<SignUpUseCase>>,
  templates: web::Data<TemplateEngine>,
) -> Result<HttpResponse, actix_web::Error> {
  let command = SignUpCommand::Developer {
    firstname: form.firstname.clone(),
    lastname: form.lastname.clone(),
    email: form.email.clone(),
    password: form.password.clone(),
  };

  match use_case.execute(command).await {
    Ok(response) => {
      tracing::info!(account_id = %response.account_id, "developer signup");
      Ok(
        HttpResponse::Found()
          .cookie(session_cookie(
            response.session_token,
            response.session_ttl_seconds,
          ))
          .insert_header(("Location", response.home_path))
          .finish(),
      )
    }
    Err(e) => render_form_error(
      &templates,
      "developer/signup.html.tera",
      &e,
      &[
        ("firstname", &form.firstname),
        ("lastname", &form.lastname),
        ("email", &form.email),
      ],
    ),
  }
}

#[derive(Deserialize)]
pub struct EmailLoginForm {
  email: String,
  password: String,
}

pub async fn developer_login_submit(
  form: web::Form<EmailLoginForm>,
  use_case: web::Data<Arc<LogInUseCase>>,
  templates: web::Data<TemplateEngine>,
) -> Result<HttpResponse, actix_web::Error> {
  let command = LogInCommand {
    role: AccountRole::Developer,
    identity: form.email.clone(),
    password: form.password.clone(),
  };

  match use_case.execute(command).await {
    Ok(response) => {
      tracing::info!(account_id = %response.account_id, "developer login");
      Ok(
        HttpResponse::Found()
          .cookie(session_cookie(
            response.session_token,
            response.session_ttl_seconds,
          ))
          .insert_header(("Location", response.home_path))
          .finish(),
      )
    }
    Err(e) => render_form_error(
      &templates,
      "developer/login.html.tera",
      &e,
      &[("email", &form.email)],
    ),
  }
}

// ============================================================================
// Employer auth
// ============================================================================

#[derive(Deserialize)]
pub struct EmployerSignUpForm {
  firstname: String,
  lastname: String,
  email: String,
  password: String,
}

pub async fn employer_signup_submit(
  form: web::Form<EmployerSignUpForm>,
  use_case: web::Data<Arc<SignUpUseCase>>,
  templates: web::Data<TemplateEngine>,
) -> Result<HttpResponse, actix_web::Error> {
  let command = SignUpCommand::Employer {
    firstname: form.firstname.clone(),
    lastname: form.lastname.clone(),
    email: form.email.clone(),
    password: form.password.clone(),
  };

  match use_case.execute(command).await {
    Ok(response) => {
      tracing::info!(account_id = %response.account_id, "employer signup");
      Ok(
        HttpResponse::Found()
          .cookie(session_cookie(
            response.session_token,
            response.session_ttl_seconds,
          ))
          .insert_header(("Location", response.home_path))
          .finish(),
      )
    }
    Err(e) => render_form_error(
      &templates,
      "employer/signup.html.tera",
      &e,
      &[
        ("firstname", &form.firstname),
        ("lastname", &form.lastname),
        ("email", &form.email),
      ],
    ),
  }
}

pub async fn employer_login_submit(
  form: web::Form<EmailLoginForm>,
  use_case: web::Data<Arc<LogInUseCase>>,
  templates: web::Data<TemplateEngine>,
) -> Result<HttpResponse, actix_web::Error> {
  let command = LogInCommand {
    role: AccountRole::Employer,
    identity: form.email.clone(),
    password: form.password.clone(),
  };

  match use_case.execute(command).await {
    Ok(response) => {
      tracing::info!(account_id = %response.account_id, "employer login");
      Ok(
        HttpResponse::Found()
          .cookie(session_cookie(
            response.session_token,
            response.session_ttl_seconds,
          ))
          .insert_header(("Location", response.home_path))
          .finish(),
      )
    }
    Err(e) => render_form_error(
      &templates,
      "employer/login.html.tera",
      &e,
      &[("email", &form.email)],
    ),
  }
}

// ============================================================================
// Generic-user auth
// ============================================================================

#[derive(Deserialize)]
pub struct UserSignUpForm {
  username: String,
  email: String,
  #[serde(rename = "userType")]
  user_type: String,
  password: String,
}

pub async fn users_signup_submit(
  form: web::Form<UserSignUpForm>,
  use_case: web::Data<Arc<SignUpUseCase>>,
  templates: web::Data<TemplateEngine>,
) -> Result<HttpResponse, actix_web::Error> {
  let command = SignUpCommand::User {
    username: form.username.clone(),
    email: form.email.clone(),
    user_type: form.user_type.clone(),
    password: form.password.clone(),
  };

  match use_case.execute(command).await {
    Ok(response) => {
      tracing::info!(account_id = %response.account_id, "user signup");
      Ok(
        HttpResponse::Found()
          .cookie(session_cookie(
            response.session_token,
            response.session_ttl_seconds,
          ))
          .insert_header(("Location", response.home_path))
          .finish(),
      )
    }
    Err(e) => render_form_error(
      &templates,
      "users/signup.html.tera",
      &e,
      &[("username", &form.username), ("email", &form.email)],
    ),
  }
}

#[derive(Deserialize)]
pub struct UsernameLoginForm {
  username: String,
  password: String,
}

pub async fn users_login_submit(
  form: web::Form<UsernameLoginForm>,
  use_case: web::Data<Arc<LogInUseCase>>,
  templates: web::Data<TemplateEngine>,
) -> Result<HttpResponse, actix_web::Error> {
  let command = LogInCommand {
    role: AccountRole::User,
    identity: form.username.clone(),
    password: form.password.clone(),
  };

  match use_case.execute(command).await {
    Ok(response) => {
      tracing::info!(account_id = %response.account_id, "user login");
      Ok(
        HttpResponse::Found()
          .cookie(session_cookie(
            response.session_token,
            response.session_ttl_seconds,
          ))
          .insert_header(("Location", response.home_path))
          .finish(),
      )
    }
    Err(e) => render_form_error(
      &templates,
      "users/login.html.tera",
      &e,
      &[("username", &form.username)],
    ),
  }
}

// ============================================================================
// Logout
// ============================================================================

/// Destroys the session behind the cookie and clears it. A stale cookie is
/// cleared all the same; only a storage failure surfaces as an error.
pub async fn logout(
  req: HttpRequest,
  use_case: web::Data<Arc<LogOutUseCase>>,
) -> Result<HttpResponse, actix_web::Error> {
  if let Some(cookie) = req.cookie("session_token") {
    match use_case.execute(cookie.value().to_string()).await {
      Ok(()) | Err(AuthError::InvalidSession) => {}
      Err(e) => {
        tracing::error!("logout failed: {}", e);
        return Err(crate::adapters::http::errors::PageError::Internal(e.to_string()).into());
      }
    }
  }

  Ok(
    HttpResponse::Found()
      .cookie(expired_session_cookie())
      .insert_header(("Location", "/"))
      .finish(),
  )
}
