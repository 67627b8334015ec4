use actix_web::{
  HttpResponse,
  error::ResponseError,
  http::{StatusCode, header::ContentType},
};
use std::fmt;

use crate::domain::auth::errors::AuthError;
use crate::domain::job::errors::JobError;

/// Error type for page handlers, mapping domain errors to HTML responses.
///
/// Form submissions handle their recoverable errors themselves by
/// re-rendering the originating form; everything that falls through to
/// this type becomes a plain error page.
#[derive(Debug)]
pub enum PageError {
  /// The requested resource does not exist (404)
  NotFound,

  /// The acting account is not allowed to touch the resource (403)
  Forbidden,

  /// The request was malformed (400)
  BadRequest(String),

  /// Internal server error (500). The detail is logged, never shown.
  Internal(String),
}

impl fmt::Display for PageError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      PageError::NotFound => write!(f, "Not found"),
      PageError::Forbidden => write!(f, "Forbidden"),
      PageError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
      PageError::Internal(msg) => write!(f, "Internal error: {}", msg),
    }
  }
}

impl ResponseError for PageError {
  fn status_code(&self) -> StatusCode {
    match self {
      PageError::NotFound => StatusCode::NOT_FOUND,
      PageError::Forbidden => StatusCode::FORBIDDEN,
      PageError::BadRequest(_) => StatusCode::BAD_REQUEST,
      PageError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    let message = match self {
      PageError::NotFound => "The page you are looking for does not exist.",
      PageError::Forbidden => "You do not have access to this page.",
      PageError::BadRequest(_) => "The request could not be processed.",
      PageError::Internal(msg) => {
        tracing::error!("Internal error: {}", msg);
        "Something went wrong. Please try again later."
      }
    };

    let html = format!(
      "<!DOCTYPE html>\n<html>\n<head><title>{status}</title></head>\n\
       <body>\n<h1>{status}</h1>\n<p>{message}</p>\n\
       <p><a href=\"/\">Back to start</a></p>\n</body>\n</html>\n",
      status = status,
      message = message,
    );

    HttpResponse::build(status)
      .content_type(ContentType::html())
      .body(html)
  }
}

/// Convert JobError to PageError
impl From<JobError> for PageError {
  fn from(error: JobError) -> Self {
    match error {
      JobError::NotFound => PageError::NotFound,
      JobError::NotOwner | JobError::NotAnEmployer | JobError::NotADeveloper => {
        PageError::Forbidden
      }
      JobError::Storage(err) => PageError::Internal(err.to_string()),
    }
  }
}

/// Convert AuthError to PageError, for handlers that do not re-render a form
impl From<AuthError> for PageError {
  fn from(error: AuthError) -> Self {
    match error {
      AuthError::CredentialMismatch | AuthError::DuplicateIdentity => {
        PageError::BadRequest(error.to_string())
      }
      AuthError::Validation(err) => PageError::BadRequest(err.to_string()),
      AuthError::InvalidSession => PageError::Forbidden,
      AuthError::SessionDestroy(msg) => PageError::Internal(msg),
      AuthError::Storage(err) => PageError::Internal(err.to_string()),
      AuthError::Hash(err) => PageError::Internal(err.to_string()),
    }
  }
}

/// Convert template rendering failures
impl From<tera::Error> for PageError {
  fn from(error: tera::Error) -> Self {
    PageError::Internal(error.to_string())
  }
}
