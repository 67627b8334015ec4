pub mod auth_web;
pub mod jobs_web;
pub mod pages;

use actix_web::{HttpMessage, HttpRequest};

use crate::adapters::http::errors::PageError;
use crate::domain::auth::entities::CurrentAccount;

/// Extract the authenticated account from request extensions
pub fn current_account(req: &HttpRequest) -> Result<CurrentAccount, PageError> {
  let account = req.extensions().get::<CurrentAccount>().cloned();

  if account.is_none() {
    tracing::warn!(
      "current_account: no account in request extensions for path {}",
      req.path()
    );
  }

  account.ok_or(PageError::Forbidden)
}
