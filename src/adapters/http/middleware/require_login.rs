use actix_web::{
  Error, HttpMessage, HttpResponse,
  body::EitherBody,
  dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};
use futures_util::future::LocalBoxFuture;
use std::{future::ready, rc::Rc, sync::Arc};

use crate::domain::auth::services::AuthService;
use crate::domain::auth::value_objects::{AccountRole, SessionToken};

/// Cookie-session gate for a role's protected pages.
///
/// Validates the `session_token` cookie and attaches the session's
/// `CurrentAccount` projection to the request extensions. Anything else,
/// including a valid session of the wrong role, is redirected to the role's
/// login form.
pub struct RequireLogin {
  auth_service: Arc<AuthService>,
  role: AccountRole,
}

impl RequireLogin {
  pub fn new(auth_service: Arc<AuthService>, role: AccountRole) -> Self {
    Self { auth_service, role }
  }
}

impl<S, B> Transform<S, ServiceRequest> for RequireLogin
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: 'static,
{
  type Response = ServiceResponse<EitherBody<B>>;
  type Error = Error;
  type InitError = ();
  type Transform = RequireLoginService<S>;
  type Future = std::future::Ready<Result<Self::Transform, Self::InitError>>;

  fn new_transform(&self, service: S) -> Self::Future {
    ready(Ok(RequireLoginService {
      service: Rc::new(service),
      auth_service: self.auth_service.clone(),
      role: self.role,
    }))
  }
}

pub struct RequireLoginService<S> {
  service: Rc<S>,
  auth_service: Arc<AuthService>,
  role: AccountRole,
}

impl<S, B> Service<ServiceRequest> for RequireLoginService<S>
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: 'static,
{
  type Response = ServiceResponse<EitherBody<B>>;
  type Error = Error;
  type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

  forward_ready!(service);

  fn call(&self, req: ServiceRequest) -> Self::Future {
    let token = req.cookie("session_token").map(|c| c.value().to_string());

    let auth_service = self.auth_service.clone();
    let role = self.role;
    let service = Rc::clone(&self.service);

    Box::pin(async move {
      let redirect = |req: ServiceRequest| {
        let res = req.into_response(
          HttpResponse::Found()
            .insert_header(("Location", role.login_path()))
            .finish(),
        );
        Ok(res.map_into_right_body())
      };

      let Some(token_str) = token else {
        return redirect(req);
      };

      let Ok(session_token) = SessionToken::from_string(token_str) else {
        return redirect(req);
      };

      match auth_service.validate_session(session_token).await {
        Ok(account) if account.role == role => {
          req.extensions_mut().insert(account);
          let res = service.call(req).await?;
          Ok(res.map_into_left_body())
        }
        // Wrong role counts as not logged in for this area
        Ok(_) | Err(_) => redirect(req),
      }
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::cookie::Cookie;
  use actix_web::http::StatusCode;
  use actix_web::{App, HttpRequest, test, web};

  use crate::domain::auth::entities::CurrentAccount;
  use crate::domain::auth::services::{AuthServiceConfig, NewAccount};
  use crate::domain::auth::test_support::{InMemoryAccounts, InMemorySessions, PlainHasher};
  use crate::domain::auth::value_objects::{AccountIdentity, Password};

  fn auth_service() -> Arc<AuthService> {
    Arc::new(AuthService::new(
      Arc::new(InMemoryAccounts::default()),
      Arc::new(InMemorySessions::default()),
      Arc::new(PlainHasher),
      AuthServiceConfig::default(),
    ))
  }

  async fn developer_token(auth: &AuthService) -> String {
    let (_, token) = auth
      .sign_up(NewAccount {
        identity: AccountIdentity::developer("dev@example.com").unwrap(),
        display_name: "Ada Lovelace".to_string(),
        email: Some("dev@example.com".to_string()),
        user_type: None,
        password: Password::new("Abcdefg1").unwrap(),
      })
      .await
      .unwrap();
    token.into_inner()
  }

  async fn whoami(req: HttpRequest) -> HttpResponse {
    match req.extensions().get::<CurrentAccount>() {
      Some(account) => HttpResponse::Ok().body(account.display_name.clone()),
      None => HttpResponse::InternalServerError().finish(),
    }
  }

  fn gated(auth: Arc<AuthService>, role: AccountRole) -> impl actix_web::dev::HttpServiceFactory {
    web::resource("/home")
      .wrap(RequireLogin::new(auth, role))
      .route(web::get().to(whoami))
  }

  #[actix_web::test]
  async fn test_missing_cookie_redirects_to_login() {
    let app =
      test::init_service(App::new().service(gated(auth_service(), AccountRole::Developer))).await;

    let res = test::call_service(&app, test::TestRequest::get().uri("/home").to_request()).await;
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(res.headers().get("Location").unwrap(), "/developer/login");
  }

  #[actix_web::test]
  async fn test_malformed_cookie_redirects_to_login() {
    let app =
      test::init_service(App::new().service(gated(auth_service(), AccountRole::Developer))).await;

    let req = test::TestRequest::get()
      .uri("/home")
      .cookie(Cookie::new("session_token", "not-a-token"))
      .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(res.headers().get("Location").unwrap(), "/developer/login");
  }

  #[actix_web::test]
  async fn test_valid_session_attaches_current_account() {
    let auth = auth_service();
    let token = developer_token(&auth).await;
    let app = test::init_service(App::new().service(gated(auth, AccountRole::Developer))).await;

    let req = test::TestRequest::get()
      .uri("/home")
      .cookie(Cookie::new("session_token", token))
      .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = test::read_body(res).await;
    assert_eq!(body, "Ada Lovelace");
  }

  #[actix_web::test]
  async fn test_wrong_role_redirects_to_login() {
    let auth = auth_service();
    let token = developer_token(&auth).await;
    let app = test::init_service(App::new().service(gated(auth, AccountRole::Employer))).await;

    let req = test::TestRequest::get()
      .uri("/home")
      .cookie(Cookie::new("session_token", token))
      .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(res.headers().get("Location").unwrap(), "/employer/login");
  }
}
