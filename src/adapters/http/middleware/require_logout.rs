use actix_web::{
  Error, HttpResponse,
  body::EitherBody,
  dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};
use futures_util::future::LocalBoxFuture;
use std::{future::ready, rc::Rc, sync::Arc};

use crate::domain::auth::services::AuthService;
use crate::domain::auth::value_objects::SessionToken;

/// Guest-only gate for signup and login pages.
///
/// A request carrying a valid session is redirected to its account's home
/// view; everyone else passes through. A stale or malformed cookie is
/// treated as no session at all.
pub struct RequireLogout {
  auth_service: Arc<AuthService>,
}

impl RequireLogout {
  pub fn new(auth_service: Arc<AuthService>) -> Self {
    Self { auth_service }
  }
}

impl<S, B> Transform<S, ServiceRequest> for RequireLogout
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: 'static,
{
  type Response = ServiceResponse<EitherBody<B>>;
  type Error = Error;
  type InitError = ();
  type Transform = RequireLogoutService<S>;
  type Future = std::future::Ready<Result<Self::Transform, Self::InitError>>;

  fn new_transform(&self, service: S) -> Self::Future {
    ready(Ok(RequireLogoutService {
      service: Rc::new(service),
      auth_service: self.auth_service.clone(),
    }))
  }
}

pub struct RequireLogoutService<S> {
  service: Rc<S>,
  auth_service: Arc<AuthService>,
}

impl<S, B> Service<ServiceRequest> for RequireLogoutService<S>
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
    let service = Rc::clone(&self.service);

    Box::pin(async move {
      if let Some(token_str) = token {
        if let Ok(session_token) = SessionToken::from_string(token_str) {
          if let Ok(account) = auth_service.validate_session(session_token).await {
            let res = req.into_response(
              HttpResponse::Found()
                .insert_header(("Location", account.role.home_path()))
                .finish(),
            );
            return Ok(res.map_into_right_body());
          }
        }
      }

      let res = service.call(req).await?;
      Ok(res.map_into_left_body())
    })
  }
}
