// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};

use super::error::HttpError;

/// Header carrying the username vouched for by the authentication layer in
/// front of this service.
pub const ACTOR_HEADER: &str = "x-authenticated-user";

#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::infrastructure(
                    "application state missing",
                ))
            })?;

        let username = parts
            .headers
            .get(ACTOR_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::unauthorized("missing user identity"))
            })?;

        let user = app_state
            .services
            .resolve_actor(username)
            .await
            .map_err(HttpError::from_error)?;

        Ok(Self(user))
    }
}
