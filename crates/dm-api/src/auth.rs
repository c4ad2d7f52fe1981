use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};

use crate::error::ApiError;

pub const API_KEY_HEADER: &str = "x-api-key";

#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub api_key: String,
}

/// Extractor consumed as `_auth: AuthUser` by protected handlers.
/// Rejects with 401 unless the `x-api-key` header equals the configured key.
pub struct AuthUser;

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AuthConfig: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let config = AuthConfig::from_ref(state);
        let provided = parts
            .headers
            .get(API_KEY_HEADER)
            .and_then(|value| value.to_str().ok());

        match provided {
            Some(key) if key == config.api_key => Ok(AuthUser),
            Some(_) => Err(ApiError::Unauthorized("invalid api key".into())),
            None => Err(ApiError::Unauthorized("missing api key".into())),
        }
    }
}
