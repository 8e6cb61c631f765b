use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use storage::error::StorageError;
use storage::repository::user::UserRepository;
use uuid::Uuid;

use crate::error::WebError;
use crate::state::AppState;

const TOKEN_LIFETIME_SECS: usize = 60 * 60;

/// JWT claims carried by a bearer token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,
    pub email: String,
    /// Issued at (Unix timestamp)
    pub iat: usize,
    /// Expiration time (Unix timestamp)
    pub exp: usize,
}

/// HS256 key pair derived from the configured secret.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl JwtKeys {
    pub fn from_secret(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }

    pub fn create_token(&self, user_id: Uuid, email: &str) -> Result<String, WebError> {
        let now = unix_now();

        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            iat: now,
            exp: now + TOKEN_LIFETIME_SECS,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| WebError::InternalServerError(format!("Failed to sign token: {e}")))
    }

    pub fn verify_token(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let validation = Validation::new(Algorithm::HS256);
        decode::<Claims>(token, &self.decoding, &validation).map(|data| data.claims)
    }
}

fn unix_now() -> usize {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as usize)
        .unwrap_or(0)
}

/// The authenticated caller, attached to the request by [`require_auth`].
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: Uuid,
    pub email: String,
}

/// Middleware requiring a valid bearer token whose user still exists.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, WebError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(h) if h.starts_with("Bearer ") => &h[7..],
        _ => return Err(WebError::Unauthorized("Authentication required".to_string())),
    };

    let claims = state
        .jwt
        .verify_token(token)
        .map_err(|_| WebError::Unauthorized("Invalid or expired token".to_string()))?;

    let user_id: Uuid = claims
        .sub
        .parse()
        .map_err(|_| WebError::Unauthorized("Invalid or expired token".to_string()))?;

    let repo = UserRepository::new(state.db.pool());
    let user = repo
        .find_by_id(user_id)
        .await
        .map_err(map_user_lookup_error)?;

    request.extensions_mut().insert(CurrentUser {
        user_id: user.user_id,
        email: user.email,
    });

    Ok(next.run(request).await)
}

/// A missing user means the token's subject no longer exists; any other
/// storage failure is a backend problem, not a credential problem.
fn map_user_lookup_error(error: StorageError) -> WebError {
    match error {
        StorageError::NotFound => WebError::Unauthorized("User not found".to_string()),
        other => WebError::Storage(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_round_trips() {
        let keys = JwtKeys::from_secret(b"test-secret");
        let user_id = Uuid::new_v4();

        let token = keys.create_token(user_id, "lifter@example.com").unwrap();
        let claims = keys.verify_token(&token).unwrap();

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.email, "lifter@example.com");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let keys = JwtKeys::from_secret(b"test-secret");
        let other = JwtKeys::from_secret(b"other-secret");

        let token = other.create_token(Uuid::new_v4(), "a@example.com").unwrap();
        assert!(keys.verify_token(&token).is_err());
    }

    #[test]
    fn rejects_expired_token() {
        let keys = JwtKeys::from_secret(b"test-secret");
        let past = unix_now() - 7200;

        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            email: "a@example.com".to_string(),
            iat: past,
            exp: past + 60,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert!(keys.verify_token(&token).is_err());
    }

    #[test]
    fn rejects_garbage_token() {
        let keys = JwtKeys::from_secret(b"test-secret");
        assert!(keys.verify_token("not.a.jwt").is_err());
    }

    #[test]
    fn missing_user_maps_to_unauthorized() {
        let mapped = map_user_lookup_error(StorageError::NotFound);
        assert!(matches!(mapped, WebError::Unauthorized(_)));
    }

    #[test]
    fn storage_failure_is_not_a_credential_error() {
        use axum::http::StatusCode;
        use axum::response::IntoResponse;

        let mapped = map_user_lookup_error(StorageError::Database(sqlx::Error::PoolTimedOut));
        assert!(matches!(mapped, WebError::Storage(_)));
        assert_eq!(
            mapped.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
