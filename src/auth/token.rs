// JWT validation for tokens issued by the identity provider.
// The provider and this service share JWT_SECRET; claims carry the
// principal's id, email, and role.

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::auth::error::AuthError;
use crate::auth::models::Role;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i32, // user_id
    pub email: String,
    pub role: Role,
    pub exp: i64, // expiration timestamp
    pub iat: i64, // issued at timestamp
}

/// Token service for JWT operations
pub struct TokenService {
    secret: String,
    access_token_duration: i64, // in seconds
}

impl TokenService {
    /// Create a new TokenService with secret key.
    /// Access tokens expire in 15 minutes (900 seconds).
    pub fn new(secret: String) -> Self {
        Self {
            secret,
            access_token_duration: 900,
        }
    }

    /// Generate an access token (15 minutes)
    pub fn generate_access_token(
        &self,
        user_id: i32,
        email: &str,
        role: Role,
    ) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();
        let exp = now + self.access_token_duration;

        let claims = Claims {
            sub: user_id,
            email: email.to_string(),
            role,
            iat: now,
            exp,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AuthError::TokenGenerationError(e.to_string()))
    }

    /// Validate an access token and return its claims
    pub fn validate_access_token(&self, token: &str) -> Result<Claims, AuthError> {
        let validation = Validation::default();

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| {
            if e.to_string().contains("ExpiredSignature") {
                AuthError::ExpiredToken
            } else {
                AuthError::InvalidToken
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn test_token_service() -> TokenService {
        TokenService::new("test_secret_key_for_testing_purposes".to_string())
    }

    #[test]
    fn test_generate_and_validate_token() {
        let service = test_token_service();
        let token = service
            .generate_access_token(42, "guest@example.com", Role::User)
            .unwrap();

        let claims = service.validate_access_token(&token).unwrap();
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.email, "guest@example.com");
        assert_eq!(claims.role, Role::User);
    }

    #[test]
    fn test_admin_role_survives_round_trip() {
        let service = test_token_service();
        let token = service
            .generate_access_token(1, "admin@example.com", Role::Admin)
            .unwrap();

        let claims = service.validate_access_token(&token).unwrap();
        assert_eq!(claims.role, Role::Admin);
    }

    #[test]
    fn test_expired_token_rejected() {
        let service = test_token_service();

        let claims = Claims {
            sub: 1,
            email: "guest@example.com".to_string(),
            role: Role::User,
            iat: Utc::now().timestamp() - 1000,
            exp: Utc::now().timestamp() - 500,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret("test_secret_key_for_testing_purposes".as_bytes()),
        )
        .unwrap();

        let result = service.validate_access_token(&token);
        assert!(matches!(result.unwrap_err(), AuthError::ExpiredToken));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let service = test_token_service();
        let token = service
            .generate_access_token(1, "guest@example.com", Role::User)
            .unwrap();

        let other = TokenService::new("a_completely_different_secret".to_string());
        let result = other.validate_access_token(&token);
        assert!(matches!(result.unwrap_err(), AuthError::InvalidToken));
    }

    proptest! {
        #[test]
        fn prop_valid_tokens_round_trip(
            user_id in 1i32..1000000,
            email in "[a-z]{3,10}@[a-z]{3,10}\\.(com|org|net)"
        ) {
            let service = test_token_service();
            let token = service.generate_access_token(user_id, &email, Role::User)?;

            let claims = service.validate_access_token(&token).unwrap();
            prop_assert_eq!(claims.sub, user_id);
            prop_assert_eq!(claims.email, email);
        }

        #[test]
        fn prop_malformed_tokens_rejected(malformed in "[a-zA-Z0-9]{10,50}") {
            let service = test_token_service();
            let result = service.validate_access_token(&malformed);
            prop_assert!(result.is_err());
        }
    }
}
