// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Session token issuance and verification (HS256 JWT).

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use super::claims::{ClaimsUser, TokenClaims};

/// Lifetime of an issued token.
pub const TOKEN_TTL_SECS: i64 = 60 * 60;

/// Token issuance/verification errors.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token has expired")]
    Expired,
    #[error("token signature is invalid")]
    InvalidSignature,
    #[error("token is malformed")]
    Malformed,
    #[error("failed to sign token: {0}")]
    Signing(String),
}

/// Issues and verifies signed, time-limited session tokens.
///
/// The signing secret is process-wide configuration shared by every request.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    /// Create a token service signing with `secret`.
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::seconds(TOKEN_TTL_SECS),
        }
    }

    /// Issue a token for `user_id`, valid for one hour from now.
    pub fn issue(&self, user_id: &str) -> Result<String, TokenError> {
        self.issue_at(user_id, Utc::now())
    }

    /// Issue a token as if the current time were `issued_at`.
    pub fn issue_at(&self, user_id: &str, issued_at: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = TokenClaims {
            user: ClaimsUser {
                id: user_id.to_string(),
            },
            iat: issued_at.timestamp(),
            exp: (issued_at + self.ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Verify a token's signature and expiry and return its claims.
    pub fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is exact; no clock skew allowance
        validation.leeway = 0;

        let token_data = decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(
            |e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed,
            },
        )?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn issued_token_verifies_to_same_user() {
        let service = TokenService::new(SECRET);
        let token = service.issue("user_123").unwrap();

        let claims = service.verify(&token).unwrap();
        assert_eq!(claims.user.id, "user_123");
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_SECS);
    }

    #[test]
    fn token_from_other_secret_is_rejected() {
        let issuer = TokenService::new("other-secret");
        let token = issuer.issue("user_123").unwrap();

        let result = TokenService::new(SECRET).verify(&token);
        assert!(matches!(result, Err(TokenError::InvalidSignature)));
    }

    #[test]
    fn expired_token_is_rejected() {
        let service = TokenService::new(SECRET);
        let token = service
            .issue_at("user_123", Utc::now() - Duration::hours(2))
            .unwrap();

        assert!(matches!(service.verify(&token), Err(TokenError::Expired)));
    }

    #[test]
    fn token_near_end_of_lifetime_still_verifies() {
        let service = TokenService::new(SECRET);
        let token = service
            .issue_at("user_123", Utc::now() - Duration::minutes(59))
            .unwrap();

        assert!(service.verify(&token).is_ok());
    }

    #[test]
    fn garbage_is_malformed() {
        let service = TokenService::new(SECRET);
        assert!(matches!(service.verify("not.a.jwt"), Err(TokenError::Malformed)));
        assert!(matches!(service.verify(""), Err(TokenError::Malformed)));
    }

    #[test]
    fn tampered_payload_is_rejected() {
        use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

        let service = TokenService::new(SECRET);
        let token = service.issue("user_123").unwrap();
        let parts: Vec<&str> = token.split('.').collect();

        let forged_claims = format!(
            r#"{{"user":{{"id":"user_456"}},"iat":{},"exp":{}}}"#,
            Utc::now().timestamp(),
            Utc::now().timestamp() + 3600
        );
        let forged = format!(
            "{}.{}.{}",
            parts[0],
            URL_SAFE_NO_PAD.encode(forged_claims.as_bytes()),
            parts[2]
        );

        assert!(matches!(service.verify(&forged), Err(TokenError::InvalidSignature)));
    }
}
