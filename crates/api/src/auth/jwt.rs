//! Bearer and refresh token issuing.
//!
//! A login hands out two credentials: a short-lived HS256 access token the
//! client sends as `Authorization: Bearer`, and an opaque refresh token that
//! can be exchanged exactly once for a fresh pair. The server keeps only the
//! SHA-256 digest of each refresh token.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use skillsync_core::types::{DbId, Timestamp};
use uuid::Uuid;

/// Payload of an access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User id.
    pub sub: DbId,
    pub exp: i64,
    pub iat: i64,
    /// Distinguishes tokens minted for the same user in the same second.
    pub jti: String,
}

/// Signing secret and token lifetimes.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub access_ttl: Duration,
    pub refresh_ttl: Duration,
}

/// A signed access token together with its lifetime in seconds.
#[derive(Debug, Clone)]
pub struct AccessToken {
    pub token: String,
    pub expires_in: i64,
}

/// A freshly minted refresh token.
///
/// `plaintext` goes to the client once; `digest` and `expires_at` are what
/// the session row stores.
#[derive(Debug, Clone)]
pub struct RefreshToken {
    pub plaintext: String,
    pub digest: String,
    pub expires_at: Timestamp,
}

impl JwtConfig {
    pub fn issue_access_token(&self, user_id: DbId) -> jsonwebtoken::errors::Result<AccessToken> {
        let issued_at = Utc::now();
        let claims = Claims {
            sub: user_id,
            exp: (issued_at + self.access_ttl).timestamp(),
            iat: issued_at.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )?;
        Ok(AccessToken {
            token,
            expires_in: self.access_ttl.num_seconds(),
        })
    }

    /// Verify signature and expiry of a bearer token.
    ///
    /// Only HS256 is accepted and `exp`/`sub` must both be present.
    pub fn verify_access_token(&self, token: &str) -> jsonwebtoken::errors::Result<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp", "sub"]);
        validation.leeway = 0;
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )?;
        Ok(data.claims)
    }

    pub fn issue_refresh_token(&self) -> RefreshToken {
        // Two v4 UUIDs give 244 random bits.
        let plaintext = format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple());
        RefreshToken {
            digest: refresh_token_digest(&plaintext),
            plaintext,
            expires_at: Utc::now() + self.refresh_ttl,
        }
    }
}

/// Hex-encoded SHA-256 of a refresh token, as stored in `user_sessions`.
pub fn refresh_token_digest(token: &str) -> String {
    format!("{:x}", Sha256::digest(token.as_bytes()))
}
