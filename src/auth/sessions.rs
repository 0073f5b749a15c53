/**
 * Session Tokens
 *
 * This module handles bearer-token issuance and verification for the admin
 * session. Tokens are stateless: nothing is recorded server-side, and
 * validity is determined entirely by signature and expiry at verification
 * time.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Token lifetime: tokens expire 24 hours after issuance
pub const TOKEN_TTL_SECS: u64 = 24 * 60 * 60;

/// JWT claims carried by an admin session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminClaims {
    /// Administrator id
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Token issuer and verifier
///
/// Holds the signing and verification keys, built once from the configured
/// secret at construction. The secret is injected here rather than read
/// from the environment per call, so tests can run with distinct secrets.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenService {
    /// Build a token service from the shared signing secret
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issue a signed token for the given administrator
    ///
    /// The token carries the administrator id, the issuance timestamp and
    /// a fixed expiry 24 hours out, signed with HS256.
    pub fn issue(&self, admin_id: i32) -> Result<String, jsonwebtoken::errors::Error> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        let claims = AdminClaims {
            sub: admin_id.to_string(),
            exp: now + TOKEN_TTL_SECS,
            iat: now,
        };

        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verify a token's signature and expiry
    ///
    /// Returns the decoded claims only when the signature matches this
    /// service's secret and the token is unexpired.
    pub fn verify(&self, token: &str) -> Result<AdminClaims, jsonwebtoken::errors::Error> {
        let token_data = decode::<AdminClaims>(token, &self.decoding, &Validation::default())?;
        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_token() {
        let tokens = TokenService::new("test-secret");
        let result = tokens.issue(1);
        assert!(result.is_ok());
        assert!(!result.unwrap().is_empty());
    }

    #[test]
    fn test_issue_then_verify_round_trip() {
        let tokens = TokenService::new("test-secret");
        let token = tokens.issue(1).unwrap();

        let claims = tokens.verify(&token).unwrap();
        assert_eq!(claims.sub, "1");
        assert_eq!(claims.exp, claims.iat + TOKEN_TTL_SECS);
    }

    #[test]
    fn test_verify_rejects_other_secret() {
        let issuer = TokenService::new("secret-a");
        let verifier = TokenService::new("secret-b");

        let token = issuer.issue(1).unwrap();
        assert!(verifier.verify(&token).is_err());
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        let tokens = TokenService::new("test-secret");
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();

        // Expired well past the default validation leeway
        let claims = AdminClaims {
            sub: "1".to_string(),
            exp: now - 3600,
            iat: now - 3600 - TOKEN_TTL_SECS,
        };
        let expired = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert!(tokens.verify(&expired).is_err());
    }

    #[test]
    fn test_verify_rejects_malformed_token() {
        let tokens = TokenService::new("test-secret");
        assert!(tokens.verify("not.a.token").is_err());
        assert!(tokens.verify("").is_err());
    }
}
