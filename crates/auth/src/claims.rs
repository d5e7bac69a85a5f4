use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use claimdesk_core::UserId;

/// JWT claims model (transport-agnostic).
///
/// The minimal set of claims expected once a token has been decoded and
/// signature-verified by whatever transport/security layer is in use.
/// Issuance and verification stay outside this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaims {
    /// Subject: the user id, carried as a string per JWT convention.
    pub sub: String,

    /// Issued-at timestamp.
    pub issued_at: DateTime<Utc>,

    /// Expiration timestamp.
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenValidationError {
    #[error("token has expired")]
    Expired,

    #[error("token not yet valid (issued_at is in the future)")]
    NotYetValid,

    #[error("invalid token time window (expires_at <= issued_at)")]
    InvalidTimeWindow,

    #[error("subject is not a valid user id: {0}")]
    InvalidSubject(String),
}

impl JwtClaims {
    /// The subject parsed as a user id.
    pub fn subject_id(&self) -> Result<UserId, TokenValidationError> {
        self.sub
            .parse()
            .map_err(|_| TokenValidationError::InvalidSubject(self.sub.clone()))
    }
}

/// Deterministically validate JWT claims against a supplied clock reading.
pub fn validate_claims(claims: &JwtClaims, now: DateTime<Utc>) -> Result<(), TokenValidationError> {
    if claims.expires_at <= claims.issued_at {
        return Err(TokenValidationError::InvalidTimeWindow);
    }
    if now < claims.issued_at {
        return Err(TokenValidationError::NotYetValid);
    }
    if now >= claims.expires_at {
        return Err(TokenValidationError::Expired);
    }
    claims.subject_id().map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn claims(sub: &str) -> JwtClaims {
        let now = Utc::now();
        JwtClaims {
            sub: sub.to_string(),
            issued_at: now - Duration::minutes(5),
            expires_at: now + Duration::minutes(55),
        }
    }

    #[test]
    fn valid_claims_pass_and_expose_the_user_id() {
        let claims = claims("42");
        assert!(validate_claims(&claims, Utc::now()).is_ok());
        assert_eq!(claims.subject_id().unwrap(), UserId::new(42));
    }

    #[test]
    fn expired_token_is_rejected() {
        let claims = claims("42");
        let later = claims.expires_at + Duration::seconds(1);
        assert_eq!(
            validate_claims(&claims, later),
            Err(TokenValidationError::Expired)
        );
    }

    #[test]
    fn token_from_the_future_is_rejected() {
        let claims = claims("42");
        let earlier = claims.issued_at - Duration::seconds(1);
        assert_eq!(
            validate_claims(&claims, earlier),
            Err(TokenValidationError::NotYetValid)
        );
    }

    #[test]
    fn inverted_time_window_is_rejected() {
        let mut claims = claims("42");
        claims.expires_at = claims.issued_at;
        assert_eq!(
            validate_claims(&claims, Utc::now()),
            Err(TokenValidationError::InvalidTimeWindow)
        );
    }

    #[test]
    fn malformed_subject_is_rejected() {
        let claims = claims("not-an-id");
        match validate_claims(&claims, Utc::now()) {
            Err(TokenValidationError::InvalidSubject(_)) => {}
            other => panic!("Expected InvalidSubject, got {other:?}"),
        }
    }
}
