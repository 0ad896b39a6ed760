//! Access token service - RS256 signed JWTs.
//!
//! Tokens carry the account ID and phone number together with issue and
//! expiry timestamps. Verification accepts only RSA signature algorithms
//! and compares expiry against an explicit instant, with no leeway.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use jsonwebtoken::{
    decode, decode_header, encode, errors::ErrorKind, Algorithm, DecodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{SigningKeys, MSG_SIGN_TOKEN_FAILED};
use crate::errors::{AppError, AppResult};

/// Signature algorithms a token may declare.
const RSA_ALGORITHMS: [Algorithm; 3] = [Algorithm::RS256, Algorithm::RS384, Algorithm::RS512];

/// JWT claims payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    pub user_id: i32,
    pub phone_number: String,
    pub iat: i64,
    pub exp: i64,
}

/// Why a presented token was refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("token is malformed")]
    Malformed,

    #[error("unexpected signing method: {0}")]
    UnexpectedAlgorithm(String),

    #[error("token signature is invalid")]
    InvalidSignature,

    #[error("token is expired")]
    Expired,
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        AppError::unauthorized(err.to_string())
    }
}

/// A freshly signed token and the instant it stops being valid.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl IssuedToken {
    /// Expiry rendered as RFC 3339 with second precision.
    pub fn expired_at_rfc3339(&self) -> String {
        self.expires_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

/// Issues and verifies access tokens with a fixed key pair and lifetime.
#[derive(Debug, Clone)]
pub struct TokenService {
    keys: SigningKeys,
    ttl: Duration,
}

impl TokenService {
    pub fn new(keys: SigningKeys, ttl: Duration) -> Self {
        Self { keys, ttl }
    }

    /// Sign a token for the account, valid from `now` for the configured lifetime.
    pub fn issue(
        &self,
        user_id: i32,
        phone_number: &str,
        now: DateTime<Utc>,
    ) -> AppResult<IssuedToken> {
        let expires_at = now + self.ttl;

        let claims = AccessTokenClaims {
            user_id,
            phone_number: phone_number.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(
            &Header::new(Algorithm::RS256),
            &claims,
            self.keys.encoding_key(),
        )
        .map_err(|e| AppError::internal(format!("{}: {}", MSG_SIGN_TOKEN_FAILED, e)))?;

        Ok(IssuedToken { token, expires_at })
    }

    /// Verify a token against this service's public key.
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<AccessTokenClaims, TokenError> {
        verify_token(token, self.keys.decoding_key(), now)
    }
}

/// Check signature, algorithm family and expiry of `token`.
///
/// A token whose `exp` is at or before `now` is expired.
pub fn verify_token(
    token: &str,
    public_key: &DecodingKey,
    now: DateTime<Utc>,
) -> Result<AccessTokenClaims, TokenError> {
    let header = decode_header(token).map_err(|_| TokenError::Malformed)?;
    if !RSA_ALGORITHMS.contains(&header.alg) {
        return Err(TokenError::UnexpectedAlgorithm(format!("{:?}", header.alg)));
    }

    let mut validation = Validation::new(header.alg);
    validation.algorithms = RSA_ALGORITHMS.to_vec();
    validation.validate_exp = false;
    validation.leeway = 0;

    let data = decode::<AccessTokenClaims>(token, public_key, &validation).map_err(|e| {
        match e.kind() {
            ErrorKind::InvalidSignature => TokenError::InvalidSignature,
            ErrorKind::InvalidAlgorithm => {
                TokenError::UnexpectedAlgorithm(format!("{:?}", header.alg))
            }
            _ => TokenError::Malformed,
        }
    })?;

    if now.timestamp() >= data.claims.exp {
        return Err(TokenError::Expired);
    }

    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use jsonwebtoken::EncodingKey;

    const PRIVATE_PEM: &[u8] = include_bytes!("../../tests/fixtures/app.rsa");
    const PUBLIC_PEM: &[u8] = include_bytes!("../../tests/fixtures/app.rsa.pub");
    const OTHER_PRIVATE_PEM: &[u8] = include_bytes!("../../tests/fixtures/other.rsa");
    const OTHER_PUBLIC_PEM: &[u8] = include_bytes!("../../tests/fixtures/other.rsa.pub");

    fn service() -> TokenService {
        let keys = SigningKeys::from_pem(PRIVATE_PEM, PUBLIC_PEM).unwrap();
        TokenService::new(keys, Duration::hours(1))
    }

    fn issued_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_issue_then_verify_returns_claims() {
        let tokens = service();
        let issued = tokens.issue(7, "+628123456789", issued_at()).unwrap();

        let claims = tokens.verify(&issued.token, issued_at()).unwrap();
        assert_eq!(claims.user_id, 7);
        assert_eq!(claims.phone_number, "+628123456789");
        assert_eq!(claims.iat, issued_at().timestamp());
        assert_eq!(claims.exp, issued_at().timestamp() + 3600);
    }

    #[test]
    fn test_expiry_string_is_one_hour_later() {
        let issued = service().issue(1, "+628123456789", issued_at()).unwrap();
        assert_eq!(issued.expired_at_rfc3339(), "2024-01-01T01:00:00Z");
    }

    #[test]
    fn test_token_valid_until_expiry_instant() {
        let tokens = service();
        let issued = tokens.issue(1, "+628123456789", issued_at()).unwrap();

        let just_before = issued_at() + Duration::hours(1) - Duration::seconds(1);
        assert!(tokens.verify(&issued.token, just_before).is_ok());

        let at_expiry = issued_at() + Duration::hours(1);
        assert_eq!(tokens.verify(&issued.token, at_expiry), Err(TokenError::Expired));
        assert_eq!(
            tokens.verify(&issued.token, at_expiry + Duration::days(1)),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn test_token_from_other_key_is_rejected() {
        let other_keys = SigningKeys::from_pem(OTHER_PRIVATE_PEM, OTHER_PUBLIC_PEM).unwrap();
        let other = TokenService::new(other_keys, Duration::hours(1));
        let issued = other.issue(1, "+628123456789", issued_at()).unwrap();

        assert_eq!(
            service().verify(&issued.token, issued_at()),
            Err(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn test_swapped_payload_is_rejected() {
        let tokens = service();
        let mine = tokens.issue(1, "+628111111111", issued_at()).unwrap();
        let theirs = tokens.issue(2, "+628222222222", issued_at()).unwrap();

        let mine_parts: Vec<&str> = mine.token.split('.').collect();
        let theirs_parts: Vec<&str> = theirs.token.split('.').collect();
        let forged = format!("{}.{}.{}", mine_parts[0], theirs_parts[1], mine_parts[2]);

        assert_eq!(
            tokens.verify(&forged, issued_at()),
            Err(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn test_hmac_token_signed_with_public_key_is_rejected() {
        let claims = AccessTokenClaims {
            user_id: 1,
            phone_number: "+628123456789".to_string(),
            iat: issued_at().timestamp(),
            exp: issued_at().timestamp() + 3600,
        };
        let forged = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(PUBLIC_PEM),
        )
        .unwrap();

        assert!(matches!(
            service().verify(&forged, issued_at()),
            Err(TokenError::UnexpectedAlgorithm(_))
        ));
    }

    #[test]
    fn test_unsigned_token_is_rejected() {
        // {"alg":"none","typ":"JWT"}.{"user_id":1,...}.
        let token = "eyJhbGciOiJub25lIiwidHlwIjoiSldUIn0.\
                     eyJ1c2VyX2lkIjoxLCJwaG9uZV9udW1iZXIiOiIrNjI4MTIzNDU2Nzg5IiwiaWF0IjowLCJleHAiOjQxMDI0NDQ4MDB9.";
        assert!(service().verify(token, issued_at()).is_err());
    }

    #[test]
    fn test_garbage_is_malformed() {
        assert_eq!(
            service().verify("not-a-token", issued_at()),
            Err(TokenError::Malformed)
        );
    }

    #[test]
    fn test_token_error_maps_to_unauthorized() {
        assert_eq!(
            AppError::from(TokenError::Expired),
            AppError::Unauthorized("token is expired".to_string())
        );
    }
}
