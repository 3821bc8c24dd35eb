//! Service-account OAuth: sign a JWT assertion and trade it for a bearer token.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use crate::credentials::ServiceAccountKey;
use crate::error::{Result, StorageError};

/// Read-only Drive access.
pub const DRIVE_READONLY_SCOPE: &str = "https://www.googleapis.com/auth/drive.readonly";

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Assertion lifetime; Google rejects anything over one hour.
const ASSERTION_LIFETIME_SECS: i64 = 3600;

#[derive(Debug, Serialize, PartialEq, Eq)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

fn claims<'a>(key: &'a ServiceAccountKey, scope: &'a str, now: DateTime<Utc>) -> Claims<'a> {
    Claims {
        iss: &key.client_email,
        scope,
        aud: &key.token_uri,
        iat: now.timestamp(),
        exp: (now + Duration::seconds(ASSERTION_LIFETIME_SECS)).timestamp(),
    }
}

/// Signs an RS256 assertion for `scope` with the key's private key.
pub fn signed_assertion(key: &ServiceAccountKey, scope: &str, now: DateTime<Utc>) -> Result<String> {
    let mut header = Header::new(Algorithm::RS256);
    header.kid = key.private_key_id.clone();
    let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())?;
    Ok(jsonwebtoken::encode(
        &header,
        &claims(key, scope, now),
        &encoding_key,
    )?)
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Exchanges a freshly signed assertion for a Drive read-only access token.
///
/// No caching: every call performs one token request.
pub fn fetch_access_token(
    http: &reqwest::blocking::Client,
    key: &ServiceAccountKey,
) -> Result<String> {
    let assertion = signed_assertion(key, DRIVE_READONLY_SCOPE, Utc::now())?;
    let response = http
        .post(&key.token_uri)
        .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
        .send()?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().unwrap_or_default();
        return Err(StorageError::TokenExchange(format!(
            "HTTP {}: {}",
            status.as_u16(),
            body
        )));
    }

    let token: TokenResponse = response.json()?;
    tracing::debug!(account = %key.client_email, "obtained access token");
    Ok(token.access_token)
}
