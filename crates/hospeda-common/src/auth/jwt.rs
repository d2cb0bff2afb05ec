//! Backend access token decoding
//!
//! The hotel backend issues the JWT; the console only reads its claims to
//! learn who is calling and with which role. When a shared secret is
//! configured the HS256 signature is verified as well; otherwise the token
//! is decoded without signature checks and the backend remains the
//! authority that rejects forged tokens.

use chrono::{DateTime, TimeZone, Utc};
use hospeda_core::{EntityId, StaffRole};
use jsonwebtoken::{decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::AppError;

/// Claims carried in a backend access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID); numeric or string
    #[serde(default, alias = "id", deserialize_with = "deserialize_subject")]
    pub sub: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(
        default,
        rename = "nombre_usuario",
        alias = "username",
        skip_serializing_if = "Option::is_none"
    )]
    pub username: Option<String>,
    /// Staff role (`admin`, `recepcionista`)
    #[serde(default)]
    pub rol: StaffRole,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

impl Claims {
    /// Get the user ID, when the subject is numeric
    #[must_use]
    pub fn user_id(&self) -> Option<EntityId> {
        self.sub.as_deref().and_then(|s| EntityId::parse(s).ok())
    }

    /// Expiry as a timestamp
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.exp, 0).single()
    }

    /// Check if the token is expired
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

// Subjects arrive as numbers from some backends and strings from others
fn deserialize_subject<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// JWT service for decoding backend tokens
#[derive(Clone)]
pub struct JwtService {
    decoding_key: DecodingKey,
    encoding_key: Option<EncodingKey>,
    verify_signature: bool,
    leeway_secs: u64,
}

impl JwtService {
    /// Create a decoder; with `secret` the HS256 signature is verified
    #[must_use]
    pub fn new(secret: Option<&str>, leeway_secs: u64) -> Self {
        match secret {
            Some(secret) => Self {
                decoding_key: DecodingKey::from_secret(secret.as_bytes()),
                encoding_key: Some(EncodingKey::from_secret(secret.as_bytes())),
                verify_signature: true,
                leeway_secs,
            },
            None => Self {
                decoding_key: DecodingKey::from_secret(&[]),
                encoding_key: None,
                verify_signature: false,
                leeway_secs,
            },
        }
    }

    /// Whether signatures are checked
    #[must_use]
    pub fn verifies_signature(&self) -> bool {
        self.verify_signature
    }

    /// Decode a token and validate its expiry
    ///
    /// # Errors
    /// `TokenExpired` for expired tokens, `InvalidToken` for anything else
    pub fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = self.leeway_secs;
        validation.validate_aud = false;
        if !self.verify_signature {
            validation.insecure_disable_signature_validation();
        }

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            }
        })?;

        Ok(token_data.claims)
    }

    /// Sign claims with the configured secret
    ///
    /// Used by local tooling and tests that stand in for the backend.
    ///
    /// # Errors
    /// Returns an error when no secret is configured or encoding fails
    pub fn issue_token(&self, claims: &Claims) -> Result<String, AppError> {
        let key = self
            .encoding_key
            .as_ref()
            .ok_or_else(|| AppError::Config("JWT secret required to issue tokens".to_string()))?;

        encode(&Header::default(), claims, key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode JWT")))
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("verify_signature", &self.verify_signature)
            .field("leeway_secs", &self.leeway_secs)
            .finish_non_exhaustive()
    }
}
