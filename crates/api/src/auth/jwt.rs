//! Verification of bearer access tokens.
//!
//! Tokens are HS256-signed JWTs minted by the identity provider that owns
//! the user directory. This server never issues tokens; it only checks the
//! signature and expiry against the shared secret and reads the [`Claims`].

use issuetrack_core::types::DbId;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

/// Claims carried by an access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject: the user's database id.
    pub sub: DbId,
    /// Role name, `"admin"` or `"staff"`.
    pub role: String,
    /// Expiry (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at (UTC Unix timestamp).
    pub iat: i64,
}

/// Settings for verifying access tokens.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC secret shared with the token issuer.
    pub secret: String,
}

impl JwtConfig {
    /// Read `JWT_SECRET` from the environment.
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is unset or empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");
        Self { secret }
    }
}

/// Check an access token's signature and expiry and return its [`Claims`].
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )?;
    Ok(data.claims)
}
