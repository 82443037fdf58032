use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

/// Claims carried by bearer tokens issued for this API.
///
/// Tokens are minted by the account service; this API only verifies them.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Username of the authenticated caller.
    pub username: String,
    /// Expiration time (Unix timestamp).
    pub exp: i64,
}

/// Verify an HS256-signed bearer token against the configured secret and
/// return its claims.
///
/// # Errors
///
/// Returns an error if the token is malformed, carries an invalid signature,
/// is expired, or has an empty `username` claim.
pub fn verify(token: &str, secret: &str) -> anyhow::Result<Claims> {
    let key = DecodingKey::from_secret(secret.as_bytes());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &key, &validation)
        .map_err(|e| anyhow::anyhow!("Invalid bearer token: {e}"))?;

    if token_data.claims.username.is_empty() {
        return Err(anyhow::anyhow!("Token carries no username"));
    }

    Ok(token_data.claims)
}
