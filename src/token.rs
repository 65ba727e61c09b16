//! Account token issuance and validation.
//!
//! Tokens are HS256-signed JWTs binding a caller to one account number.
//! The claims are a strongly typed struct rather than a generic map, so
//! the account number stays an integer end to end.
//!
//! Tokens carry no `exp` claim and never expire. That is a known weakness
//! of this design, kept as-is rather than silently fixed.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::models::account::Account;

/// Claims embedded in an account token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    /// The account number this token grants access to
    pub account_number: i64,

    /// Issuer string, derived from the account holder's name
    pub iss: String,
}

/// Signs and verifies account tokens with a single shared secret.
///
/// Constructed once at startup from `Config::jwt_secret` and cloned into
/// the application state.
#[derive(Clone)]
pub struct TokenManager {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenManager {
    pub fn new(secret: &str) -> Self {
        // Accept HS256 only; tokens signed with any other algorithm are
        // rejected during validation.
        let mut validation = Validation::new(Algorithm::HS256);
        // No expiration claim is issued, so none is required or checked.
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Issue a signed token for an account.
    ///
    /// Claims are `{accountNumber, iss}` where `iss` is
    /// `"<lastName> <firstName>"`.
    pub fn issue(&self, account: &Account) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims {
            account_number: account.number,
            iss: format!("{} {}", account.last_name, account.first_name),
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
    }

    /// Parse and verify a token, returning its claims.
    ///
    /// Fails on malformed input, a bad signature, or a non-HS256
    /// signing algorithm.
    pub fn validate(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
    }
}
