//! Provider credentials.

use std::fmt;

use super::AppError;

pub const ACCESS_TOKEN_VAR: &str = "META_ACCESS_TOKEN";
pub const ACCOUNT_ID_VAR: &str = "PHONE_NUMBER_ID";

/// Bearer token plus the phone-number (account) identifier messages are sent from.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    access_token: String,
    account_id: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_token", &"[REDACTED]")
            .field("account_id", &self.account_id)
            .finish()
    }
}

impl Credentials {
    /// Build credentials, rejecting empty or whitespace-only values.
    pub fn new(
        access_token: impl Into<String>,
        account_id: impl Into<String>,
    ) -> Result<Self, AppError> {
        let access_token = access_token.into().trim().to_string();
        let account_id = account_id.into().trim().to_string();

        let mut missing = Vec::new();
        if access_token.is_empty() {
            missing.push(ACCESS_TOKEN_VAR);
        }
        if account_id.is_empty() {
            missing.push(ACCOUNT_ID_VAR);
        }
        if !missing.is_empty() {
            return Err(missing_error(&missing));
        }

        Ok(Self { access_token, account_id })
    }

    /// Resolve credentials through a variable lookup such as `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let access_token = lookup(ACCESS_TOKEN_VAR).unwrap_or_default();
        let account_id = lookup(ACCOUNT_ID_VAR).unwrap_or_default();
        Self::new(access_token, account_id)
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }
}

fn missing_error(missing: &[&str]) -> AppError {
    AppError::config_error(format!(
        "Please set {} and {} in the environment or .env file (missing: {})",
        ACCESS_TOKEN_VAR,
        ACCOUNT_ID_VAR,
        missing.join(", ")
    ))
}
