use std::fmt::{Debug, Formatter};

use crate::constants::*;
use crate::credential::redact;
use xauth_core::{Context, DigestAlgorithm};

/// Config carries the credential configuration for an XAuth client.
#[derive(Clone, Default)]
pub struct Config {
    /// `consumer_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`XAUTH_CONSUMER_ID`]
    pub consumer_id: Option<String>,
    /// `consumer_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`XAUTH_CONSUMER_SECRET`]
    pub consumer_secret: Option<String>,
    /// `token_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`XAUTH_TOKEN_ID`]
    pub token_id: Option<String>,
    /// `token_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`XAUTH_TOKEN_SECRET`]
    pub token_secret: Option<String>,
    /// Keyed hash used for signatures, SHA-256 unless configured otherwise.
    pub digest_algorithm: DigestAlgorithm,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set consumer_id
    pub fn with_consumer_id(mut self, consumer_id: impl Into<String>) -> Self {
        self.consumer_id = Some(consumer_id.into());
        self
    }

    /// Set consumer_secret
    pub fn with_consumer_secret(mut self, consumer_secret: impl Into<String>) -> Self {
        self.consumer_secret = Some(consumer_secret.into());
        self
    }

    /// Set token_id
    pub fn with_token_id(mut self, token_id: impl Into<String>) -> Self {
        self.token_id = Some(token_id.into());
        self
    }

    /// Set token_secret
    pub fn with_token_secret(mut self, token_secret: impl Into<String>) -> Self {
        self.token_secret = Some(token_secret.into());
        self
    }

    /// Set digest_algorithm
    pub fn with_digest_algorithm(mut self, digest_algorithm: DigestAlgorithm) -> Self {
        self.digest_algorithm = digest_algorithm;
        self
    }

    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(XAUTH_CONSUMER_ID) {
            self.consumer_id.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(XAUTH_CONSUMER_SECRET) {
            self.consumer_secret.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(XAUTH_TOKEN_ID) {
            self.token_id.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(XAUTH_TOKEN_SECRET) {
            self.token_secret.get_or_insert(v);
        }

        self
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("consumer_id", &self.consumer_id)
            .field("consumer_secret", &redact(&self.consumer_secret))
            .field("token_id", &self.token_id)
            .field("token_secret", &redact(&self.token_secret))
            .field("digest_algorithm", &self.digest_algorithm)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use xauth_core::StaticEnv;

    #[test]
    fn test_from_env_fills_missing_fields() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([
                (XAUTH_CONSUMER_ID.to_string(), "env_id".to_string()),
                (XAUTH_CONSUMER_SECRET.to_string(), "env_secret".to_string()),
            ]),
        });

        let config = Config::new().with_consumer_id("explicit_id").from_env(&ctx);

        // Explicit values win over the environment.
        assert_eq!(config.consumer_id.as_deref(), Some("explicit_id"));
        assert_eq!(config.consumer_secret.as_deref(), Some("env_secret"));
        assert_eq!(config.token_id, None);
        assert_eq!(config.token_secret, None);
    }
}
