// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::fmt::{Debug, Formatter};

/// Credential state held by the client.
///
/// The consumer pair identifies the calling application and never changes
/// after construction. The token pair is a short-lived session credential:
/// [`Credential::update_token`] replaces it when an authentication response
/// carries both token headers, and nothing else mutates it.
#[derive(Clone, Default)]
pub struct Credential {
    /// Consumer/application id, sent as `X-Auth-Key` when present.
    pub consumer_id: Option<String>,
    /// Consumer secret. Kept in memory only.
    pub consumer_secret: Option<String>,
    /// Current token id, sent as `X-Auth-Token` on every request.
    pub token_id: Option<String>,
    /// Current token secret.
    pub token_secret: Option<String>,
}

impl Credential {
    /// Create a new credential.
    pub fn new(
        consumer_id: Option<String>,
        consumer_secret: Option<String>,
        token_id: Option<String>,
        token_secret: Option<String>,
    ) -> Self {
        Self {
            consumer_id,
            consumer_secret,
            token_id,
            token_secret,
        }
    }

    /// The HMAC key for signing: token secret (or empty string when absent)
    /// with the consumer secret appended, no separator.
    ///
    /// Returns `None` when neither secret is configured; in that case the
    /// request goes out unsigned.
    ///
    /// # Caution
    ///
    /// Plain concatenation means two different secret pairs whose
    /// concatenation coincides produce the same key. The scheme is kept
    /// as-is for compatibility with existing server-side verifiers.
    pub fn composed_secret(&self) -> Option<String> {
        if self.consumer_secret.is_none() && self.token_secret.is_none() {
            return None;
        }

        let mut secret = self.token_secret.clone().unwrap_or_default();
        if let Some(consumer_secret) = &self.consumer_secret {
            secret.push_str(consumer_secret);
        }
        Some(secret)
    }

    /// Replace the token pair. This is the only mutation path: it runs
    /// exactly when an authentication response supplies both token headers.
    pub fn update_token(&mut self, token_id: String, token_secret: String) {
        self.token_id = Some(token_id);
        self.token_secret = Some(token_secret);
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("consumer_id", &self.consumer_id)
            .field("consumer_secret", &redact(&self.consumer_secret))
            .field("token_id", &self.token_id)
            .field("token_secret", &redact(&self.token_secret))
            .finish()
    }
}

/// Redacts a secret for Debug output without leaking its value.
pub(crate) fn redact(value: &Option<String>) -> &'static str {
    match value {
        Some(_) => "***",
        None => "unset",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composed_secret() {
        let both = Credential::new(
            None,
            Some("consumer".to_string()),
            None,
            Some("token".to_string()),
        );
        assert_eq!(both.composed_secret(), Some("tokenconsumer".to_string()));

        let token_only = Credential::new(None, None, None, Some("token".to_string()));
        assert_eq!(token_only.composed_secret(), Some("token".to_string()));

        let consumer_only = Credential::new(None, Some("consumer".to_string()), None, None);
        assert_eq!(consumer_only.composed_secret(), Some("consumer".to_string()));

        let none = Credential::default();
        assert_eq!(none.composed_secret(), None);
    }

    #[test]
    fn test_update_token_replaces_pair() {
        let mut cred = Credential::default();
        cred.update_token("id".to_string(), "secret".to_string());
        assert_eq!(cred.token_id.as_deref(), Some("id"));
        assert_eq!(cred.token_secret.as_deref(), Some("secret"));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let cred = Credential::new(
            Some("my_id".to_string()),
            Some("my_secret".to_string()),
            None,
            None,
        );
        let out = format!("{cred:?}");
        assert!(out.contains("my_id"));
        assert!(!out.contains("my_secret"));
    }
}
