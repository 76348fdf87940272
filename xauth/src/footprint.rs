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

//! The signature engine: canonical request footprints and their HMACs.

use http::Uri;
use log::debug;
use xauth_core::hash::hex_hmac;
use xauth_core::{DigestAlgorithm, Result};

/// Compute the canonical footprint for a request.
///
/// The footprint is always three `&`-joined fields, kept even when empty:
///
/// ```text
/// {METHOD}&{url_segment}&{encoded_params}
/// ```
///
/// - method is uppercased;
/// - the URL segment is the path, plus `?query` taken verbatim from the
///   input URL when one is present. The query is never re-sorted or
///   re-encoded, which means query parameters are NOT covered by the
///   signature. Server-side verifiers depend on this, so it must stay;
/// - params are sorted by key and rendered with form-encoding rules
///   (reserved characters percent-escaped, spaces as `+`).
///
/// Pure and deterministic: identical inputs always yield identical output.
///
/// # Errors
///
/// Fails with a request-invalid error when `url` cannot be parsed.
pub fn compute_footprint(method: &str, url: &str, params: &[(&str, &str)]) -> Result<String> {
    let uri: Uri = url.parse()?;
    let url_segment = match uri.query() {
        Some(query) => format!("{}?{}", uri.path(), query),
        None => uri.path().to_string(),
    };

    let mut pairs = params.to_vec();
    pairs.sort_by(|a, b| a.0.cmp(b.0));
    let encoded_params = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish();

    Ok(format!(
        "{}&{}&{}",
        method.to_ascii_uppercase(),
        url_segment,
        encoded_params
    ))
}

/// Compute the lowercase hex HMAC of the request footprint.
///
/// `secret` may be empty ("no secret configured" signs with an empty-string
/// key); the underlying HMAC accepts keys of any length.
pub fn compute_signature(
    secret: &str,
    method: &str,
    url: &str,
    params: &[(&str, &str)],
    algorithm: DigestAlgorithm,
) -> Result<String> {
    let footprint = compute_footprint(method, url, params)?;
    debug!("footprint to sign: {}", &footprint);

    Ok(hex_hmac(algorithm, secret.as_bytes(), footprint.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_footprint_keeps_three_fields_when_empty() -> Result<()> {
        assert_eq!(compute_footprint("GET", "/path", &[])?, "GET&/path&");
        Ok(())
    }

    #[test]
    fn test_footprint_strips_scheme_and_authority() -> Result<()> {
        assert_eq!(
            compute_footprint("GET", "https://i.b/path", &[])?,
            "GET&/path&"
        );
        Ok(())
    }

    #[test]
    fn test_footprint_uppercases_method() -> Result<()> {
        assert_eq!(
            compute_footprint("get", "/x", &[])?,
            compute_footprint("GET", "/x", &[])?
        );
        Ok(())
    }

    #[test]
    fn test_footprint_copies_query_verbatim() -> Result<()> {
        // The query is passed through untouched: no sorting, no re-encoding.
        assert_eq!(
            compute_footprint("GET", "/x?z=9&a=1", &[])?,
            "GET&/x?z=9&a=1&"
        );
        Ok(())
    }

    #[test]
    fn test_footprint_sorts_params_by_key() -> Result<()> {
        let unordered = compute_footprint("POST", "/x", &[("b", "2"), ("a", "1")])?;
        let ordered = compute_footprint("POST", "/x", &[("a", "1"), ("b", "2")])?;
        assert_eq!(unordered, ordered);
        assert_eq!(ordered, "POST&/x&a=1&b=2");
        Ok(())
    }

    #[test]
    fn test_footprint_form_encodes_params() -> Result<()> {
        assert_eq!(
            compute_footprint("POST", "/x", &[("q", "a b"), ("u", "é")])?,
            "POST&/x&q=a+b&u=%C3%A9"
        );
        Ok(())
    }

    #[test]
    fn test_footprint_is_deterministic() -> Result<()> {
        let params = [("b", "2"), ("a", "1")];
        assert_eq!(
            compute_footprint("POST", "/x?k=v", &params)?,
            compute_footprint("POST", "/x?k=v", &params)?
        );
        Ok(())
    }

    #[test]
    fn test_footprint_rejects_malformed_url() {
        let err = compute_footprint("GET", "http://[not-a-host/path", &[]).unwrap_err();
        assert_eq!(err.kind(), xauth_core::ErrorKind::RequestInvalid);
    }

    // Reference vector from the wire protocol: HMAC-SHA256 of "GET&/path&"
    // keyed by "my_token_secretmy_secret".
    #[test]
    fn test_signature_matches_reference_vector() -> Result<()> {
        let signature = compute_signature(
            "my_token_secretmy_secret",
            "get",
            "https://i.b/path",
            &[],
            DigestAlgorithm::Sha256,
        )?;
        assert_eq!(
            signature,
            "dd32cadd26f4902a73d26aeba07bd528b563061e0735853e74dd172160b7bf5a"
        );
        Ok(())
    }

    #[test]
    fn test_signature_is_secret_sensitive() -> Result<()> {
        let a = compute_signature("secret", "GET", "/x", &[], DigestAlgorithm::Sha256)?;
        let b = compute_signature("secres", "GET", "/x", &[], DigestAlgorithm::Sha256)?;
        let c = compute_signature("secret", "GET", "/y", &[], DigestAlgorithm::Sha256)?;
        let d = compute_signature("secret", "GET", "/x", &[("k", "v")], DigestAlgorithm::Sha256)?;
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
        Ok(())
    }

    #[test]
    fn test_signature_accepts_empty_secret() -> Result<()> {
        let signature = compute_signature("", "GET", "/x", &[], DigestAlgorithm::Sha256)?;
        assert_eq!(signature.len(), 64);
        Ok(())
    }

    #[test]
    fn test_signature_digest_selection() -> Result<()> {
        let sha256 = compute_signature("secret", "GET", "/x", &[], DigestAlgorithm::Sha256)?;
        let sha512 = compute_signature("secret", "GET", "/x", &[], DigestAlgorithm::Sha512)?;
        assert_eq!(sha256.len(), 64);
        assert_eq!(sha512.len(), 128);
        Ok(())
    }
}
