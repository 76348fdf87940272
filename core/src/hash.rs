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

//! Hash related utils.

use hmac::Hmac;
use hmac::Mac;
use sha2::Sha256;
use sha2::Sha512;

/// The keyed hash used to sign a request footprint.
///
/// XAuth defaults to a 256-bit digest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DigestAlgorithm {
    /// HMAC over SHA-256, the default.
    #[default]
    Sha256,
    /// HMAC over SHA-512.
    Sha512,
}

/// Hex encoded HMAC with SHA256 hash.
///
/// Use this function instead of `hex::encode(hmac_sha256(key, content))` can
/// reduce extra copy.
pub fn hex_hmac_sha256(key: &[u8], content: &[u8]) -> String {
    // SAFETY: HMAC's new_from_slice always returns Ok - it handles any key length
    let mut h = Hmac::<Sha256>::new_from_slice(key).unwrap();
    h.update(content);

    hex::encode(h.finalize().into_bytes())
}

/// Hex encoded HMAC with SHA512 hash.
pub fn hex_hmac_sha512(key: &[u8], content: &[u8]) -> String {
    // SAFETY: HMAC's new_from_slice always returns Ok - it handles any key length
    let mut h = Hmac::<Sha512>::new_from_slice(key).unwrap();
    h.update(content);

    hex::encode(h.finalize().into_bytes())
}

/// Hex encoded HMAC with the given algorithm.
pub fn hex_hmac(algorithm: DigestAlgorithm, key: &[u8], content: &[u8]) -> String {
    match algorithm {
        DigestAlgorithm::Sha256 => hex_hmac_sha256(key, content),
        DigestAlgorithm::Sha512 => hex_hmac_sha512(key, content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test vectors from RFC 4231, test case 2.
    #[test]
    fn test_hex_hmac_sha256() {
        assert_eq!(
            hex_hmac_sha256(b"Jefe", b"what do ya want for nothing?"),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn test_hex_hmac_sha512() {
        assert_eq!(
            hex_hmac_sha512(b"Jefe", b"what do ya want for nothing?"),
            "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea2505549758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737"
        );
    }

    // Empty keys must be accepted: "no secret configured" signs with an
    // empty-string key.
    #[test]
    fn test_empty_key_is_accepted() {
        assert_eq!(
            hex_hmac_sha256(b"", b""),
            "b613679a0814d9ec772f95d778c35fc5ff1697c493715653c6c712144292c5ad"
        );
    }

    #[test]
    fn test_hex_hmac_dispatch() {
        assert_eq!(
            hex_hmac(DigestAlgorithm::Sha256, b"Jefe", b"what do ya want for nothing?"),
            hex_hmac_sha256(b"Jefe", b"what do ya want for nothing?")
        );
        assert_eq!(
            hex_hmac(DigestAlgorithm::Sha512, b"Jefe", b"what do ya want for nothing?"),
            hex_hmac_sha512(b"Jefe", b"what do ya want for nothing?")
        );
    }
}
