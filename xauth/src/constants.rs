//! Wire header names and environment variable keys.

/// Outbound header carrying the consumer/application id.
pub const CONSUMER_ID_HEADER: &str = "X-Auth-Key";

/// Outbound header carrying the current token id. On authentication
/// responses the server echoes a fresh token id through the same header.
pub const TOKEN_ID_HEADER: &str = "X-Auth-Token";

/// Inbound header carrying the new token secret on authentication responses.
pub const TOKEN_SECRET_HEADER: &str = "X-Auth-Token-Secret";

/// Outbound header carrying the hex HMAC over the request footprint.
pub const SIGNATURE_HEADER: &str = "X-Auth-Signature";

/// Env var for the consumer id.
pub const XAUTH_CONSUMER_ID: &str = "XAUTH_CONSUMER_ID";
/// Env var for the consumer secret.
pub const XAUTH_CONSUMER_SECRET: &str = "XAUTH_CONSUMER_SECRET";
/// Env var for the token id.
pub const XAUTH_TOKEN_ID: &str = "XAUTH_TOKEN_ID";
/// Env var for the token secret.
pub const XAUTH_TOKEN_SECRET: &str = "XAUTH_TOKEN_SECRET";
