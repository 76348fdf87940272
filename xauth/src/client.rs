use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::{HeaderValue, Method};
use log::debug;
use xauth_core::{Context, DigestAlgorithm, Result};

use crate::config::Config;
use crate::constants::*;
use crate::credential::Credential;
use crate::footprint::compute_signature;

/// Client that signs and dispatches XAuth requests.
///
/// The client owns its [`Credential`] exclusively; the token pair is
/// replaced only inside [`Client::authenticate`], when the response carries
/// both token headers. Calls block until the configured HTTP capability
/// returns, and nothing is retried: transport failures reach the caller
/// unchanged.
///
/// Absent credentials are not validated. With no consumer id the key header
/// is skipped, with no secret at all the request simply goes out unsigned,
/// and the token header is attached even when no token is held yet. All of
/// this is deliberate: the server decides what an unsigned request is worth.
#[derive(Debug)]
pub struct Client {
    ctx: Context,
    api_base_url: String,
    auth_endpoint_path: String,
    credential: Credential,
    digest_algorithm: DigestAlgorithm,
}

impl Client {
    /// Create a new client.
    ///
    /// `api_base_url` is prefixed to every request path;
    /// `auth_endpoint_path` is where [`Client::authenticate`] fetches
    /// tokens from.
    pub fn new(
        ctx: Context,
        api_base_url: impl Into<String>,
        auth_endpoint_path: impl Into<String>,
        config: Config,
    ) -> Self {
        let credential = Credential::new(
            config.consumer_id,
            config.consumer_secret,
            config.token_id,
            config.token_secret,
        );

        Self {
            ctx,
            api_base_url: api_base_url.into(),
            auth_endpoint_path: auth_endpoint_path.into(),
            credential,
            digest_algorithm: config.digest_algorithm,
        }
    }

    /// The current credential state.
    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Build, sign, and send a request against `api_base_url + path`.
    ///
    /// `params` are sent as a form-encoded body in the given order and are
    /// the only parameters covered by the signature; a query string in
    /// `path` travels verbatim and unprotected.
    pub fn request(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<http::Response<Bytes>> {
        let url = format!("{}{}", self.api_base_url, path);
        debug!("sending {} {}", method, &url);

        let mut builder = http::Request::builder().method(method.clone()).uri(url.as_str());

        // The token header is attached even when no token is held.
        builder = builder.header(
            TOKEN_ID_HEADER,
            self.credential.token_id.as_deref().unwrap_or(""),
        );
        if let Some(consumer_id) = &self.credential.consumer_id {
            builder = builder.header(CONSUMER_ID_HEADER, consumer_id.as_str());
        }
        if let Some(secret) = self.credential.composed_secret() {
            let signature =
                compute_signature(&secret, method.as_str(), &url, params, self.digest_algorithm)?;
            let mut value = HeaderValue::from_str(&signature)?;
            value.set_sensitive(true);
            builder = builder.header(SIGNATURE_HEADER, value);
        }

        let body = if params.is_empty() {
            Bytes::new()
        } else {
            builder = builder.header(CONTENT_TYPE, "application/x-www-form-urlencoded");
            let encoded = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(params)
                .finish();
            Bytes::from(encoded)
        };

        let req = builder.body(body)?;
        self.ctx.http_send(req)
    }

    /// `GET` convenience wrapper over [`Client::request`].
    pub fn get(&self, path: &str, params: &[(&str, &str)]) -> Result<http::Response<Bytes>> {
        self.request(Method::GET, path, params)
    }

    /// `POST` convenience wrapper over [`Client::request`].
    pub fn post(&self, path: &str, params: &[(&str, &str)]) -> Result<http::Response<Bytes>> {
        self.request(Method::POST, path, params)
    }

    /// `PUT` convenience wrapper over [`Client::request`].
    pub fn put(&self, path: &str, params: &[(&str, &str)]) -> Result<http::Response<Bytes>> {
        self.request(Method::PUT, path, params)
    }

    /// `PATCH` convenience wrapper over [`Client::request`].
    pub fn patch(&self, path: &str, params: &[(&str, &str)]) -> Result<http::Response<Bytes>> {
        self.request(Method::PATCH, path, params)
    }

    /// `OPTIONS` convenience wrapper over [`Client::request`].
    pub fn options(&self, path: &str, params: &[(&str, &str)]) -> Result<http::Response<Bytes>> {
        self.request(Method::OPTIONS, path, params)
    }

    /// `DELETE` convenience wrapper over [`Client::request`].
    pub fn delete(&self, path: &str, params: &[(&str, &str)]) -> Result<http::Response<Bytes>> {
        self.request(Method::DELETE, path, params)
    }

    /// Request a token from the authentication endpoint.
    ///
    /// Performs a `GET` against the auth endpoint through the normal
    /// signing path. When the response carries both the token-id and
    /// token-secret headers the held token pair is replaced; otherwise the
    /// credential is left untouched. The raw response is returned either
    /// way.
    pub fn authenticate(&mut self, params: &[(&str, &str)]) -> Result<http::Response<Bytes>> {
        let path = self.auth_endpoint_path.clone();
        let resp = self.request(Method::GET, &path, params)?;

        let headers = resp.headers();
        if let (Some(token_id), Some(token_secret)) = (
            headers.get(TOKEN_ID_HEADER),
            headers.get(TOKEN_SECRET_HEADER),
        ) {
            let token_id = token_id.to_str()?.to_string();
            let token_secret = token_secret.to_str()?.to_string();
            debug!("authentication response carried a new token pair");
            self.credential.update_token(token_id, token_secret);
        }

        Ok(resp)
    }
}
