//! Blocking reqwest-backed [`HttpSend`] implementation for xauth.

use bytes::Bytes;
use reqwest::blocking::Client;
use xauth_core::{Error, HttpSend, Result};

/// ReqwestHttpSend delivers signed requests over a blocking reqwest client.
///
/// The default client is built with certificate verification disabled, as
/// XAuth deployments commonly present untrusted certificates. This is a
/// documented trade-off, not an accident. Use [`ReqwestHttpSend::new`] with
/// your own client to restore verification.
#[derive(Debug)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a caller-built reqwest client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestHttpSend {
    fn default() -> Self {
        // The builder only fails when no TLS backend is available; the
        // rustls-tls feature is always enabled for this crate.
        let client = Client::builder()
            .danger_accept_invalid_certs(true)
            .build()
            .expect("TLS backend must be available");

        Self { client }
    }
}

impl HttpSend for ReqwestHttpSend {
    fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let (parts, body) = req.into_parts();

        let resp = self
            .client
            .request(parts.method, parts.uri.to_string())
            .headers(parts.headers)
            .body(body.to_vec())
            .send()
            .map_err(|e| Error::transport(format!("http request failed: {e}")).with_source(e))?;

        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp
            .bytes()
            .map_err(|e| Error::transport(format!("reading response body failed: {e}")).with_source(e))?;

        let mut builder = http::Response::builder().status(status);
        for (name, value) in headers {
            if let Some(name) = name {
                builder = builder.header(name, value);
            }
        }

        Ok(builder.body(body)?)
    }
}
