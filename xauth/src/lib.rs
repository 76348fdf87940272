//! XAuth request signing.
//!
//! Given consumer and token credentials, this crate derives a canonical
//! footprint from method, URL, and form parameters, signs it with a keyed
//! hash, and attaches the signature and identifying headers before
//! dispatching the request through an injected HTTP capability.
//!
//! ## Example
//!
//! ```no_run
//! use xauth::{Client, Config};
//! use xauth_core::Context;
//! use xauth_http_send_reqwest::ReqwestHttpSend;
//!
//! # fn main() -> xauth_core::Result<()> {
//! let ctx = Context::new().with_http_send(ReqwestHttpSend::default());
//! let config = Config::new()
//!     .with_consumer_id("my_id")
//!     .with_consumer_secret("my_secret");
//!
//! let mut client = Client::new(ctx, "https://api.example.com", "/auth", config);
//! client.authenticate(&[])?;
//! let resp = client.get("/path", &[])?;
//! # Ok(())
//! # }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod constants;
pub mod footprint;

mod client;
pub use client::Client;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

pub use xauth_core::{Context, DigestAlgorithm, Error, ErrorKind, Result};
