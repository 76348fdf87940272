//! Core components for XAuth request signing.
//!
//! This crate provides the foundational types for the xauth ecosystem:
//!
//! - **Context**: a container holding the HTTP sending and environment
//!   access capabilities the client relies on
//! - **Error**: the structured error type shared across the workspace
//! - [`hash`]: keyed-hash utilities used to sign request footprints
//!
//! Everything here is synchronous: the XAuth client performs a single
//! blocking network call per request and needs no async machinery.

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub use hash::DigestAlgorithm;

mod context;
pub use context::{Context, Env, HttpSend, NoopEnv, NoopHttpSend, OsEnv, StaticEnv};

mod error;
pub use error::{Error, ErrorKind, Result};
