#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::multiple_crate_versions)]
//! Client library for the keypair resource of the RACK API.
//!
//! Layout:
//! - `models`: wire DTOs and the envelopes the API wraps them in
//! - `error`: [`ClientError`] and decoding of API fault documents
//! - `keypairs`: [`KeypairsClient`], one async method per API operation

pub mod error;
pub mod keypairs;
pub mod models;

pub use error::{ClientError, Result};
pub use keypairs::{ApiVersion, ClientConfig, HEADER_REQUEST_ID, KeypairsClient};
pub use models::Keypair;
