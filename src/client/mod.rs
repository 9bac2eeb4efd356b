//! HTTP client and request building for the tagging API.
//!
//! This module provides the main entry point [`TaggingClient`] and the
//! query-string URL builder every endpoint goes through.
//!
//! # Example
//!
//! ```no_run
//! use kuvut_tagging::{TaggingClient, ClientConfig};
//!
//! # async fn example() -> kuvut_tagging::Result<()> {
//! let client = TaggingClient::new(
//!     ClientConfig::new("client-id", "client-secret").with_platform("web"),
//! )?;
//!
//! let tags = client.tags().list(None).await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
mod query;

pub use config::{
    ClientConfig, DEFAULT_BASE_URL, ENV_BASE_URL, ENV_CLIENT_ID, ENV_CLIENT_SECRET, ENV_PLATFORM,
};
pub use http::TaggingClient;
pub use query::{build_url, encode_component, resolve_platform};
pub(crate) use http::{parse_body, ClientInner};
