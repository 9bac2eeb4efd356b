//! # kuvut-tagging
//!
//! An async Rust client for the Kuvut tagging API.
//!
//! The service lets an application define *actions* (things users do),
//! *tags* (labels earned through actions) and *categories* (groups of tags),
//! and then query which users carry which tags. Data is partitioned by
//! *platform*.
//!
//! ## Features
//!
//! - **Authentication**: OAuth2 client-credentials, one cached token per client
//! - **Actions, Tags, Categories, Users**: every endpoint of the API
//! - **Typed inputs**: per-endpoint request structs, or a raw ordered [`Params`] list
//! - **Platform handling**: configured default with per-call override
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kuvut_tagging::{TaggingClient, ClientConfig};
//! use kuvut_tagging::models::{NewTag, UserRef};
//!
//! #[tokio::main]
//! async fn main() -> kuvut_tagging::Result<()> {
//!     let client = TaggingClient::new(
//!         ClientConfig::new("client-id", "client-secret").with_platform("web"),
//!     )?;
//!
//!     // Create a tag
//!     let tag = client.tags().add(NewTag::new("vip", "VIP users")).await?;
//!     println!("Created: {}", tag);
//!
//!     // Look up a user's tags on another platform
//!     let tags = client
//!         .users()
//!         .tags(UserRef::new("user-42").platform("ios"))
//!         .await?;
//!     println!("Tags: {}", tags);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Errors
//!
//! Missing required parameters are reported before any request is sent. A
//! response carrying an `error` field becomes [`Error::Service`]. Token
//! refresh is not supported by the service and is rejected with
//! [`Error::UnsupportedOperation`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use error::{Error, Result, SERVICE_ERROR_CODE};
pub use models::{
    ActionId, CategoryId, IntoParams, Params, Platform, TagId, Uid,
};
pub use client::{ClientConfig, TaggingClient};
pub use auth::{AccessToken, GrantType};

/// Prelude module for convenient imports.
///
/// ```rust
/// use kuvut_tagging::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        // Primitives
        ActionId, CategoryId, Platform, TagId, Uid,
        // Parameters
        IntoParams, Params,
        // Requests
        ActionAssignment, ActionRef, CategoryAssignment, CategoryRef, NewAction,
        NewCategory, NewTag, TagAssignment, TagRef, UserRef,
    };
    pub use crate::client::{ClientConfig, TaggingClient};
    pub use crate::auth::{AccessToken, GrantType};
}
