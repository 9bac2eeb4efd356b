//! Data models for the tagging API.
//!
//! - [`primitives`] - Identifier newtypes like `TagId` and `Platform`
//! - [`params`] - The ordered query parameter list every endpoint consumes
//! - [`requests`] - Typed per-endpoint inputs

pub mod primitives;
pub mod params;
pub mod requests;

pub use primitives::*;
pub use params::*;
pub use requests::*;
