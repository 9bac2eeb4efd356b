//! Tags service.

use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{IntoParams, Params};
use crate::Result;

/// Service for tag operations.
///
/// # Example
///
/// ```no_run
/// use kuvut_tagging::models::{NewTag, TagAssignment, TagRef};
///
/// # async fn example(client: kuvut_tagging::TaggingClient) -> kuvut_tagging::Result<()> {
/// client.tags().add(NewTag::new("vip", "VIP users")).await?;
///
/// // Users who perform "purchase" get tagged "vip"
/// client.tags().assign(TagAssignment::new("purchase", "vip")).await?;
///
/// let tag = client.tags().get(TagRef::new("vip")).await?;
/// println!("{}", tag);
/// # Ok(())
/// # }
/// ```
pub struct TagsService {
    inner: Arc<ClientInner>,
}

impl TagsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List the tags defined for the platform.
    pub async fn list(&self, params: Option<Params>) -> Result<Value> {
        self.inner
            .call(Method::GET, "/tag/list/", params.unwrap_or_default(), &[])
            .await
    }

    /// Define a new tag. Requires `name` and `description`.
    pub async fn add(&self, request: impl IntoParams) -> Result<Value> {
        self.inner
            .call(
                Method::PUT,
                "/tag/add/",
                request.into_params(),
                &["name", "description"],
            )
            .await
    }

    /// Edit a tag. Requires `tag`.
    pub async fn edit(&self, request: impl IntoParams) -> Result<Value> {
        self.inner
            .call(Method::POST, "/tag/edit/", request.into_params(), &["tag"])
            .await
    }

    /// Link a tag to an action. Requires `action` and `tag`.
    pub async fn assign(&self, request: impl IntoParams) -> Result<Value> {
        self.inner
            .call(Method::PUT, "/tag/assign/", request.into_params(), &["action", "tag"])
            .await
    }

    /// Remove the link between a tag and an action. Requires `action` and `tag`.
    pub async fn unassign(&self, request: impl IntoParams) -> Result<Value> {
        self.inner
            .call(Method::PUT, "/tag/unassign/", request.into_params(), &["action", "tag"])
            .await
    }

    /// Get a single tag. Requires `tag`.
    pub async fn get(&self, request: impl IntoParams) -> Result<Value> {
        self.inner
            .call(Method::GET, "/tag/get/", request.into_params(), &["tag"])
            .await
    }
}
