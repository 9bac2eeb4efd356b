//! Users service.

use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::IntoParams;
use crate::Result;

/// Service for looking up tags by user and users by tag.
///
/// # Example
///
/// ```no_run
/// use kuvut_tagging::models::{TagRef, UserRef};
///
/// # async fn example(client: kuvut_tagging::TaggingClient) -> kuvut_tagging::Result<()> {
/// let tags = client.users().tags(UserRef::new("user-42")).await?;
/// let vips = client.users().with_tag(TagRef::new("vip")).await?;
/// # Ok(())
/// # }
/// ```
pub struct UsersService {
    inner: Arc<ClientInner>,
}

impl UsersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Tags earned by a user. Requires `uid`.
    pub async fn tags(&self, request: impl IntoParams) -> Result<Value> {
        self.inner
            .call(Method::GET, "/user/get-tags/", request.into_params(), &["uid"])
            .await
    }

    /// Users carrying a tag. Requires `tag`.
    pub async fn with_tag(&self, request: impl IntoParams) -> Result<Value> {
        self.inner
            .call(Method::GET, "/user/get-users/", request.into_params(), &["tag"])
            .await
    }
}
