//! Actions service.

use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{IntoParams, Params};
use crate::Result;

/// Service for action operations.
///
/// # Example
///
/// ```no_run
/// use kuvut_tagging::models::{ActionAssignment, NewAction};
///
/// # async fn example(client: kuvut_tagging::TaggingClient) -> kuvut_tagging::Result<()> {
/// client.actions().add(NewAction::new("signup", "User signed up")).await?;
/// client.actions().assign(ActionAssignment::new("signup", "user-42")).await?;
///
/// let actions = client.actions().list(None).await?;
/// # Ok(())
/// # }
/// ```
pub struct ActionsService {
    inner: Arc<ClientInner>,
}

impl ActionsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List the actions defined for the platform.
    pub async fn list(&self, params: Option<Params>) -> Result<Value> {
        self.inner
            .call(Method::GET, "/action/list/", params.unwrap_or_default(), &[])
            .await
    }

    /// Define a new action. Requires `name` and `description`.
    pub async fn add(&self, request: impl IntoParams) -> Result<Value> {
        self.inner
            .call(
                Method::PUT,
                "/action/add/",
                request.into_params(),
                &["name", "description"],
            )
            .await
    }

    /// Edit an action. Requires `action`.
    pub async fn edit(&self, request: impl IntoParams) -> Result<Value> {
        self.inner
            .call(Method::POST, "/action/edit/", request.into_params(), &["action"])
            .await
    }

    /// Delete an action. Requires `action`.
    pub async fn delete(&self, request: impl IntoParams) -> Result<Value> {
        self.inner
            .call(Method::DELETE, "/action/delete/", request.into_params(), &["action"])
            .await
    }

    /// Record that a user performed an action. Requires `action` and `uid`.
    pub async fn assign(&self, request: impl IntoParams) -> Result<Value> {
        self.inner
            .call(
                Method::PUT,
                "/action/assign/",
                request.into_params(),
                &["action", "uid"],
            )
            .await
    }
}
