//! Categories service.

use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{IntoParams, Params};
use crate::Result;

/// Service for category operations.
///
/// # Example
///
/// ```no_run
/// use kuvut_tagging::models::{CategoryAssignment, NewCategory};
///
/// # async fn example(client: kuvut_tagging::TaggingClient) -> kuvut_tagging::Result<()> {
/// client.categories().add(NewCategory::new("loyalty", "Loyalty tags")).await?;
/// client.categories().assign(CategoryAssignment::new("loyalty", "vip")).await?;
/// # Ok(())
/// # }
/// ```
pub struct CategoriesService {
    inner: Arc<ClientInner>,
}

impl CategoriesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List the categories defined for the platform.
    pub async fn list(&self, params: Option<Params>) -> Result<Value> {
        self.inner
            .call(Method::GET, "/category/list/", params.unwrap_or_default(), &[])
            .await
    }

    /// Define a new category. Requires `name` and `description`.
    pub async fn add(&self, request: impl IntoParams) -> Result<Value> {
        self.inner
            .call(
                Method::PUT,
                "/category/add/",
                request.into_params(),
                &["name", "description"],
            )
            .await
    }

    /// Edit a category. Requires `category`.
    pub async fn edit(&self, request: impl IntoParams) -> Result<Value> {
        self.inner
            .call(Method::POST, "/category/edit/", request.into_params(), &["category"])
            .await
    }

    /// Put a tag into a category. Requires `category` and `tag`.
    pub async fn assign(&self, request: impl IntoParams) -> Result<Value> {
        self.inner
            .call(
                Method::PUT,
                "/category/assign/",
                request.into_params(),
                &["category", "tag"],
            )
            .await
    }
}
