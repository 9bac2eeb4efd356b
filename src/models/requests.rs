//! Typed inputs for the tagging endpoints.
//!
//! Each struct holds the parameters an endpoint requires, plus an `extra`
//! list for optional ones. Required fields are emitted first, in the order
//! the endpoint validates them, followed by the extras.

use super::params::{IntoParams, Params};
use super::primitives::{ActionId, CategoryId, Platform, TagId, Uid};

macro_rules! request {
    (
        $(#[$meta:meta])*
        $name:ident { $($field:ident: $ty:ty),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            $(
                #[allow(missing_docs)]
                pub $field: $ty,
            )+
            /// Optional parameters appended after the required ones.
            pub extra: Params,
        }

        impl $name {
            #[doc = concat!("Create a new `", stringify!($name), "`.")]
            pub fn new($($field: impl Into<$ty>),+) -> Self {
                Self {
                    $($field: $field.into(),)+
                    extra: Params::new(),
                }
            }

            /// Add an optional parameter.
            pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
                self.extra.push(name, value);
                self
            }

            /// Override the configured platform for this call.
            pub fn platform(mut self, platform: impl Into<Platform>) -> Self {
                self.extra = self.extra.platform(platform);
                self
            }
        }

        impl IntoParams for $name {
            fn into_params(self) -> Params {
                let mut params = Params::new();
                $(params.push(stringify!($field), self.$field);)+
                params.extend(self.extra);
                params
            }
        }
    };
}

request!(
    /// Input for `actions().add`.
    NewAction { name: String, description: String }
);

request!(
    /// Input for `tags().add`.
    ///
    /// # Example
    ///
    /// ```
    /// use kuvut_tagging::models::NewTag;
    ///
    /// let tag = NewTag::new("vip", "VIP users").param("color", "gold");
    /// assert_eq!(tag.name, "vip");
    /// ```
    NewTag { name: String, description: String }
);

request!(
    /// Input for `categories().add`.
    NewCategory { name: String, description: String }
);

request!(
    /// Input for `actions().edit` and `actions().delete`.
    ActionRef { action: ActionId }
);

request!(
    /// Input for `actions().assign`.
    ActionAssignment { action: ActionId, uid: Uid }
);

request!(
    /// Input for `tags().edit`, `tags().get` and `users().with_tag`.
    TagRef { tag: TagId }
);

request!(
    /// Input for `tags().assign` and `tags().unassign`.
    TagAssignment { action: ActionId, tag: TagId }
);

request!(
    /// Input for `users().tags`.
    UserRef { uid: Uid }
);

request!(
    /// Input for `categories().edit`.
    CategoryRef { category: CategoryId }
);

request!(
    /// Input for `categories().assign`.
    CategoryAssignment { category: CategoryId, tag: TagId }
);

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(params: &Params) -> Vec<(&str, &str)> {
        params.iter().collect()
    }

    #[test]
    fn test_required_fields_come_first_in_declared_order() {
        let params = NewTag::new("vip", "VIP users")
            .param("color", "gold")
            .into_params();

        assert_eq!(
            pairs(&params),
            vec![("name", "vip"), ("description", "VIP users"), ("color", "gold")]
        );
    }

    #[test]
    fn test_platform_override_travels_with_extras() {
        let params = TagAssignment::new("signup", "vip")
            .platform("ios")
            .into_params();

        assert_eq!(params.get("action"), Some("signup"));
        assert_eq!(params.get("tag"), Some("vip"));
        assert_eq!(params.platform_override(), Some("ios"));
    }

    #[test]
    fn test_typed_ids_convert() {
        let assignment = CategoryAssignment::new(CategoryId::new("c1"), "t1");
        assert_eq!(assignment.category.as_str(), "c1");
        assert_eq!(assignment.tag.as_str(), "t1");
    }
}
