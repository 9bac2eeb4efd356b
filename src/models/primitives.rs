//! Primitive types and newtypes for type-safe API interactions.
//!
//! The tagging API identifies everything with opaque strings. These wrappers
//! keep a tag id from being passed where an action id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            #[doc = concat!("Create a new `", stringify!($name), "`.")]
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            #[doc = concat!("Get the `", stringify!($name), "` as a string slice.")]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns `true` if the wrapped string is empty.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

string_newtype!(
    /// The platform a request is scoped to.
    ///
    /// The service partitions its data per client application; every request
    /// carries one.
    ///
    /// # Example
    ///
    /// ```
    /// use kuvut_tagging::Platform;
    ///
    /// let platform = Platform::new("web");
    /// assert_eq!(platform.as_str(), "web");
    /// ```
    Platform
);

string_newtype!(
    /// Identifier of an action.
    ActionId
);

string_newtype!(
    /// Identifier of a tag.
    TagId
);

string_newtype!(
    /// Identifier of a category.
    CategoryId
);

string_newtype!(
    /// Identifier of an end user in the caller's system.
    Uid
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newtype_conversions() {
        let tag = TagId::from("vip");
        assert_eq!(tag.as_str(), "vip");
        assert_eq!(tag.to_string(), "vip");
        assert_eq!(String::from(tag), "vip");
    }

    #[test]
    fn test_newtype_serde_is_transparent() {
        let uid = Uid::new("42");
        assert_eq!(serde_json::to_string(&uid).unwrap(), "\"42\"");

        let back: Uid = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(back, uid);
    }

    #[test]
    fn test_is_empty() {
        assert!(Platform::new("").is_empty());
        assert!(!Platform::new("web").is_empty());
    }
}
