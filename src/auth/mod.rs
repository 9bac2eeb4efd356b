//! Authentication for the tagging API.
//!
//! The service authenticates applications, not end users: the client trades
//! its OAuth2 client id and secret for a bearer token at `<base>/token/`
//! (the client-credentials grant) and attaches that token to every request.
//!
//! One token is obtained per [`TaggingClient`](crate::TaggingClient), lazily,
//! on the first authenticated call, and reused afterwards. Refreshing is not
//! supported by the service; asking for it fails with
//! [`Error::UnsupportedOperation`](crate::Error::UnsupportedOperation).
//!
//! ```no_run
//! use kuvut_tagging::{TaggingClient, GrantType};
//!
//! # async fn example() -> kuvut_tagging::Result<()> {
//! let client = TaggingClient::with_credentials("client-id", "client-secret")?;
//!
//! let token = client.access_token(GrantType::ClientCredentials, None).await?;
//! println!("expires at {:?}", token.expires_at());
//! # Ok(())
//! # }
//! ```

mod token;

pub use token::{AccessToken, GrantType, TokenManager};
pub(crate) use token::TokenSettings;
