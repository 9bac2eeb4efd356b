//! Basic usage example.
//!
//! Authenticates with client credentials, creates a tag and links it to an
//! action, then lists the tags of a user.
//!
//! Run with: cargo run --example basic_usage -- <uid>
//!
//! Reads KUVUT_TAGGING_CLIENT_ID, KUVUT_TAGGING_CLIENT_SECRET and
//! KUVUT_TAGGING_PLATFORM (plus KUVUT_TAGGING_BASE_URL to target another
//! deployment).

use kuvut_tagging::models::{NewAction, NewTag, TagAssignment, UserRef};
use kuvut_tagging::TaggingClient;

#[tokio::main]
async fn main() -> kuvut_tagging::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let uid = std::env::args()
        .nth(1)
        .expect("usage: basic_usage <uid>");

    let client = TaggingClient::from_env()?;
    println!("Connecting to {}...", client.config().base_url);

    let actions = client.actions().list(None).await?;
    println!("Actions: {}", actions);

    client
        .actions()
        .add(NewAction::new("purchase", "User completed a purchase"))
        .await?;
    client
        .tags()
        .add(NewTag::new("buyer", "Users who bought something"))
        .await?;
    client
        .tags()
        .assign(TagAssignment::new("purchase", "buyer"))
        .await?;

    let tags = client.users().tags(UserRef::new(uid)).await?;
    println!("User tags: {}", tags);

    println!("\nDone!");
    Ok(())
}
