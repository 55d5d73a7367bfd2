//! Send one message and print its timeline.
//!
//! ```text
//! RELAYWARDEN_BASE_URL=https://api.relaywarden.eu/api/v1 \
//! RELAYWARDEN_TOKEN=... RELAYWARDEN_PROJECT_ID=... \
//! RUST_LOG=relaywarden=debug cargo run --example send_message -- user@example.com
//! ```

use anyhow::Context;
use relaywarden::prelude::*;
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let base_url = std::env::var("RELAYWARDEN_BASE_URL")
        .unwrap_or_else(|_| "https://api.relaywarden.eu/api/v1".to_string());
    let token = std::env::var("RELAYWARDEN_TOKEN").context("RELAYWARDEN_TOKEN is not set")?;
    let project_id =
        std::env::var("RELAYWARDEN_PROJECT_ID").context("RELAYWARDEN_PROJECT_ID is not set")?;
    let recipient = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "user@example.com".to_string());

    let rw = RelayWarden::new(base_url, token)?;
    rw.set_project_scope(project_id);

    let me = rw.identity.me().await?;
    println!("authenticated as {:?}", me.as_ref().and_then(|b| b.data()));

    let key = IdempotencyKey::generate();
    let payload = json!({
        "from": {"email": "noreply@example.com", "name": "RelayWarden demo"},
        "to": [{"email": recipient}],
        "subject": "Hello from relaywarden",
        "html": "<h1>Hello</h1>",
        "text": "Hello"
    });

    let sent = match rw.messages.send(&payload, Some(&key)).await {
        Ok(body) => body,
        Err(Error::Validation(api)) => {
            for detail in &api.details {
                eprintln!("  {}: {}", detail.field, detail.message);
            }
            anyhow::bail!("message rejected: {}", api.message);
        }
        Err(Error::RateLimited { retry_after, .. }) => {
            anyhow::bail!("rate limited, try again in {}s", retry_after);
        }
        Err(e) => return Err(e.into()),
    };

    let message_id = sent
        .as_ref()
        .and_then(|b| b.data())
        .and_then(|d| d.get("id"))
        .and_then(|id| id.as_str())
        .context("send response has no message id")?
        .to_string();
    println!(
        "queued {} (idempotency key {}, request {})",
        message_id,
        key,
        sent.as_ref().and_then(|b| b.request_id()).unwrap_or("-")
    );

    if let Some(timeline) = rw.messages.timeline(&message_id).await? {
        println!("{}", serde_json::to_string_pretty(&timeline)?);
    }

    Ok(())
}
