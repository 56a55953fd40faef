use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

use gha_slack_notify::config::Config;
use gha_slack_notify::slack::SlackClient;
use gha_slack_notify::{event, message};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Message title, overriding the default "*New event:*" prefix
    #[arg(long, env = "INPUT_TITLE")]
    title: Option<String>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    let args = Args::parse();
    if let Err(err) = run(args.title).await {
        // Workflow command so the message lands as a log annotation.
        println!("::error::{err:#}");
        error!(?err, "notification failed");
        std::process::exit(1);
    }
}

async fn run(title: Option<String>) -> Result<()> {
    let cfg = Config::from_env(title)?;

    info!(path = %cfg.event_path.display(), "reading event payload");
    let event = event::load(&cfg.event_path).await?;
    if let Some(repo) = &event.repository {
        info!(repo = %repo.full_name, "event loaded");
    }

    let label = message::event_label(cfg.event_name.as_deref());
    let payload = message::compose(&event, &cfg.run_number, label, cfg.title.as_deref())
        .context("failed to compose message")?;

    let client = SlackClient::new(&cfg.webhook_url)?;
    let body = client.send(&payload).await?;
    info!(response = %body, "notification delivered");

    Ok(())
}
