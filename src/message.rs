//! Turns a push event into the outbound Block Kit message.
use thiserror::Error;

use crate::event::PushEvent;
use crate::slack::block::{Actions, Block, BlockError, Button, ButtonStyle, Element, Section, Text};
use crate::slack::Message;

pub const DEFAULT_TITLE: &str = "*New event:*";

/// `H:m d.MMM` — no-pad hour and minute, no-pad day, abbreviated month.
const TIMESTAMP_FORMAT: &str = "%-H:%-M %-d.%b";

#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("event payload has no head commit")]
    MissingHeadCommit,
    #[error(transparent)]
    Block(#[from] BlockError),
}

/// Human label for a `GITHUB_EVENT_NAME` key.
pub fn event_label(name: Option<&str>) -> &'static str {
    match name {
        Some("push") => "Push",
        Some("pull_request") => "Pull Request",
        Some("workflow_dispatch") => "Workflow Dispatch",
        Some("release") => "Release",
        Some("schedule") => "Schedule",
        _ => "Unknown",
    }
}

/// Build the three-block notification: a lead section linking the compare
/// URL, a section of event/run/time fields, and the Approve/Deny actions.
///
/// The timestamp is rendered in the offset the commit was recorded with;
/// no timezone conversion is performed.
pub fn compose(
    event: &PushEvent,
    run_number: &str,
    label: &str,
    title: Option<&str>,
) -> Result<Message, ComposeError> {
    let head = event
        .head_commit
        .as_ref()
        .ok_or(ComposeError::MissingHeadCommit)?;
    let title = title.unwrap_or(DEFAULT_TITLE);

    let lead = format!(
        "{}\n<{}|{} - {}>",
        title, event.compare, head.committer.name, head.message
    );
    let when = head.timestamp.format(TIMESTAMP_FORMAT).to_string();

    let blocks = vec![
        Block::Section(Section::text(Text::mrkdwn(lead))),
        Block::Section(Section::fields(vec![
            Text::mrkdwn(format!("*Event:* {label}")),
            Text::mrkdwn(format!("*Run:* {run_number}")),
            Text::mrkdwn(format!("*Time:* {when}")),
        ])?),
        Block::Actions(Actions::new(vec![
            approve_button(),
            deny_button(),
        ])?),
    ];

    Ok(Message::blocks(blocks))
}

fn approve_button() -> Element {
    Element::Button(Button::new(Text::plain("Approve"), "approve_id").style(ButtonStyle::Primary))
}

fn deny_button() -> Element {
    Element::Button(Button::new(Text::plain("Deny"), "deny_id").style(ButtonStyle::Danger))
}
