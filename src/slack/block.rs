//! Block Kit message model: layout blocks, interactive elements, and
//! composition objects, discriminated by their wire-level `type` field.
//!
//! Field names here are part of Slack's wire contract; serde attributes pin
//! them exactly. Cardinality limits (5 elements per actions block, 10 per
//! context block, 10 section fields) are enforced by checked constructors.
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAX_ACTIONS_ELEMENTS: usize = 5;
pub const MAX_CONTEXT_ELEMENTS: usize = 10;
pub const MAX_SECTION_FIELDS: usize = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BlockError {
    #[error("{block} block holds at most {max} elements, got {got}")]
    TooManyElements {
        block: &'static str,
        max: usize,
        got: usize,
    },
}

/// Outbound webhook payload: plain text or a block sequence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Message {
    Text { text: String },
    Blocks { blocks: Vec<Block> },
}

impl Message {
    pub fn text(text: impl Into<String>) -> Self {
        Message::Text { text: text.into() }
    }

    pub fn blocks(blocks: Vec<Block>) -> Self {
        Message::Blocks { blocks }
    }
}

/// Top-level layout blocks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Section(Section),
    Divider(Divider),
    Image(ImageBlock),
    Actions(Actions),
    Context(Context),
    Input(Input),
    File(File),
}

/// Text composition object: `plain_text` or `mrkdwn`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum Text {
    #[serde(rename = "plain_text")]
    Plain {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        emoji: Option<bool>,
    },
    #[serde(rename = "mrkdwn")]
    Mrkdwn {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        verbatim: Option<bool>,
    },
}

impl Text {
    pub fn plain(text: impl Into<String>) -> Self {
        Text::Plain {
            text: text.into(),
            emoji: None,
        }
    }

    pub fn mrkdwn(text: impl Into<String>) -> Self {
        Text::Mrkdwn {
            text: text.into(),
            verbatim: None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Text::Plain { text, .. } | Text::Mrkdwn { text, .. } => text,
        }
    }
}

/// Section block: carries either `text` or up to 10 `fields`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Section {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<Text>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessory: Option<Element>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
}

impl Section {
    pub fn text(text: Text) -> Self {
        Section {
            text: Some(text),
            fields: None,
            accessory: None,
            block_id: None,
        }
    }

    pub fn fields(fields: Vec<Text>) -> Result<Self, BlockError> {
        if fields.len() > MAX_SECTION_FIELDS {
            return Err(BlockError::TooManyElements {
                block: "section",
                max: MAX_SECTION_FIELDS,
                got: fields.len(),
            });
        }
        Ok(Section {
            text: None,
            fields: Some(fields),
            accessory: None,
            block_id: None,
        })
    }

    pub fn accessory(mut self, element: Element) -> Self {
        self.accessory = Some(element);
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Divider {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageBlock {
    pub image_url: String,
    pub alt_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
}

/// Actions block: up to 5 interactive elements.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Actions {
    pub elements: Vec<Element>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
}

impl Actions {
    pub fn new(elements: Vec<Element>) -> Result<Self, BlockError> {
        if elements.len() > MAX_ACTIONS_ELEMENTS {
            return Err(BlockError::TooManyElements {
                block: "actions",
                max: MAX_ACTIONS_ELEMENTS,
                got: elements.len(),
            });
        }
        Ok(Actions {
            elements,
            block_id: None,
        })
    }
}

/// Context block: up to 10 image elements and text objects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Context {
    pub elements: Vec<ContextElement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
}

impl Context {
    pub fn new(elements: Vec<ContextElement>) -> Result<Self, BlockError> {
        if elements.len() > MAX_CONTEXT_ELEMENTS {
            return Err(BlockError::TooManyElements {
                block: "context",
                max: MAX_CONTEXT_ELEMENTS,
                got: elements.len(),
            });
        }
        Ok(Context {
            elements,
            block_id: None,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ContextElement {
    Text(Text),
    Image(TaggedImageElement),
}

/// Image element with its `type` tag attached, for positions where the
/// element stands alone instead of inside the [`Element`] union.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename = "image")]
pub struct TaggedImageElement {
    pub image_url: String,
    pub alt_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Input {
    pub label: Text,
    pub element: Element,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct File {
    pub external_id: String,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
}

/// Interactive elements. Select-menu variants are mutually exclusive by
/// their `type` tag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    Button(Button),
    Image(ImageElement),
    Checkboxes(Checkboxes),
    Datepicker(Datepicker),
    Overflow(Overflow),
    PlainTextInput(PlainTextInput),
    RadioButtons(RadioButtons),
    StaticSelect(StaticSelect),
    ExternalSelect(ExternalSelect),
    UsersSelect(UsersSelect),
    ConversationsSelect(ConversationsSelect),
    ChannelsSelect(ChannelsSelect),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    Primary,
    Danger,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Button {
    pub text: Text,
    pub action_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ButtonStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm: Option<Confirm>,
}

impl Button {
    pub fn new(text: Text, action_id: impl Into<String>) -> Self {
        Button {
            text,
            action_id: action_id.into(),
            url: None,
            value: None,
            style: None,
            confirm: None,
        }
    }

    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageElement {
    pub image_url: String,
    pub alt_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Checkboxes {
    pub action_id: String,
    pub options: Vec<OptionObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_options: Option<Vec<OptionObject>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm: Option<Confirm>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Datepicker {
    pub action_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm: Option<Confirm>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Overflow {
    pub action_id: String,
    pub options: Vec<OptionObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm: Option<Confirm>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlainTextInput {
    pub action_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RadioButtons {
    pub action_id: String,
    pub options: Vec<OptionObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_option: Option<OptionObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm: Option<Confirm>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StaticSelect {
    pub placeholder: Text,
    pub action_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<OptionObject>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_groups: Option<Vec<OptionGroup>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_option: Option<OptionObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm: Option<Confirm>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExternalSelect {
    pub placeholder: Text,
    pub action_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_option: Option<OptionObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_query_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm: Option<Confirm>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UsersSelect {
    pub placeholder: Text,
    pub action_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm: Option<Confirm>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConversationsSelect {
    pub placeholder: Text,
    pub action_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_conversation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_to_current_conversation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Filter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm: Option<Confirm>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChannelsSelect {
    pub placeholder: Text,
    pub action_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm: Option<Confirm>,
}

/// Confirmation dialog shown before an interactive element fires.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Confirm {
    pub title: Text,
    pub text: Text,
    pub confirm: Text,
    pub deny: Text,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ButtonStyle>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OptionObject {
    pub text: Text,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OptionGroup {
    pub label: Text,
    pub options: Vec<OptionObject>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Filter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_external_shared_channels: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_bot_users: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn button(label: &str, id: &str) -> Element {
        Element::Button(Button::new(Text::plain(label), id))
    }

    #[test]
    fn section_text_serializes_without_fields_key() {
        let block = Block::Section(Section::text(Text::mrkdwn("hello")));
        let value = serde_json::to_value(&block).unwrap();
        assert_eq!(value["type"], "section");
        assert_eq!(value["text"]["type"], "mrkdwn");
        assert_eq!(value["text"]["text"], "hello");
        assert!(value.get("fields").is_none());
    }

    #[test]
    fn section_fields_serializes_without_text_key() {
        let block = Block::Section(
            Section::fields(vec![Text::mrkdwn("*a*"), Text::mrkdwn("*b*")]).unwrap(),
        );
        let value = serde_json::to_value(&block).unwrap();
        assert_eq!(value["fields"].as_array().unwrap().len(), 2);
        assert!(value.get("text").is_none());
    }

    #[test]
    fn section_fields_capped_at_ten() {
        let fields = (0..11).map(|i| Text::mrkdwn(format!("f{i}"))).collect();
        let err = Section::fields(fields).unwrap_err();
        assert_eq!(
            err,
            BlockError::TooManyElements {
                block: "section",
                max: 10,
                got: 11
            }
        );
    }

    #[test]
    fn actions_capped_at_five() {
        let ok = Actions::new((0..5).map(|i| button("b", &format!("id{i}"))).collect());
        assert!(ok.is_ok());

        let err = Actions::new((0..6).map(|i| button("b", &format!("id{i}"))).collect());
        assert_eq!(
            err.unwrap_err(),
            BlockError::TooManyElements {
                block: "actions",
                max: 5,
                got: 6
            }
        );
    }

    #[test]
    fn context_capped_at_ten() {
        let ok = Context::new(
            (0..10)
                .map(|i| ContextElement::Text(Text::mrkdwn(format!("c{i}"))))
                .collect(),
        );
        assert!(ok.is_ok());

        let err = Context::new(
            (0..11)
                .map(|i| ContextElement::Text(Text::mrkdwn(format!("c{i}"))))
                .collect(),
        );
        assert!(err.is_err());
    }

    #[test]
    fn button_wire_shape() {
        let element = Element::Button(
            Button::new(Text::plain("Approve"), "approve_id").style(ButtonStyle::Primary),
        );
        let value = serde_json::to_value(&element).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "button",
                "text": { "type": "plain_text", "text": "Approve" },
                "action_id": "approve_id",
                "style": "primary"
            })
        );
    }

    #[test]
    fn select_variants_carry_distinct_tags() {
        let element = Element::UsersSelect(UsersSelect {
            placeholder: Text::plain("pick"),
            action_id: "u1".into(),
            initial_user: None,
            confirm: None,
        });
        let value = serde_json::to_value(&element).unwrap();
        assert_eq!(value["type"], "users_select");

        let element = Element::StaticSelect(StaticSelect {
            placeholder: Text::plain("pick"),
            action_id: "s1".into(),
            options: Some(vec![OptionObject {
                text: Text::plain("one"),
                value: "1".into(),
                description: None,
                url: None,
            }]),
            option_groups: None,
            initial_option: None,
            confirm: None,
        });
        let value = serde_json::to_value(&element).unwrap();
        assert_eq!(value["type"], "static_select");
    }

    #[test]
    fn divider_wire_shape() {
        let value = serde_json::to_value(Block::Divider(Divider::default())).unwrap();
        assert_eq!(value, json!({ "type": "divider" }));
    }

    #[test]
    fn message_text_and_blocks_round_trip() {
        let text = Message::text("plain fallback");
        let value = serde_json::to_value(&text).unwrap();
        assert_eq!(value, json!({ "text": "plain fallback" }));
        let back: Message = serde_json::from_value(value).unwrap();
        assert_eq!(back, text);

        let blocks = Message::blocks(vec![
            Block::Section(Section::text(Text::mrkdwn("body"))),
            Block::Divider(Divider::default()),
            Block::Actions(
                Actions::new(vec![Element::Button(
                    Button::new(Text::plain("Deny"), "deny_id").style(ButtonStyle::Danger),
                )])
                .unwrap(),
            ),
        ]);
        let raw = serde_json::to_string(&blocks).unwrap();
        let back: Message = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, blocks);
    }
}
