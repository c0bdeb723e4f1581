use crate::error::{LangError, ResourceError};
use crate::messages::{Message, Messages};
use crate::php;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Supported locale file formats.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceFormat {
    Json,
    Php,
}

impl ResourceFormat {
    pub const EXTENSIONS: [&'static str; 2] = ["json", "php"];

    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "json" => Some(Self::Json),
            "php" => Some(Self::Php),
            _ => None,
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        path.rsplit_once('.')
            .and_then(|(_, extension)| Self::from_extension(extension))
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Php => "php",
        }
    }
}

/// Parses raw file content into messages.
pub fn parse_resource(format: ResourceFormat, bytes: &[u8]) -> Result<Messages, ResourceError> {
    match format {
        ResourceFormat::Json => parse_json(bytes),
        ResourceFormat::Php => php::parse(std::str::from_utf8(bytes)?),
    }
}

fn parse_json(bytes: &[u8]) -> Result<Messages, ResourceError> {
    match serde_json::from_slice::<Value>(bytes)? {
        Value::Object(map) => Ok(object_to_messages(map)),
        _ => Err(ResourceError::NotAnObject),
    }
}

fn object_to_messages(map: serde_json::Map<String, Value>) -> Messages {
    map.into_iter()
        .filter_map(|(key, value)| json_to_message(value).map(|message| (key, message)))
        .collect()
}

/// Scalars become text and `null` entries are dropped. Arrays are keyed by index.
fn json_to_message(value: Value) -> Option<Message> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(Message::Text(text)),
        Value::Bool(flag) => Some(Message::Text(flag.to_string())),
        Value::Number(number) => Some(Message::Text(number.to_string())),
        Value::Object(map) => Some(Message::Group(object_to_messages(map))),
        Value::Array(items) => Some(Message::Group(
            items
                .into_iter()
                .enumerate()
                .filter_map(|(index, item)| {
                    json_to_message(item).map(|message| (index.to_string(), message))
                })
                .collect(),
        )),
    }
}

/// A discovered locale file with its content already parsed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LocaleFile {
    /// Path relative to the discovery root, e.g. `./en/auth.php`.
    pub path: String,
    pub content: Messages,
}

impl LocaleFile {
    pub fn new(path: impl Into<String>, content: Messages) -> Self {
        Self {
            path: path.into(),
            content,
        }
    }

    /// Parses `bytes` according to the extension of `path`.
    pub fn parse(path: impl Into<String>, bytes: &[u8]) -> Result<Self, LangError> {
        let path = path.into();
        let parsed = ResourceFormat::from_path(&path)
            .ok_or(ResourceError::UnsupportedFormat)
            .and_then(|format| parse_resource(format, bytes));

        match parsed {
            Ok(content) => Ok(Self { path, content }),
            Err(source) => Err(LangError::Resource { path, source }),
        }
    }
}
