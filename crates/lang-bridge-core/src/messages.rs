use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The parsed content of one locale file: translation keys in file order.
pub type Messages = IndexMap<String, Message>;

/// A single translation entry, either a string or a nested group of entries.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Message {
    Text(String),
    Group(Messages),
}

impl Message {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Message::Text(text) => Some(text),
            Message::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&Messages> {
        match self {
            Message::Text(_) => None,
            Message::Group(group) => Some(group),
        }
    }
}

impl From<&str> for Message {
    fn from(value: &str) -> Self {
        Message::Text(value.to_string())
    }
}

impl From<String> for Message {
    fn from(value: String) -> Self {
        Message::Text(value)
    }
}

impl From<Messages> for Message {
    fn from(value: Messages) -> Self {
        Message::Group(value)
    }
}

/// Looks up `path` inside `messages`.
///
/// The path is first walked segment by segment (`"a.b.c"` -> `a` -> `b` -> `c`).
/// If that walk fails the whole path is tried as a literal key, so files that
/// use dotted keys like `"greeting.hello"` still resolve.
pub fn lookup<'a>(messages: &'a Messages, path: &str) -> Option<&'a Message> {
    walk(messages, path).or_else(|| messages.get(path))
}

fn walk<'a>(messages: &'a Messages, path: &str) -> Option<&'a Message> {
    let mut segments = path.split('.');
    let mut current = messages.get(segments.next()?)?;

    for segment in segments {
        current = current.as_group()?.get(segment)?;
    }

    Some(current)
}
