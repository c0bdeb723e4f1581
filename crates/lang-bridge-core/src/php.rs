//! Parser for PHP locale files.
//!
//! Only the subset that translation files use is understood:
//!
//! ```php
//! <?php
//!
//! return [
//!     'failed' => 'These credentials do not match our records.',
//!     "nested" => array('key' => 'Value ' . 'joined'),
//!     'list' => ['first', 'second'],
//! ];
//! ```

use crate::error::ResourceError;
use crate::messages::{Message, Messages};

/// Parses the `return [...]` array of a PHP locale file.
pub fn parse(source: &str) -> Result<Messages, ResourceError> {
    let mut parser = Parser { source, pos: 0 };

    parser.skip_trivia()?;
    if parser.eat("<?php") || parser.eat("<?") {
        parser.skip_trivia()?;
    }
    if parser.eat_keyword("declare") {
        parser.skip_statement()?;
        parser.skip_trivia()?;
    }
    if !parser.eat_keyword("return") {
        return Err(parser.error("expected 'return'"));
    }
    parser.skip_trivia()?;

    let messages = parser.parse_array()?;

    parser.skip_trivia()?;
    parser.eat(";");
    parser.skip_trivia()?;
    parser.eat("?>");
    parser.skip_trivia()?;

    if parser.pos < source.len() {
        return Err(parser.error("unexpected content after the returned array"));
    }

    Ok(messages)
}

enum Value {
    Text(String),
    Null,
    Array(Messages),
}

struct Parser<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, token: &str) -> bool {
        if self.rest().starts_with(token) {
            self.pos += token.len();
            true
        } else {
            false
        }
    }

    fn at_keyword(&self, keyword: &str) -> bool {
        let rest = self.rest();
        match rest.get(..keyword.len()) {
            Some(head) if head.eq_ignore_ascii_case(keyword) => rest[keyword.len()..]
                .chars()
                .next()
                .is_none_or(|c| !(c.is_ascii_alphanumeric() || c == '_')),
            _ => false,
        }
    }

    fn eat_keyword(&mut self, keyword: &str) -> bool {
        if self.at_keyword(keyword) {
            self.pos += keyword.len();
            true
        } else {
            false
        }
    }

    fn error(&self, message: impl Into<String>) -> ResourceError {
        ResourceError::Php {
            offset: self.pos,
            message: message.into(),
        }
    }

    /// Skips whitespace and `//`, `#` and `/* */` comments.
    fn skip_trivia(&mut self) -> Result<(), ResourceError> {
        loop {
            let trimmed = self.rest().trim_start();
            self.pos = self.source.len() - trimmed.len();

            if self.rest().starts_with("//") || self.rest().starts_with('#') {
                let line_end = self.rest().find('\n').unwrap_or(self.rest().len());
                self.pos += line_end;
            } else if self.rest().starts_with("/*") {
                match self.rest()[2..].find("*/") {
                    Some(end) => self.pos += end + 4,
                    None => return Err(self.error("unterminated block comment")),
                }
            } else {
                return Ok(());
            }
        }
    }

    fn skip_statement(&mut self) -> Result<(), ResourceError> {
        match self.rest().find(';') {
            Some(end) => {
                self.pos += end + 1;
                Ok(())
            },
            None => Err(self.error("unterminated statement")),
        }
    }

    fn parse_array(&mut self) -> Result<Messages, ResourceError> {
        let close = if self.eat("[") {
            ']'
        } else if self.eat_keyword("array") {
            self.skip_trivia()?;
            if !self.eat("(") {
                return Err(self.error("expected '(' after 'array'"));
            }
            ')'
        } else {
            return Err(self.error("expected an array literal"));
        };

        let mut messages = Messages::new();
        // `None` once `i64::MAX` has been used as a key.
        let mut next_index: Option<i64> = Some(0);

        loop {
            self.skip_trivia()?;
            if self.peek() == Some(close) {
                self.bump();
                return Ok(messages);
            }

            let first = self.parse_expression()?;
            self.skip_trivia()?;

            let (key, value) = if self.eat("=>") {
                let key = match first {
                    Value::Text(key) => key,
                    Value::Null => String::new(),
                    Value::Array(_) => return Err(self.error("array keys must be scalars")),
                };
                self.skip_trivia()?;
                (key, self.parse_expression()?)
            } else {
                let Some(index) = next_index else {
                    return Err(self.error("array index overflow"));
                };
                (index.to_string(), first)
            };

            if let Ok(index) = key.parse::<i64>() {
                next_index = next_index
                    .and_then(|next| index.checked_add(1).map(|following| next.max(following)));
            }

            match value {
                Value::Text(text) => {
                    messages.insert(key, Message::Text(text));
                },
                Value::Array(group) => {
                    messages.insert(key, Message::Group(group));
                },
                Value::Null => {},
            }

            self.skip_trivia()?;
            if self.eat(",") {
                continue;
            }
            if self.peek() == Some(close) {
                self.bump();
                return Ok(messages);
            }
            return Err(self.error(format!("expected ',' or '{}'", close)));
        }
    }

    /// A value, optionally joined to further string values with `.`.
    fn parse_expression(&mut self) -> Result<Value, ResourceError> {
        let mut value = self.parse_value()?;

        loop {
            self.skip_trivia()?;
            if !self.rest().starts_with('.') {
                return Ok(value);
            }
            let Value::Text(mut joined) = value else {
                return Err(self.error("only strings can be concatenated"));
            };
            self.bump();
            self.skip_trivia()?;
            match self.parse_value()? {
                Value::Text(next) => joined.push_str(&next),
                Value::Null => {},
                Value::Array(_) => return Err(self.error("only strings can be concatenated")),
            }
            value = Value::Text(joined);
        }
    }

    fn parse_value(&mut self) -> Result<Value, ResourceError> {
        if self.at_keyword("array") {
            return self.parse_array().map(Value::Array);
        }
        if self.eat_keyword("true") {
            return Ok(Value::Text("true".to_string()));
        }
        if self.eat_keyword("false") {
            return Ok(Value::Text("false".to_string()));
        }
        if self.eat_keyword("null") {
            return Ok(Value::Null);
        }

        match self.peek() {
            Some('\'') => self.parse_single_quoted().map(Value::Text),
            Some('"') => self.parse_double_quoted().map(Value::Text),
            Some('[') => self.parse_array().map(Value::Array),
            Some(c) if c == '-' || c == '+' || c.is_ascii_digit() => {
                Ok(Value::Text(self.parse_number()))
            },
            Some(c) => Err(self.error(format!("unsupported expression starting with '{}'", c))),
            None => Err(self.error("unexpected end of input")),
        }
    }

    fn parse_number(&mut self) -> String {
        let start = self.pos;
        if matches!(self.peek(), Some('-' | '+')) {
            self.bump();
        }
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() || c == '_' {
                self.bump();
            } else if c == '.' && self.rest()[1..].starts_with(|n: char| n.is_ascii_digit()) {
                self.bump();
            } else {
                break;
            }
        }
        self.source[start..self.pos]
            .trim_start_matches('+')
            .replace('_', "")
    }

    fn parse_single_quoted(&mut self) -> Result<String, ResourceError> {
        let start = self.pos;
        self.bump();
        let mut out = String::new();

        loop {
            match self.bump() {
                Some('\'') => return Ok(out),
                Some('\\') => match self.peek() {
                    Some(c @ ('\'' | '\\')) => {
                        self.bump();
                        out.push(c);
                    },
                    _ => out.push('\\'),
                },
                Some(c) => out.push(c),
                None => {
                    self.pos = start;
                    return Err(self.error("unterminated string"));
                },
            }
        }
    }

    fn parse_double_quoted(&mut self) -> Result<String, ResourceError> {
        let start = self.pos;
        self.bump();
        let mut out = String::new();

        loop {
            match self.bump() {
                Some('"') => return Ok(out),
                Some('\\') => {
                    let escaped = match self.peek() {
                        Some('n') => Some('\n'),
                        Some('t') => Some('\t'),
                        Some('r') => Some('\r'),
                        Some(c @ ('"' | '\\' | '$')) => Some(c),
                        _ => None,
                    };
                    match escaped {
                        Some(c) => {
                            self.bump();
                            out.push(c);
                        },
                        None => out.push('\\'),
                    }
                },
                Some(c) => out.push(c),
                None => {
                    self.pos = start;
                    return Err(self.error("unterminated string"));
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::lookup;

    fn text<'a>(messages: &'a Messages, path: &str) -> Option<&'a str> {
        lookup(messages, path).and_then(Message::as_text)
    }

    #[test]
    fn parses_short_array_syntax() {
        let source = r#"<?php

return [
    'failed' => 'These credentials do not match our records.',
    'throttle' => "Too many login attempts. Try again in :seconds seconds.",
];
"#;
        let messages = parse(source).unwrap();

        assert_eq!(messages.len(), 2);
        assert_eq!(
            text(&messages, "failed"),
            Some("These credentials do not match our records.")
        );
        assert_eq!(
            text(&messages, "throttle"),
            Some("Too many login attempts. Try again in :seconds seconds.")
        );
    }

    #[test]
    fn parses_long_array_syntax_and_nesting() {
        let source = r#"<?php
// Validation lines
return array(
    'between' => array(
        'numeric' => 'The :attribute must be between :min and :max.',
        'string'  => [ 'chars' => 'too long' ],
    ),
    /* block */
    'accepted' => 'The :attribute must be accepted.', # trailing
);"#;
        let messages = parse(source).unwrap();

        assert_eq!(
            text(&messages, "between.numeric"),
            Some("The :attribute must be between :min and :max.")
        );
        assert_eq!(text(&messages, "between.string.chars"), Some("too long"));
        assert_eq!(
            text(&messages, "accepted"),
            Some("The :attribute must be accepted.")
        );
    }

    #[test]
    fn handles_escapes() {
        let messages =
            parse(r#"<?php return ['a' => 'It\'s \\ ok \n', 'b' => "say \"hi\"\n\$x"];"#).unwrap();

        assert_eq!(text(&messages, "a"), Some("It's \\ ok \\n"));
        assert_eq!(text(&messages, "b"), Some("say \"hi\"\n$x"));
    }

    #[test]
    fn positional_and_integer_keys() {
        let messages = parse("<?php return ['zero', 5 => 'five', 'six', 'x' => 1.5, 'neg' => -2];").unwrap();

        assert_eq!(text(&messages, "0"), Some("zero"));
        assert_eq!(text(&messages, "5"), Some("five"));
        assert_eq!(text(&messages, "6"), Some("six"));
        assert_eq!(text(&messages, "x"), Some("1.5"));
        assert_eq!(text(&messages, "neg"), Some("-2"));
    }

    #[test]
    fn concatenation_and_literals() {
        let messages = parse(
            "<?php declare(strict_types=1); return ['joined' => 'a' . \"b\" . 'c', 'on' => true, 'off' => FALSE, 'none' => null];",
        )
        .unwrap();

        assert_eq!(text(&messages, "joined"), Some("abc"));
        assert_eq!(text(&messages, "on"), Some("true"));
        assert_eq!(text(&messages, "off"), Some("false"));
        assert!(!messages.contains_key("none"));
    }

    #[test]
    fn empty_array() {
        assert!(parse("<?php return [];").unwrap().is_empty());
        assert!(parse("<?php return array();").unwrap().is_empty());
    }

    #[test]
    fn missing_return_is_an_error() {
        let err = parse("<?php $x = [];").unwrap_err();
        assert!(matches!(err, ResourceError::Php { offset: 6, .. }));
    }

    #[test]
    fn unterminated_string_reports_its_start() {
        let err = parse("<?php return ['a' => 'oops];").unwrap_err();
        assert!(matches!(err, ResourceError::Php { offset: 21, .. }));
    }

    #[test]
    fn missing_separator_is_an_error() {
        let err = parse("<?php return ['a' => 'x' 'b' => 'y'];").unwrap_err();
        assert!(
            matches!(err, ResourceError::Php { ref message, .. } if message.contains("expected ','"))
        );
    }

    #[test]
    fn largest_integer_key() {
        let messages = parse("<?php return [9223372036854775807 => 'max'];").unwrap();
        assert_eq!(text(&messages, "9223372036854775807"), Some("max"));

        let err = parse("<?php return [9223372036854775807 => 'max', 'next'];").unwrap_err();
        assert!(
            matches!(err, ResourceError::Php { ref message, .. } if message == "array index overflow")
        );
    }

    #[test]
    fn trailing_content_is_an_error() {
        assert!(parse("<?php return []; echo 'x';").is_err());
    }
}
