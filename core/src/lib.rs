use indexmap::IndexMap;
use serde_json::Value;

pub mod fallback;
mod flatten;
mod merge;
mod stylesheet;
mod value;

pub use fallback::{FallbackTable, FALLBACK_TOKENS};
pub use flatten::{flatten, FlatToken, SEPARATOR};
pub use merge::merge;
pub use stylesheet::{emit, BASE_STYLES};
pub use value::{render_array, render_value};

/// Key that marks a mapping as a single token rather than a group.
pub const TOKEN_VALUE_KEY: &str = "value";

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("invalid token JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("token document root must be a JSON object, found {0}")]
    RootNotObject(&'static str),
}

/// A parsed token document. Top-level keys are the token categories.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignTokens {
    pub root: IndexMap<String, TokenNode>,
}
impl DesignTokens {
    pub fn parse(text: &str) -> Result<Self, TokenError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }
    /// The root is always walked as a group, even when it has a `value` key.
    pub fn from_value(value: Value) -> Result<Self, TokenError> {
        match value {
            Value::Object(map) => Ok(Self {
                root: map
                    .into_iter()
                    .map(|(key, value)| (key, TokenNode::from(value)))
                    .collect(),
            }),
            other => Err(TokenError::RootNotObject(json_kind(&other))),
        }
    }
    pub fn categories(&self) -> usize {
        self.root.len()
    }
    pub fn flatten(&self) -> Vec<FlatToken> {
        flatten(&self.root, "")
    }
}

/// One node of the raw token tree.
///
/// Object keys keep their declaration order: `serde_json` is built with
/// `preserve_order`, and groups are collected into an [`IndexMap`].
#[derive(Debug, Clone, PartialEq)]
pub enum TokenNode {
    /// A string, number, bool or null.
    Leaf(Value),
    /// A mapping carrying a `value` key. The other keys are metadata
    /// (`type`, `description`, ...) and are dropped here.
    Token(Value),
    /// A mapping without a `value` key.
    Group(IndexMap<String, TokenNode>),
    /// Arrays are opaque and never walked key by key.
    Array(Vec<Value>),
}
impl From<Value> for TokenNode {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => TokenNode::Array(items),
            Value::Object(mut map) if map.contains_key(TOKEN_VALUE_KEY) => {
                TokenNode::Token(map.remove(TOKEN_VALUE_KEY).unwrap_or_default())
            }
            Value::Object(map) => TokenNode::Group(
                map.into_iter()
                    .map(|(key, value)| (key, TokenNode::from(value)))
                    .collect(),
            ),
            scalar => TokenNode::Leaf(scalar),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
