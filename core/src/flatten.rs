use indexmap::IndexMap;

use crate::{
    value::{render_array, render_value},
    TokenNode,
};

/// Joins the key path of a token into its flat name.
pub const SEPARATOR: &str = "-";

/// A single `--name: value;` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatToken {
    pub name: String,
    pub value: String,
}
impl FlatToken {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
    pub fn to_css(&self) -> String {
        format!("--{}: {};", self.name, self.value)
    }
}

/// Walks `group` depth-first in declaration order.
///
/// Scalars, arrays and token objects each yield one entry named by their key
/// path; groups only extend the path. Keys are used exactly as written.
pub fn flatten(group: &IndexMap<String, TokenNode>, prefix: &str) -> Vec<FlatToken> {
    let mut out = Vec::new();
    flatten_into(group, prefix, &mut out);
    out
}

fn flatten_into(group: &IndexMap<String, TokenNode>, prefix: &str, out: &mut Vec<FlatToken>) {
    for (key, node) in group {
        let name = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}{SEPARATOR}{key}")
        };
        match node {
            TokenNode::Leaf(value) => out.push(FlatToken::new(name, render_value(value))),
            TokenNode::Array(items) => out.push(FlatToken::new(name, render_array(items))),
            // A nested mapping under `value` is not unwrapped any further.
            TokenNode::Token(value) => out.push(FlatToken::new(name, render_value(value))),
            TokenNode::Group(children) => flatten_into(children, &name, out),
        }
    }
}
