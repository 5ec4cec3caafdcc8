//! Renderable annotation content
//!
//! A host-agnostic description of the panel returned from transaction
//! review. The adapter only ever emits this closed set of node kinds; each
//! host shim translates them into its own rendering primitives.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A renderable content node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Content {
    /// Vertical container of child nodes
    Panel { children: Vec<Content> },
    /// Section heading
    Heading { text: String },
    /// Labeled key/value row
    Row { label: String, value: Box<Content> },
    /// Plain text
    Text { text: String },
    /// Account address, rendered with the host's address widget
    Address { address: String },
}

/// Build a panel from child nodes
pub fn panel(children: Vec<Content>) -> Content {
    Content::Panel { children }
}

/// Build a heading node
pub fn heading(text: impl Into<String>) -> Content {
    Content::Heading { text: text.into() }
}

/// Build a labeled row around a value node
pub fn row(label: impl Into<String>, value: Content) -> Content {
    Content::Row {
        label: label.into(),
        value: Box::new(value),
    }
}

/// Build a plain text node
pub fn text(text: impl Into<String>) -> Content {
    Content::Text { text: text.into() }
}

/// Build an address node
pub fn address(address: impl Into<String>) -> Content {
    Content::Address {
        address: address.into(),
    }
}
