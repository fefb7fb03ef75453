//! JSON interchange format for the document tree.
//!
//! The layout matches the files produced by the LaTeX-to-JSON step of the
//! bylaws tooling: the root is an array, headings are tagged by their
//! sectioning command, list blocks by their environment name, and list items
//! are plain `{ "text", "children" }` objects without a tag.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Result;
use crate::tree::{Document, Heading, ListBlock, ListItem, Node, Rank};

/// Serialize a document to pretty-printed JSON.
pub fn to_json(document: &Document) -> Result<String> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// Read a document back from its JSON form.
pub fn from_json(json: &str) -> Result<Document> {
    Ok(serde_json::from_str(json)?)
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum NodeRef<'a> {
    Section(HeadingRef<'a>),
    Subsection(HeadingRef<'a>),
    Subsubsection(HeadingRef<'a>),
    Enumerate { items: &'a [ListItem] },
    Text { text: &'a str },
}

#[derive(Serialize)]
struct HeadingRef<'a> {
    title: &'a str,
    label: Option<&'a str>,
    children: &'a [Node],
}

impl<'a> From<&'a Node> for NodeRef<'a> {
    fn from(node: &'a Node) -> Self {
        match node {
            Node::Heading(heading) => {
                let fields = HeadingRef {
                    title: &heading.title,
                    label: heading.label.as_deref(),
                    children: &heading.children,
                };
                match heading.rank {
                    Rank::Section => NodeRef::Section(fields),
                    Rank::Subsection => NodeRef::Subsection(fields),
                    Rank::Subsubsection => NodeRef::Subsubsection(fields),
                }
            }
            Node::List(list) => NodeRef::Enumerate { items: &list.items },
            Node::Paragraph { text } => NodeRef::Text { text },
        }
    }
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum OwnedNode {
    Section(OwnedHeading),
    Subsection(OwnedHeading),
    Subsubsection(OwnedHeading),
    Enumerate {
        #[serde(default)]
        items: Vec<ListItem>,
    },
    Text {
        text: String,
    },
}

#[derive(Deserialize)]
struct OwnedHeading {
    title: String,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    children: Vec<Node>,
}

impl OwnedHeading {
    fn into_heading(self, rank: Rank) -> Heading {
        Heading {
            rank,
            title: self.title,
            label: self.label,
            children: self.children,
        }
    }
}

impl From<OwnedNode> for Node {
    fn from(node: OwnedNode) -> Self {
        match node {
            OwnedNode::Section(h) => Node::Heading(h.into_heading(Rank::Section)),
            OwnedNode::Subsection(h) => Node::Heading(h.into_heading(Rank::Subsection)),
            OwnedNode::Subsubsection(h) => Node::Heading(h.into_heading(Rank::Subsubsection)),
            OwnedNode::Enumerate { items } => Node::List(ListBlock { items }),
            OwnedNode::Text { text } => Node::Paragraph { text },
        }
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        NodeRef::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        OwnedNode::deserialize(deserializer).map(Node::from)
    }
}
