use std::fmt;

/// Heading rank, from top-level section down to subsubsection
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Section = 1,
    Subsection = 2,
    Subsubsection = 3,
}

impl Rank {
    /// Numeric level, 1 through 3.
    pub fn level(self) -> u8 {
        self as u8
    }

    /// Name of the sectioning command that opens a heading of this rank.
    pub fn command(self) -> &'static str {
        match self {
            Rank::Section => "section",
            Rank::Subsection => "subsection",
            Rank::Subsubsection => "subsubsection",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}

/// A sectioning heading and everything nested under it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub rank: Rank,
    pub title: String,
    pub label: Option<String>,
    pub children: Vec<Node>,
}

impl Heading {
    pub fn new(rank: Rank, title: impl Into<String>) -> Self {
        Self {
            rank,
            title: title.into(),
            label: None,
            children: Vec::new(),
        }
    }
}

/// A single list item; children hold sub-paragraphs and nested lists
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListItem {
    pub text: String,
    #[serde(default)]
    pub children: Vec<Node>,
}

impl ListItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            children: Vec::new(),
        }
    }
}

/// An ordered list. Contributes no text of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListBlock {
    pub items: Vec<ListItem>,
}

/// Nodes of the document tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Heading(Heading),
    List(ListBlock),
    Paragraph { text: String },
}

impl Node {
    pub fn paragraph(text: impl Into<String>) -> Self {
        Node::Paragraph { text: text.into() }
    }
}

impl From<Heading> for Node {
    fn from(heading: Heading) -> Self {
        Node::Heading(heading)
    }
}

impl From<ListBlock> for Node {
    fn from(list: ListBlock) -> Self {
        Node::List(list)
    }
}

/// Root of a parsed document: the top-level node sequence
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Document {
    pub nodes: Vec<Node>,
}

impl Document {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
