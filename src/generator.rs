use tracing::debug;

use crate::command::{Batch, EditCommand, Range};
use crate::error::GenerateError;
use crate::tree::{Document, Heading, ListItem, Node, Rank};

/// First addressable position of an empty document.
pub const START_CURSOR: usize = 1;

/// Convert a document tree into an ordered command batch.
///
/// The walk is depth-first, pre-order. Every insertion lands at the cursor left
/// by the insertion before it, and every style range is computed from the very
/// string it styles, so the batch stays consistent when applied in order.
pub fn generate(document: &Document) -> Result<Batch, GenerateError> {
    let mut commands = Vec::new();
    let root = Walk {
        cursor: START_CURSOR,
        depth: 0,
        parent: Parent::Root,
    };
    let final_cursor = emit_nodes(&document.nodes, root, &mut commands)?;
    debug!(commands = commands.len(), final_cursor, "generated command batch");
    Ok(Batch {
        commands,
        final_cursor,
    })
}

/// Container a node sequence belongs to
#[derive(Debug, Clone, Copy)]
enum Parent {
    Root,
    Heading(Rank),
    Item,
}

/// Traversal state handed down to a node sequence
#[derive(Debug, Clone, Copy)]
struct Walk {
    cursor: usize,
    depth: usize,
    parent: Parent,
}

impl Walk {
    fn at(self, cursor: usize) -> Self {
        Self { cursor, ..self }
    }
}

fn emit_nodes(
    nodes: &[Node],
    walk: Walk,
    out: &mut Vec<EditCommand>,
) -> Result<usize, GenerateError> {
    let mut cursor = walk.cursor;
    for node in nodes {
        cursor = match node {
            Node::Heading(heading) => emit_heading(heading, walk.at(cursor), out)?,
            Node::List(list) => emit_items(&list.items, cursor, walk.depth + 1, out)?,
            Node::Paragraph { text } => insert(cursor, text, out).end,
        };
    }
    Ok(cursor)
}

fn emit_heading(
    heading: &Heading,
    walk: Walk,
    out: &mut Vec<EditCommand>,
) -> Result<usize, GenerateError> {
    match walk.parent {
        Parent::Root => {}
        Parent::Heading(parent) if parent < heading.rank => {}
        Parent::Heading(parent) => {
            return Err(GenerateError::HeadingOutOfOrder {
                parent,
                child: heading.rank,
                title: heading.title.clone(),
            });
        }
        Parent::Item => {
            return Err(GenerateError::HeadingInList {
                title: heading.title.clone(),
            });
        }
    }

    let range = insert(walk.cursor, &heading.title, out);
    out.push(EditCommand::ApplyHeadingStyle {
        range,
        rank: heading.rank,
    });

    // Headings restart list indentation
    let children = Walk {
        cursor: range.end,
        depth: 0,
        parent: Parent::Heading(heading.rank),
    };
    emit_nodes(&heading.children, children, out)
}

fn emit_items(
    items: &[ListItem],
    mut cursor: usize,
    depth: usize,
    out: &mut Vec<EditCommand>,
) -> Result<usize, GenerateError> {
    for item in items {
        let range = insert(cursor, &item.text, out);
        out.push(EditCommand::ApplyListFormatting {
            range,
            nesting_depth: depth,
        });
        let children = Walk {
            cursor: range.end,
            depth: depth + 1,
            parent: Parent::Item,
        };
        cursor = emit_nodes(&item.children, children, out)?;
    }
    Ok(cursor)
}

/// Emit the insertion of one paragraph and return the range it occupies.
fn insert(cursor: usize, text: &str, out: &mut Vec<EditCommand>) -> Range {
    let text = format!("{text}\n");
    let range = Range::covering(cursor, &text);
    out.push(EditCommand::InsertText { at: cursor, text });
    range
}
