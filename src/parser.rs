use std::fmt;

use tracing::{debug, warn};

use crate::config::WindowConfig;
use crate::line::{Line, classify};
use crate::tree::{Document, Heading, ListBlock, ListItem, Node, Rank};

/// Parse source lines into a document tree, discarding diagnostics.
pub fn parse<S: AsRef<str>>(lines: &[S], window: &WindowConfig) -> Document {
    parse_with_diagnostics(lines, window).document
}

/// Parse source lines into a document tree.
///
/// Only lines after the front-matter marker *and* the page break that follows
/// it are body content; the body runs until the end-of-document marker.
/// Structural problems never abort the parse; each one is logged and recorded
/// as an [`Anomaly`] next to the tree.
pub fn parse_with_diagnostics<S: AsRef<str>>(lines: &[S], window: &WindowConfig) -> Parsed {
    let mut state = ParseState::default();

    let mut i = 0;
    while i < lines.len() {
        let line_no = i + 1;
        let line = lines[i].as_ref().trim();
        i += 1;

        if line == window.front_matter {
            if state.window == Window::Preamble {
                debug!(line = line_no, "front matter marker found");
                state.window = Window::FrontMatter;
            }
            continue;
        }
        if line == window.page_break {
            if state.window == Window::FrontMatter {
                debug!(line = line_no, "body starts after page break");
                state.window = Window::Body;
            }
            continue;
        }
        if state.window != Window::Body {
            continue;
        }
        if line == window.end_document {
            debug!(line = line_no, "end of document body");
            break;
        }

        match classify(line) {
            Line::Blank => {}
            Line::Heading { rank, title } => {
                let mut heading = Heading::new(rank, title);
                // Only the very next line may bind a label
                match lines.get(i).map(|next| classify(next.as_ref().trim())) {
                    Some(Line::Label(label)) => {
                        heading.label = Some(label.to_string());
                        i += 1;
                    }
                    Some(_) => {}
                    None => state.report(line_no, AnomalyKind::TruncatedLookahead),
                }
                state.open_heading(heading, line_no);
            }
            Line::BeginList => state.open_list(line_no),
            Line::EndList => state.close_list(line_no),
            Line::Item(text) => state.add_item(text, line_no),
            Line::Label(_) | Line::Text(_) => state.add_paragraph(line, line_no),
        }
    }

    if state.window != Window::Body {
        state.report(lines.len(), AnomalyKind::EmptyActivationWindow);
    }

    let anomalies = std::mem::take(&mut state.anomalies);
    Parsed {
        document: state.finish(),
        anomalies,
    }
}

/// Result of a parse: the tree plus everything that had to be repaired
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parsed {
    pub document: Document,
    pub anomalies: Vec<Anomaly>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anomaly {
    /// 1-based source line. End-of-input anomalies report the line count.
    pub line: usize,
    pub kind: AnomalyKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnomalyKind {
    /// A list end with no open list; the marker is ignored.
    UnmatchedListEnd,
    /// A subsection or subsubsection with no suitable parent; attached at the root.
    OrphanSubsection { rank: Rank },
    /// A heading on the last line, so no label could follow it.
    TruncatedLookahead,
    /// No front matter marker followed by a page break; the tree is empty.
    EmptyActivationWindow,
    /// Content inside a list before its first item; attached to the list's container.
    TextOutsideItem,
    /// An item marker with no open list; kept as a paragraph.
    ItemOutsideList,
}

impl fmt::Display for AnomalyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnomalyKind::UnmatchedListEnd => f.write_str("list end without an open list"),
            AnomalyKind::OrphanSubsection { rank } => {
                write!(f, "{} without a parent section", rank)
            }
            AnomalyKind::TruncatedLookahead => f.write_str("heading on the last line"),
            AnomalyKind::EmptyActivationWindow => {
                f.write_str("no front matter and page break markers found")
            }
            AnomalyKind::TextOutsideItem => f.write_str("list content before the first item"),
            AnomalyKind::ItemOutsideList => f.write_str("item marker outside a list"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Window {
    #[default]
    Preamble,
    FrontMatter,
    Body,
}

/// An open container. Its node is attached to the frame below (or the root) when popped.
#[derive(Debug)]
enum Frame {
    Heading(Heading),
    List(ListBlock),
}

impl Frame {
    fn into_node(self) -> Node {
        match self {
            Frame::Heading(heading) => Node::Heading(heading),
            Frame::List(list) => Node::List(list),
        }
    }
}

#[derive(Default)]
struct ParseState {
    window: Window,
    root: Vec<Node>,
    stack: Vec<Frame>,
    anomalies: Vec<Anomaly>,
}

impl ParseState {
    fn report(&mut self, line: usize, kind: AnomalyKind) {
        match kind {
            AnomalyKind::EmptyActivationWindow => debug!(line, "{}", kind),
            _ => warn!(line, "{}", kind),
        }
        self.anomalies.push(Anomaly { line, kind });
    }

    /// Close frames until the top is a heading of lower rank, then open `heading`.
    fn open_heading(&mut self, heading: Heading, line_no: usize) {
        while !matches!(self.stack.last(), Some(Frame::Heading(open)) if open.rank < heading.rank) {
            if !self.pop() {
                break;
            }
        }
        if self.stack.is_empty() && heading.rank != Rank::Section {
            self.report(line_no, AnomalyKind::OrphanSubsection { rank: heading.rank });
        }
        self.stack.push(Frame::Heading(heading));
    }

    fn open_list(&mut self, line_no: usize) {
        if matches!(self.stack.last(), Some(Frame::List(list)) if list.items.is_empty()) {
            self.report(line_no, AnomalyKind::TextOutsideItem);
        }
        self.stack.push(Frame::List(ListBlock::default()));
    }

    fn close_list(&mut self, line_no: usize) {
        if matches!(self.stack.last(), Some(Frame::List(_))) {
            self.pop();
        } else {
            self.report(line_no, AnomalyKind::UnmatchedListEnd);
        }
    }

    fn add_item(&mut self, text: &str, line_no: usize) {
        match self.stack.last_mut() {
            Some(Frame::List(list)) => list.items.push(ListItem::new(text)),
            _ => {
                self.report(line_no, AnomalyKind::ItemOutsideList);
                self.attach(Node::paragraph(text));
            }
        }
    }

    fn add_paragraph(&mut self, text: &str, line_no: usize) {
        if matches!(self.stack.last(), Some(Frame::List(list)) if list.items.is_empty()) {
            self.report(line_no, AnomalyKind::TextOutsideItem);
        }
        self.attach(Node::paragraph(text));
    }

    /// Append to the innermost open container that can hold a node: a heading's
    /// children or the last item of a list. Lists without items are skipped.
    fn attach(&mut self, node: Node) {
        for frame in self.stack.iter_mut().rev() {
            match frame {
                Frame::Heading(heading) => {
                    heading.children.push(node);
                    return;
                }
                Frame::List(list) => {
                    if let Some(item) = list.items.last_mut() {
                        item.children.push(node);
                        return;
                    }
                }
            }
        }
        self.root.push(node);
    }

    /// Close the innermost frame. Returns false when nothing was open.
    fn pop(&mut self) -> bool {
        match self.stack.pop() {
            Some(frame) => {
                self.attach(frame.into_node());
                true
            }
            None => false,
        }
    }

    fn finish(mut self) -> Document {
        while self.pop() {}
        Document { nodes: self.root }
    }
}
