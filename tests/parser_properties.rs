//! Property tests for the parser: nothing before the body window reaches the
//! tree, and label lines bind only to the heading line directly above them.

use proptest::collection::vec;
use proptest::prelude::*;

use texdocs::{Config, Document, Heading, Node, Rank};

fn words() -> impl Strategy<Value = String> {
    "[a-z]([a-z ]{0,10}[a-z])?"
}

fn title() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{0,8}"
}

fn label() -> impl Strategy<Value = String> {
    "[a-z]{1,5}:[a-z]{1,5}"
}

/// Body lines of every structural kind, without window markers.
fn body_line() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => words(),
        1 => title().prop_map(|t| format!("\\section{{{t}}}")),
        1 => title().prop_map(|t| format!("\\subsection{{{t}}}")),
        1 => title().prop_map(|t| format!("\\subsubsection{{{t}}}")),
        1 => label().prop_map(|l| format!("\\label{{{l}}}")),
        1 => Just("\\begin{enumerate}".to_string()),
        1 => Just("\\end{enumerate}".to_string()),
        2 => words().prop_map(|w| format!("\\item {w}")),
        1 => Just(String::new()),
    ]
}

/// Preamble lines. A page break may appear, but never a front matter marker,
/// so the window cannot open early.
fn preamble_line() -> impl Strategy<Value = String> {
    prop_oneof![
        6 => body_line(),
        1 => Just("\\newpage".to_string()),
    ]
}

#[derive(Debug, Clone)]
enum Piece {
    Section { title: String, label: Option<String> },
    Text(String),
    Label(String),
}

fn piece() -> impl Strategy<Value = Piece> {
    prop_oneof![
        (title(), proptest::option::of(label()))
            .prop_map(|(title, label)| Piece::Section { title, label }),
        words().prop_map(Piece::Text),
        label().prop_map(Piece::Label),
    ]
}

fn parse(lines: &[String]) -> Document {
    let mut source = vec!["\\tableofcontents".to_string(), "\\newpage".to_string()];
    source.extend_from_slice(lines);
    texdocs::parse_with_diagnostics(&source, &Config::default().window).document
}

/// Source lines for a run of pieces.
fn render(pieces: &[Piece]) -> Vec<String> {
    let mut lines = Vec::new();
    for piece in pieces {
        match piece {
            Piece::Section { title, label } => {
                lines.push(format!("\\section{{{title}}}"));
                if let Some(label) = label {
                    lines.push(format!("\\label{{{label}}}"));
                }
            }
            Piece::Text(text) => lines.push(text.clone()),
            Piece::Label(label) => lines.push(format!("\\label{{{label}}}")),
        }
    }
    lines
}

/// The tree those lines describe: a label line binds when the line above it
/// is a section line, and is a paragraph otherwise.
fn expected(lines: &[String]) -> Document {
    let mut nodes: Vec<Node> = Vec::new();
    let mut after_section = false;
    for line in lines {
        if let Some(title) = line.strip_prefix("\\section{").and_then(|l| l.strip_suffix('}')) {
            nodes.push(Heading::new(Rank::Section, title).into());
            after_section = true;
            continue;
        }
        let label = line.strip_prefix("\\label{").and_then(|l| l.strip_suffix('}'));
        match (nodes.last_mut(), label) {
            (Some(Node::Heading(heading)), Some(label)) if after_section => {
                heading.label = Some(label.to_string());
            }
            (Some(Node::Heading(heading)), _) => heading.children.push(Node::paragraph(line)),
            _ => nodes.push(Node::paragraph(line)),
        }
        after_section = false;
    }
    Document { nodes }
}

proptest! {
    #[test]
    fn preamble_never_reaches_tree(
        preamble in vec(preamble_line(), 0..12),
        body in vec(body_line(), 0..12),
    ) {
        let mut source = preamble.clone();
        source.push("\\tableofcontents".to_string());
        source.push("\\newpage".to_string());
        source.extend(body.iter().cloned());
        let document = texdocs::parse_with_diagnostics(&source, &Config::default().window).document;
        prop_assert_eq!(document, parse(&body));

        let only_preamble = texdocs::parse_with_diagnostics(&preamble, &Config::default().window);
        prop_assert!(only_preamble.document.is_empty());
    }

    #[test]
    fn labels_bind_only_below_headings(pieces in vec(piece(), 0..10)) {
        let lines = render(&pieces);
        prop_assert_eq!(parse(&lines), expected(&lines));
    }
}
