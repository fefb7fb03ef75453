//! Classification of single source lines into the structural vocabulary.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::tree::Rank;

static COMMAND: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\\(section|subsection|subsubsection|label|begin|end)\s*\{").unwrap()
});

static ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\\item\b\s*(.*)$").unwrap());

const LIST_ENVIRONMENT: &str = "enumerate";

/// One trimmed source line, as the parser sees it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    Blank,
    Heading { rank: Rank, title: &'a str },
    Label(&'a str),
    BeginList,
    EndList,
    Item(&'a str),
    Text(&'a str),
}

/// Classify an already trimmed line.
pub fn classify(line: &str) -> Line<'_> {
    if line.is_empty() {
        return Line::Blank;
    }

    if let Some(caps) = COMMAND.captures(line) {
        let whole = caps.get(0).map_or(0, |m| m.end());
        let name = caps.get(1).map_or("", |m| m.as_str());
        // The regex consumed the opening brace
        if let Some(arg) = braced_argument(&line[whole - 1..]) {
            let arg = arg.trim();
            match name {
                "section" => return heading(Rank::Section, arg, line),
                "subsection" => return heading(Rank::Subsection, arg, line),
                "subsubsection" => return heading(Rank::Subsubsection, arg, line),
                "label" if !arg.is_empty() => return Line::Label(arg),
                "begin" if arg == LIST_ENVIRONMENT => return Line::BeginList,
                "end" if arg == LIST_ENVIRONMENT => return Line::EndList,
                _ => {}
            }
        }
    }

    if let Some(caps) = ITEM.captures(line) {
        return Line::Item(caps.get(1).map_or("", |m| m.as_str().trim()));
    }

    Line::Text(line)
}

/// A sectioning command with an empty title is kept as plain text.
fn heading<'a>(rank: Rank, title: &'a str, line: &'a str) -> Line<'a> {
    if title.is_empty() {
        return Line::Text(line);
    }
    Line::Heading { rank, title }
}

/// Content of the brace group at the start of `s`, honoring nested braces.
fn braced_argument(s: &str) -> Option<&str> {
    let mut depth = 0usize;
    let mut escaped = false;
    for (i, ch) in s.char_indices() {
        match ch {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(&s[1..i]);
                }
            }
            _ => {}
        }
    }
    None
}
