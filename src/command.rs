use serde::Serialize;

use crate::tree::Rank;

/// Length of `text` in the target document's coordinate space.
///
/// The document service addresses text in UTF-16 code units, so a character
/// outside the Basic Multilingual Plane occupies two positions.
pub fn text_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Half-open `[start, end)` range of 1-based document positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Range {
    pub start: usize,
    pub end: usize,
}

impl Range {
    /// The range covering `text` inserted at `start`.
    pub fn covering(start: usize, text: &str) -> Self {
        Self {
            start,
            end: start + text_len(text),
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Edit commands, applied in order as one batch against an empty document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum EditCommand {
    InsertText {
        at: usize,
        text: String,
    },
    ApplyHeadingStyle {
        range: Range,
        #[serde(serialize_with = "serialize_rank")]
        rank: Rank,
    },
    ApplyListFormatting {
        range: Range,
        nesting_depth: usize,
    },
}

fn serialize_rank<S: serde::Serializer>(rank: &Rank, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(rank.level())
}

/// A generated command batch and the cursor left after its last insertion
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Batch {
    pub commands: Vec<EditCommand>,
    pub final_cursor: usize,
}
