//! Request shapes of the Google Docs `documents.batchUpdate` call.
//!
//! Only the body is produced here. Authenticating and sending it are left to
//! whatever client submits the batch.

use serde::Serialize;

use crate::command::{EditCommand, Range};
use crate::config::Config;

/// Body of a `batchUpdate` call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchUpdate {
    pub requests: Vec<Request>,
}

impl BatchUpdate {
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Request {
    InsertText(InsertText),
    UpdateParagraphStyle(UpdateParagraphStyle),
    CreateParagraphBullets(CreateParagraphBullets),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsertText {
    pub location: Location,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Location {
    pub index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocRange {
    pub start_index: usize,
    pub end_index: usize,
}

impl From<Range> for DocRange {
    fn from(range: Range) -> Self {
        Self {
            start_index: range.start,
            end_index: range.end,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateParagraphStyle {
    pub range: DocRange,
    pub paragraph_style: ParagraphStyle,
    /// Comma-separated field mask naming the style fields being set
    pub fields: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub named_style_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indent_first_line: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indent_start: Option<Dimension>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dimension {
    pub magnitude: f64,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateParagraphBullets {
    pub range: DocRange,
    pub bullet_preset: String,
}

/// Translate edit commands into `batchUpdate` requests, preserving order.
///
/// A list formatting command expands to a bullet request followed by an
/// indentation request over the same range.
pub fn to_requests(commands: &[EditCommand], config: &Config) -> BatchUpdate {
    let mut requests = Vec::with_capacity(commands.len());
    for command in commands {
        match command {
            EditCommand::InsertText { at, text } => {
                requests.push(Request::InsertText(InsertText {
                    location: Location { index: *at },
                    text: text.clone(),
                }));
            }
            EditCommand::ApplyHeadingStyle { range, rank } => {
                requests.push(Request::UpdateParagraphStyle(UpdateParagraphStyle {
                    range: (*range).into(),
                    paragraph_style: ParagraphStyle {
                        named_style_type: Some(config.headings.style_for(*rank)),
                        ..ParagraphStyle::default()
                    },
                    fields: "namedStyleType".to_string(),
                }));
            }
            EditCommand::ApplyListFormatting {
                range,
                nesting_depth,
            } => {
                let lists = &config.lists;
                requests.push(Request::CreateParagraphBullets(CreateParagraphBullets {
                    range: (*range).into(),
                    bullet_preset: lists.bullet_preset.clone(),
                }));
                requests.push(Request::UpdateParagraphStyle(UpdateParagraphStyle {
                    range: (*range).into(),
                    paragraph_style: ParagraphStyle {
                        indent_first_line: Some(Dimension {
                            magnitude: 0.0,
                            unit: lists.indent_unit.clone(),
                        }),
                        indent_start: Some(Dimension {
                            magnitude: lists.indent_for_depth(*nesting_depth),
                            unit: lists.indent_unit.clone(),
                        }),
                        ..ParagraphStyle::default()
                    },
                    fields: "indentFirstLine,indentStart".to_string(),
                }));
            }
        }
    }
    BatchUpdate { requests }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Rank;
    use serde_json::json;

    #[test]
    fn insert_and_heading_requests() {
        let commands = [
            EditCommand::InsertText {
                at: 1,
                text: "Intro\n".into(),
            },
            EditCommand::ApplyHeadingStyle {
                range: Range { start: 1, end: 7 },
                rank: Rank::Subsection,
            },
        ];
        let body = serde_json::to_value(to_requests(&commands, &Config::default())).unwrap();
        assert_eq!(
            body,
            json!({
                "requests": [
                    { "insertText": { "location": { "index": 1 }, "text": "Intro\n" } },
                    {
                        "updateParagraphStyle": {
                            "range": { "startIndex": 1, "endIndex": 7 },
                            "paragraphStyle": { "namedStyleType": "HEADING_2" },
                            "fields": "namedStyleType"
                        }
                    }
                ]
            })
        );
    }

    #[test]
    fn list_formatting_expands_to_bullets_then_indent() {
        let commands = [EditCommand::ApplyListFormatting {
            range: Range { start: 7, end: 13 },
            nesting_depth: 2,
        }];
        let body = serde_json::to_value(to_requests(&commands, &Config::default())).unwrap();
        assert_eq!(
            body,
            json!({
                "requests": [
                    {
                        "createParagraphBullets": {
                            "range": { "startIndex": 7, "endIndex": 13 },
                            "bulletPreset": "NUMBERED_DECIMAL_NESTED"
                        }
                    },
                    {
                        "updateParagraphStyle": {
                            "range": { "startIndex": 7, "endIndex": 13 },
                            "paragraphStyle": {
                                "indentFirstLine": { "magnitude": 0.0, "unit": "PT" },
                                "indentStart": { "magnitude": 36.0, "unit": "PT" }
                            },
                            "fields": "indentFirstLine,indentStart"
                        }
                    }
                ]
            })
        );
    }

    #[test]
    fn no_commands_no_requests() {
        assert!(to_requests(&[], &Config::default()).is_empty());
    }
}
