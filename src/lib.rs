mod command;
mod config;
mod docs_api;
mod error;
mod generator;
mod interchange;
mod line;
mod parser;
mod tree;

pub use command::{Batch, EditCommand, Range, text_len};
pub use config::{Config, HeadingConfig, ListConfig, WindowConfig};
pub use docs_api::{
    BatchUpdate, CreateParagraphBullets, Dimension, DocRange, InsertText, Location, ParagraphStyle,
    Request, UpdateParagraphStyle, to_requests,
};
pub use error::{ConfigError, Error, GenerateError, Result};
pub use generator::{START_CURSOR, generate};
pub use interchange::{from_json, to_json};
pub use line::{Line, classify};
pub use parser::{Anomaly, AnomalyKind, Parsed, parse_with_diagnostics};
pub use tree::{Document, Heading, ListBlock, ListItem, Node, Rank};

/// Parse LaTeX source into a document tree using the default markers.
pub fn parse(source: &str) -> Document {
    parse_with_config(source, &Config::compiled_default())
}

/// Parse LaTeX source into a document tree.
pub fn parse_with_config(source: &str, config: &Config) -> Document {
    let lines: Vec<&str> = source.lines().collect();
    parser::parse(&lines, &config.window)
}

/// Convert LaTeX source straight to a `batchUpdate` body using default config.
pub fn latex_to_requests(source: &str) -> Result<BatchUpdate> {
    latex_to_requests_with_config(source, &Config::compiled_default())
}

/// Convert LaTeX source straight to a `batchUpdate` body with custom config.
pub fn latex_to_requests_with_config(source: &str, config: &Config) -> Result<BatchUpdate> {
    let document = parse_with_config(source, config);
    tree_to_requests(&document, config)
}

/// Generate the `batchUpdate` body for an already parsed tree.
pub fn tree_to_requests(document: &Document, config: &Config) -> Result<BatchUpdate> {
    let batch = generate(document)?;
    Ok(to_requests(&batch.commands, config))
}
