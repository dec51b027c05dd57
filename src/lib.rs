//! Convert HTML documents or plain text into LaTeX markup.
//!
//! Plain text only goes through the Unicode substitution table. HTML is
//! parsed, its headings, emphasis, lists and links are rewritten to LaTeX
//! commands, and the text of each paragraph-level element is substituted
//! and concatenated.

pub mod config;
pub mod convert;
pub mod dom;
pub mod error;
pub mod run;
pub mod substitute;
pub mod table;

pub use config::{ConvertOptions, ExtractionScope, HeadingStyle, Strategy, TableKind};
pub use convert::{convert, convert_with, heading_command, Converter};
pub use dom::{Document, NodeId, NodeKind};
pub use error::{Error, Result};
pub use run::{convert_file, InputKind};
pub use substitute::{substitute, Substituter};
