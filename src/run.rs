use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::config::ConvertOptions;
use crate::convert::Converter;
use crate::error::{Error, Result};
use crate::substitute::Substituter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Html,
    Text,
}

impl InputKind {
    /// HTML only when the path literally ends in `.html`.
    pub fn detect(path: &Path) -> Self {
        if path.as_os_str().to_string_lossy().ends_with(".html") {
            InputKind::Html
        } else {
            InputKind::Text
        }
    }
}

pub fn read_input(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|source| Error::Encoding {
        path: path.to_path_buf(),
        source,
    })
}

pub fn convert_source(converter: &Converter, kind: InputKind, source: &str) -> Result<String> {
    match kind {
        InputKind::Html => converter.convert(source),
        InputKind::Text => {
            let opts = converter.options();
            Ok(Substituter::new(opts.table, opts.strategy).apply(source))
        }
    }
}

/// Read `input`, convert it, and overwrite `output` with the result.
pub fn convert_file(input: &Path, output: &Path, options: &ConvertOptions) -> Result<()> {
    let kind = InputKind::detect(input);
    debug!(input = %input.display(), ?kind, "reading input");
    let source = read_input(input)?;

    let converter = Converter::new(options.clone());
    let latex = convert_source(&converter, kind, &source)?;

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| Error::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    fs::write(output, latex.as_bytes()).map_err(|source| Error::Io {
        path: output.to_path_buf(),
        source,
    })?;
    info!(output = %output.display(), bytes = latex.len(), "wrote LaTeX");
    Ok(())
}
