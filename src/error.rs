use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading the input or writing the output failed.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input file is not valid UTF-8.
    #[error("{} is not valid UTF-8", .path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// The HTML parser could not build a tree.
    #[error("failed to parse HTML: {0}")]
    Parse(#[source] std::io::Error),
}
