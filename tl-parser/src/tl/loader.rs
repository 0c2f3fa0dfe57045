//! Schema loading utilities
//!
//! `SchemaLoader` reads TL source from a file, a string or any reader and
//! parses it. It is used by the CLI and by tests.
//!
//! # Example
//!
//! ```rust
//! use tl_parser::tl::loader::SchemaLoader;
//!
//! // From file
//! let schema = SchemaLoader::from_path("api.tl")?.parse()?;
//!
//! // From string
//! let schema = SchemaLoader::from_string("boolTrue#997275b5 = Bool;").parse()?;
//! ```

use crate::tl::ast::Schema;
use crate::tl::parsing::{parse, ParseError};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error that can occur when loading schemas
#[derive(Debug, Error)]
pub enum LoaderError {
    /// The file could not be opened
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Parse(#[from] ParseError),
}

enum Source {
    Path(PathBuf),
    Text(String),
    Reader(Box<dyn BufRead>),
}

/// Schema loader over a file, a string or a reader
pub struct SchemaLoader {
    source: Source,
}

impl SchemaLoader {
    /// Load from a file path. The file is opened now and read while parsing.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref().to_path_buf();
        File::open(&path).map_err(|source| LoaderError::Open {
            path: path.clone(),
            source,
        })?;
        Ok(SchemaLoader {
            source: Source::Path(path),
        })
    }

    /// Load from a string
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        SchemaLoader {
            source: Source::Text(source.into()),
        }
    }

    /// Load from any buffered reader, consumed line by line
    pub fn from_reader<R: BufRead + 'static>(reader: R) -> Self {
        SchemaLoader {
            source: Source::Reader(Box::new(reader)),
        }
    }

    /// Parse the source into a [`Schema`]
    pub fn parse(self) -> Result<Schema, LoaderError> {
        let schema = match self.source {
            Source::Path(path) => {
                log::debug!("parsing {}", path.display());
                let file = File::open(&path).map_err(|source| LoaderError::Open {
                    path: path.clone(),
                    source,
                })?;
                parse(BufReader::new(file))?
            }
            Source::Text(text) => parse(text.as_bytes())?,
            Source::Reader(reader) => parse(reader)?,
        };
        Ok(schema)
    }
}
