use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("file not found: {}", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("raw struct cannot be exported: {name}")]
    ExportedRawType { name: String },

    #[error("raw struct has no distinct exported name: {name}")]
    UnexportableName { name: String },

    #[error("exported name {exported} for raw struct {name} is already declared")]
    NameConflict { name: String, exported: String },

    #[error("raw struct {record} would get two members named {name}")]
    AccessorConflict { record: String, name: String },

    #[error("invalid raw type: {record}.{field}: {ty}")]
    InvalidRawType {
        record: String,
        field: String,
        ty: String,
    },

    #[error("raw struct has an unnamed field: {record}")]
    UnnamedField { record: String },

    #[error("unbalanced codegen markers: found {begin} begin and {end} end after removing generated blocks")]
    UnbalancedMarkers { begin: usize, end: usize },

    #[error("invalid codegen marker: {0}")]
    Marker(#[from] regex::Error),

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub(crate) fn in_file(self, path: impl Into<PathBuf>) -> Self {
        match self {
            err @ (Error::NotFound { .. }
            | Error::Io { .. }
            | Error::Write { .. }
            | Error::File { .. }) => err,
            err => Error::File {
                path: path.into(),
                source: Box::new(err),
            },
        }
    }
}

impl From<syn::Error> for Error {
    fn from(err: syn::Error) -> Self {
        let start = err.span().start();
        Error::Syntax {
            line: start.line,
            column: start.column + 1,
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
