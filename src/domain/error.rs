use std::io;

use thiserror::Error;

/// Which input table an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Load,
    Transport,
}

impl std::fmt::Display for TableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableKind::Load => f.write_str("load-time table"),
            TableKind::Transport => f.write_str("transport-time table"),
        }
    }
}

#[derive(Debug, Error)]
pub enum HaulError {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: String, reason: String },
    #[error("{table} is empty")]
    EmptyInput { table: TableKind },
    #[error("`{key}` is not in the {table}")]
    UnknownKey { table: TableKind, key: String },
    #[error("could not parse `{input}`: {reason}")]
    Parse { input: String, reason: String },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl HaulError {
    pub(crate) fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        HaulError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

pub type HaulResult<T> = Result<T, HaulError>;
