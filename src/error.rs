//! Error taxonomy for the cdsample pipeline.
//!
//! Every variant is fatal: the pipeline never skips a feature and carries on,
//! so a caller either gets the complete sample or one of these.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CdsError {
    #[error("ERROR: CDS feature starting at {start} has no locus_tag or protein_id (enable --fabricate_ids to derive one)")]
    MissingIdentifier { start: i64 },

    #[error("ERROR: CDS feature {id} has an empty translation")]
    EmptyTranslation { id: String },

    #[error("ERROR: requested {requested} records but only {available} were extracted")]
    InsufficientRecords { requested: usize, available: usize },

    #[error("ERROR: invalid argument: {0}")]
    InvalidArgument(String),

    #[error("ERROR: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("ERROR: cannot parse {}: {reason}", .path.display())]
    Parse { path: PathBuf, reason: String },

    #[error("ERROR: invalid feature location: {reason}")]
    Location { reason: String },
}

pub type CdsResult<T> = Result<T, CdsError>;

impl CdsError {
    /// Wraps an I/O failure together with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CdsError::Io {
            path: path.into(),
            source,
        }
    }
}
