//! Error types for the transaction log pipeline.

use crate::pipeline::MAX_TRANSACTIONS;
use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors that can occur while decoding a single frame.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The timestamp field does not match `MM/DD/YYYY HH:MM:SS` or a
    /// date/time component is out of range.
    #[error("invalid timestamp {text:?}")]
    InvalidTimestamp { text: String },

    /// Reserved for future field validation. No decode path currently
    /// produces it: registration, product, and volume are accepted
    /// unconditionally.
    #[error("field `{field}` out of range")]
    FieldOutOfRange { field: &'static str },
}

/// Errors that can occur during a batch pipeline run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// The batch exceeds the fixed working-array capacity. Nothing is
    /// processed.
    #[error("frame count {count} exceeds the {MAX_TRANSACTIONS}-transaction capacity")]
    TooManyTransactions { count: usize },

    /// The input buffer is smaller than `frame_count` frames require.
    #[error("input buffer holds {actual} bytes but {needed} are needed")]
    BufferTooShort { needed: usize, actual: usize },

    /// A frame failed to decode. The whole batch is aborted; no partial log
    /// is emitted.
    #[error("frame {index}: {source}")]
    Decode {
        index: usize,
        #[source]
        source: DecodeError,
    },
}

/// Errors surfaced by the command-line driver.
#[derive(Error, Debug)]
pub enum CliError {
    /// Failed to open or read the input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The pipeline rejected the batch
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    /// The input file is not a whole number of frames
    #[error("input file is {len} bytes, not a multiple of the {frame_size}-byte frame size")]
    RaggedInput { len: u64, frame_size: usize },

    /// Missing input file argument
    #[error("Missing input file argument. Usage: pump-log <transactions.bin>")]
    MissingArgument,
}
