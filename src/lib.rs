//! # Pump Log
//!
//! Decodes the fixed-width binary transaction stream produced by a fuel
//! metering device, orders the records chronologically, and renders each
//! into one canonical log line.
//!
//! ## Design Principles
//!
//! - **Fixed wire layout**: 34-byte frames, validated once by a typed
//!   [`Frame`] view instead of raw offset arithmetic
//! - **Calendar timestamps**: event times are parsed into naive calendar
//!   instants, so ordering is truly chronological and rendering is
//!   independent of the process timezone
//! - **Bounded batches**: at most [`MAX_TRANSACTIONS`] records per call,
//!   rejected up front rather than silently truncated
//! - **All-or-nothing output**: the first malformed frame aborts the batch;
//!   no partial log is emitted
//!
//! ## Example
//!
//! ```
//! use pump_log::pipeline;
//!
//! let mut buffer = Vec::new();
//! buffer.extend_from_slice(b"08/27/2024 12:34:56AAA 1234P");
//! buffer.extend_from_slice(&5000i32.to_le_bytes());
//! buffer.extend_from_slice(&1u16.to_le_bytes());
//!
//! let log = pipeline::run(&buffer, 1).unwrap();
//! assert_eq!(
//!     log.data,
//!     b"[27/08/24 12:34:56] id: 00001, reg: AAA 1234, prod: P, ltrs: +0000005\n"
//! );
//! ```

pub mod error;
pub mod format;
pub mod frame;
pub mod pipeline;
pub mod transaction;

pub use error::{CliError, DecodeError, PipelineError, Result};
pub use format::EVENT_TIME_FORMAT;
pub use frame::{Frame, FRAME_SIZE};
pub use pipeline::{FormattedLog, MAX_TRANSACTIONS};
pub use transaction::TransactionRecord;
