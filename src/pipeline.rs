//! Batch pipeline: decode-all, sort, format-all.
//!
//! One call processes one bounded batch of frames, fully materialized in
//! memory. The pipeline owns the working array for the duration of the call
//! and never mutates the caller's input; each call is independent and
//! re-entrant.

use crate::error::{PipelineError, Result};
use crate::format;
use crate::frame::{Frame, FRAME_SIZE};
use crate::transaction::TransactionRecord;
use log::debug;

/// Hard ceiling on the number of frames one batch may contain.
///
/// Exceeding it rejects the whole call before any decoding; excess input is
/// never silently truncated.
pub const MAX_TRANSACTIONS: usize = 100;

/// The rendered log produced by one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedLog {
    /// Concatenated log lines, each newline-terminated.
    pub data: Vec<u8>,

    /// Total bytes rendered. Always equals `data.len()`.
    pub bytes_written: usize,
}

/// Decodes `frame_count` frames from `buffer`, orders them chronologically,
/// and renders the log.
///
/// Frames are read at stride [`FRAME_SIZE`] in input order. The first decode
/// failure aborts the call with [`PipelineError::Decode`] carrying the frame
/// index; no partial log is ever produced.
///
/// # Errors
///
/// - [`PipelineError::TooManyTransactions`] if `frame_count` exceeds
///   [`MAX_TRANSACTIONS`] (checked before the buffer is touched)
/// - [`PipelineError::BufferTooShort`] if `buffer` cannot hold `frame_count`
///   frames
/// - [`PipelineError::Decode`] if any frame's timestamp is malformed
pub fn run(buffer: &[u8], frame_count: usize) -> Result<FormattedLog> {
    if frame_count > MAX_TRANSACTIONS {
        return Err(PipelineError::TooManyTransactions { count: frame_count });
    }

    let needed = frame_count * FRAME_SIZE;
    if buffer.len() < needed {
        return Err(PipelineError::BufferTooShort {
            needed,
            actual: buffer.len(),
        });
    }

    let mut records = Vec::with_capacity(frame_count);
    for (index, chunk) in buffer.chunks_exact(FRAME_SIZE).take(frame_count).enumerate() {
        // Safety: chunks_exact yields exactly FRAME_SIZE bytes
        let frame = Frame::new(chunk).expect("chunk is frame-sized");
        let record = TransactionRecord::decode(&frame)
            .map_err(|source| PipelineError::Decode { index, source })?;
        debug!(
            "frame {}: tx {} at {}",
            index, record.transaction_id, record.event_time
        );
        records.push(record);
    }

    records.sort_unstable_by(TransactionRecord::by_event_time);

    let mut data = Vec::with_capacity(needed * 2);
    let mut bytes_written = 0;
    for record in &records {
        bytes_written += format::render_into(record, &mut data);
    }
    debug!("rendered {} records, {} bytes", records.len(), bytes_written);

    Ok(FormattedLog {
        data,
        bytes_written,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;

    fn frame(timestamp: &str, reg: &[u8; 8], product: u8, volume: i32, id: u16) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(FRAME_SIZE);
        bytes.extend_from_slice(timestamp.as_bytes());
        bytes.extend_from_slice(reg);
        bytes.push(product);
        bytes.extend_from_slice(&volume.to_le_bytes());
        bytes.extend_from_slice(&id.to_le_bytes());
        assert_eq!(bytes.len(), FRAME_SIZE);
        bytes
    }

    #[test]
    fn test_empty_batch_produces_empty_log() {
        let log = run(&[], 0).unwrap();
        assert!(log.data.is_empty());
        assert_eq!(log.bytes_written, 0);
    }

    #[test]
    fn test_capacity_checked_before_buffer() {
        // An empty buffer would fail the length check, so hitting
        // TooManyTransactions proves the ceiling is tested first
        let err = run(&[], MAX_TRANSACTIONS + 1).unwrap_err();
        assert_eq!(err, PipelineError::TooManyTransactions { count: 101 });
    }

    #[test]
    fn test_full_capacity_batch_succeeds() {
        let mut buffer = Vec::new();
        for i in 0..MAX_TRANSACTIONS {
            buffer.extend_from_slice(&frame(
                "06/15/2024 10:00:00",
                b"REG 0000",
                b'P',
                1000,
                i as u16,
            ));
        }

        let log = run(&buffer, MAX_TRANSACTIONS).unwrap();
        assert_eq!(log.data.iter().filter(|&&b| b == b'\n').count(), 100);
    }

    #[test]
    fn test_short_buffer_rejected() {
        let buffer = frame("06/15/2024 10:00:00", b"REG 0000", b'P', 0, 0);
        let err = run(&buffer, 2).unwrap_err();
        assert_eq!(
            err,
            PipelineError::BufferTooShort {
                needed: 2 * FRAME_SIZE,
                actual: FRAME_SIZE,
            }
        );
    }

    #[test]
    fn test_decode_failure_carries_frame_index() {
        let mut buffer = frame("06/15/2024 10:00:00", b"AAA 0001", b'P', 0, 1);
        buffer.extend_from_slice(&frame("13/01/2024 00:00:00", b"BBB 0002", b'D', 0, 2));

        match run(&buffer, 2).unwrap_err() {
            PipelineError::Decode {
                index,
                source: DecodeError::InvalidTimestamp { .. },
            } => assert_eq!(index, 1),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_output_is_chronological() {
        let mut buffer = Vec::new();
        buffer.extend_from_slice(&frame("08/27/2024 14:00:00", b"CCC 9012", b'G', 2000, 3));
        buffer.extend_from_slice(&frame("08/26/2024 09:12:45", b"BBB 5678", b'D', 3000, 2));
        buffer.extend_from_slice(&frame("08/27/2024 12:34:56", b"AAA 1234", b'P', 5000, 1));

        let log = run(&buffer, 3).unwrap();
        let text = String::from_utf8(log.data).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].starts_with("[26/08/24 09:12:45]"));
        assert!(lines[1].starts_with("[27/08/24 12:34:56]"));
        assert!(lines[2].starts_with("[27/08/24 14:00:00]"));
    }

    #[test]
    fn test_byte_count_matches_data() {
        let buffer = frame("01/01/2024 00:00:00", b"REG 1111", b'X', 123456, 9);
        let log = run(&buffer, 1).unwrap();
        assert_eq!(log.bytes_written, log.data.len());
        assert!(log.bytes_written > 0);
    }

    #[test]
    fn test_trailing_bytes_beyond_frame_count_ignored() {
        let mut buffer = frame("01/01/2024 00:00:00", b"REG 1111", b'X', 1000, 1);
        buffer.extend_from_slice(b"garbage that is not a frame");

        let log = run(&buffer, 1).unwrap();
        assert_eq!(log.data.iter().filter(|&&b| b == b'\n').count(), 1);
    }
}
