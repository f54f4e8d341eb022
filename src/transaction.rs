//! Decoded transaction records and the frame decoder.
//!
//! A [`TransactionRecord`] is the structured form of one wire frame. Only the
//! timestamp field is format-checked during decoding; registration, product,
//! and volume are taken bitwise, garbage included. Records are immutable once
//! decoded — sorting a batch reorders the collection, never the records.

use crate::error::DecodeError;
use crate::frame::{Frame, TIMESTAMP_LEN, VEH_REG_LEN};
use chrono::{NaiveDate, NaiveDateTime};
use std::cmp::Ordering;

/// One decoded fuel transaction.
///
/// Event times are *naive* calendar instants: the wire carries no timezone,
/// and none is ever applied, so ordering and rendering are deterministic
/// regardless of the process-local timezone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    /// When the transaction occurred, as written by the metering device.
    pub event_time: NaiveDateTime,

    /// Plate-like identifier, 8 bytes, space-padded. Never validated.
    pub vehicle_registration: [u8; VEH_REG_LEN],

    /// Single-character fuel/product grade. Never validated.
    pub product_code: u8,

    /// Dispensed volume in milliliters. May be negative (reversals).
    pub volume_milliliters: i32,

    /// Device-assigned sequence number. Not unique across days.
    pub transaction_id: u16,
}

impl TransactionRecord {
    /// Decodes one frame into a record.
    ///
    /// Fails only on a malformed timestamp; every other field is accepted
    /// unconditionally.
    pub fn decode(frame: &Frame<'_>) -> Result<TransactionRecord, DecodeError> {
        let event_time = parse_event_time(frame.timestamp())?;

        Ok(TransactionRecord {
            event_time,
            vehicle_registration: frame.vehicle_registration(),
            product_code: frame.product_code(),
            volume_milliliters: frame.volume_milliliters(),
            transaction_id: frame.transaction_id(),
        })
    }

    /// Total order by event time.
    ///
    /// Chronological, not lexicographic over the wire text, so records sort
    /// correctly across month and year boundaries. No tie-break is defined
    /// for equal event times.
    pub fn by_event_time(a: &TransactionRecord, b: &TransactionRecord) -> Ordering {
        a.event_time.cmp(&b.event_time)
    }
}

/// Parses the fixed-position `MM/DD/YYYY HH:MM:SS` timestamp field.
///
/// Six zero-padded integer fields are extracted positionally; a non-digit in
/// any field position, a wrong separator, or an out-of-range component
/// (month 1-12, day 1-31, hour 0-23, minute/second 0-59) is rejected. The
/// year is taken as-is from its four digits. Combining the fields can still
/// fail for impossible per-month dates such as Feb 30, which the calendar
/// library rejects.
fn parse_event_time(text: &[u8; TIMESTAMP_LEN]) -> Result<NaiveDateTime, DecodeError> {
    let invalid = || DecodeError::InvalidTimestamp {
        text: String::from_utf8_lossy(text).into_owned(),
    };

    if text[2] != b'/' || text[5] != b'/' || text[10] != b' ' || text[13] != b':' || text[16] != b':'
    {
        return Err(invalid());
    }

    let field = |range: std::ops::Range<usize>| -> Option<u32> {
        text[range].iter().try_fold(0u32, |acc, &b| {
            b.is_ascii_digit().then(|| acc * 10 + u32::from(b - b'0'))
        })
    };

    let month = field(0..2).ok_or_else(invalid)?;
    let day = field(3..5).ok_or_else(invalid)?;
    let year = field(6..10).ok_or_else(invalid)?;
    let hour = field(11..13).ok_or_else(invalid)?;
    let minute = field(14..16).ok_or_else(invalid)?;
    let second = field(17..19).ok_or_else(invalid)?;

    if !(1..=12).contains(&month)
        || !(1..=31).contains(&day)
        || hour > 23
        || minute > 59
        || second > 59
    {
        return Err(invalid());
    }

    NaiveDate::from_ymd_opt(year as i32, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .ok_or_else(invalid)
}
