//! Canonical log line rendering.
//!
//! Every record becomes exactly one newline-terminated line:
//!
//! ```text
//! [27/08/24 12:34:56] id: 00001, reg: AAA 1234, prod: P, ltrs: +0000005
//! ```
//!
//! Registration and product bytes are emitted verbatim, so the output is a
//! byte buffer rather than a `String` — garbage bytes in those fields survive
//! untouched.

use crate::transaction::TransactionRecord;

/// Rendering of the event time in log lines.
///
/// Day-first with a two-digit year, from the record's naive calendar instant.
/// This is the single switch point for the timestamp presentation; decoding
/// and ordering always use the parsed instant.
pub const EVENT_TIME_FORMAT: &str = "%d/%m/%y %H:%M:%S";

/// Appends one formatted log line for `record` to `out`.
///
/// Returns the number of bytes written. Never fails: a decoded record is
/// well-formed by construction.
///
/// Liters are `volume_milliliters / 1000` with truncation toward zero
/// (-500 mL is 0 L, not -1 L), rendered with an explicit sign and seven
/// zero-padded digits. The id is zero-padded to five digits.
pub fn render_into(record: &TransactionRecord, out: &mut Vec<u8>) -> usize {
    let start = out.len();
    let liters = record.volume_milliliters / 1000;

    out.push(b'[');
    out.extend_from_slice(
        record
            .event_time
            .format(EVENT_TIME_FORMAT)
            .to_string()
            .as_bytes(),
    );
    out.extend_from_slice(format!("] id: {:05}, reg: ", record.transaction_id).as_bytes());
    out.extend_from_slice(&record.vehicle_registration);
    out.extend_from_slice(b", prod: ");
    out.push(record.product_code);
    out.extend_from_slice(format!(", ltrs: {liters:+08}\n").as_bytes());

    out.len() - start
}
