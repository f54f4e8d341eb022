//! Wire layout of one raw transaction frame.
//!
//! A frame is exactly [`FRAME_SIZE`] bytes with no padding and no delimiters;
//! frame boundaries in a buffer are purely positional (`index * FRAME_SIZE`).
//! All multi-byte integers are little-endian.
//!
//! | Offset | Length | Field                | Encoding                     |
//! |--------|--------|----------------------|------------------------------|
//! | 0      | 19     | timestamp            | ASCII `MM/DD/YYYY HH:MM:SS`  |
//! | 19     | 8      | vehicle registration | ASCII, space-padded          |
//! | 27     | 1      | product code         | ASCII                        |
//! | 28     | 4      | volume (milliliters) | i32, little-endian           |
//! | 32     | 2      | transaction id       | u16, little-endian           |

/// Length of the ASCII timestamp field.
pub const TIMESTAMP_LEN: usize = 19;

/// Length of the vehicle registration field.
pub const VEH_REG_LEN: usize = 8;

const PRODUCT_OFFSET: usize = TIMESTAMP_LEN + VEH_REG_LEN;
const VOLUME_OFFSET: usize = PRODUCT_OFFSET + 1;
const TX_ID_OFFSET: usize = VOLUME_OFFSET + 4;

/// Total size of one frame on the wire.
pub const FRAME_SIZE: usize = TX_ID_OFFSET + 2;

/// A typed, borrowing view over one raw frame.
///
/// Length is validated once at construction; every accessor after that is a
/// plain positional read with no bounds risk. Accessors never validate field
/// contents — only the timestamp is format-checked, and that happens in the
/// decoder, not here.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    bytes: &'a [u8; FRAME_SIZE],
}

impl<'a> Frame<'a> {
    /// Creates a view over `bytes`, which must be exactly [`FRAME_SIZE`] long.
    pub fn new(bytes: &'a [u8]) -> Option<Frame<'a>> {
        let bytes: &[u8; FRAME_SIZE] = bytes.try_into().ok()?;
        Some(Frame { bytes })
    }

    /// The raw ASCII timestamp field, unparsed.
    pub fn timestamp(&self) -> &'a [u8; TIMESTAMP_LEN] {
        // Safety: FRAME_SIZE > TIMESTAMP_LEN, so the leading chunk always exists
        self.bytes.first_chunk().expect("frame holds a timestamp")
    }

    /// The vehicle registration field, byte-for-byte.
    pub fn vehicle_registration(&self) -> [u8; VEH_REG_LEN] {
        let mut reg = [0u8; VEH_REG_LEN];
        reg.copy_from_slice(&self.bytes[TIMESTAMP_LEN..PRODUCT_OFFSET]);
        reg
    }

    /// The single-byte product grade code.
    pub fn product_code(&self) -> u8 {
        self.bytes[PRODUCT_OFFSET]
    }

    /// Dispensed volume in milliliters.
    pub fn volume_milliliters(&self) -> i32 {
        i32::from_le_bytes([
            self.bytes[VOLUME_OFFSET],
            self.bytes[VOLUME_OFFSET + 1],
            self.bytes[VOLUME_OFFSET + 2],
            self.bytes[VOLUME_OFFSET + 3],
        ])
    }

    /// Device-assigned sequence number. Not necessarily unique across days.
    pub fn transaction_id(&self) -> u16 {
        u16::from_le_bytes([self.bytes[TX_ID_OFFSET], self.bytes[TX_ID_OFFSET + 1]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_frame() -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"08/27/2024 12:34:56");
        bytes.extend_from_slice(b"AAA 1234");
        bytes.push(b'P');
        bytes.extend_from_slice(&5000i32.to_le_bytes());
        bytes.extend_from_slice(&1u16.to_le_bytes());
        bytes
    }

    #[test]
    fn test_layout_constants() {
        assert_eq!(FRAME_SIZE, 34);
        assert_eq!(sample_frame().len(), FRAME_SIZE);
    }

    #[test]
    fn test_accessors_read_correct_offsets() {
        let bytes = sample_frame();
        let frame = Frame::new(&bytes).unwrap();

        assert_eq!(frame.timestamp(), b"08/27/2024 12:34:56");
        assert_eq!(&frame.vehicle_registration(), b"AAA 1234");
        assert_eq!(frame.product_code(), b'P');
        assert_eq!(frame.volume_milliliters(), 5000);
        assert_eq!(frame.transaction_id(), 1);
    }

    #[test]
    fn test_little_endian_integers() {
        let mut bytes = sample_frame();
        bytes[28..32].copy_from_slice(&[0xFF, 0xFF, 0xFF, 0xFF]);
        bytes[32..34].copy_from_slice(&[0x01, 0x02]);

        let frame = Frame::new(&bytes).unwrap();
        assert_eq!(frame.volume_milliliters(), -1);
        assert_eq!(frame.transaction_id(), 0x0201);
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert!(Frame::new(&[0u8; FRAME_SIZE - 1]).is_none());
        assert!(Frame::new(&[0u8; FRAME_SIZE + 1]).is_none());
        assert!(Frame::new(&[0u8; FRAME_SIZE]).is_some());
    }
}
