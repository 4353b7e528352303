//! Reader for hex-encoded EWKB (Extended Well-Known Binary) values, the
//! format PostGIS uses to return geometry columns to its clients.
//!
//! The reader does not know about any concrete geometry type. It decodes the
//! EWKB header (byte order marker and type tag) and then hands out typed
//! values sequentially, leaving the interpretation of the type tag's flag
//! bits to the caller:
//!
//! ```
//! use geopost_ewkb::EwkbReader;
//!
//! // POINT(10 20)
//! let mut reader = EwkbReader::decode(b"010100000000000000000024400000000000003440").unwrap();
//! assert_eq!(reader.geometry_type(), 1);
//! assert_eq!(reader.read_f64s(2).unwrap(), [10.0, 20.0]);
//! ```

use bytes::{Buf, Bytes};

pub use crate::error::EwkbError;

pub mod error;

const HEADER_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ByteOrder {
    Big,
    Little,
}

/// Sequential reader over one hex-encoded EWKB value.
///
/// A reader is constructed per value by [`EwkbReader::decode`] and positioned
/// immediately after the 5-byte header. All further reads advance an internal
/// cursor; there is no seek or rewind. Readers are cheap, hold no resources
/// and are meant to be dropped once the caller has extracted its fields.
#[derive(Debug, Clone)]
pub struct EwkbReader {
    buf: Bytes,
    byte_order: ByteOrder,
    geometry_type: u32,
}

impl EwkbReader {
    /// Decodes the hex input and consumes the EWKB header.
    ///
    /// Fails if the input is not valid hex, holds fewer than 5 bytes once
    /// decoded, or declares a byte order other than `0x00` (big-endian) or
    /// `0x01` (little-endian).
    pub fn decode(hex: &[u8]) -> Result<Self, EwkbError> {
        let raw = hex::decode(hex)?;
        if raw.len() < HEADER_SIZE {
            return Err(EwkbError::Truncated {
                needed: HEADER_SIZE,
                remaining: raw.len(),
            });
        }

        let mut buf = Bytes::from(raw);
        let byte_order = match buf.get_u8() {
            0x00 => ByteOrder::Big,
            0x01 => ByteOrder::Little,
            other => return Err(EwkbError::UnknownByteOrder(other)),
        };

        // The byte order declared by the first byte governs everything that
        // follows, including the type tag itself.
        let geometry_type = match byte_order {
            ByteOrder::Big => buf.get_u32(),
            ByteOrder::Little => buf.get_u32_le(),
        };

        log::trace!("decoded EWKB header: {byte_order:?} endian, type tag {geometry_type:#010x}");

        Ok(Self {
            buf,
            byte_order,
            geometry_type,
        })
    }

    /// The type tag from the EWKB header.
    ///
    /// The value names the geometry kind and, through its high bits, which
    /// optional fields (Z, M, SRID) follow the header. The reader does not
    /// interpret those bits; callers read exactly the fields their expected
    /// shape requires.
    pub fn geometry_type(&self) -> u32 {
        self.geometry_type
    }

    /// Reads a single byte.
    pub fn read_u8(&mut self) -> Result<u8, EwkbError> {
        self.ensure(1)?;
        Ok(self.buf.get_u8())
    }

    /// Reads an unsigned 32-bit integer in the declared byte order.
    pub fn read_u32(&mut self) -> Result<u32, EwkbError> {
        self.ensure(4)?;
        Ok(match self.byte_order {
            ByteOrder::Big => self.buf.get_u32(),
            ByteOrder::Little => self.buf.get_u32_le(),
        })
    }

    /// Reads an IEEE-754 double in the declared byte order.
    pub fn read_f64(&mut self) -> Result<f64, EwkbError> {
        self.ensure(8)?;
        Ok(match self.byte_order {
            ByteOrder::Big => self.buf.get_f64(),
            ByteOrder::Little => self.buf.get_f64_le(),
        })
    }

    /// Reads a fixed-size sequence of doubles in the declared byte order.
    ///
    /// This is the primary path for pulling a coordinate tuple out of a
    /// geometry value. The whole sequence must be present; a partial read is
    /// an error and consumes nothing.
    pub fn read_f64s(&mut self, count: usize) -> Result<Vec<f64>, EwkbError> {
        // A count large enough to overflow the byte size can never be
        // satisfied by the buffer either.
        let needed = count.checked_mul(8).ok_or(EwkbError::Truncated {
            needed: usize::MAX,
            remaining: self.buf.remaining(),
        })?;
        self.ensure(needed)?;
        let mut values = Vec::with_capacity(count);
        for _ in 0..count {
            values.push(match self.byte_order {
                ByteOrder::Big => self.buf.get_f64(),
                ByteOrder::Little => self.buf.get_f64_le(),
            });
        }

        Ok(values)
    }

    fn ensure(&self, needed: usize) -> Result<(), EwkbError> {
        let remaining = self.buf.remaining();
        if remaining < needed {
            return Err(EwkbError::Truncated { needed, remaining });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    // POINT(10 20)
    const POINT_LE: &[u8] = b"010100000000000000000024400000000000003440";
    const POINT_BE: &[u8] = b"000000000140240000000000004034000000000000";
    // SRID=4326;POINT(10 20)
    const POINT_SRID_LE: &[u8] = b"0101000020E610000000000000000024400000000000003440";

    #[test]
    fn little_endian_point() {
        let mut reader = EwkbReader::decode(POINT_LE).unwrap();
        assert_eq!(reader.geometry_type(), 1);
        assert_eq!(reader.read_f64s(2).unwrap(), [10.0, 20.0]);
    }

    #[test]
    fn big_endian_point() {
        let mut reader = EwkbReader::decode(POINT_BE).unwrap();
        assert_eq!(reader.geometry_type(), 1);
        assert_eq!(reader.read_f64s(2).unwrap(), [10.0, 20.0]);
    }

    #[test]
    fn byte_order_symmetry() {
        let mut le = EwkbReader::decode(POINT_LE).unwrap();
        let mut be = EwkbReader::decode(POINT_BE).unwrap();

        assert_eq!(le.geometry_type(), be.geometry_type());
        assert_eq!(le.read_f64s(2).unwrap(), be.read_f64s(2).unwrap());
    }

    #[test]
    fn srid_field() {
        let mut reader = EwkbReader::decode(POINT_SRID_LE).unwrap();
        assert_ne!(reader.geometry_type() & 0x2000_0000, 0);
        assert_eq!(reader.read_u32().unwrap(), 4326);
        assert_eq!(reader.read_f64s(2).unwrap(), [10.0, 20.0]);
    }

    #[test]
    fn lowercase_hex() {
        let lowered = String::from_utf8_lossy(POINT_SRID_LE).to_lowercase();
        let mut reader = EwkbReader::decode(lowered.as_bytes()).unwrap();
        assert_eq!(reader.read_u32().unwrap(), 4326);
    }

    #[test]
    fn empty_input() {
        assert_matches!(
            EwkbReader::decode(b""),
            Err(EwkbError::Truncated {
                needed: 5,
                remaining: 0
            })
        );
    }

    #[test]
    fn malformed_hex() {
        assert_matches!(
            EwkbReader::decode(b"not hex at all"),
            Err(EwkbError::MalformedHex(_))
        );
    }

    #[test]
    fn odd_length_hex() {
        assert_matches!(
            EwkbReader::decode(b"010"),
            Err(EwkbError::MalformedHex(_))
        );
    }

    #[test]
    fn short_header() {
        // 3 bytes decoded, 5 required.
        assert_matches!(
            EwkbReader::decode(b"010100"),
            Err(EwkbError::Truncated {
                needed: 5,
                remaining: 3
            })
        );
    }

    #[test]
    fn unknown_byte_order() {
        assert_matches!(
            EwkbReader::decode(b"0201000000"),
            Err(EwkbError::UnknownByteOrder(0x02))
        );
    }

    #[test]
    fn read_past_end() {
        let mut reader = EwkbReader::decode(POINT_LE).unwrap();
        assert_matches!(
            reader.read_f64s(3),
            Err(EwkbError::Truncated {
                needed: 24,
                remaining: 16
            })
        );
    }

    #[test]
    fn oversized_count_does_not_wrap() {
        let mut reader = EwkbReader::decode(POINT_LE).unwrap();
        assert_matches!(
            reader.read_f64s(usize::MAX / 8 + 1),
            Err(EwkbError::Truncated { .. })
        );
        assert_matches!(
            reader.read_f64s(usize::MAX),
            Err(EwkbError::Truncated { .. })
        );
        // The failed reads consumed nothing.
        assert_eq!(reader.read_f64s(2).unwrap(), [10.0, 20.0]);
    }

    #[test]
    fn sequential_reads() {
        let mut reader = EwkbReader::decode(POINT_LE).unwrap();
        assert_eq!(reader.read_f64().unwrap(), 10.0);
        assert_eq!(reader.read_f64().unwrap(), 20.0);
        assert_matches!(
            reader.read_f64(),
            Err(EwkbError::Truncated {
                needed: 8,
                remaining: 0
            })
        );
    }

    #[test]
    fn mixed_value_reads() {
        // Header followed by a single byte 0x2a and the u32 10, little-endian.
        let mut reader = EwkbReader::decode(b"01010000002A0A000000").unwrap();
        assert_eq!(reader.read_u8().unwrap(), 0x2a);
        assert_eq!(reader.read_u32().unwrap(), 10);
    }

    #[test]
    fn big_endian_u32_reads() {
        // Header followed by the u32 4326, everything big-endian.
        let mut reader = EwkbReader::decode(b"0000000001000010E6").unwrap();
        assert_eq!(reader.geometry_type(), 1);
        assert_eq!(reader.read_u32().unwrap(), 4326);
    }
}
