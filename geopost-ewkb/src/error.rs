use thiserror::Error;

/// Error enum for EWKB decoding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EwkbError {
    /// The input is not valid hex text.
    #[error("malformed hex input: {0}")]
    MalformedHex(#[from] hex::FromHexError),

    /// A read requested more bytes than the buffer holds.
    #[error("unexpected end of EWKB input: needed {needed} bytes but only {remaining} remain")]
    Truncated {
        /// Number of bytes the read required.
        needed: usize,
        /// Number of bytes left in the buffer.
        remaining: usize,
    },

    /// The byte order marker is neither `0x00` nor `0x01`.
    #[error("unknown byte order marker: {0:#04x}")]
    UnknownByteOrder(u8),
}
