//! Error type used by the crate.

use geopost_ewkb::EwkbError;
use thiserror::Error;

/// Error enum.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeopostError {
    /// EWKB decoding failed. Decoder errors are surfaced unchanged.
    #[error(transparent)]
    Ewkb(#[from] EwkbError),

    /// EWKT text could not be parsed.
    #[error("invalid EWKT: {0}")]
    Ewkt(String),
}
