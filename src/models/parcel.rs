//! Parcel model.
//!
//! A parcel is a unit of cargo to be allocated: a fixed volume travelling
//! from a source city to a destination city. Parcels are immutable once
//! created and are only read by the schedulers; trucks store their own
//! copies of the parcels they accept.

use serde::{Deserialize, Serialize};

/// A unit of cargo with a fixed volume and a source/destination pair.
///
/// Ids are unique across a working set by caller contract; volume is a
/// positive integer (cubic units). The domain expects destination ≠ source,
/// but the schedulers do not enforce it; [`crate::validation`] offers an
/// advisory check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parcel {
    /// Unique parcel identifier.
    pub id: u32,
    /// Volume in cubic units (positive).
    pub volume: u32,
    /// City the parcel ships from.
    pub source: String,
    /// City the parcel must reach.
    pub destination: String,
}

impl Parcel {
    /// Creates a new parcel.
    pub fn new(
        id: u32,
        volume: u32,
        source: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            id,
            volume,
            source: source.into(),
            destination: destination.into(),
        }
    }
}
