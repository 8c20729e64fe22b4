//! Delivery domain models.
//!
//! Provides the core data types for parcel-to-truck allocation: the cargo
//! unit ([`Parcel`]), the vehicle ([`Truck`]), the vehicle collection
//! ([`Fleet`]), and the city-pair distance table ([`DistanceMap`]).
//!
//! Trucks are the only mutable entities, and only through [`Truck::pack`];
//! everything else is plain attribute storage plus aggregate statistics.

mod distance;
mod fleet;
mod parcel;
mod truck;

pub use distance::DistanceMap;
pub use fleet::Fleet;
pub use parcel::Parcel;
pub use truck::Truck;
