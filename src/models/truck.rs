//! Truck model and the packing operation.
//!
//! A truck is anchored to a depot and accumulates parcels and a route.
//! [`Truck::pack`] is the only mutator: it maintains the capacity invariant
//! (available = capacity − sum of packed volumes) and grows the route by
//! appending a destination only when it differs from the current last stop,
//! so consecutive deliveries to the same city add a single stop.

use serde::{Deserialize, Serialize};

use super::{DistanceMap, Parcel};

/// A capacity-bounded vehicle anchored to a depot city.
///
/// The route starts as the depot alone and records destination stops in
/// pack order with immediate duplicates collapsed. State changes only
/// through [`Truck::pack`].
///
/// # Example
///
/// ```
/// use u_fleet::models::{Parcel, Truck};
///
/// let mut truck = Truck::new(888, 70, "Toronto");
/// assert!(truck.pack(&Parcel::new(342, 10, "New York", "Mississauga")));
/// assert!(truck.pack(&Parcel::new(343, 25, "London", "Vaughan")));
/// assert_eq!(truck.available(), 35);
/// assert!(!truck.pack(&Parcel::new(345, 90, "Quebec", "Mississauga")));
/// assert_eq!(truck.available(), 35);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Truck {
    id: u32,
    capacity: u32,
    available: u32,
    depot: String,
    parcels: Vec<Parcel>,
    route: Vec<String>,
}

impl Truck {
    /// Creates an empty truck at the given depot.
    ///
    /// Capacity is fixed for the truck's lifetime and must be positive by
    /// caller contract.
    pub fn new(id: u32, capacity: u32, depot: impl Into<String>) -> Self {
        let depot = depot.into();
        Self {
            id,
            capacity,
            available: capacity,
            depot: depot.clone(),
            parcels: Vec::new(),
            route: vec![depot],
        }
    }

    /// Packs `parcel` if it fits in the remaining available volume.
    ///
    /// On success the parcel is appended to the accepted list, available
    /// volume shrinks by the parcel's volume, and the route gains the
    /// parcel's destination unless it already ends there. On failure no
    /// state changes. Failure is a normal outcome, not an error.
    pub fn pack(&mut self, parcel: &Parcel) -> bool {
        if parcel.volume > self.available {
            return false;
        }
        self.available -= parcel.volume;
        if self.last_stop() != parcel.destination {
            self.route.push(parcel.destination.clone());
        }
        self.parcels.push(parcel.clone());
        true
    }

    /// Unique truck identifier.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Total capacity, fixed at creation.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Remaining available volume.
    pub fn available(&self) -> u32 {
        self.available
    }

    /// Depot city this truck is anchored to.
    pub fn depot(&self) -> &str {
        &self.depot
    }

    /// The route so far: depot followed by destination stops in pack order.
    pub fn route(&self) -> &[String] {
        &self.route
    }

    /// The route's current last stop.
    pub fn last_stop(&self) -> &str {
        self.route.last().map(String::as_str).unwrap_or(&self.depot)
    }

    /// Parcels accepted so far, in pack order.
    pub fn parcels(&self) -> &[Parcel] {
        &self.parcels
    }

    /// Ids of the accepted parcels, in pack order.
    pub fn parcel_ids(&self) -> Vec<u32> {
        self.parcels.iter().map(|p| p.id).collect()
    }

    /// Number of parcels on board.
    pub fn parcel_count(&self) -> usize {
        self.parcels.len()
    }

    /// Whether the truck carries no parcels.
    pub fn is_empty(&self) -> bool {
        self.available == self.capacity
    }

    /// Used space as a percentage of capacity.
    pub fn fullness(&self) -> f64 {
        ((self.capacity - self.available) as f64 / self.capacity as f64) * 100.0
    }

    /// Total distance of the route as a closed tour: every leg between
    /// consecutive stops plus the return from the last stop to the depot.
    ///
    /// A truck that never left the depot travels 0. Returns `None` when any
    /// required leg is missing from `map`.
    pub fn route_distance(&self, map: &DistanceMap) -> Option<u32> {
        if self.route.len() < 2 {
            return Some(0);
        }
        let mut total = 0u32;
        for leg in self.route.windows(2) {
            total += map.distance(&leg[0], &leg[1])?;
        }
        total += map.distance(self.last_stop(), &self.depot)?;
        Some(total)
    }
}
