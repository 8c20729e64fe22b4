//! Fleet model and aggregate statistics.
//!
//! A fleet is an ordered collection of trucks. It is read-only to the
//! schedulers (they operate on a mutable truck slice) and exists so that
//! drivers can hold trucks together and ask aggregate questions after a
//! scheduling pass: how many trucks were used, how full they are, and how
//! far they travel.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::{DistanceMap, Truck};

/// An ordered collection of trucks.
///
/// Unique truck ids are a caller contract, checked by
/// [`crate::validation::validate_input`] rather than on insertion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Fleet {
    trucks: Vec<Truck>,
}

impl Fleet {
    /// Creates a fleet with no trucks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a truck to the fleet.
    pub fn add_truck(&mut self, truck: Truck) {
        self.trucks.push(truck);
    }

    /// The trucks, in insertion order.
    pub fn trucks(&self) -> &[Truck] {
        &self.trucks
    }

    /// Mutable truck slice for a scheduling pass.
    pub fn trucks_mut(&mut self) -> &mut [Truck] {
        &mut self.trucks
    }

    /// Number of trucks in the fleet.
    pub fn num_trucks(&self) -> usize {
        self.trucks.len()
    }

    /// Number of trucks carrying at least one parcel.
    pub fn num_nonempty_trucks(&self) -> usize {
        self.trucks.iter().filter(|t| !t.is_empty()).count()
    }

    /// Map from truck id to the ids of its parcels, in pack order.
    pub fn parcel_allocations(&self) -> HashMap<u32, Vec<u32>> {
        self.trucks.iter().map(|t| (t.id(), t.parcel_ids())).collect()
    }

    /// Unused volume summed over the non-empty trucks. 0 when every truck
    /// is empty.
    pub fn total_unused_space(&self) -> u32 {
        self.trucks
            .iter()
            .filter(|t| !t.is_empty())
            .map(Truck::available)
            .sum()
    }

    /// Mean fullness percentage over the non-empty trucks, or `None` when
    /// every truck is empty.
    pub fn average_fullness(&self) -> Option<f64> {
        let nonempty = self.num_nonempty_trucks();
        if nonempty == 0 {
            return None;
        }
        let total: f64 = self
            .trucks
            .iter()
            .filter(|t| !t.is_empty())
            .map(Truck::fullness)
            .sum();
        Some(total / nonempty as f64)
    }

    /// Total distance travelled by all trucks, or `None` when `map` lacks a
    /// required leg.
    pub fn total_distance(&self, map: &DistanceMap) -> Option<u32> {
        self.trucks.iter().map(|t| t.route_distance(map)).sum()
    }

    /// Mean distance over the trucks that actually travel, or `None` when no
    /// truck travels or `map` lacks a required leg.
    pub fn average_distance(&self, map: &DistanceMap) -> Option<f64> {
        let mut total = 0u32;
        let mut travelled = 0usize;
        for truck in &self.trucks {
            let d = truck.route_distance(map)?;
            if d > 0 {
                total += d;
                travelled += 1;
            }
        }
        if travelled == 0 {
            return None;
        }
        Some(f64::from(total) / travelled as f64)
    }
}

impl fmt::Display for Fleet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, truck) in self.trucks.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "Truck {}: capacity={}, depot={}",
                truck.id(),
                truck.capacity(),
                truck.depot()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Parcel;

    fn loaded_truck(id: u32, capacity: u32, parcels: &[(u32, u32, &str)]) -> Truck {
        let mut truck = Truck::new(id, capacity, "Toronto");
        for &(pid, vol, dest) in parcels {
            assert!(truck.pack(&Parcel::new(pid, vol, "Buffalo", dest)));
        }
        truck
    }

    #[test]
    fn test_empty_fleet() {
        let fleet = Fleet::new();
        assert_eq!(fleet.num_trucks(), 0);
        assert_eq!(fleet.num_nonempty_trucks(), 0);
        assert_eq!(fleet.total_unused_space(), 0);
        assert_eq!(fleet.average_fullness(), None);
    }

    #[test]
    fn test_num_nonempty_trucks() {
        let mut fleet = Fleet::new();
        fleet.add_truck(loaded_truck(1423, 10, &[(1, 5, "Hamilton"), (2, 4, "Montreal")]));
        fleet.add_truck(loaded_truck(5912, 20, &[(3, 2, "Windsor")]));
        fleet.add_truck(Truck::new(1111, 50, "Toronto"));
        assert_eq!(fleet.num_trucks(), 3);
        assert_eq!(fleet.num_nonempty_trucks(), 2);
    }

    #[test]
    fn test_parcel_allocations() {
        let mut fleet = Fleet::new();
        fleet.add_truck(loaded_truck(1423, 10, &[(27, 5, "Hamilton"), (12, 5, "Hamilton")]));
        fleet.add_truck(loaded_truck(1333, 10, &[(28, 5, "Hamilton")]));

        let allocations = fleet.parcel_allocations();
        assert_eq!(allocations[&1423], vec![27, 12]);
        assert_eq!(allocations[&1333], vec![28]);
    }

    #[test]
    fn test_total_unused_space_ignores_empty_trucks() {
        let mut fleet = Fleet::new();
        fleet.add_truck(loaded_truck(1423, 1000, &[(1, 5, "Hamilton")]));
        fleet.add_truck(loaded_truck(1424, 50, &[(2, 15, "Hamilton"), (3, 5, "Hamilton")]));
        fleet.add_truck(Truck::new(1425, 10_000, "Toronto"));
        assert_eq!(fleet.total_unused_space(), 995 + 30);
    }

    #[test]
    fn test_average_fullness() {
        let mut fleet = Fleet::new();
        fleet.add_truck(loaded_truck(1423, 10, &[(1, 5, "Hamilton"), (13, 2, "Hamilton")]));
        fleet.add_truck(Truck::new(1424, 150, "Toronto"));
        fleet.add_truck(loaded_truck(1425, 20, &[(2, 12, "Hamilton")]));
        // (70% + 60%) / 2 non-empty trucks
        let avg = fleet.average_fullness().unwrap();
        assert!((avg - 65.0).abs() < 1e-9);
    }

    #[test]
    fn test_total_and_average_distance() {
        let mut map = DistanceMap::new();
        map.insert_symmetric("Toronto", "Hamilton", 9);

        let mut fleet = Fleet::new();
        fleet.add_truck(loaded_truck(1423, 10, &[(1, 5, "Hamilton")]));
        fleet.add_truck(loaded_truck(1333, 10, &[(2, 5, "Hamilton")]));
        fleet.add_truck(Truck::new(1334, 100, "Toronto"));

        assert_eq!(fleet.total_distance(&map), Some(36));
        assert_eq!(fleet.average_distance(&map), Some(18.0));
    }

    #[test]
    fn test_average_distance_no_travel() {
        let fleet = {
            let mut f = Fleet::new();
            f.add_truck(Truck::new(1, 10, "Toronto"));
            f
        };
        assert_eq!(fleet.average_distance(&DistanceMap::new()), None);
    }

    #[test]
    fn test_distance_with_missing_leg() {
        let mut fleet = Fleet::new();
        fleet.add_truck(loaded_truck(1, 10, &[(1, 5, "Hamilton")]));
        assert_eq!(fleet.total_distance(&DistanceMap::new()), None);
    }

    #[test]
    fn test_display() {
        let mut fleet = Fleet::new();
        fleet.add_truck(Truck::new(1423, 10, "Toronto"));
        fleet.add_truck(Truck::new(5912, 20, "Scarborough"));
        assert_eq!(
            fleet.to_string(),
            "Truck 1423: capacity=10, depot=Toronto\nTruck 5912: capacity=20, depot=Scarborough"
        );
    }
}
