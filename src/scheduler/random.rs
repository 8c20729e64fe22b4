//! Randomized feasible-first scheduler.
//!
//! # Algorithm
//!
//! Shuffle the parcel processing order and the truck scan order
//! independently, then give each parcel to the first truck in the fixed
//! shuffled scan order with enough available volume, destination ignored.
//! Later parcels see the mutated truck state, so a truck that once had room
//! may no longer qualify and its route can grow arbitrarily long.
//!
//! Not deterministic by design; construct with [`RandomScheduler::from_seed`]
//! when a test needs to assert exact outcomes.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, trace};

use super::Scheduler;
use crate::models::{Parcel, Truck};

/// Schedules parcels onto randomly chosen trucks that have enough space.
///
/// The caller's slices are never reordered; the shuffles act on private
/// index vectors.
///
/// # Example
///
/// ```
/// use u_fleet::models::{Parcel, Truck};
/// use u_fleet::scheduler::{RandomScheduler, Scheduler};
///
/// let parcels = vec![Parcel::new(1, 5, "Toronto", "Hamilton")];
/// let mut trucks = vec![Truck::new(1, 10, "Toronto")];
///
/// let unplaced = RandomScheduler::from_seed(42).schedule(&parcels, &mut trucks);
/// assert!(unplaced.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct RandomScheduler {
    rng: SmallRng,
}

impl RandomScheduler {
    /// Creates a scheduler seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Creates a scheduler with a fixed seed for reproducible runs.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for RandomScheduler {
    fn schedule(&mut self, parcels: &[Parcel], trucks: &mut [Truck]) -> Vec<Parcel> {
        let mut parcel_order: Vec<usize> = (0..parcels.len()).collect();
        parcel_order.shuffle(&mut self.rng);
        let mut scan_order: Vec<usize> = (0..trucks.len()).collect();
        scan_order.shuffle(&mut self.rng);

        let mut unplaced = Vec::new();
        for &p in &parcel_order {
            let parcel = &parcels[p];
            let fit = scan_order
                .iter()
                .copied()
                .find(|&t| trucks[t].available() >= parcel.volume);
            if let Some(t) = fit {
                if trucks[t].pack(parcel) {
                    trace!(parcel = parcel.id, truck = trucks[t].id(), "placed");
                    continue;
                }
            }
            debug!(parcel = parcel.id, volume = parcel.volume, "no truck has room");
            unplaced.push(parcel.clone());
        }
        unplaced
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parcel(id: u32, volume: u32, destination: &str) -> Parcel {
        Parcel::new(id, volume, "Toronto", destination)
    }

    fn sample_trucks() -> Vec<Truck> {
        vec![
            Truck::new(1, 20, "Toronto"),
            Truck::new(2, 15, "Toronto"),
            Truck::new(3, 10, "Toronto"),
        ]
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let parcels: Vec<Parcel> = (0..15)
            .map(|i| parcel(i, 2 + i % 5, ["Hamilton", "Windsor"][i as usize % 2]))
            .collect();

        let mut run = |seed: u64| {
            let mut trucks = sample_trucks();
            let unplaced = RandomScheduler::from_seed(seed).schedule(&parcels, &mut trucks);
            let allocations: Vec<Vec<u32>> = trucks.iter().map(Truck::parcel_ids).collect();
            (allocations, unplaced)
        };

        assert_eq!(run(42), run(42));
        assert_eq!(run(7), run(7));
    }

    #[test]
    fn test_capacity_is_respected() {
        let parcels: Vec<Parcel> = (0..30).map(|i| parcel(i, 4, "Hamilton")).collect();
        let mut trucks = sample_trucks();

        RandomScheduler::from_seed(3).schedule(&parcels, &mut trucks);
        for truck in &trucks {
            let packed: u32 = truck.parcels().iter().map(|p| p.volume).sum();
            assert!(packed <= truck.capacity());
            assert_eq!(truck.available(), truck.capacity() - packed);
        }
    }

    #[test]
    fn test_conservation() {
        let parcels: Vec<Parcel> = (0..25)
            .map(|i| parcel(i, 1 + (i * 7) % 6, ["Hamilton", "Windsor", "Ajax"][i as usize % 3]))
            .collect();
        let mut trucks = sample_trucks();

        let unplaced = RandomScheduler::from_seed(11).schedule(&parcels, &mut trucks);

        let mut seen: Vec<u32> = trucks
            .iter()
            .flat_map(Truck::parcel_ids)
            .chain(unplaced.iter().map(|p| p.id))
            .collect();
        seen.sort_unstable();
        let expected: Vec<u32> = (0..25).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_everything_fits_when_space_is_ample() {
        let parcels: Vec<Parcel> = (0..5).map(|i| parcel(i, 2, "Hamilton")).collect();
        let mut trucks = vec![Truck::new(1, 100, "Toronto")];

        let unplaced = RandomScheduler::from_seed(0).schedule(&parcels, &mut trucks);
        assert!(unplaced.is_empty());
        assert_eq!(trucks[0].parcel_count(), 5);
    }

    #[test]
    fn test_all_unplaced_when_nothing_fits() {
        let parcels = vec![parcel(1, 50, "Hamilton"), parcel(2, 60, "Windsor")];
        let mut trucks = sample_trucks();

        let unplaced = RandomScheduler::from_seed(9).schedule(&parcels, &mut trucks);
        assert_eq!(unplaced.len(), 2);
        for truck in &trucks {
            assert!(truck.is_empty());
        }
    }

    #[test]
    fn test_caller_slices_keep_their_order() {
        let parcels: Vec<Parcel> = (0..10).map(|i| parcel(i, 1, "Hamilton")).collect();
        let mut trucks = sample_trucks();

        RandomScheduler::from_seed(5).schedule(&parcels, &mut trucks);

        let parcel_ids: Vec<u32> = parcels.iter().map(|p| p.id).collect();
        assert_eq!(parcel_ids, (0..10).collect::<Vec<u32>>());
        let truck_ids: Vec<u32> = trucks.iter().map(Truck::id).collect();
        assert_eq!(truck_ids, [1, 2, 3]);
    }

    #[test]
    fn test_destination_is_ignored() {
        // One truck, mixed destinations: every parcel lands on it anyway.
        let parcels = vec![
            parcel(1, 2, "Hamilton"),
            parcel(2, 2, "Windsor"),
            parcel(3, 2, "Ajax"),
        ];
        let mut trucks = vec![Truck::new(1, 10, "Toronto")];

        let unplaced = RandomScheduler::from_seed(1).schedule(&parcels, &mut trucks);
        assert!(unplaced.is_empty());
        assert_eq!(trucks[0].parcel_count(), 3);
        assert_eq!(trucks[0].route().len(), 4);
    }
}
