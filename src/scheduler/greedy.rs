//! Deterministic multi-criteria greedy scheduler.
//!
//! # Algorithm
//!
//! 1. Queue all parcels by the configured key and direction, FIFO among
//!    equal keys.
//! 2. For each parcel in priority order, collect the trucks with enough
//!    available volume, then narrow to those whose route already ends at
//!    the parcel's destination. The narrowed set is used when non-empty;
//!    continuing an existing route costs no extra stop, so locality wins
//!    before any volume tie-breaking.
//! 3. Pick the winner from the candidate pool through a second priority
//!    queue keyed on remaining available volume in the configured
//!    direction, and pack the parcel onto it.
//! 4. A parcel with no candidate pool joins the unplaced list.
//!
//! Single-pass: a placement or deferral is never reconsidered. For a fixed
//! configuration and fixed input order the outcome is fully deterministic.
//!
//! # Complexity
//! O(n·m + n log n) for n parcels and m trucks.

use tracing::{debug, trace};

use super::{GreedyConfig, ParcelPriority, Scheduler, SortOrder};
use crate::models::{Parcel, Truck};
use crate::priority::PriorityQueue;

/// Strict "comes before" relation over parcels.
type ParcelRule = fn(&Parcel, &Parcel) -> bool;

/// Strict "comes before" relation over trucks.
type TruckRule = fn(&Truck, &Truck) -> bool;

fn volume_descending(a: &Parcel, b: &Parcel) -> bool {
    a.volume > b.volume
}

fn volume_ascending(a: &Parcel, b: &Parcel) -> bool {
    a.volume < b.volume
}

fn destination_descending(a: &Parcel, b: &Parcel) -> bool {
    a.destination > b.destination
}

fn destination_ascending(a: &Parcel, b: &Parcel) -> bool {
    a.destination < b.destination
}

fn most_available(a: &Truck, b: &Truck) -> bool {
    a.available() > b.available()
}

fn least_available(a: &Truck, b: &Truck) -> bool {
    a.available() < b.available()
}

fn parcel_rule(priority: ParcelPriority, order: SortOrder) -> ParcelRule {
    match (priority, order) {
        (ParcelPriority::Volume, SortOrder::Descending) => volume_descending,
        (ParcelPriority::Volume, SortOrder::Ascending) => volume_ascending,
        (ParcelPriority::Destination, SortOrder::Descending) => destination_descending,
        (ParcelPriority::Destination, SortOrder::Ascending) => destination_ascending,
    }
}

fn truck_rule(order: SortOrder) -> TruckRule {
    match order {
        SortOrder::Descending => most_available,
        SortOrder::Ascending => least_available,
    }
}

/// Deterministic greedy scheduler configured by [`GreedyConfig`].
///
/// # Example
///
/// ```
/// use u_fleet::models::{Parcel, Truck};
/// use u_fleet::scheduler::{GreedyConfig, GreedyScheduler, Scheduler};
///
/// let parcels = vec![
///     Parcel::new(1, 5, "Toronto", "Hamilton"),
///     Parcel::new(2, 6, "Toronto", "Hamilton"),
/// ];
/// let mut trucks = vec![
///     Truck::new(1, 10, "Toronto"),
///     Truck::new(2, 10, "Toronto"),
/// ];
///
/// let unplaced = GreedyScheduler::new(GreedyConfig::default())
///     .schedule(&parcels, &mut trucks);
/// assert!(unplaced.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct GreedyScheduler {
    config: GreedyConfig,
}

impl GreedyScheduler {
    /// Creates a scheduler with the given configuration.
    pub fn new(config: GreedyConfig) -> Self {
        Self { config }
    }

    /// The configuration this scheduler was built with.
    pub fn config(&self) -> GreedyConfig {
        self.config
    }
}

impl Default for GreedyScheduler {
    fn default() -> Self {
        Self::new(GreedyConfig::default())
    }
}

impl Scheduler for GreedyScheduler {
    fn schedule(&mut self, parcels: &[Parcel], trucks: &mut [Truck]) -> Vec<Parcel> {
        let by_parcel = parcel_rule(self.config.parcel_priority, self.config.parcel_order);
        let by_truck = truck_rule(self.config.truck_order);
        let mut unplaced = Vec::new();

        let mut queue =
            PriorityQueue::new(move |a: &usize, b: &usize| by_parcel(&parcels[*a], &parcels[*b]));
        for idx in 0..parcels.len() {
            queue.add(idx);
        }

        while let Some(idx) = queue.remove() {
            let parcel = &parcels[idx];

            let eligible: Vec<usize> = (0..trucks.len())
                .filter(|&t| trucks[t].available() >= parcel.volume)
                .collect();
            let local: Vec<usize> = eligible
                .iter()
                .copied()
                .filter(|&t| trucks[t].last_stop() == parcel.destination)
                .collect();
            let pool = if local.is_empty() { eligible } else { local };

            let chosen = {
                let mut candidates =
                    PriorityQueue::new(|a: &usize, b: &usize| by_truck(&trucks[*a], &trucks[*b]));
                for t in pool {
                    candidates.add(t);
                }
                candidates.remove()
            };

            if let Some(t) = chosen {
                if trucks[t].pack(parcel) {
                    trace!(
                        parcel = parcel.id,
                        truck = trucks[t].id(),
                        destination = %parcel.destination,
                        "placed"
                    );
                    continue;
                }
            }
            debug!(parcel = parcel.id, volume = parcel.volume, "no eligible truck");
            unplaced.push(parcel.clone());
        }

        unplaced
    }
}
