//! Parcel-to-truck scheduling algorithms.
//!
//! Two strategies share one surface: [`RandomScheduler`] places each parcel
//! on a randomly chosen truck with room, [`GreedyScheduler`] is a
//! deterministic single-pass heuristic driven by a [`GreedyConfig`].
//! Both mutate the given trucks in place and report the parcels they could
//! not place; running out of room is a normal outcome, never an error.
//!
//! # Usage
//!
//! ```
//! use u_fleet::models::{Parcel, Truck};
//! use u_fleet::scheduler::{GreedyConfig, GreedyScheduler, Scheduler};
//!
//! let parcels = vec![Parcel::new(1, 5, "Toronto", "Hamilton")];
//! let mut trucks = vec![Truck::new(10, 20, "Toronto")];
//!
//! let mut scheduler = GreedyScheduler::new(GreedyConfig::default());
//! let unplaced = scheduler.schedule(&parcels, &mut trucks);
//! assert!(unplaced.is_empty());
//! assert_eq!(trucks[0].parcel_ids(), [1]);
//! ```

mod greedy;
mod kpi;
mod random;

pub use greedy::GreedyScheduler;
pub use kpi::DeliveryKpi;
pub use random::RandomScheduler;

use serde::{Deserialize, Serialize};

use crate::models::{Parcel, Truck};

/// A scheduler decides which parcels go onto which trucks and, through the
/// packing operation, what route each truck takes.
///
/// Implementations mutate `trucks` in place, never mutate `parcels` or the
/// parcels within, and return the parcels that no truck could accommodate.
/// Every input parcel ends up either on exactly one truck or in the
/// returned list.
pub trait Scheduler {
    /// Runs one scheduling pass and returns the unplaced parcels.
    fn schedule(&mut self, parcels: &[Parcel], trucks: &mut [Truck]) -> Vec<Parcel>;
}

/// Which parcel attribute drives the greedy processing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParcelPriority {
    /// Order parcels by volume.
    Volume,
    /// Order parcels by destination name (lexicographic).
    Destination,
}

/// Direction of an ordering key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Smallest key first.
    Ascending,
    /// Largest key first.
    Descending,
}

/// Configuration for [`GreedyScheduler`], fixed at construction.
///
/// The three fields yield six distinct deterministic behaviors from one
/// algorithm shape: two parcel keys × two parcel directions, and two truck
/// tie-break directions on remaining available volume.
///
/// # Example
///
/// ```
/// use u_fleet::scheduler::{GreedyConfig, ParcelPriority, SortOrder};
///
/// let config: GreedyConfig = serde_json::from_str(
///     r#"{"parcel_priority":"volume","parcel_order":"descending","truck_order":"descending"}"#,
/// ).unwrap();
/// assert_eq!(config.parcel_priority, ParcelPriority::Volume);
/// assert_eq!(config.truck_order, SortOrder::Descending);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreedyConfig {
    /// Key the parcel queue is ordered by.
    pub parcel_priority: ParcelPriority,
    /// Direction of the parcel queue.
    pub parcel_order: SortOrder,
    /// Among qualifying trucks, prefer the most (`Descending`) or least
    /// (`Ascending`) remaining available volume.
    pub truck_order: SortOrder,
}

impl Default for GreedyConfig {
    fn default() -> Self {
        Self {
            parcel_priority: ParcelPriority::Volume,
            parcel_order: SortOrder::Descending,
            truck_order: SortOrder::Descending,
        }
    }
}
