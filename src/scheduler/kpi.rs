//! Post-run delivery metrics (KPIs).
//!
//! Summarizes the outcome of a scheduling pass over a fleet: placement
//! counts, how well the fleet's space was used, and how far the planned
//! routes travel.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Trucks used | Trucks carrying at least one parcel |
//! | Placed / unplaced | Parcels on trucks vs. left over |
//! | Avg fullness | Mean used-capacity percentage over non-empty trucks |
//! | Unused space | Total spare volume on non-empty trucks |
//! | Total / avg distance | Closed-tour route lengths from the distance map |

use crate::models::{DistanceMap, Fleet, Parcel};

/// Delivery performance indicators for one scheduling pass.
///
/// Distance fields are `None` when the distance map lacks a required leg;
/// `average_fullness` and `average_distance` are `None` when no truck
/// qualifies.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryKpi {
    /// Trucks carrying at least one parcel.
    pub trucks_used: usize,
    /// Trucks in the fleet.
    pub fleet_size: usize,
    /// Parcels placed onto trucks.
    pub placed_count: usize,
    /// Parcels no truck could accommodate.
    pub unplaced_count: usize,
    /// Mean fullness percentage over non-empty trucks.
    pub average_fullness: Option<f64>,
    /// Spare volume summed over non-empty trucks.
    pub total_unused_space: u32,
    /// Total distance travelled by the fleet.
    pub total_distance: Option<u32>,
    /// Mean distance over trucks that travel.
    pub average_distance: Option<f64>,
}

impl DeliveryKpi {
    /// Computes KPIs from a scheduled fleet, the unplaced parcels a
    /// scheduler returned, and a distance map.
    pub fn calculate(fleet: &Fleet, unplaced: &[Parcel], map: &DistanceMap) -> Self {
        let placed_count: usize = fleet.trucks().iter().map(|t| t.parcel_count()).sum();
        Self {
            trucks_used: fleet.num_nonempty_trucks(),
            fleet_size: fleet.num_trucks(),
            placed_count,
            unplaced_count: unplaced.len(),
            average_fullness: fleet.average_fullness(),
            total_unused_space: fleet.total_unused_space(),
            total_distance: fleet.total_distance(map),
            average_distance: fleet.average_distance(map),
        }
    }

    /// Whether every parcel found a truck.
    pub fn all_placed(&self) -> bool {
        self.unplaced_count == 0
    }
}
