//! Fleet allocation framework for the U-Engine ecosystem.
//!
//! Assigns parcels with volumes and source/destination pairs onto a fleet
//! of capacity-bounded trucks anchored to depots, recording the sequence of
//! destination stops each truck will visit. Two allocation strategies are
//! provided: randomized feasible placement and a configurable multi-criteria
//! greedy placement. Both are single-pass heuristics; neither computes
//! optimal assignments nor revisits a placement once made.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Parcel`, `Truck`, `Fleet`, `DistanceMap`
//! - **`priority`**: `PriorityQueue` over a pluggable comparison rule with
//!   FIFO tie-breaking
//! - **`scheduler`**: `Scheduler` trait, `RandomScheduler`,
//!   `GreedyScheduler` with `GreedyConfig`, post-run `DeliveryKpi`
//! - **`validation`**: Input integrity checks (duplicate ids, zero volumes)
//!
//! # Example
//!
//! ```
//! use u_fleet::models::{Parcel, Truck};
//! use u_fleet::scheduler::{GreedyConfig, GreedyScheduler, Scheduler};
//!
//! let parcels = vec![
//!     Parcel::new(1, 5, "Toronto", "Hamilton"),
//!     Parcel::new(2, 6, "Toronto", "Hamilton"),
//! ];
//! let mut trucks = vec![
//!     Truck::new(1, 10, "Toronto"),
//!     Truck::new(2, 10, "Toronto"),
//! ];
//!
//! let mut scheduler = GreedyScheduler::new(GreedyConfig::default());
//! let unplaced = scheduler.schedule(&parcels, &mut trucks);
//! assert!(unplaced.is_empty());
//! ```
//!
//! # References
//!
//! - Toth & Vigo (2014), "Vehicle Routing: Problems, Methods, and Applications"
//! - Martello & Toth (1990), "Knapsack Problems: Algorithms and Computer
//!   Implementations"

pub mod models;
pub mod priority;
pub mod scheduler;
pub mod validation;
