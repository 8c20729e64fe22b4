//! City-pair distance lookup.
//!
//! Stores directed distances between named cities. Inserting a pair always
//! installs both directions, so a symmetric map needs one insert per pair
//! and an asymmetric map supplies two values up front. The schedulers never
//! consult distances; only post-run route reporting does.

use std::collections::HashMap;

/// A lookup table of directed distances between cities.
///
/// Unknown pairs report `None`.
///
/// # Example
///
/// ```
/// use u_fleet::models::DistanceMap;
///
/// let mut map = DistanceMap::new();
/// map.insert("Toronto", "York", 5, 9);
/// map.insert_symmetric("Hamilton", "York", 22);
///
/// assert_eq!(map.distance("Toronto", "York"), Some(5));
/// assert_eq!(map.distance("York", "Toronto"), Some(9));
/// assert_eq!(map.distance("York", "Hamilton"), Some(22));
/// assert_eq!(map.distance("Toronto", "Brampton"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DistanceMap {
    distances: HashMap<(String, String), u32>,
}

impl DistanceMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the distance from `a` to `b` and from `b` to `a`.
    ///
    /// Re-inserting a pair overwrites both directions.
    pub fn insert(&mut self, a: impl Into<String>, b: impl Into<String>, forward: u32, reverse: u32) {
        let a = a.into();
        let b = b.into();
        self.distances.insert((a.clone(), b.clone()), forward);
        self.distances.insert((b, a), reverse);
    }

    /// Installs the same distance in both directions.
    pub fn insert_symmetric(&mut self, a: impl Into<String>, b: impl Into<String>, distance: u32) {
        self.insert(a, b, distance, distance);
    }

    /// Returns the distance from `a` to `b`, or `None` if the pair is unknown.
    pub fn distance(&self, a: &str, b: &str) -> Option<u32> {
        self.distances.get(&(a.to_string(), b.to_string())).copied()
    }

    /// Number of directed entries stored.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Whether the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}
