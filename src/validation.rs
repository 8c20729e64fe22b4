//! Input validation for scheduling inputs.
//!
//! The schedulers assume their caller contract holds: ids unique across the
//! working set, volumes and capacities positive. They never check it
//! themselves. This module lets a driver surface contract violations before
//! a pass. Detects:
//! - Duplicate parcel or truck ids
//! - Zero parcel volumes and zero truck capacities
//! - Parcels whose destination equals their source

use crate::models::{Parcel, Truck};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same id.
    DuplicateId,
    /// A parcel has zero volume.
    ZeroVolume,
    /// A truck has zero capacity.
    ZeroCapacity,
    /// A parcel is addressed to its own source city.
    SelfAddressed,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the inputs of a scheduling pass.
///
/// Checks:
/// 1. No duplicate parcel ids
/// 2. No duplicate truck ids
/// 3. All parcel volumes positive
/// 4. All truck capacities positive
/// 5. No parcel addressed to its own source
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(parcels: &[Parcel], trucks: &[Truck]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut parcel_ids = HashSet::new();
    for parcel in parcels {
        if !parcel_ids.insert(parcel.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate parcel id: {}", parcel.id),
            ));
        }
        if parcel.volume == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroVolume,
                format!("Parcel {} has zero volume", parcel.id),
            ));
        }
        if parcel.source == parcel.destination {
            errors.push(ValidationError::new(
                ValidationErrorKind::SelfAddressed,
                format!(
                    "Parcel {} is addressed to its own source '{}'",
                    parcel.id, parcel.source
                ),
            ));
        }
    }

    let mut truck_ids = HashSet::new();
    for truck in trucks {
        if !truck_ids.insert(truck.id()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate truck id: {}", truck.id()),
            ));
        }
        if truck.capacity() == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroCapacity,
                format!("Truck {} has zero capacity", truck.id()),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
